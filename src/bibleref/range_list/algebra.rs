//! Set operations between a range list and any other reference
//!
//! A list stands for the union of its ranges. Every result, and every list
//! updated in place, comes back consolidated and then regrouped.

use tracing::trace;

use super::RangeList;
use crate::bibleref::flags::BibleFlags;
use crate::bibleref::reference::BibleRef;

impl RangeList {
    /// No range in this list shares a verse with `other`
    pub fn is_disjoint<'a>(&self, other: impl Into<BibleRef<'a>>) -> bool {
        let others = other.into().to_ranges();
        self.iter()
            .all(|range| others.iter().all(|other| range.is_disjoint(*other)))
    }

    /// Every verse of `other` is somewhere in this list
    pub fn contains<'a>(&self, other: impl Into<BibleRef<'a>>, flags: BibleFlags) -> bool {
        let mut merged = self.clone();
        merged.consolidate(flags);
        other
            .into()
            .to_ranges()
            .iter()
            .all(|other| merged.iter().any(|range| range.contains(*other)))
    }

    pub fn union<'a>(&self, other: impl Into<BibleRef<'a>>, flags: BibleFlags) -> RangeList {
        let mut list = self.clone();
        list.union_update(other, flags);
        list
    }

    pub fn union_update<'a>(&mut self, other: impl Into<BibleRef<'a>>, flags: BibleFlags) {
        self.extend(other.into().to_ranges());
        self.merge(flags);
    }

    pub fn intersection<'a>(&self, other: impl Into<BibleRef<'a>>, flags: BibleFlags) -> RangeList {
        let others = other.into().to_ranges();
        let mut list = RangeList::new();
        for range in self.iter() {
            for other in &others {
                list.extend(range.intersection(*other, flags).iter().copied());
            }
        }
        list.merge(flags);
        list
    }

    pub fn intersection_update<'a>(&mut self, other: impl Into<BibleRef<'a>>, flags: BibleFlags) {
        *self = self.intersection(other, flags);
    }

    pub fn difference<'a>(&self, other: impl Into<BibleRef<'a>>, flags: BibleFlags) -> RangeList {
        let mut list = self.clone();
        list.difference_update(other, flags);
        list
    }

    /// Remove every verse of `other` from this list.
    ///
    /// Each range is replaced in place by whatever survives subtracting each
    /// operand range in turn, which may be nothing or several pieces.
    pub fn difference_update<'a>(&mut self, other: impl Into<BibleRef<'a>>, flags: BibleFlags) {
        let others = other.into().to_ranges();
        let mut cursor = self.0.first_node();
        while let Some(id) = cursor {
            let mut pieces = vec![*self.0.value(id)];
            for other in &others {
                pieces = pieces
                    .into_iter()
                    .flat_map(|piece| piece.difference_pieces(*other, flags))
                    .collect();
            }
            for piece in pieces {
                self.0.insert_before(id, piece, false);
            }
            // Resume after the pieces just inserted
            cursor = self.0.next_node(id);
            self.0.pop_node(id);
        }
        trace!(remaining = self.len(), "difference applied");
        self.merge(flags);
    }

    pub fn sym_difference<'a>(&self, other: impl Into<BibleRef<'a>>, flags: BibleFlags) -> RangeList {
        let other = other.into();
        let union = self.union(other, flags);
        let intersection = self.intersection(other, flags);
        union.difference(&intersection, flags)
    }

    pub fn sym_difference_update<'a>(&mut self, other: impl Into<BibleRef<'a>>, flags: BibleFlags) {
        *self = self.sym_difference(other, flags);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bibleref::range::Range;
    use crate::bibleref::verse::Verse;

    const FLAGS: BibleFlags = BibleFlags::NONE;

    fn list(text: &str) -> RangeList {
        RangeList::parse(text, FLAGS).unwrap()
    }

    fn range(text: &str) -> Range {
        Range::parse(text, FLAGS).unwrap()
    }

    #[test]
    fn test_is_disjoint() {
        let l = list("Matt 2; Mark 4:3-8");
        assert!(l.is_disjoint(range("Matt 3")));
        assert!(l.is_disjoint(&list("Mark 4:9-12; Luke 1")));
        assert!(!l.is_disjoint(Verse::parse("Mark 4:8", FLAGS).unwrap()));
        assert!(RangeList::new().is_disjoint(range("Matt 1")));
    }

    #[test]
    fn test_contains_uses_merged_ranges() {
        // Neither range alone holds Matt 2:20-3:3, but together they do
        let l = list("Matt 3, 2");
        assert!(l.contains(range("Matt 2:20-3:3"), FLAGS));
        assert!(l.contains(&list("Matt 2:1; 3:17"), FLAGS));
        assert!(!l.contains(range("Matt 3:10-4:1"), FLAGS));
    }

    #[test]
    fn test_union() {
        let l = list("Matt 2-4; Mark 6-8; Luke 10-12; John 14-16");
        let other = list("John 1-3; Luke 9-10; Matt 3-5; Mark 12");
        assert_eq!(
            l.union(&other, FLAGS).to_string(),
            "Matthew 2-5; Mark 6-8; 12; Luke 9-12; John 1-3; 14-16"
        );

        let mut updated = l.clone();
        updated.union_update(range("Mark 9"), FLAGS);
        assert_eq!(updated.to_string(), "Matthew 2-4; Mark 6-9; Luke 10-12; John 14-16");
    }

    #[test]
    fn test_intersection() {
        let l = list("Matt 2-4; Mark 6-8; Luke 10-12; John 14-16");
        let other = list("John 1-3; Luke 9-10; Matt 3-5; Mark 12");
        assert_eq!(l.intersection(&other, FLAGS).to_string(), "Matthew 3-4; Luke 10");

        let mut updated = l.clone();
        updated.intersection_update(range("John 16:5-17:3"), FLAGS);
        assert_eq!(updated.to_string(), "John 16:5-33");
        assert!(l.intersection(range("Rev 1"), FLAGS).is_empty());
    }

    #[test]
    fn test_difference() {
        let l = list("Matt 2-4; Mark 6-8; Luke 10-12; John 14-18");
        assert_eq!(
            l.difference(&list("John 1-3; Luke 9-10; Matt 3-5; Mark 12"), FLAGS).to_string(),
            "Matthew 2; Mark 6-8; Luke 11-12; John 14-18"
        );
        assert_eq!(
            l.difference(&list("John 16; Luke 11; Mark 1-3; Matt 15-16"), FLAGS).to_string(),
            "Matthew 2-4; Mark 6-8; Luke 10; 12; John 14-15; 17-18"
        );
    }

    #[test]
    fn test_difference_removes_covered_ranges() {
        let mut l = list("Matt 2; Mark 3; Luke 4");
        l.difference_update(range("Mark 2-4"), FLAGS);
        assert_eq!(l.to_string(), "Matthew 2; Luke 4");
        l.difference_update(&list("Matt; Luke"), FLAGS);
        assert!(l.is_empty());
        assert_eq!(l.group_count(), 0);
    }

    #[test]
    fn test_difference_splits_one_range_many_times() {
        let mut l = list("Matt 1:1-20");
        l.difference_update(&list("Matt 1:3, 7, 11-12"), FLAGS);
        assert_eq!(l.to_string(), "Matthew 1:1-2, 4-6, 8-10, 13-20");
    }

    #[test]
    fn test_sym_difference() {
        let l = list("Matt 2-4; Mark 6-8; Luke 10-12; John 14-18");
        assert_eq!(
            l.sym_difference(&list("John 1-3; Luke 9-10; Matt 3-5; Mark 12"), FLAGS).to_string(),
            "Matthew 2; 5; Mark 6-8; 12; Luke 9; 11-12; John 1-3; 14-18"
        );
        let mut updated = l.clone();
        updated.sym_difference_update(&list("John 16; Luke 11; Mark 1-3; Matt 15-16"), FLAGS);
        assert_eq!(
            updated.to_string(),
            "Matthew 2-4; 15-16; Mark 1-3; 6-8; Luke 10; 12; John 14-15; 17-18"
        );
    }

    #[test]
    fn test_range_sym_difference_matches_list() {
        let r = range("Matt 1:10-15");
        for other in ["Matt 1:5-8", "Matt 1:5-10", "Matt 1:12-13", "Matt 1:10-15"] {
            let other = range(other);
            assert_eq!(
                r.sym_difference(other, FLAGS),
                RangeList::from(r).sym_difference(other, FLAGS)
            );
        }
    }
}
