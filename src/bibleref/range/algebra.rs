//! Set operations between a range and any other reference
//!
//! Operands are anything convertible to a [`BibleRef`]. A verse is treated as the
//! one-verse range it names; a list operand hands over to the list
//! implementation. Results are always a `RangeList`, empty when nothing remains.

use super::Range;
use crate::bibleref::flags::BibleFlags;
use crate::bibleref::range_list::RangeList;
use crate::bibleref::reference::{BibleRef, Operand};

impl Range {
    /// No verse in common with `other`
    pub fn is_disjoint<'a>(&self, other: impl Into<BibleRef<'a>>) -> bool {
        match other.into().operand() {
            Operand::List(list) => list.is_disjoint(*self),
            Operand::Single(other) => {
                let (lower, higher) = ordered(*self, other);
                lower.end < higher.start
            }
        }
    }

    /// Next to `other` with no gap and no overlap.
    ///
    /// Against a list, the range must be disjoint from the whole list and adjacent
    /// to at least one member of it.
    pub fn is_adjacent<'a>(&self, other: impl Into<BibleRef<'a>>, flags: BibleFlags) -> bool {
        match other.into().operand() {
            Operand::List(list) => {
                list.is_disjoint(*self) && list.iter().any(|r| self.is_adjacent(*r, flags))
            }
            Operand::Single(other) => {
                let (lower, higher) = ordered(*self, other);
                lower.end.add(1, verse_zero_steps(*self, other, flags)) == Some(higher.start)
            }
        }
    }

    /// Every verse of `other` lies inside this range
    pub fn contains<'a>(&self, other: impl Into<BibleRef<'a>>) -> bool {
        other
            .into()
            .to_ranges()
            .iter()
            .all(|r| r.start >= self.start && r.end <= self.end)
    }

    /// Every verse of `other` lies inside this range without touching either end
    pub fn surrounds<'a>(&self, other: impl Into<BibleRef<'a>>) -> bool {
        other
            .into()
            .to_ranges()
            .iter()
            .all(|r| r.start > self.start && r.end < self.end)
    }

    /// Verses in this range or in `other`.
    ///
    /// Overlapping or adjacent ranges merge into one; otherwise both come back in order.
    pub fn union<'a>(&self, other: impl Into<BibleRef<'a>>, flags: BibleFlags) -> RangeList {
        match other.into().operand() {
            Operand::List(list) => list.union(*self, flags),
            Operand::Single(other) => {
                if self.is_disjoint(other) && !self.is_adjacent(other, flags) {
                    let (lower, higher) = ordered(*self, other);
                    [lower, higher].into_iter().collect()
                } else {
                    let start = self.start.min(other.start);
                    let end = self.end.max(other.end);
                    RangeList::from(Range::spanning(start, end))
                }
            }
        }
    }

    /// Verses in both this range and `other`
    pub fn intersection<'a>(&self, other: impl Into<BibleRef<'a>>, flags: BibleFlags) -> RangeList {
        match other.into().operand() {
            Operand::List(list) => list.intersection(*self, flags),
            Operand::Single(other) => {
                if self.is_disjoint(other) {
                    RangeList::new()
                } else {
                    let start = self.start.max(other.start);
                    let end = self.end.min(other.end);
                    RangeList::from(Range::spanning(start, end))
                }
            }
        }
    }

    /// Verses in this range but not in `other`: zero, one or two pieces
    pub fn difference<'a>(&self, other: impl Into<BibleRef<'a>>, flags: BibleFlags) -> RangeList {
        match other.into().operand() {
            Operand::List(list) => RangeList::from(*self).difference(list, flags),
            Operand::Single(other) => self
                .difference_pieces(other, flags)
                .into_iter()
                .collect(),
        }
    }

    /// Pairwise difference as bare ranges, for the in-place list algorithm
    pub(crate) fn difference_pieces(&self, other: Range, flags: BibleFlags) -> Vec<Range> {
        if self.is_disjoint(other) {
            return vec![*self];
        }
        if other.contains(*self) {
            return Vec::new();
        }

        // Stepping out of an existing range never needs a multibook check
        let step = verse_zero_steps(*self, other, flags) | BibleFlags::MULTIBOOK;
        let mut pieces = Vec::with_capacity(2);
        if self.start < other.start {
            if let Some(before) = other.start.subtract(1, step).filter(|v| *v >= self.start) {
                pieces.push(Range::spanning(self.start, before));
            }
        }
        if other.end < self.end {
            if let Some(after) = other.end.add(1, step).filter(|v| *v <= self.end) {
                pieces.push(Range::spanning(after, self.end));
            }
        }
        pieces
    }

    /// Verses in exactly one of this range and `other`
    pub fn sym_difference<'a>(
        &self,
        other: impl Into<BibleRef<'a>>,
        flags: BibleFlags,
    ) -> RangeList {
        match other.into().operand() {
            Operand::List(list) => RangeList::from(*self).sym_difference(list, flags),
            Operand::Single(other) => {
                if *self == other {
                    return RangeList::new();
                }
                let union = self.union(other, flags);
                let intersection = self.intersection(other, flags);
                match (union.get(0), intersection.get(0)) {
                    (Some(whole), Some(common)) if union.len() == 1 => {
                        whole.difference(*common, flags)
                    }
                    _ => union,
                }
            }
        }
    }
}

/// `flags` plus VERSE_0 when either range has a verse-0 end
fn verse_zero_steps(a: Range, b: Range, flags: BibleFlags) -> BibleFlags {
    if (a.step_flags(BibleFlags::NONE) | b.step_flags(BibleFlags::NONE)).verse_zero() {
        flags | BibleFlags::VERSE_0
    } else {
        flags
    }
}

fn ordered(a: Range, b: Range) -> (Range, Range) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bibleref::catalog::Book;
    use crate::bibleref::verse::Verse;

    const FLAGS: BibleFlags = BibleFlags::NONE;

    fn range(text: &str) -> Range {
        Range::parse(text, BibleFlags::MULTIBOOK).unwrap()
    }

    fn verse(text: &str) -> Verse {
        Verse::parse(text, FLAGS).unwrap()
    }

    fn rendered(list: RangeList) -> String {
        list.to_string()
    }

    #[test]
    fn test_disjoint_and_adjacent() {
        assert!(range("Matt 2").is_disjoint(range("Matt 4")));
        assert!(!range("Matt 2-3").is_disjoint(range("Matt 3:5")));
        assert!(range("Matt 2").is_adjacent(range("Matt 3"), FLAGS));
        assert!(range("Matt 3").is_adjacent(range("Matt 2"), FLAGS));
        assert!(!range("Matt 2").is_adjacent(range("Matt 4"), FLAGS));
        assert!(range("Matt 2:1-5").is_adjacent(verse("Matt 2:6"), FLAGS));

        // Crossing a book boundary only counts with MULTIBOOK
        assert!(!range("Mark 16").is_adjacent(range("Luke 1"), FLAGS));
        assert!(range("Mark 16").is_adjacent(range("Luke 1"), BibleFlags::MULTIBOOK));
    }

    #[test]
    fn test_contains_and_surrounds() {
        let r = range("Matt 2-4");
        assert!(r.contains(range("Matt 2:1-3")));
        assert!(r.contains(verse("Matt 4:25")));
        assert!(!r.contains(range("Matt 4-5")));
        assert!(!r.surrounds(range("Matt 2:1-3")));
        assert!(r.surrounds(range("Matt 3")));

        let list = RangeList::parse("Matt 2:5; 3:1", FLAGS).unwrap();
        assert!(r.contains(&list));
        assert!(r.surrounds(&list));
    }

    #[test]
    fn test_union() {
        assert_eq!(rendered(range("Matt 2").union(range("Matt 3"), FLAGS)), "Matthew 2-3");
        assert_eq!(rendered(range("Matt 2-3").union(range("Matt 3:5-4:2"), FLAGS)), "Matthew 2-4:2");
        assert_eq!(rendered(range("Matt 4").union(range("Matt 2"), FLAGS)), "Matthew 2, 4");
    }

    #[test]
    fn test_intersection() {
        assert_eq!(rendered(range("Matt 2-4").intersection(range("Matt 3-6"), FLAGS)), "Matthew 3-4");
        assert!(range("Matt 2").intersection(range("Matt 4"), FLAGS).is_empty());
        assert_eq!(
            rendered(range("Matt 2-4").intersection(verse("Matt 3:3"), FLAGS)),
            "Matthew 3:3"
        );
    }

    #[test]
    fn test_difference() {
        assert_eq!(rendered(range("Matt 2").difference(range("Matt 4"), FLAGS)), "Matthew 2");
        assert!(range("Matt 3").difference(range("Matt 2-4"), FLAGS).is_empty());
        assert_eq!(
            rendered(range("Matt 2-4").difference(range("Matt 3"), FLAGS)),
            "Matthew 2, 4"
        );
        assert_eq!(rendered(range("Matt 2-4").difference(range("Matt 1-2"), FLAGS)), "Matthew 3-4");
        assert_eq!(rendered(range("Matt 2-4").difference(range("Matt 4-5"), FLAGS)), "Matthew 2-3");
        assert_eq!(
            rendered(range("Matt 2:1-10").difference(verse("Matt 2:5"), FLAGS)),
            "Matthew 2:1-4, 6-10"
        );
    }

    #[test]
    fn test_difference_across_books_without_flag() {
        let r = range("Mark 16-Luke 1");
        let pieces = r.difference(range("Mark 16:20-Luke 1:1"), FLAGS);
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces.get(0).map(|p| p.to_string()), Some("Mark 16:1-19".to_string()));
        assert_eq!(pieces.get(1).map(|p| p.to_string()), Some("Luke 1:2-80".to_string()));
    }

    #[test]
    fn test_difference_with_verse_zero() {
        let zero = Verse::new(Book::Psa, 4, 0, BibleFlags::VERSE_0).unwrap();
        let with_zero = Range::parse("Ps 4:0-5", BibleFlags::VERSE_0).unwrap();
        let pieces = with_zero.difference(range("Ps 4:1-5"), FLAGS);
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces.get(0), Some(&Range::single(zero)));

        // Nothing before the subtracted range leaks out of chapter 4
        let subtracted = Range::parse("Ps 4:0-3", BibleFlags::VERSE_0).unwrap();
        let pieces = range("Ps 4:1-8").difference(subtracted, FLAGS);
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces.get(0).map(|p| p.start()), Some(verse("Ps 4:4")));
    }

    #[test]
    fn test_adjacent_across_verse_zero() {
        let with_zero = Range::parse("Ps 4:0-5", BibleFlags::VERSE_0).unwrap();
        assert!(range("Ps 3:8").is_adjacent(with_zero, FLAGS));
        assert!(with_zero.is_adjacent(range("Ps 3:8"), FLAGS));
        assert!(!range("Ps 3:8").is_adjacent(range("Ps 4:2"), FLAGS));

        let mut list: RangeList = [range("Ps 3:8"), with_zero].into_iter().collect();
        list.consolidate(FLAGS);
        assert_eq!(list.len(), 1);
        assert_eq!(
            list.get(0).map(|r| (r.start(), r.end())),
            Some((verse("Ps 3:8"), verse("Ps 4:5")))
        );
    }

    #[test]
    fn test_sym_difference() {
        assert!(range("Matt 2").sym_difference(range("Matt 2"), FLAGS).is_empty());
        assert_eq!(rendered(range("Matt 2").sym_difference(range("Matt 3"), FLAGS)), "Matthew 2-3");
        assert_eq!(
            rendered(range("Matt 2-3").sym_difference(range("Matt 3-4"), FLAGS)),
            "Matthew 2, 4"
        );
    }

    #[test]
    fn test_list_operand_delegates() {
        let list = RangeList::parse("Matt 3; Matt 5", FLAGS).unwrap();
        let r = range("Matt 2-5");
        assert_eq!(rendered(r.intersection(&list, FLAGS)), "Matthew 3; 5");
        assert_eq!(rendered(r.difference(&list, FLAGS)), "Matthew 2; 4");
        assert!(!r.is_disjoint(&list));
        assert!(range("Matt 4").is_adjacent(&list, FLAGS));
    }
}
