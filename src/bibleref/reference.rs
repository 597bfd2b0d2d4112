//! The operand type accepted by every set operation

use super::range::Range;
use super::range_list::RangeList;
use super::verse::Verse;

/// A verse, a range, or a borrowed list of ranges
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BibleRef<'a> {
    Verse(Verse),
    Range(Range),
    List(&'a RangeList),
}

/// A reference reduced to the two shapes the algorithms care about
pub(crate) enum Operand<'a> {
    Single(Range),
    List(&'a RangeList),
}

impl<'a> BibleRef<'a> {
    pub(crate) fn operand(self) -> Operand<'a> {
        match self {
            BibleRef::Verse(verse) => Operand::Single(Range::single(verse)),
            BibleRef::Range(range) => Operand::Single(range),
            BibleRef::List(list) => Operand::List(list),
        }
    }

    /// The reference as a sequence of ranges, in list order
    pub fn to_ranges(self) -> Vec<Range> {
        match self.operand() {
            Operand::Single(range) => vec![range],
            Operand::List(list) => list.iter().copied().collect(),
        }
    }
}

impl From<Verse> for BibleRef<'_> {
    fn from(verse: Verse) -> Self {
        BibleRef::Verse(verse)
    }
}

impl From<&Verse> for BibleRef<'_> {
    fn from(verse: &Verse) -> Self {
        BibleRef::Verse(*verse)
    }
}

impl From<Range> for BibleRef<'_> {
    fn from(range: Range) -> Self {
        BibleRef::Range(range)
    }
}

impl From<&Range> for BibleRef<'_> {
    fn from(range: &Range) -> Self {
        BibleRef::Range(*range)
    }
}

impl<'a> From<&'a RangeList> for BibleRef<'a> {
    fn from(list: &'a RangeList) -> Self {
        BibleRef::List(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bibleref::flags::BibleFlags;

    #[test]
    fn test_to_ranges() {
        let verse = Verse::parse("Matt 2:3", BibleFlags::NONE).unwrap();
        assert_eq!(
            BibleRef::from(verse).to_ranges(),
            vec![Range::new(verse, verse, BibleFlags::NONE).unwrap()]
        );

        let list = RangeList::parse("Matt 2; Mark 3", BibleFlags::NONE).unwrap();
        let ranges = BibleRef::from(&list).to_ranges();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[1].to_string(), "Mark 3");
    }
}
