//! Grouped lists of ranges
//!
//! A `RangeList` is a `GroupedList<Range>`: the groups remember where the text
//! used the major list separator, so "Mark 3:1-4:2; 5:6-8, 10; Matt 4" parses into
//! three groups and renders back the same way.
//!
//! Rendering and regrouping share their context tracking and live in
//! `range_list/render.rs`. List set algebra lives in `range_list/algebra.rs`.

mod algebra;
mod render;

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use tracing::trace;

use super::error::{BibleRefError, BibleRefResult};
use super::flags::BibleFlags;
use super::grouped::GroupedList;
use super::parsing;
use super::range::Range;
use super::settings::{RenderOptions, Separators};

/// An ordered, grouped list of [`Range`]s
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RangeList(GroupedList<Range>);

impl RangeList {
    pub fn new() -> Self {
        Self(GroupedList::new())
    }

    /// One group per inner vector, empty vectors skipped
    pub fn from_groups(groups: Vec<Vec<Range>>) -> Self {
        let mut list = Self::new();
        for group in groups {
            list.append_group(group);
        }
        list
    }

    /// Parse with the default separators
    pub fn parse(text: &str, flags: BibleFlags) -> BibleRefResult<Self> {
        Self::parse_with(text, &Separators::DEFAULT, flags)
    }

    pub fn parse_with(text: &str, separators: &Separators, flags: BibleFlags) -> BibleRefResult<Self> {
        let groups = parsing::parse_groups(text, separators, flags)?;
        Ok(Self::from_groups(groups))
    }

    /// Replace every range with its verse-0-to-1 form
    pub fn verse_0_to_1(&mut self) {
        self.map_in_place(Range::verse_0_to_1);
    }

    /// Replace every range with its verse-1-to-0 form
    pub fn verse_1_to_0(&mut self) {
        self.map_in_place(Range::verse_1_to_0);
    }

    fn map_in_place(&mut self, f: impl Fn(Range) -> Range) {
        let mut cursor = self.0.first_node();
        while let Some(id) = cursor {
            let value = self.0.value_mut(id);
            *value = f(*value);
            cursor = self.0.next_node(id);
        }
    }

    pub fn verse_count(&self) -> usize {
        self.iter().map(Range::verse_count).sum()
    }

    pub fn chap_count(&self, whole: bool) -> usize {
        self.iter().map(|range| range.chap_count(whole)).sum()
    }

    pub fn book_count(&self, whole: bool) -> usize {
        self.iter().map(|range| range.book_count(whole)).sum()
    }

    /// Smallest single range covering every verse in the list
    pub fn range(&self) -> Option<Range> {
        let start = self.iter().map(Range::start).min()?;
        let end = self.iter().map(Range::end).max()?;
        Some(Range::spanning(start, end))
    }

    /// Covering range widened to chapter boundaries
    pub fn chap_range(&self, flags: BibleFlags) -> Option<Range> {
        self.range().map(|range| range.chap_range(flags))
    }

    /// Covering range widened to book boundaries
    pub fn book_range(&self, flags: BibleFlags) -> Option<Range> {
        self.range().map(|range| range.book_range(flags))
    }

    /// Sort in place, leaving a single group, then optionally regroup
    pub fn sort(&mut self, regroup: bool, flags: BibleFlags) {
        self.0.sort();
        if regroup {
            self.regroup(flags);
        }
    }

    /// Sort and merge overlapping or adjacent ranges, leaving one group.
    ///
    /// Afterwards the ranges are strictly increasing, pairwise disjoint and never
    /// adjacent under `flags`.
    pub fn consolidate(&mut self, flags: BibleFlags) {
        let before = self.len();
        self.0.sort();
        let mut cursor = self.0.first_node();
        while let Some(id) = cursor {
            let Some(next_id) = self.0.next_node(id) else {
                break;
            };
            let current = *self.0.value(id);
            let next = *self.0.value(next_id);
            if current.is_disjoint(next) && !current.is_adjacent(next, flags) {
                cursor = Some(next_id);
            } else {
                // Stay on this node; the merged range may reach the one after too
                *self.0.value_mut(id) = Range::spanning(current.start(), current.end().max(next.end()));
                self.0.pop_after(id);
            }
        }
        trace!(before, after = self.len(), "consolidated range list");
    }

    /// Consolidate, then regroup for presentation
    pub fn merge(&mut self, flags: BibleFlags) {
        self.consolidate(flags);
        self.regroup(flags);
    }
}

impl Deref for RangeList {
    type Target = GroupedList<Range>;

    fn deref(&self) -> &GroupedList<Range> {
        &self.0
    }
}

impl DerefMut for RangeList {
    fn deref_mut(&mut self) -> &mut GroupedList<Range> {
        &mut self.0
    }
}

impl From<Range> for RangeList {
    fn from(range: Range) -> Self {
        std::iter::once(range).collect()
    }
}

impl From<GroupedList<Range>> for RangeList {
    fn from(list: GroupedList<Range>) -> Self {
        Self(list)
    }
}

impl FromIterator<Range> for RangeList {
    fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Range> for RangeList {
    fn extend<I: IntoIterator<Item = Range>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a RangeList {
    type Item = &'a Range;
    type IntoIter = super::grouped::Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for RangeList {
    type Err = BibleRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, BibleFlags::NONE)
    }
}

impl fmt::Display for RangeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}

impl fmt::Debug for RangeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RangeList({:?})", self.render(&RenderOptions::default()))
    }
}

impl Serialize for RangeList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bibleref::catalog::Book;

    fn list(text: &str) -> RangeList {
        RangeList::parse(text, BibleFlags::NONE).unwrap()
    }

    #[test]
    fn test_parse_keeps_groups() {
        let list = list("Mark 3:1-4:2; 5:6-8, 10; Matt 4");
        assert_eq!(list.len(), 4);
        assert_eq!(list.group_count(), 3);
        let second = list.groups().get(1).unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(second.get(1).map(|r| r.to_string()), Some("Mark 5:10".to_string()));
    }

    #[test]
    fn test_counts() {
        let list = list("Matt 2-3; Mark 4:3-5:1; Jude");
        assert_eq!(list.chap_count(false), 2 + 2 + 1);
        assert_eq!(list.chap_count(true), 2 + 1);
        assert_eq!(list.book_count(false), 3);
        assert_eq!(list.book_count(true), 1);
        assert_eq!(list.verse_count(), (23 + 17) + (39 + 1) + 25);
    }

    #[test]
    fn test_covering_ranges() {
        let list = list("Mark 4:3-5:1; Matt 2:4-6");
        assert_eq!(list.range().map(|r| r.to_string()), Some("Matthew 2:4-Mark 5:1".to_string()));
        assert_eq!(list.chap_range(BibleFlags::NONE).map(|r| r.to_string()), Some("Matthew 2-Mark 5".to_string()));
        assert_eq!(list.book_range(BibleFlags::NONE).map(|r| r.to_string()), Some("Matthew-Mark".to_string()));
        assert_eq!(RangeList::new().range(), None);
    }

    #[test]
    fn test_covering_range_uses_latest_end() {
        // The last range to start is not the last to end
        let list = list("Matt 1-5; Matt 2");
        assert_eq!(list.range().map(|r| r.to_string()), Some("Matthew 1-5".to_string()));
    }

    #[test]
    fn test_consolidate() {
        let mut list = list("Mark 4; Matt 3-5; Matt 2; Matt 4:3-6:2; Mark 5");
        list.consolidate(BibleFlags::NONE);
        assert_eq!(list.group_count(), 1);
        let ranges: Vec<String> = list.iter().map(|r| r.to_string()).collect();
        assert_eq!(ranges, ["Matthew 2-6:2", "Mark 4-5"]);
    }

    #[test]
    fn test_consolidate_across_books_needs_multibook() {
        let mut list = list("Mark 16; Luke 1");
        list.consolidate(BibleFlags::NONE);
        assert_eq!(list.len(), 2);
        list.consolidate(BibleFlags::MULTIBOOK);
        assert_eq!(list.len(), 1);
        assert_eq!(list.first().map(|r| r.start().book()), Some(Book::Mark));
        assert_eq!(list.first().map(|r| r.end().book()), Some(Book::Luke));
    }

    #[test]
    fn test_merge_regroups() {
        let mut list = list("Matt 4, 2; Matt 3:5, 3:3");
        list.merge(BibleFlags::NONE);
        assert_eq!(list.group_count(), 3);
        assert_eq!(list.to_string(), "Matthew 2; 3:3, 5; 4");
    }

    #[test]
    fn test_sort() {
        let mut list = list("John 3; Gen 1; Mark 2");
        list.sort(false, BibleFlags::NONE);
        assert_eq!(list.group_count(), 1);
        assert_eq!(list.to_string(), "Genesis 1, Mark 2, John 3");
        list.sort(true, BibleFlags::NONE);
        assert_eq!(list.to_string(), "Genesis 1; Mark 2; John 3");
    }

    #[test]
    fn test_verse_zero_conversion() {
        let mut list = RangeList::parse("Ps 3:0-2; Ps 4:1", BibleFlags::VERSE_0).unwrap();
        list.verse_0_to_1();
        assert_eq!(list.first().map(|r| r.start().verse()), Some(1));
        list.verse_1_to_0();
        assert_eq!(list.get(1).map(|r| r.start().verse()), Some(0));
    }

    #[test]
    fn test_equality_is_group_sensitive() {
        let grouped = list("Matt 2; 4");
        let flat = list("Matt 2, 4");
        assert_ne!(grouped, flat);
        assert!(grouped.equals(&flat, false));
    }
}
