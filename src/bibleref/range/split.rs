//! Splitting a range into consecutive pieces

use std::num::NonZeroU32;

use super::Range;
use crate::bibleref::flags::BibleFlags;
use crate::bibleref::range_list::RangeList;
use crate::bibleref::verse::Verse;

/// Where to cut when splitting a [`Range`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOptions {
    /// Cut at the end of every book
    pub by_book: bool,
    /// Cut at the end of every chapter
    pub by_chap: bool,
    /// Cut after at most this many verses
    pub num_verses: Option<NonZeroU32>,
    /// Regroup the resulting list
    pub regroup: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            by_book: false,
            by_chap: false,
            num_verses: None,
            regroup: true,
        }
    }
}

impl Range {
    /// Split into consecutive smaller ranges.
    ///
    /// Book cuts happen first, then chapter cuts within each piece, then verse-count
    /// cuts within each of those. With no cut selected the result holds this range
    /// alone.
    pub fn split(&self, options: SplitOptions, flags: BibleFlags) -> RangeList {
        let pieces = self.pieces(
            options.by_book,
            options.by_chap,
            options.num_verses,
            flags,
        );
        let mut list: RangeList = pieces.into_iter().collect();
        if options.regroup {
            list.regroup(flags);
        }
        list
    }

    pub(crate) fn pieces(
        &self,
        by_book: bool,
        by_chap: bool,
        num_verses: Option<NonZeroU32>,
        flags: BibleFlags,
    ) -> Vec<Range> {
        let flags = self.step_flags(flags);

        let mut pieces = vec![*self];
        if by_book {
            pieces = cut_all(pieces, flags, |start| Some(start.book().book_end()));
        }
        if by_chap {
            pieces = cut_all(pieces, flags, |start| Some(start.chapter_end()));
        }
        if let Some(size) = num_verses {
            pieces = cut_all(pieces, flags, |start| start.add(size.get() - 1, flags));
        }
        pieces
    }
}

fn cut_all(
    pieces: Vec<Range>,
    flags: BibleFlags,
    boundary: impl Fn(Verse) -> Option<Verse>,
) -> Vec<Range> {
    pieces
        .into_iter()
        .flat_map(|piece| cut(piece, flags, &boundary))
        .collect()
}

/// Cut one range wherever `boundary` says a piece starting at a verse must end
fn cut(range: Range, flags: BibleFlags, boundary: &impl Fn(Verse) -> Option<Verse>) -> Vec<Range> {
    let mut out = Vec::new();
    let mut start = range.start;
    while let Some(end) = boundary(start).filter(|end| *end < range.end) {
        match end.add(1, flags) {
            Some(next) => {
                out.push(Range::spanning(start, end));
                start = next;
            }
            None => break,
        }
    }
    out.push(Range::spanning(start, range.end));
    out
}
