//! Contiguous verse ranges
//!
//! A `Range` runs from a start verse to an end verse, inclusive, with
//! `start <= end` always holding. Ranges normally stay inside one book; a range
//! crossing books can only be built with `BibleFlags::MULTIBOOK`, but once built it
//! behaves normally whatever flags later calls receive.
//!
//! The set algebra lives in `range/algebra.rs`, splitting in `range/split.rs`.

mod algebra;
mod split;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::catalog::Book;
use super::error::{BibleRefError, BibleRefResult};
use super::flags::{BibleFlags, VerseParts};
use super::range_list::RangeList;
use super::settings::RenderOptions;
use super::verse::Verse;

pub use split::SplitOptions;

/// A continuous run of verses, e.g. Matt 2:3-4:5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Range {
    start: Verse,
    end: Verse,
}

/// Positional description of a range, any trailing part of which may be left out.
///
/// Missing pieces are implied: a book alone is the whole book, a book and chapter
/// the whole chapter. An end chapter alone runs to the end of that chapter, and an
/// end verse alone stays in the start chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeParts {
    pub start_book: Book,
    pub start_chapter: Option<u32>,
    pub start_verse: Option<u32>,
    pub end_book: Option<Book>,
    pub end_chapter: Option<u32>,
    pub end_verse: Option<u32>,
}

impl RangeParts {
    pub fn new(start_book: Book) -> Self {
        Self {
            start_book,
            start_chapter: None,
            start_verse: None,
            end_book: None,
            end_chapter: None,
            end_verse: None,
        }
    }

    /// Swap obviously reversed fields: by book, then chapter, then verse
    fn normalised(mut self) -> Self {
        match self.end_book {
            Some(end_book) if self.start_book > end_book => {
                self.end_book = Some(self.start_book);
                self.start_book = end_book;
                std::mem::swap(&mut self.start_chapter, &mut self.end_chapter);
                std::mem::swap(&mut self.start_verse, &mut self.end_verse);
            }
            Some(end_book) if end_book != self.start_book => {}
            _ => match (self.start_chapter, self.end_chapter) {
                (Some(start), Some(end)) if start > end => {
                    std::mem::swap(&mut self.start_chapter, &mut self.end_chapter);
                    std::mem::swap(&mut self.start_verse, &mut self.end_verse);
                }
                (Some(start), end) if end.is_none() || end == Some(start) => {
                    if let (Some(sv), Some(ev)) = (self.start_verse, self.end_verse) {
                        if sv > ev {
                            std::mem::swap(&mut self.start_verse, &mut self.end_verse);
                        }
                    }
                }
                _ => {}
            },
        }
        self
    }

    fn has_end(&self) -> bool {
        self.end_book.is_some() || self.end_chapter.is_some() || self.end_verse.is_some()
    }
}

fn check_multibook(start: Verse, end: Verse, flags: BibleFlags) -> BibleRefResult<()> {
    if !flags.multibook() && start.book() != end.book() {
        return Err(BibleRefError::MultibookNotAllowed(format!(
            "Multi-book ranges not allowed ({} and {} are different)",
            start.book().abbrev(),
            end.book().abbrev()
        )));
    }
    Ok(())
}

impl Range {
    /// Build from two verses, swapping them if reversed
    pub fn new(start: Verse, end: Verse, flags: BibleFlags) -> BibleRefResult<Self> {
        check_multibook(start, end, flags)?;
        Ok(Self::spanning(start, end))
    }

    /// Range between two already-valid verses, in either order, with no flag checks
    pub(crate) fn spanning(a: Verse, b: Verse) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// `flags` widened to walk this range verse by verse: MULTIBOOK when it crosses
    /// books, VERSE_0 when either end is a verse 0
    pub(crate) fn step_flags(&self, flags: BibleFlags) -> BibleFlags {
        let mut flags = flags;
        if self.start.book() != self.end.book() {
            flags |= BibleFlags::MULTIBOOK;
        }
        if self.start.verse() == 0 || self.end.verse() == 0 {
            flags |= BibleFlags::VERSE_0;
        }
        flags
    }

    pub(crate) fn single(verse: Verse) -> Self {
        Self {
            start: verse,
            end: verse,
        }
    }

    /// Build from positional parts, filling in whatever is implied
    pub fn from_parts(parts: RangeParts, flags: BibleFlags) -> BibleRefResult<Self> {
        let parts = parts.normalised();
        let book = parts.start_book;

        let (start, implied_end) = match (parts.start_chapter, parts.start_verse) {
            (None, Some(_)) => {
                return Err(BibleRefError::invalid_reference(
                    "Start verse is missing a start chapter",
                ))
            }
            (None, None) => (book.first_verse(None, flags)?, book.last_verse(None)?),
            (Some(chapter), None) => (
                book.first_verse(Some(chapter), flags)?,
                book.last_verse(Some(chapter))?,
            ),
            (Some(chapter), Some(verse)) => {
                let verse = Verse::new(book, chapter, verse, flags)?;
                (verse, verse)
            }
        };

        let end = if parts.has_end() {
            let end_book = parts.end_book.unwrap_or(book);
            match (parts.end_chapter, parts.end_verse) {
                (None, None) => end_book.last_verse(None)?,
                (Some(chapter), None) => end_book.last_verse(Some(chapter))?,
                (None, Some(_)) if end_book != book => {
                    return Err(BibleRefError::invalid_reference(
                        "End verse is missing an end chapter",
                    ))
                }
                (None, Some(verse)) => Verse::new(end_book, start.chapter(), verse, flags)?,
                (Some(chapter), Some(verse)) => Verse::new(end_book, chapter, verse, flags)?,
            }
        } else {
            implied_end
        };

        Self::new(start, end, flags)
    }

    /// Genesis 1:1 to the last verse of Revelation
    pub fn whole_bible(flags: BibleFlags) -> Self {
        let flags = flags | BibleFlags::MULTIBOOK;
        Self::spanning(Book::Gen.book_start(flags), Book::Rev.book_end())
    }

    /// Parse text that must yield exactly one range
    pub fn parse(text: &str, flags: BibleFlags) -> BibleRefResult<Self> {
        let list = RangeList::parse(text, flags)?;
        match list.get(0) {
            Some(range) if list.len() == 1 => Ok(*range),
            _ => Err(BibleRefError::invalid_reference(format!(
                "String is not a single verse range: {}",
                text
            ))),
        }
    }

    pub fn start(&self) -> Verse {
        self.start
    }

    pub fn end(&self) -> Verse {
        self.end
    }

    pub fn verse_0_to_1(self) -> Self {
        Self::spanning(self.start.verse_0_to_1(), self.end.verse_0_to_1())
    }

    pub fn verse_1_to_0(self) -> Self {
        Self::spanning(self.start.verse_1_to_0(), self.end.verse_1_to_0())
    }

    pub fn is_single_verse(&self) -> bool {
        self.start == self.end
    }

    fn is_single_book(&self) -> bool {
        self.start.book() == self.end.book()
    }

    /// Exactly one whole chapter
    pub fn is_whole_chap(&self, flags: BibleFlags) -> bool {
        self.is_single_book()
            && self.start.chapter() == self.end.chapter()
            && self.start.is_first_in_chap(flags)
            && self.end.is_last_in_chap()
    }

    /// Includes the whole chapter the start verse is in
    pub fn spans_start_chap(&self, flags: BibleFlags) -> bool {
        self.start.is_first_in_chap(flags) && self.end >= self.start.chapter_end()
    }

    /// Includes the whole chapter the end verse is in
    pub fn spans_end_chap(&self, flags: BibleFlags) -> bool {
        self.end.is_last_in_chap() && self.start <= self.end.chapter_start(flags)
    }

    /// Exactly one whole book
    pub fn is_whole_book(&self, flags: BibleFlags) -> bool {
        self.is_single_book() && self.start.is_first_in_book(flags) && self.end.is_last_in_book()
    }

    /// Includes the whole book the start verse is in
    pub fn spans_start_book(&self, flags: BibleFlags) -> bool {
        self.start.is_first_in_book(flags) && self.end >= self.start.book().book_end()
    }

    /// Includes the whole book the end verse is in
    pub fn spans_end_book(&self, flags: BibleFlags) -> bool {
        self.end.is_last_in_book() && self.start <= self.end.book().book_start(flags)
    }

    /// Number of verses in the range
    pub fn verse_count(&self) -> usize {
        self.pieces(false, true, None, BibleFlags::NONE)
            .iter()
            .map(|piece| (piece.end.verse() - piece.start.verse() + 1) as usize)
            .sum()
    }

    /// Number of chapters touched; with `whole`, partial first and last chapters are not counted
    pub fn chap_count(&self, whole: bool) -> usize {
        let pieces = self.pieces(false, true, None, BibleFlags::NONE);
        count_pieces(&pieces, whole, |piece| {
            piece.start.verse() <= 1 && piece.end.is_last_in_chap()
        })
    }

    /// Number of books touched; with `whole`, partial first and last books are not counted
    pub fn book_count(&self, whole: bool) -> usize {
        let pieces = self.pieces(true, false, None, BibleFlags::NONE);
        count_pieces(&pieces, whole, |piece| {
            piece.start.chapter() == piece.start.book().min_chap_num()
                && piece.start.verse() <= 1
                && piece.end.is_last_in_book()
        })
    }

    /// Smallest range containing this one that starts and ends on chapter boundaries
    pub fn chap_range(&self, flags: BibleFlags) -> Range {
        let flags = flags | BibleFlags::MULTIBOOK;
        Self::spanning(self.start.chapter_start(flags), self.end.chapter_end())
    }

    /// Smallest range containing this one that starts and ends on book boundaries
    pub fn book_range(&self, flags: BibleFlags) -> Range {
        let flags = flags | BibleFlags::MULTIBOOK;
        Self::spanning(self.start.book().book_start(flags), self.end.book().book_end())
    }

    /// Every verse in the range, in order
    pub fn iter(&self) -> Verses {
        Verses {
            next: Some(self.start),
            end: self.end,
            flags: self.step_flags(BibleFlags::MULTIBOOK),
        }
    }

    /// Shortest text for this range on its own.
    ///
    /// The end is left out entirely for a whole book, a whole chapter or a single
    /// verse; otherwise it only repeats the book and chapter when they change.
    pub fn render(&self, options: &RenderOptions) -> String {
        let flags = options.flags;
        let (start_parts, mut at_verse_level) = if self.spans_start_book(flags) {
            (VerseParts::BOOK, false)
        } else if self.spans_start_chap(flags) {
            if options.force_start_verses && !self.spans_end_chap(flags) {
                (VerseParts::FULL_REF, true)
            } else {
                (VerseParts::BOOK_CHAP, false)
            }
        } else {
            (VerseParts::FULL_REF, true)
        };
        let start = self.start.render(options, start_parts);

        if self.is_whole_book(flags) || self.is_whole_chap(flags) || self.is_single_verse() {
            return start;
        }

        if !self.is_single_book() {
            at_verse_level = false;
        }
        let mut end_parts = if self.spans_end_book(flags) {
            VerseParts::BOOK
        } else if !at_verse_level && self.spans_end_chap(flags) {
            VerseParts::BOOK_CHAP
        } else {
            VerseParts::FULL_REF
        };
        if self.is_single_book() {
            end_parts = end_parts.without(VerseParts::BOOK);
            if self.start.chapter() == self.end.chapter() {
                end_parts = end_parts.without(VerseParts::CHAP);
            }
        }
        let end = self.end.render(options, end_parts);

        let range_sep = options.separators.range();
        if options.no_space {
            format!("{}{}{}", start, range_sep, end).replace(' ', "")
        } else {
            format!("{}{}{}", start, range_sep, end)
        }
    }
}

fn count_pieces(pieces: &[Range], whole: bool, is_whole: impl Fn(&Range) -> bool) -> usize {
    let mut count = pieces.len();
    if whole {
        if let Some(first) = pieces.first() {
            if !is_whole(first) {
                count -= 1;
            }
        }
        if let Some(last) = pieces.last() {
            if pieces.len() > 1 && !is_whole(last) {
                count -= 1;
            }
        }
    }
    count
}

/// Iterator over the verses of a [`Range`]
#[derive(Debug, Clone)]
pub struct Verses {
    next: Option<Verse>,
    end: Verse,
    flags: BibleFlags,
}

impl Iterator for Verses {
    type Item = Verse;

    fn next(&mut self) -> Option<Verse> {
        let current = self.next.filter(|verse| *verse <= self.end)?;
        self.next = current.add(1, self.flags);
        Some(current)
    }
}

impl<'a> IntoIterator for &'a Range {
    type Item = Verse;
    type IntoIter = Verses;

    fn into_iter(self) -> Verses {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}

impl From<Verse> for Range {
    fn from(verse: Verse) -> Self {
        Self::single(verse)
    }
}

impl FromStr for Range {
    type Err = BibleRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::parse(s, BibleFlags::NONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parts(book: Book) -> RangeParts {
        RangeParts::new(book)
    }

    fn range(text: &str) -> Range {
        Range::parse(text, BibleFlags::MULTIBOOK).unwrap()
    }

    #[test]
    fn test_from_parts_implied_ends() {
        let flags = BibleFlags::NONE;
        let whole_book = Range::from_parts(parts(Book::Matt), flags).unwrap();
        assert_eq!(whole_book.start().chapter(), 1);
        assert_eq!((whole_book.end().chapter(), whole_book.end().verse()), (28, 20));

        let chapter = Range::from_parts(
            RangeParts {
                start_chapter: Some(2),
                ..parts(Book::Matt)
            },
            flags,
        )
        .unwrap();
        assert_eq!(chapter.to_string(), "Matthew 2");

        let verse = Range::from_parts(
            RangeParts {
                start_chapter: Some(2),
                start_verse: Some(3),
                ..parts(Book::Matt)
            },
            flags,
        )
        .unwrap();
        assert!(verse.is_single_verse());

        let to_chapter = Range::from_parts(
            RangeParts {
                end_chapter: Some(4),
                ..parts(Book::Matt)
            },
            flags,
        )
        .unwrap();
        assert_eq!(to_chapter.to_string(), "Matthew 1-4");

        let to_verse = Range::from_parts(
            RangeParts {
                end_verse: Some(6),
                ..parts(Book::Matt)
            },
            flags,
        )
        .unwrap();
        assert_eq!(to_verse.to_string(), "Matthew 1:1-6");
    }

    #[test]
    fn test_from_parts_swaps_reversed_fields() {
        let flags = BibleFlags::MULTIBOOK;
        let books = Range::from_parts(
            RangeParts {
                end_book: Some(Book::Matt),
                ..parts(Book::John)
            },
            flags,
        )
        .unwrap();
        assert_eq!(books.to_string(), "Matthew-John");

        let verses = Range::from_parts(
            RangeParts {
                start_chapter: Some(5),
                start_verse: Some(10),
                end_verse: Some(3),
                ..parts(Book::Matt)
            },
            flags,
        )
        .unwrap();
        assert_eq!(verses.to_string(), "Matthew 5:3-10");
    }

    #[test]
    fn test_from_parts_errors() {
        let err = Range::from_parts(
            RangeParts {
                start_verse: Some(3),
                ..parts(Book::Matt)
            },
            BibleFlags::NONE,
        )
        .unwrap_err();
        assert_eq!(err.message(), "Start verse is missing a start chapter");

        let err = Range::from_parts(
            RangeParts {
                start_chapter: Some(2),
                end_book: Some(Book::John),
                end_verse: Some(4),
                ..parts(Book::Matt)
            },
            BibleFlags::MULTIBOOK,
        )
        .unwrap_err();
        assert_eq!(err.message(), "End verse is missing an end chapter");

        let err = Range::from_parts(
            RangeParts {
                end_book: Some(Book::John),
                ..parts(Book::Matt)
            },
            BibleFlags::NONE,
        )
        .unwrap_err();
        assert_eq!(
            err,
            BibleRefError::MultibookNotAllowed(
                "Multi-book ranges not allowed (Matt and John are different)".into()
            )
        );
    }

    #[test]
    fn test_new_swaps_and_checks_books() {
        let a = Verse::new(Book::Matt, 4, 5, BibleFlags::NONE).unwrap();
        let b = Verse::new(Book::Matt, 2, 3, BibleFlags::NONE).unwrap();
        let range = Range::new(a, b, BibleFlags::NONE).unwrap();
        assert_eq!((range.start(), range.end()), (b, a));

        let c = Verse::new(Book::John, 1, 1, BibleFlags::NONE).unwrap();
        assert!(Range::new(a, c, BibleFlags::NONE).is_err());
        assert!(Range::new(a, c, BibleFlags::MULTIBOOK).is_ok());
    }

    #[test]
    fn test_whole_bible() {
        let bible = Range::whole_bible(BibleFlags::NONE);
        assert_eq!(bible.to_string(), "Genesis-Revelation");
        assert_eq!(bible.book_count(true), 66);
    }

    #[rstest]
    #[case("Matthew 5:6-John")]
    #[case("Exodus 7:4-10:29")]
    #[case("Obadiah 10-12")]
    #[case("1 John 5:18-3 John")]
    #[case("Matthew 2:3-4:5")]
    #[case("Matthew 2-4")]
    #[case("Matthew 2-4:5")]
    #[case("Mark-Luke 3")]
    #[case("Psalms 119")]
    #[case("Jude")]
    fn test_render_round_trip(#[case] text: &str) {
        assert_eq!(range(text).to_string(), text);
    }

    #[test]
    fn test_render_options() {
        let r = range("Matthew 2:3-4:5");
        assert_eq!(r.render(&RenderOptions::abbreviated()), "Matt 2:3-4:5");
        let options = RenderOptions {
            alt_separator: true,
            no_space: true,
            ..RenderOptions::default()
        };
        assert_eq!(r.render(&options), "Matthew2.3-4.5");

        let forced = RenderOptions {
            force_start_verses: true,
            ..RenderOptions::default()
        };
        assert_eq!(range("Matthew 2-4:5").render(&forced), "Matthew 2:1-4:5");
        assert_eq!(range("Matthew 2-4").render(&forced), "Matthew 2-4");
    }

    #[test]
    fn test_predicates() {
        let flags = BibleFlags::NONE;
        assert!(range("Matt 2").is_whole_chap(flags));
        assert!(!range("Matt 2-3").is_whole_chap(flags));
        assert!(range("Matt 2-3:5").spans_start_chap(flags));
        assert!(!range("Matt 2-3:5").spans_end_chap(flags));
        assert!(range("Matt").is_whole_book(flags));
        assert!(range("Matt-Mark 3").spans_start_book(flags));
        assert!(!range("Matt-Mark 3").spans_end_book(flags));
        assert!(range("Matt 2:3").is_single_verse());
    }

    #[test]
    fn test_counts() {
        let r = range("1 John 1:5-3 John 8");
        assert_eq!(r.verse_count(), 122);
        assert_eq!(r.chap_count(false), 7);
        assert_eq!(r.chap_count(true), 5);
        assert_eq!(r.book_count(false), 3);
        assert_eq!(r.book_count(true), 1);
        assert_eq!(range("Phil").verse_count(), 104);
        assert_eq!(range("Matt 2:3").chap_count(true), 0);
    }

    #[test]
    fn test_covering_ranges() {
        let r = range("Matt 2:3-4:5");
        assert_eq!(r.chap_range(BibleFlags::NONE).to_string(), "Matthew 2-4");
        assert_eq!(r.book_range(BibleFlags::NONE).to_string(), "Matthew");
        let r = range("Matt 28:3-Mark 1:5");
        assert_eq!(r.book_range(BibleFlags::NONE).to_string(), "Matthew-Mark");
    }

    #[test]
    fn test_iteration() {
        let verses: Vec<String> = range("Matt 1:24-2:2").iter().map(|v| v.to_string()).collect();
        assert_eq!(
            verses,
            ["Matthew 1:24", "Matthew 1:25", "Matthew 2:1", "Matthew 2:2"]
        );
        let r = range("Mal 4:6-Matt 1:1");
        assert_eq!(r.iter().count(), 2);
        // restartable
        assert_eq!((&r).into_iter().count(), 2);
        assert_eq!(Range::whole_bible(BibleFlags::NONE).iter().last(), Some(Book::Rev.book_end()));
    }

    #[test]
    fn test_verse_zero_conversion() {
        let r = range("Ps 3-4");
        let zeroed = r.verse_1_to_0();
        assert_eq!(zeroed.start().verse(), 0);
        assert_eq!(zeroed.verse_0_to_1(), r);
    }

    #[test]
    fn test_iteration_keeps_verse_zero() {
        let r = range("Ps 3-4").verse_1_to_0();
        let zero = Verse::new(Book::Psa, 4, 0, BibleFlags::VERSE_0).unwrap();
        assert_eq!(r.iter().count(), 18);
        assert_eq!(r.iter().count(), r.verse_count());
        assert!(r.iter().any(|v| v == zero));

        // Without a verse-0 end, iteration skips the superscriptions
        assert_eq!(range("Ps 3-4").iter().count(), 16);
        assert_eq!(range("Ps 3-4").verse_count(), 16);
    }
}
