//! Single verse references
//!
//! A `Verse` is an immutable (book, chapter, verse) triple that is always valid for
//! the flags it was built with. Ordering is lexicographic on book order, chapter and
//! verse, which is exactly the derived order given the field layout.

use serde::Serialize;
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::catalog::Book;
use super::error::{BibleRefError, BibleRefResult};
use super::flags::{BibleFlags, VerseParts};
use super::range::Range;
use super::range_list::RangeList;
use super::settings::RenderOptions;

/// A reference to one verse, e.g. Matt 2:3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Verse {
    book: Book,
    chapter: u32,
    verse: u32,
}

impl Verse {
    /// Build a verse, checking the chapter and verse against the catalog
    pub fn new(book: Book, chapter: u32, verse: u32, flags: BibleFlags) -> BibleRefResult<Self> {
        if !book.has_chapter(chapter) {
            return Err(BibleRefError::invalid_reference(format!(
                "No chapter {} in {}",
                chapter,
                book.title()
            )));
        }
        if verse < book.first_verse_num(chapter, flags) || verse > book.last_verse_num(chapter) {
            return Err(BibleRefError::invalid_reference(format!(
                "No verse {} in {} {}",
                verse,
                book.title(),
                chapter
            )));
        }
        Ok(Self::from_valid(book, chapter, verse))
    }

    /// Build from parts the caller has already validated
    pub(crate) fn from_valid(book: Book, chapter: u32, verse: u32) -> Self {
        Self {
            book,
            chapter,
            verse,
        }
    }

    /// Parse text that must name exactly one verse
    pub fn parse(text: &str, flags: BibleFlags) -> BibleRefResult<Self> {
        let list = RangeList::parse(text, flags)?;
        match list.get(0) {
            Some(range) if list.len() == 1 && range.is_single_verse() => Ok(range.start()),
            _ => Err(BibleRefError::invalid_reference(format!(
                "String is not a single verse: {}",
                text
            ))),
        }
    }

    pub fn book(&self) -> Book {
        self.book
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    pub fn verse(&self) -> u32 {
        self.verse
    }

    /// First verse of `chapter` in this verse's book (this verse's chapter when `None`)
    pub fn first_verse(&self, chapter: Option<u32>, flags: BibleFlags) -> BibleRefResult<Verse> {
        self.book
            .first_verse(Some(chapter.unwrap_or(self.chapter)), flags)
    }

    /// Last verse of `chapter` in this verse's book (this verse's chapter when `None`)
    pub fn last_verse(&self, chapter: Option<u32>) -> BibleRefResult<Verse> {
        self.book.last_verse(Some(chapter.unwrap_or(self.chapter)))
    }

    pub(crate) fn chapter_start(&self, flags: BibleFlags) -> Verse {
        Verse::from_valid(
            self.book,
            self.chapter,
            self.book.first_verse_num(self.chapter, flags),
        )
    }

    pub(crate) fn chapter_end(&self) -> Verse {
        Verse::from_valid(self.book, self.chapter, self.book.last_verse_num(self.chapter))
    }

    pub fn is_first_in_chap(&self, flags: BibleFlags) -> bool {
        *self == self.chapter_start(flags)
    }

    pub fn is_last_in_chap(&self) -> bool {
        *self == self.chapter_end()
    }

    pub fn is_first_in_book(&self, flags: BibleFlags) -> bool {
        *self == self.book.book_start(flags)
    }

    pub fn is_last_in_book(&self) -> bool {
        *self == self.book.book_end()
    }

    /// The whole chapter containing this verse
    pub fn chap_range(&self, flags: BibleFlags) -> Range {
        Range::spanning(self.chapter_start(flags), self.chapter_end())
    }

    /// The whole book containing this verse
    pub fn book_range(&self, flags: BibleFlags) -> Range {
        self.book.range(flags)
    }

    /// Verse 0 becomes verse 1; anything else is unchanged
    pub fn verse_0_to_1(self) -> Verse {
        if self.verse == 0 {
            Verse::from_valid(self.book, self.chapter, 1)
        } else {
            self
        }
    }

    /// Verse 1 becomes verse 0 where the chapter allows it, whatever the caller's flags
    pub fn verse_1_to_0(self) -> Verse {
        if self.verse == 1 && self.book.first_verse_num(self.chapter, BibleFlags::VERSE_0) == 0 {
            Verse::from_valid(self.book, self.chapter, 0)
        } else {
            self
        }
    }

    /// The verse `num_verses` after this one.
    ///
    /// Rolls over into later chapters, and into later books only with
    /// `BibleFlags::MULTIBOOK`. Returns `None` when the result would fall off the
    /// end of the book (without MULTIBOOK) or of the Bible. Starting from a verse 0
    /// turns VERSE_0 on for the call.
    pub fn add(self, num_verses: u32, flags: BibleFlags) -> Option<Verse> {
        let flags = self.honour_verse_zero(flags);
        let mut book = self.book;
        let mut chapter = self.chapter;
        let mut verse = i64::from(self.verse) + i64::from(num_verses);
        let mut max_verse = i64::from(book.last_verse_num(chapter));

        while verse > max_verse {
            if chapter == book.max_chap_num() {
                if !flags.multibook() {
                    return None;
                }
                book = book.next()?;
                chapter = book.min_chap_num();
            } else {
                chapter += 1;
            }
            verse = verse - max_verse + i64::from(book.first_verse_num(chapter, flags)) - 1;
            max_verse = i64::from(book.last_verse_num(chapter));
        }
        Some(Verse::from_valid(book, chapter, verse as u32))
    }

    /// The verse `num_verses` before this one; the mirror image of [`Verse::add`]
    pub fn subtract(self, num_verses: u32, flags: BibleFlags) -> Option<Verse> {
        let flags = self.honour_verse_zero(flags);
        let mut book = self.book;
        let mut chapter = self.chapter;
        let mut verse = i64::from(self.verse) - i64::from(num_verses);
        let mut min_verse = i64::from(book.first_verse_num(chapter, flags));

        while verse < min_verse {
            if chapter == book.min_chap_num() {
                if !flags.multibook() {
                    return None;
                }
                book = book.prev()?;
                chapter = book.max_chap_num();
            } else {
                chapter -= 1;
            }
            verse = verse + i64::from(book.last_verse_num(chapter)) - min_verse + 1;
            min_verse = i64::from(book.first_verse_num(chapter, flags));
        }
        Some(Verse::from_valid(book, chapter, verse as u32))
    }

    /// Signed distance in verses from `other` to `self`
    pub fn subtract_verse(&self, other: &Verse) -> i64 {
        let distance = Range::spanning(*self, *other).verse_count() as i64 - 1;
        if self < other {
            -distance
        } else {
            distance
        }
    }

    fn honour_verse_zero(&self, flags: BibleFlags) -> BibleFlags {
        if self.verse == 0 {
            flags | BibleFlags::VERSE_0
        } else {
            flags
        }
    }

    /// Render the parts of this verse selected by `parts`.
    ///
    /// Single-chapter books never show a chapter number, and the verse separator
    /// only appears between a displayed chapter and a displayed verse.
    pub fn render(&self, options: &RenderOptions, parts: VerseParts) -> String {
        let parts = if self.book.is_single_chapter() {
            parts.without(VerseParts::CHAP)
        } else {
            parts
        };

        let book_name = match (parts.contains(VerseParts::BOOK), options.abbreviated) {
            (false, _) => "",
            (true, true) => self.book.abbrev(),
            (true, false) => self.book.title(),
        };
        let chapter = if parts.contains(VerseParts::CHAP) {
            self.chapter.to_string()
        } else {
            String::new()
        };
        let verse = if parts.contains(VerseParts::VERSE) {
            self.verse.to_string()
        } else {
            String::new()
        };
        let separator = if parts.contains(VerseParts::CHAP_VERSE) {
            options.verse_separator().to_string()
        } else {
            String::new()
        };

        let text = format!("{} {}{}{}", book_name, chapter, separator, verse);
        if options.no_space {
            text.replace(' ', "")
        } else {
            text.trim().to_string()
        }
    }
}

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::default(), VerseParts::FULL_REF))
    }
}

impl FromStr for Verse {
    type Err = BibleRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verse::parse(s, BibleFlags::NONE)
    }
}

impl Sub for Verse {
    type Output = i64;

    fn sub(self, rhs: Verse) -> i64 {
        self.subtract_verse(&rhs)
    }
}
