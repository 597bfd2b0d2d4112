//! Book catalog
//!
//! The 66 books of the Protestant canon, each carrying its chapter/verse table
//! and a name matcher. `Book` is a plain fieldless enum whose discriminant is the
//! canonical order; every per-book attribute is a lookup into `data::BOOK_DATA`
//! by that index.
//!
//! Name matching
//!
//!     Each book gets one case-insensitive regex, compiled once on first use.
//!     The main alternative is derived from the full title: a leading "1 ", "2 " or
//!     "3 " also accepts roman numerals, the first `min_unique_chars` letters are
//!     mandatory and every later letter is optional but must be correct
//!     ("J(o(h(n)?)?)?"). Extra abbreviations from the table are added as further
//!     alternatives, with flexible spacing.

mod data;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use self::data::{BookData, BOOK_DATA};
use super::error::{BibleRefError, BibleRefResult};
use super::flags::BibleFlags;
use super::range::{Range, SplitOptions};
use super::range_list::RangeList;
use super::verse::Verse;

/// A book of the Bible, ordered canonically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Book {
    Gen,
    Exod,
    Lev,
    Num,
    Deut,
    Josh,
    Judg,
    Ruth,
    ISam,
    IISam,
    IKgs,
    IIKgs,
    IChr,
    IIChr,
    Ezra,
    Neh,
    Esth,
    Job,
    Psa,
    Prov,
    Eccl,
    Song,
    Isa,
    Jer,
    Lam,
    Ezek,
    Dan,
    Hos,
    Joel,
    Amos,
    Obad,
    Jonah,
    Mic,
    Nah,
    Hab,
    Zeph,
    Hag,
    Zech,
    Mal,
    Matt,
    Mark,
    Luke,
    John,
    Acts,
    Rom,
    ICor,
    IICor,
    Gal,
    Eph,
    Phil,
    Col,
    ITh,
    IITh,
    ITim,
    IITim,
    Titus,
    Phlm,
    Heb,
    Jam,
    IPet,
    IIPet,
    IJn,
    IIJn,
    IIIJn,
    Jude,
    Rev,
}

static NAME_MATCHERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    BOOK_DATA
        .iter()
        .map(|data| Regex::new(&name_pattern(data)).expect("book table yields valid patterns"))
        .collect()
});

/// Build the full-match pattern for one book's acceptable names
fn name_pattern(data: &BookData) -> String {
    const NUMERAL_PREFIXES: [(&str, &str); 3] = [
        ("1 ", r"(?:1\s*|I\s+)"),
        ("2 ", r"(?:2\s*|II\s+)"),
        ("3 ", r"(?:3\s*|III\s+)"),
    ];

    let mut title = data.title;
    let mut main = String::new();
    for (prefix, alternatives) in NUMERAL_PREFIXES {
        if let Some(rest) = title.strip_prefix(prefix) {
            main.push_str(alternatives);
            title = rest;
            break;
        }
    }

    let title_pattern = |c: char| {
        if c == ' ' {
            r"\s+".to_string()
        } else {
            regex::escape(&c.to_string())
        }
    };

    let chars: Vec<char> = title.chars().collect();
    let required = data.min_unique_chars.min(chars.len());
    for &c in &chars[..required] {
        main.push_str(&title_pattern(c));
    }
    for &c in &chars[required..] {
        main.push_str("(?:");
        main.push_str(&title_pattern(c));
    }
    main.push_str(&")?".repeat(chars.len() - required));

    let mut alternatives = vec![main];
    for abbrev in data.extra_abbrevs {
        let pieces: Vec<String> = abbrev.split(' ').map(regex::escape).collect();
        alternatives.push(pieces.join(r"\s*"));
    }
    format!("(?i)^(?:{})$", alternatives.join("|"))
}

impl Book {
    /// All books in canonical order
    pub const ALL: [Book; 66] = [
        Book::Gen,
        Book::Exod,
        Book::Lev,
        Book::Num,
        Book::Deut,
        Book::Josh,
        Book::Judg,
        Book::Ruth,
        Book::ISam,
        Book::IISam,
        Book::IKgs,
        Book::IIKgs,
        Book::IChr,
        Book::IIChr,
        Book::Ezra,
        Book::Neh,
        Book::Esth,
        Book::Job,
        Book::Psa,
        Book::Prov,
        Book::Eccl,
        Book::Song,
        Book::Isa,
        Book::Jer,
        Book::Lam,
        Book::Ezek,
        Book::Dan,
        Book::Hos,
        Book::Joel,
        Book::Amos,
        Book::Obad,
        Book::Jonah,
        Book::Mic,
        Book::Nah,
        Book::Hab,
        Book::Zeph,
        Book::Hag,
        Book::Zech,
        Book::Mal,
        Book::Matt,
        Book::Mark,
        Book::Luke,
        Book::John,
        Book::Acts,
        Book::Rom,
        Book::ICor,
        Book::IICor,
        Book::Gal,
        Book::Eph,
        Book::Phil,
        Book::Col,
        Book::ITh,
        Book::IITh,
        Book::ITim,
        Book::IITim,
        Book::Titus,
        Book::Phlm,
        Book::Heb,
        Book::Jam,
        Book::IPet,
        Book::IIPet,
        Book::IJn,
        Book::IIJn,
        Book::IIIJn,
        Book::Jude,
        Book::Rev,
    ];

    pub fn iter() -> impl Iterator<Item = Book> {
        Self::ALL.into_iter()
    }

    /// Look up a book by any accepted spelling (surrounding whitespace ignored)
    pub fn from_name(name: &str) -> Option<Book> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .zip(NAME_MATCHERS.iter())
            .find(|(_, matcher)| matcher.is_match(name))
            .map(|(book, _)| book)
    }

    fn data(self) -> &'static BookData {
        &BOOK_DATA[self.order()]
    }

    /// Position in the canonical ordering, 0-based
    pub fn order(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        self.data().title
    }

    pub fn abbrev(self) -> &'static str {
        self.data().abbrev
    }

    pub fn chap_count(self) -> u32 {
        self.max_chap_num() - self.min_chap_num() + 1
    }

    pub fn min_chap_num(self) -> u32 {
        1
    }

    pub fn max_chap_num(self) -> u32 {
        self.data().max_verses.len() as u32
    }

    pub fn has_chapter(self, chapter: u32) -> bool {
        chapter >= self.min_chap_num() && chapter <= self.max_chap_num()
    }

    pub fn is_single_chapter(self) -> bool {
        self.chap_count() == 1
    }

    /// Chapters that may begin at verse 0 when `BibleFlags::VERSE_0` is set
    pub fn verse_zero_chapters(self) -> &'static [u32] {
        self.data().verse_zero_chapters
    }

    /// Lowest verse number (0 or 1) of `chapter`, or `None` if there is no such chapter
    pub fn min_verse_num(self, chapter: u32, flags: BibleFlags) -> Option<u32> {
        if !self.has_chapter(chapter) {
            return None;
        }
        Some(self.first_verse_num(chapter, flags))
    }

    /// Highest verse number of `chapter`, or `None` if there is no such chapter
    pub fn max_verse_num(self, chapter: u32) -> Option<u32> {
        if !self.has_chapter(chapter) {
            return None;
        }
        Some(self.last_verse_num(chapter))
    }

    // The two helpers below take a chapter already known to exist.

    pub(crate) fn first_verse_num(self, chapter: u32, flags: BibleFlags) -> u32 {
        if flags.verse_zero() && self.verse_zero_chapters().contains(&chapter) {
            0
        } else {
            1
        }
    }

    pub(crate) fn last_verse_num(self, chapter: u32) -> u32 {
        self.data().max_verses[(chapter - self.min_chap_num()) as usize]
    }

    fn checked_chapter(self, chapter: Option<u32>, default: u32) -> BibleRefResult<u32> {
        let chapter = chapter.unwrap_or(default);
        if self.has_chapter(chapter) {
            Ok(chapter)
        } else {
            Err(BibleRefError::invalid_reference(format!(
                "No chapter {} in {}",
                chapter,
                self.title()
            )))
        }
    }

    /// First verse of `chapter`, or of the whole book when `chapter` is `None`
    pub fn first_verse(self, chapter: Option<u32>, flags: BibleFlags) -> BibleRefResult<Verse> {
        let chapter = self.checked_chapter(chapter, self.min_chap_num())?;
        Ok(Verse::from_valid(
            self,
            chapter,
            self.first_verse_num(chapter, flags),
        ))
    }

    /// Last verse of `chapter`, or of the whole book when `chapter` is `None`
    pub fn last_verse(self, chapter: Option<u32>) -> BibleRefResult<Verse> {
        let chapter = self.checked_chapter(chapter, self.max_chap_num())?;
        Ok(Verse::from_valid(self, chapter, self.last_verse_num(chapter)))
    }

    pub(crate) fn book_start(self, flags: BibleFlags) -> Verse {
        let chapter = self.min_chap_num();
        Verse::from_valid(self, chapter, self.first_verse_num(chapter, flags))
    }

    pub(crate) fn book_end(self) -> Verse {
        let chapter = self.max_chap_num();
        Verse::from_valid(self, chapter, self.last_verse_num(chapter))
    }

    pub fn verse_count(self, flags: BibleFlags) -> usize {
        (self.min_chap_num()..=self.max_chap_num())
            .map(|chapter| {
                (self.last_verse_num(chapter) - self.first_verse_num(chapter, flags) + 1) as usize
            })
            .sum()
    }

    /// Next book in canonical order
    pub fn next(self) -> Option<Book> {
        Self::ALL.get(self.order() + 1).copied()
    }

    /// Previous book in canonical order
    pub fn prev(self) -> Option<Book> {
        self.order()
            .checked_sub(1)
            .and_then(|order| Self::ALL.get(order).copied())
    }

    /// The whole book as a range
    pub fn range(self, flags: BibleFlags) -> Range {
        Range::spanning(self.book_start(flags), self.book_end())
    }

    /// One whole chapter as a range
    pub fn chap_range(self, chapter: u32, flags: BibleFlags) -> BibleRefResult<Range> {
        Ok(Range::spanning(
            self.first_verse(Some(chapter), flags)?,
            self.last_verse(Some(chapter))?,
        ))
    }

    /// One range per chapter of the book
    pub fn chap_ranges(self, regroup: bool, flags: BibleFlags) -> RangeList {
        let options = SplitOptions {
            by_chap: true,
            regroup,
            ..SplitOptions::default()
        };
        self.range(flags).split(options, flags)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Book {
    type Err = BibleRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Book::from_name(s).ok_or_else(|| {
            BibleRefError::invalid_reference(format!("No book found for string '{}'", s.trim()))
        })
    }
}

impl Serialize for Book {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.abbrev())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_order_is_dense_and_canonical() {
        for (i, book) in Book::iter().enumerate() {
            assert_eq!(book.order(), i);
        }
        assert_eq!(Book::ALL.len(), 66);
        assert!(Book::Gen < Book::Matt);
        assert_eq!(Book::Gen.prev(), None);
        assert_eq!(Book::Rev.next(), None);
        assert_eq!(Book::Mal.next(), Some(Book::Matt));
    }

    #[rstest]
    #[case("Gen", Book::Gen)]
    #[case("Mt", Book::Matt)]
    #[case("Rev", Book::Rev)]
    #[case("genesis", Book::Gen)]
    #[case("  Matthew ", Book::Matt)]
    #[case("1 John", Book::IJn)]
    #[case("1John", Book::IJn)]
    #[case("I John", Book::IJn)]
    #[case("1 Jn", Book::IJn)]
    #[case("III John", Book::IIIJn)]
    #[case("Phil", Book::Phil)]
    #[case("Phlm", Book::Phlm)]
    #[case("Phile", Book::Phlm)]
    #[case("Song of Solomon", Book::Song)]
    #[case("Song  of   Songs", Book::Song)]
    #[case("SOS", Book::Song)]
    #[case("The Revelation to John", Book::Rev)]
    #[case("Ps", Book::Psa)]
    #[case("Jona", Book::Jonah)]
    fn test_from_name(#[case] name: &str, #[case] expected: Book) {
        assert_eq!(Book::from_name(name), Some(expected));
    }

    #[rstest]
    #[case("Xyz")]
    #[case("J")]
    #[case("Mattthew")]
    #[case("Matthew 5")]
    #[case("")]
    fn test_from_name_rejects(#[case] name: &str) {
        assert_eq!(Book::from_name(name), None);
    }

    #[test]
    fn test_every_abbreviation_and_title_resolves_to_itself() {
        for book in Book::iter() {
            assert_eq!(Book::from_name(book.abbrev()), Some(book), "{}", book.abbrev());
            assert_eq!(Book::from_name(book.title()), Some(book), "{}", book.title());
        }
    }

    #[test]
    fn test_from_str_error() {
        let err = "Xyz".parse::<Book>().unwrap_err();
        assert_eq!(err, BibleRefError::invalid_reference("No book found for string 'Xyz'"));
    }

    #[test]
    fn test_chapter_and_verse_bounds() {
        assert_eq!(Book::Matt.chap_count(), 28);
        assert_eq!(Book::Jude.chap_count(), 1);
        assert!(Book::Jude.is_single_chapter());
        assert_eq!(Book::Mark.max_verse_num(2), Some(28));
        assert_eq!(Book::Mark.max_verse_num(17), None);
        assert_eq!(Book::Psa.min_verse_num(3, BibleFlags::NONE), Some(1));
        assert_eq!(Book::Psa.min_verse_num(3, BibleFlags::VERSE_0), Some(0));
        assert_eq!(Book::Psa.min_verse_num(1, BibleFlags::VERSE_0), Some(1));
        assert_eq!(Book::Psa.min_verse_num(0, BibleFlags::VERSE_0), None);
    }

    #[test]
    fn test_verse_counts() {
        assert_eq!(Book::Phil.verse_count(BibleFlags::NONE), 104);
        assert_eq!(Book::IJn.verse_count(BibleFlags::NONE), 105);
        // Psalm 3 gains a verse 0 when the mode is on
        assert!(Book::Psa.verse_count(BibleFlags::VERSE_0) > Book::Psa.verse_count(BibleFlags::NONE));
    }

    #[test]
    fn test_first_and_last_verse() {
        let first = Book::Matt.first_verse(None, BibleFlags::NONE).unwrap();
        assert_eq!((first.chapter(), first.verse()), (1, 1));
        let last = Book::Matt.last_verse(None).unwrap();
        assert_eq!((last.chapter(), last.verse()), (28, 20));
        let err = Book::Matt.first_verse(Some(29), BibleFlags::NONE).unwrap_err();
        assert_eq!(err.message(), "No chapter 29 in Matthew");
    }

    #[test]
    fn test_book_ranges() {
        let range = Book::Matt.range(BibleFlags::NONE);
        assert_eq!(range.to_string(), "Matthew");
        let chap = Book::Matt.chap_range(2, BibleFlags::NONE).unwrap();
        assert_eq!(chap.to_string(), "Matthew 2");
        assert_eq!(chap.end().verse(), 23);
    }

    #[test]
    fn test_chap_ranges() {
        let grouped = Book::Mark.chap_ranges(true, BibleFlags::NONE);
        assert_eq!(grouped.len(), 16);
        assert_eq!(grouped.groups().len(), 16);

        let flat = Book::Mark.chap_ranges(false, BibleFlags::NONE);
        assert_eq!(flat.len(), 16);
        assert_eq!(flat.groups().len(), 1);
        assert_eq!(
            flat.to_string(),
            "Mark 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16"
        );
    }
}
