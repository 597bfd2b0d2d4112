//! End-to-end scenarios through the public API: parsing, arithmetic, splitting
//! and the set algebra on realistic reference strings.

use bibleref::{
    BibleFlags, BibleRefError, Book, Range, RangeList, RangeParts, Separators, SplitOptions, Verse,
};
use rstest::rstest;
use std::num::NonZeroU32;

const FLAGS: BibleFlags = BibleFlags::NONE;

fn verse(text: &str) -> Verse {
    Verse::parse(text, FLAGS).unwrap()
}

fn range(text: &str) -> Range {
    Range::parse(text, FLAGS).unwrap()
}

fn list(text: &str) -> RangeList {
    RangeList::parse(text, FLAGS).unwrap()
}

#[test]
fn test_groups_follow_major_separators() {
    let parsed = list("Matthew; Mark 2; Jude 5; 8");
    assert_eq!(
        parsed.to_nested_vecs(),
        vec![
            vec![range("Matt 1:1-28:20")],
            vec![range("Mark 2:1-28")],
            vec![Range::from(verse("Jude 5"))],
            vec![Range::from(verse("Jude 1:8"))],
        ]
    );
}

#[test]
fn test_bare_numbers_continue_verse_lists() {
    let parsed = list("Rom 3:20-22, 24, 4:2-5:2, 10");
    assert_eq!(parsed.group_count(), 1);
    let ranges: Vec<Range> = parsed.iter().copied().collect();
    assert_eq!(
        ranges,
        vec![
            range("Rom 3:20-22"),
            range("Rom 3:24"),
            range("Rom 4:2-5:2"),
            range("Rom 5:10"),
        ]
    );
}

#[test]
fn test_split_by_chapter_and_size() {
    let options = SplitOptions {
        by_chap: true,
        num_verses: NonZeroU32::new(15),
        ..SplitOptions::default()
    };
    let pieces = range("1 John").split(options, FLAGS);
    let ranges: Vec<Range> = pieces.iter().copied().collect();
    assert_eq!(ranges[0], range("1 John 1"));
    assert_eq!(ranges[1], range("1 John 2:1-15"));
    assert_eq!(ranges[2], range("1 John 2:16-29"));
    assert_eq!(pieces.verse_count(), range("1 John").verse_count());
}

#[test]
fn test_verse_arithmetic() {
    assert_eq!(verse("Mark 2:23").add(10, FLAGS), Some(verse("Mark 3:5")));
    assert_eq!(verse("Mark 3:5").subtract(10, FLAGS), Some(verse("Mark 2:23")));
    assert_eq!(verse("Mark 3:5") - verse("Mark 2:23"), 10);
    assert_eq!(verse("Rev 22:21").add(1, BibleFlags::MULTIBOOK), None);
    assert_eq!(verse("Matt 28:20").add(1, FLAGS), None);
    assert_eq!(verse("Matt 28:20").add(1, BibleFlags::MULTIBOOK), Some(verse("Mark 1:1")));
}

#[test]
fn test_union_and_intersection() {
    let a = list("Matt 2-4; Mark 6-8; Luke 10-12; John 14-16");
    let b = list("John 1-3; Luke 9; Matt 3-5; Mark 12");
    assert!(a.union(&b, FLAGS).contains(range("Matt 2-5"), FLAGS));
    assert_eq!(a.intersection(&b, FLAGS), list("Matt 3-4"));
}

#[test]
fn test_unknown_book_span() {
    let err = RangeList::parse("Xyz 2:3", FLAGS).unwrap_err();
    let parsing = err.as_parsing().unwrap();
    assert_eq!(parsing.message, "Xyz is not a valid book name");
    assert_eq!((parsing.start, parsing.end), (0, 3));
}

#[test]
fn test_custom_separators_match_default_parse() {
    let separators = Separators::new('_', '|', '/', ',', '*').unwrap();
    let custom = RangeList::parse_with("Mark 3,1_4,2| 5,6_8/ 10| Matt 4", &separators, FLAGS).unwrap();
    assert_eq!(custom, list("Mark 3:1-4:2; 5:6-8, 10; Matt 4"));

    // The default set still works afterwards
    assert_eq!(list("Mark 3:1-4:2").len(), 1);
}

#[rstest]
#[case('-', ';', ';', ':', '.')]
#[case('a', ';', ',', ':', '.')]
#[case('-', ' ', ',', ':', '.')]
#[case('-', ';', ',', '1', '.')]
fn test_invalid_separators(
    #[case] range: char,
    #[case] major: char,
    #[case] minor: char,
    #[case] verse: char,
    #[case] alt: char,
) {
    assert!(matches!(
        Separators::new(range, major, minor, verse, alt),
        Err(BibleRefError::InvalidArgument(_))
    ));
}

#[rstest]
#[case("Matt 29")]
#[case("Matt 2:30")]
#[case("Matt 2:3-Mark 1")]
#[case("Ps 3:0")]
fn test_invalid_references_are_parsing_errors(#[case] text: &str) {
    let err = RangeList::parse(text, FLAGS).unwrap_err();
    let parsing = err.as_parsing().unwrap();
    assert!(parsing.cause.is_some(), "{:?} should carry a cause", err);
    assert!(std::error::Error::source(parsing).is_some());
}

#[test]
fn test_flags_unlock_references() {
    assert!(RangeList::parse("Matt 2:3-Mark 1", BibleFlags::MULTIBOOK).is_ok());
    assert_eq!(
        Verse::parse("Ps 3:0", BibleFlags::VERSE_0).unwrap(),
        Verse::new(Book::Psa, 3, 0, BibleFlags::VERSE_0).unwrap()
    );
}

#[test]
fn test_range_from_parts() {
    let mut parts = RangeParts::new(Book::Matt);
    parts.start_chapter = Some(2);
    parts.end_verse = Some(5);
    assert_eq!(Range::from_parts(parts, FLAGS).unwrap(), range("Matt 2:1-5"));

    let mut parts = RangeParts::new(Book::Gen);
    parts.end_book = Some(Book::Exod);
    assert!(Range::from_parts(parts, FLAGS).is_err());
    assert_eq!(
        Range::from_parts(parts, BibleFlags::MULTIBOOK).unwrap().book_count(true),
        2
    );
}

#[test]
fn test_serialized_shape() {
    let value = serde_json::to_value(list("Matt 2:3-5; Jude 4")).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            [{
                "start": { "book": "Matt", "chapter": 2, "verse": 3 },
                "end": { "book": "Matt", "chapter": 2, "verse": 5 }
            }],
            [{
                "start": { "book": "Jude", "chapter": 1, "verse": 4 },
                "end": { "book": "Jude", "chapter": 1, "verse": 4 }
            }]
        ])
    );
}
