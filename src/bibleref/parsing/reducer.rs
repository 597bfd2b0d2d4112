//! Reducer: parse tree to groups of ranges
//!
//! Bare numbers are ambiguous on their own. "Matt 2, 4" lists chapters, while
//! "Matt 2:1, 4" lists verses; the meaning depends on what came before. The
//! reducer walks the items left to right carrying a `ParseContext` that records
//! the book and chapter in force and whether numbers currently count verses.

use std::ops::Range as Span;

use super::grammar::{BibleRefNode, ListItem, Node, SingleRef};
use crate::bibleref::catalog::Book;
use crate::bibleref::error::{BibleRefError, BibleRefResult, ParsingError};
use crate::bibleref::flags::BibleFlags;
use crate::bibleref::range::{Range, RangeParts};
use crate::bibleref::verse::Verse;

/// State implied by earlier references in the same string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    pub current_book: Option<Book>,
    pub current_chapter: Option<u32>,
    /// When set, a bare number is a verse rather than a chapter
    pub at_verse_level: bool,
}

/// Fold parsed items into groups of ranges
pub fn reduce(items: &[ListItem], flags: BibleFlags) -> BibleRefResult<Vec<Vec<Range>>> {
    let mut ctx = ParseContext::default();
    let mut groups = Vec::new();
    let mut group = Vec::new();

    for item in items {
        match item {
            ListItem::MajorSep => {
                ctx.at_verse_level = false;
                if !group.is_empty() {
                    groups.push(std::mem::take(&mut group));
                }
            }
            ListItem::MinorSep => {}
            ListItem::Ref(node) => group.push(ctx.bible_ref(node, flags)?),
        }
    }
    if !group.is_empty() {
        groups.push(group);
    }
    Ok(groups)
}

impl ParseContext {
    fn bible_ref(&mut self, node: &BibleRefNode, flags: BibleFlags) -> BibleRefResult<Range> {
        match node {
            BibleRefNode::Single(single) => self.single_ref(single, flags),
            BibleRefNode::Dual(first, second) => {
                let first = self.single_ref(first, flags)?;
                let second = self.single_ref(second, flags)?;
                // "Matt 7-5" runs from the start of 5 to the end of 7
                let (start, end) = if second.end() < first.start() {
                    (second.start(), first.end())
                } else {
                    (first.start(), second.end())
                };
                let parts = RangeParts {
                    start_book: start.book(),
                    start_chapter: Some(start.chapter()),
                    start_verse: Some(start.verse()),
                    end_book: Some(end.book()),
                    end_chapter: Some(end.chapter()),
                    end_verse: Some(end.verse()),
                };
                Range::from_parts(parts, flags).map_err(|err| wrap(err, node.span()))
            }
        }
    }

    fn single_ref(&mut self, node: &Node<SingleRef>, flags: BibleFlags) -> BibleRefResult<Range> {
        let span = node.span.clone();
        match &node.value {
            SingleRef::Book(name) => {
                let book = lookup(name)?;
                self.enter_book(book);
                Ok(book.range(flags))
            }
            SingleRef::BookNum(name, num) => {
                let book = lookup(name)?;
                self.enter_book(book);
                if book.is_single_chapter() {
                    // Jude 5 is a verse
                    let chapter = book.min_chap_num();
                    self.current_chapter = Some(chapter);
                    self.at_verse_level = true;
                    verse_range(book, chapter, *num, flags).map_err(|err| wrap(err, span))
                } else {
                    self.current_chapter = Some(*num);
                    book.chap_range(*num, flags).map_err(|err| wrap(err, span))
                }
            }
            SingleRef::BookChapVerse(name, chapter, verse) => {
                let book = lookup(name)?;
                self.enter_book(book);
                self.current_chapter = Some(*chapter);
                self.at_verse_level = true;
                verse_range(book, *chapter, *verse, flags).map_err(|err| wrap(err, span))
            }
            SingleRef::ChapVerse(chapter, verse) => {
                let book = self.require_book(&span)?;
                self.current_chapter = Some(*chapter);
                self.at_verse_level = true;
                verse_range(book, *chapter, *verse, flags).map_err(|err| wrap(err, span))
            }
            SingleRef::Num(num) => {
                let book = self.require_book(&span)?;
                if book.is_single_chapter() {
                    let chapter = book.min_chap_num();
                    self.current_chapter = Some(chapter);
                    verse_range(book, chapter, *num, flags).map_err(|err| wrap(err, span))
                } else if self.at_verse_level {
                    let chapter = self.current_chapter.ok_or_else(|| {
                        ParsingError::new("No chapter specified", span.start, span.end)
                    })?;
                    verse_range(book, chapter, *num, flags).map_err(|err| wrap(err, span))
                } else {
                    self.current_chapter = Some(*num);
                    book.chap_range(*num, flags).map_err(|err| wrap(err, span))
                }
            }
        }
    }

    fn enter_book(&mut self, book: Book) {
        self.current_book = Some(book);
        self.current_chapter = None;
        self.at_verse_level = false;
    }

    fn require_book(&self, span: &Span<usize>) -> Result<Book, ParsingError> {
        self.current_book
            .ok_or_else(|| ParsingError::new("No book specified", span.start, span.end))
    }
}

fn lookup(name: &Node<String>) -> Result<Book, ParsingError> {
    Book::from_name(&name.value).ok_or_else(|| {
        ParsingError::new(
            format!("{} is not a valid book name", name.value),
            name.span.start,
            name.span.end,
        )
    })
}

fn verse_range(book: Book, chapter: u32, verse: u32, flags: BibleFlags) -> BibleRefResult<Range> {
    Verse::new(book, chapter, verse, flags).map(Range::single)
}

/// Attach a node span to an error raised while building its reference
fn wrap(err: BibleRefError, span: Span<usize>) -> BibleRefError {
    match err {
        BibleRefError::Parsing(_) => err,
        other => ParsingError::wrap(other, span.start, span.end).into(),
    }
}
