//! Reference grammar
//!
//! A chumsky grammar over classified tokens. It only knows token shapes; what a
//! bare number means is decided later by the reducer.
//!
//!     ref_list   := bible_ref (list_sep bible_ref)* list_sep?
//!     bible_ref  := single_ref | single_ref RANGE_SEP single_ref
//!     single_ref := BOOK | BOOK NUM | BOOK NUM VERSE_SEP NUM | NUM VERSE_SEP NUM | NUM

use chumsky::prelude::*;
use std::ops::Range;

use crate::bibleref::lexing::{Spanned, Token};

/// Type alias for parser error
type ParserError = Simple<Spanned>;

/// A parsed value with the character span it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub value: T,
    pub span: Range<usize>,
}

impl<T> Node<T> {
    fn new(value: T, span: Range<usize>) -> Self {
        Self { value, span }
    }
}

/// One side of a reference, before context is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingleRef {
    Book(Node<String>),
    BookNum(Node<String>, u32),
    BookChapVerse(Node<String>, u32, u32),
    ChapVerse(u32, u32),
    Num(u32),
}

/// A single reference, or two joined by the range separator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BibleRefNode {
    Single(Node<SingleRef>),
    Dual(Node<SingleRef>, Node<SingleRef>),
}

impl BibleRefNode {
    pub fn span(&self) -> Range<usize> {
        match self {
            BibleRefNode::Single(node) => node.span.clone(),
            BibleRefNode::Dual(first, second) => first.span.start..second.span.end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Ref(BibleRefNode),
    MajorSep,
    MinorSep,
}

/// Match a specific token, keeping its span
fn token(t: Token) -> impl Parser<Spanned, Range<usize>, Error = ParserError> + Clone {
    filter(move |(tok, _): &Spanned| *tok == t).map(|(_, span)| span)
}

fn number() -> impl Parser<Spanned, Node<u32>, Error = ParserError> + Clone {
    filter_map(|location, (tok, span): Spanned| match tok {
        Token::Number(n) => Ok(Node::new(n, span)),
        other => Err(ParserError::expected_input_found(
            location,
            None,
            Some((other, span)),
        )),
    })
}

fn book_name() -> impl Parser<Spanned, Node<String>, Error = ParserError> + Clone {
    filter_map(|location, (tok, span): Spanned| match tok {
        Token::BookName(name) => Ok(Node::new(name, span)),
        other => Err(ParserError::expected_input_found(
            location,
            None,
            Some((other, span)),
        )),
    })
}

fn list_sep() -> impl Parser<Spanned, ListItem, Error = ParserError> + Clone {
    filter(|(tok, _): &Spanned| tok.is_list_sep()).map(|(tok, _)| match tok {
        Token::MajorListSep => ListItem::MajorSep,
        _ => ListItem::MinorSep,
    })
}

fn single_ref() -> impl Parser<Spanned, Node<SingleRef>, Error = ParserError> + Clone {
    let verse_part = token(Token::VerseSep).ignore_then(number());

    let with_book = book_name()
        .then(number().then(verse_part.clone().or_not()).or_not())
        .map(|(name, rest)| match rest {
            None => {
                let span = name.span.clone();
                Node::new(SingleRef::Book(name), span)
            }
            Some((num, None)) => {
                let span = name.span.start..num.span.end;
                Node::new(SingleRef::BookNum(name, num.value), span)
            }
            Some((chapter, Some(verse))) => {
                let span = name.span.start..verse.span.end;
                Node::new(SingleRef::BookChapVerse(name, chapter.value, verse.value), span)
            }
        });

    let without_book = number()
        .then(verse_part.or_not())
        .map(|(num, verse)| match verse {
            None => Node::new(SingleRef::Num(num.value), num.span),
            Some(verse) => {
                let span = num.span.start..verse.span.end;
                Node::new(SingleRef::ChapVerse(num.value, verse.value), span)
            }
        });

    with_book.or(without_book)
}

fn bible_ref() -> impl Parser<Spanned, BibleRefNode, Error = ParserError> + Clone {
    single_ref()
        .then(token(Token::RangeSep).ignore_then(single_ref()).or_not())
        .map(|(first, second)| match second {
            None => BibleRefNode::Single(first),
            Some(second) => BibleRefNode::Dual(first, second),
        })
}

/// The whole input: references and the separators between them, in order
pub fn ref_list() -> impl Parser<Spanned, Vec<ListItem>, Error = ParserError> + Clone {
    bible_ref()
        .map(ListItem::Ref)
        .then(list_sep().then(bible_ref().map(ListItem::Ref)).repeated())
        .then(list_sep().or_not())
        .then_ignore(end())
        .map(|((first, rest), trailing)| {
            let mut items = vec![first];
            for (sep, item) in rest {
                items.push(sep);
                items.push(item);
            }
            items.extend(trailing);
            items
        })
}
