//! Token definitions for reference strings
//!
//! `RawToken` is what logos produces: words, numbers, whitespace and single
//! symbols. Separators are configurable, so logos cannot know them; symbols are
//! classified afterwards into the grammar-level `Token`.
use logos::Logos;

/// Raw tokens, before separator classification and book-name merging
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    #[regex(r"[0-9]+")]
    Number,

    // Letters only, so "Matt2" splits into a name and a chapter
    #[regex(r"[\p{L}\p{M}]+")]
    Word,

    #[regex(r"\s+")]
    Whitespace,

    // Anything else, one character at a time
    #[regex(r"[^\p{L}\p{M}0-9\s]")]
    Symbol,
}

/// Tokens seen by the grammar
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Token {
    /// A run of words (and numbers before them) naming a book, e.g. "1 John"
    BookName(String),
    Number(u32),
    RangeSep,
    MajorListSep,
    MinorListSep,
    /// Either the standard or the alternate verse separator
    VerseSep,
}

impl Token {
    pub fn is_list_sep(&self) -> bool {
        matches!(self, Token::MajorListSep | Token::MinorListSep)
    }
}
