//! Lexer
//!
//! Turns reference text into grammar tokens with character spans.
//!
//! The pipeline consists of:
//! 1. Raw tokenization with logos (./tokens.rs): words, numbers, whitespace, symbols
//! 2. Symbol classification against the active separators (`SymbolTable`)
//! 3. Book-name merging: each run of words, numbers and whitespace that ends in a
//!    word becomes one `BookName` token ("1 John", "Song of Songs"); numbers after
//!    the last word of a run stay numbers
//!
//! Whitespace is dropped. Spans are character offsets, not byte offsets, so error
//! positions can be used directly against the input string.

pub mod tokens;

use logos::Logos;
use std::collections::HashMap;
use std::ops::Range;
use tracing::trace;

use super::error::{BibleRefResult, ParsingError};
use super::settings::Separators;

pub use tokens::{RawToken, Token};

/// A token with its character span
pub type Spanned = (Token, Range<usize>);

/// Maps separator characters to the tokens they stand for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    separators: Separators,
    symbols: HashMap<char, Token>,
}

impl SymbolTable {
    pub fn new(separators: &Separators) -> Self {
        let symbols = HashMap::from([
            (separators.range(), Token::RangeSep),
            (separators.major_list(), Token::MajorListSep),
            (separators.minor_list(), Token::MinorListSep),
            (separators.verse(), Token::VerseSep),
            (separators.verse_alt(), Token::VerseSep),
        ]);
        Self {
            separators: *separators,
            symbols,
        }
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    pub fn classify(&self, symbol: char) -> Option<Token> {
        self.symbols.get(&symbol).cloned()
    }
}

/// Byte-to-character offset conversion for one source string
pub(crate) struct CharOffsets {
    boundaries: Vec<usize>,
}

impl CharOffsets {
    pub(crate) fn new(source: &str) -> Self {
        let mut boundaries: Vec<usize> = source.char_indices().map(|(i, _)| i).collect();
        boundaries.push(source.len());
        Self { boundaries }
    }

    pub(crate) fn char_offset(&self, byte: usize) -> usize {
        self.boundaries.partition_point(|&b| b < byte)
    }

    pub(crate) fn char_range(&self, bytes: &Range<usize>) -> Range<usize> {
        self.char_offset(bytes.start)..self.char_offset(bytes.end)
    }
}

/// Tokenize `source`, classifying symbols with `table`
pub fn tokenize(source: &str, table: &SymbolTable) -> BibleRefResult<Vec<Spanned>> {
    let offsets = CharOffsets::new(source);
    let mut tokens = Vec::new();
    let mut run: Vec<(RawToken, Range<usize>)> = Vec::new();

    let mut lexer = RawToken::lexer(source);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(RawToken::Whitespace) => {}
            Ok(raw @ (RawToken::Word | RawToken::Number)) => run.push((raw, span)),
            Ok(RawToken::Symbol) | Err(()) => {
                flush_run(source, &offsets, &mut run, &mut tokens)?;
                let symbol = lexer.slice();
                let token = symbol
                    .chars()
                    .next()
                    .and_then(|c| table.classify(c))
                    .ok_or_else(|| unexpected(symbol, offsets.char_range(&span)))?;
                tokens.push((token, offsets.char_range(&span)));
            }
        }
    }
    flush_run(source, &offsets, &mut run, &mut tokens)?;

    trace!(count = tokens.len(), "tokenized reference text");
    Ok(tokens)
}

/// Emit the pending run of words and numbers
fn flush_run(
    source: &str,
    offsets: &CharOffsets,
    run: &mut Vec<(RawToken, Range<usize>)>,
    tokens: &mut Vec<Spanned>,
) -> BibleRefResult<()> {
    let numbers_from = match run.iter().rposition(|(raw, _)| *raw == RawToken::Word) {
        Some(last_word) => {
            let bytes = run[0].1.start..run[last_word].1.end;
            let name = source[bytes.clone()].to_string();
            tokens.push((Token::BookName(name), offsets.char_range(&bytes)));
            last_word + 1
        }
        None => 0,
    };

    for (_, bytes) in run.drain(..).skip(numbers_from) {
        let digits = &source[bytes.clone()];
        let span = offsets.char_range(&bytes);
        let number = digits.parse::<u32>().map_err(|_| {
            ParsingError::new(format!("{} is not a valid number", digits), span.start, span.end)
        })?;
        tokens.push((Token::Number(number), span));
    }
    Ok(())
}

fn unexpected(text: &str, span: Range<usize>) -> ParsingError {
    ParsingError::new(format!("Unexpected text: {}", text), span.start, span.end)
}
