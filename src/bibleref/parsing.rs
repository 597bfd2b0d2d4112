//! Parser
//!
//! Text goes through three stages:
//! 1. `lexing::tokenize` produces classified tokens with character spans
//! 2. `grammar::ref_list` checks the token shapes and builds a flat parse tree
//! 3. `reducer::reduce` resolves each reference against the context left by
//!    the ones before it, producing groups of ranges

mod cache;
pub mod grammar;
pub mod reducer;

use chumsky::prelude::*;
use tracing::debug;

use super::error::{BibleRefResult, ParsingError};
use super::flags::BibleFlags;
use super::lexing::{tokenize, Spanned};
use super::range::Range;
use super::settings::Separators;

pub use reducer::ParseContext;

/// Parse `text` into groups of ranges, using `separators` for the symbols
pub fn parse_groups(
    text: &str,
    separators: &Separators,
    flags: BibleFlags,
) -> BibleRefResult<Vec<Vec<Range>>> {
    debug!(len = text.len(), "parsing reference text");
    let table = cache::symbol_table(separators);
    let tokens = tokenize(text, &table)?;
    let items = grammar::ref_list()
        .parse(tokens)
        .map_err(|errors| syntax_error(text, errors))?;
    let groups = reducer::reduce(&items, flags).map_err(|err| {
        if let Some(parsing) = err.as_parsing() {
            debug!(
                message = %parsing.message,
                start = parsing.start,
                end = parsing.end,
                "reference could not be resolved"
            );
        }
        err
    })?;
    debug!(groups = groups.len(), "parsed reference text");
    Ok(groups)
}

/// Convert the first grammar error into a positioned parsing error
fn syntax_error(text: &str, errors: Vec<Simple<Spanned>>) -> ParsingError {
    let found = errors
        .into_iter()
        .next()
        .and_then(|err| err.found().map(|(_, span)| span.start));
    match found {
        Some(start) => {
            let unexpected: String = text.chars().skip(start).take(1).collect();
            ParsingError::new(format!("Unexpected text: {}", unexpected), start, start + 1)
        }
        None => {
            let end = text.chars().count();
            ParsingError::new("Unexpected end of text", end, end)
        }
    }
}
