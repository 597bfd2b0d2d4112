//! Process-wide symbol table cache
//!
//! Building a `SymbolTable` is cheap but happens on every parse, and nearly every
//! parse uses the same separators. The last table built is kept and handed out
//! until a parse asks for different separators.

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::bibleref::lexing::SymbolTable;
use crate::bibleref::settings::Separators;

static SYMBOL_TABLE: Lazy<RwLock<Option<Arc<SymbolTable>>>> = Lazy::new(|| RwLock::new(None));

/// The symbol table for `separators`, rebuilding the cached one if needed
pub fn symbol_table(separators: &Separators) -> Arc<SymbolTable> {
    if let Ok(cached) = SYMBOL_TABLE.read() {
        if let Some(table) = cached.as_ref().filter(|t| t.separators() == separators) {
            return Arc::clone(table);
        }
    }

    let table = Arc::new(SymbolTable::new(separators));
    debug!(
        range = %separators.range(),
        major_list = %separators.major_list(),
        minor_list = %separators.minor_list(),
        verse = %separators.verse(),
        verse_alt = %separators.verse_alt(),
        "rebuilding reference grammar"
    );
    // A poisoned lock only costs the cache; the fresh table is still returned
    if let Ok(mut cached) = SYMBOL_TABLE.write() {
        *cached = Some(Arc::clone(&table));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_requested_separators() {
        let custom = Separators::new('_', '|', '/', '.', ':').unwrap();
        let table = symbol_table(&custom);
        assert_eq!(table.separators(), &custom);

        let table = symbol_table(&Separators::DEFAULT);
        assert_eq!(table.separators(), &Separators::DEFAULT);
    }

    #[test]
    fn test_same_separators_share_a_table() {
        // Other tests may swap the cache in between, so only compare contents
        let first = symbol_table(&Separators::DEFAULT);
        let second = symbol_table(&Separators::DEFAULT);
        assert_eq!(*first, *second);
    }
}
