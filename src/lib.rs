//! # bibleref
//!
//! Parsing, rendering and set algebra for Bible references.
//!
//! File Layout
//!
//! The crate keeps the reference model and the text pipeline side by side under
//! `src/bibleref`. The pipeline is split the usual way: a logos lexer, a chumsky
//! grammar that only knows about token shapes, and a reducer that carries the
//! book/chapter context a human reader carries when reading "Mark 3:1-4:2; 5:6-8, 10".
//!
//! src/bibleref
//!   ├── catalog      The 66 books and their chapter/verse tables
//!   ├── verse        Single verses and verse arithmetic
//!   ├── range        Contiguous verse ranges and pairwise set algebra
//!   ├── grouped      The grouped linked list backing range lists
//!   ├── range_list   Grouped lists of ranges, rendering and list set algebra
//!   ├── lexing       Tokens and separator classification
//!   └── parsing      Grammar, grammar cache and context reduction
//!
//! Quick start:
//!
//! ```text
//! let list: RangeList = "Mark 3:1-4:2; 5:6-8, 10; Matt 4".parse()?;
//! assert_eq!(list.groups().len(), 3);
//! assert_eq!(list.to_string(), "Mark 3-4:2; 5:6-8, 10; Matthew 4");
//! ```

pub mod bibleref;

pub use bibleref::{
    BibleFlags, BibleRef, BibleRefError, BibleRefResult, Book, Group, GroupedList, Groups,
    ParsingError, Range, RangeList, RangeParts, RenderOptions, Separators, SplitOptions, Verse,
    VerseParts,
};
