//! Main module for bibleref library functionality

pub mod catalog;
pub mod error;
pub mod flags;
pub mod grouped;
pub mod lexing;
pub mod parsing;
pub mod range;
pub mod range_list;
pub mod reference;
pub mod settings;
pub mod verse;

pub use catalog::Book;
pub use error::{BibleRefError, BibleRefResult, ParsingError};
pub use flags::{BibleFlags, VerseParts};
pub use grouped::{Group, GroupedList, Groups};
pub use range::{Range, RangeParts, SplitOptions};
pub use range_list::RangeList;
pub use reference::BibleRef;
pub use settings::{RenderOptions, Separators};
pub use verse::Verse;
