//! Separator characters and rendering options
//!
//! `Separators` is the single piece of configuration the grammar depends on.
//! It is a plain value: the parser caches whatever it compiled for the last set
//! it saw and rebuilds when a different set arrives.

use serde::Serialize;

use super::error::{BibleRefError, BibleRefResult};
use super::flags::BibleFlags;

/// The punctuation used between reference components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Separators {
    range: char,
    major_list: char,
    minor_list: char,
    verse: char,
    verse_alt: char,
}

impl Separators {
    pub const DEFAULT: Separators = Separators {
        range: '-',
        major_list: ';',
        minor_list: ',',
        verse: ':',
        verse_alt: '.',
    };

    /// Validate and build a separator set.
    ///
    /// All five must be distinct, and none may be alphanumeric or whitespace,
    /// since those characters belong to book names and numbers.
    pub fn new(
        range: char,
        major_list: char,
        minor_list: char,
        verse: char,
        verse_alt: char,
    ) -> BibleRefResult<Self> {
        let all = [range, major_list, minor_list, verse, verse_alt];
        for (i, c) in all.iter().enumerate() {
            if c.is_alphanumeric() || c.is_whitespace() {
                return Err(BibleRefError::invalid_argument(format!(
                    "'{}' cannot be used as a separator",
                    c
                )));
            }
            if all[..i].contains(c) {
                return Err(BibleRefError::invalid_argument(format!(
                    "'{}' is used for more than one separator",
                    c
                )));
            }
        }
        Ok(Self {
            range,
            major_list,
            minor_list,
            verse,
            verse_alt,
        })
    }

    /// Build from single-character strings, as read from configuration
    pub fn from_strs(
        range: &str,
        major_list: &str,
        minor_list: &str,
        verse: &str,
        verse_alt: &str,
    ) -> BibleRefResult<Self> {
        fn single(name: &str, value: &str) -> BibleRefResult<char> {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(BibleRefError::invalid_argument(format!(
                    "{} separator must be a single character, got {:?}",
                    name, value
                ))),
            }
        }
        Self::new(
            single("range", range)?,
            single("major list", major_list)?,
            single("minor list", minor_list)?,
            single("verse", verse)?,
            single("alternate verse", verse_alt)?,
        )
    }

    pub fn range(&self) -> char {
        self.range
    }

    pub fn major_list(&self) -> char {
        self.major_list
    }

    pub fn minor_list(&self) -> char {
        self.minor_list
    }

    pub fn verse(&self) -> char {
        self.verse
    }

    pub fn verse_alt(&self) -> char {
        self.verse_alt
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Knobs for turning verses, ranges and lists back into text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Use book abbreviations instead of full titles
    pub abbreviated: bool,
    /// Use the alternate verse separator
    pub alt_separator: bool,
    /// Strip every space from the output
    pub no_space: bool,
    /// Use the major list separator exactly at group boundaries
    pub preserve_groups: bool,
    /// Spell out the start verse whenever the end verse is shown
    pub force_start_verses: bool,
    pub flags: BibleFlags,
    pub separators: Separators,
}

impl RenderOptions {
    pub fn abbreviated() -> Self {
        Self {
            abbreviated: true,
            ..Self::default()
        }
    }

    pub(crate) fn verse_separator(&self) -> char {
        if self.alt_separator {
            self.separators.verse_alt()
        } else {
            self.separators.verse()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            abbreviated: false,
            alt_separator: false,
            no_space: false,
            preserve_groups: true,
            force_start_verses: false,
            flags: BibleFlags::NONE,
            separators: Separators::DEFAULT,
        }
    }
}
