//! Mode flags and verse part masks
//!
//! Both types are small copyable bit sets. `BibleFlags` switches on the two
//! optional validity modes (multi-book ranges, verse 0), and `VerseParts`
//! selects which components of a verse get printed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// Behaviour switches passed to every mode-dependent operation
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BibleFlags(u8);

impl BibleFlags {
    pub const NONE: BibleFlags = BibleFlags(0);
    /// Ranges and verse arithmetic may cross book boundaries
    pub const MULTIBOOK: BibleFlags = BibleFlags(0b01);
    /// Eligible chapters (Psalm superscriptions) start at verse 0
    pub const VERSE_0: BibleFlags = BibleFlags(0b10);
    pub const ALL: BibleFlags = BibleFlags(0b11);

    pub fn contains(self, other: BibleFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn multibook(self) -> bool {
        self.contains(Self::MULTIBOOK)
    }

    pub fn verse_zero(self) -> bool {
        self.contains(Self::VERSE_0)
    }

    /// Build from the two booleans used in configuration files
    pub fn from_modes(multibook: bool, verse_zero: bool) -> Self {
        let mut flags = Self::NONE;
        if multibook {
            flags |= Self::MULTIBOOK;
        }
        if verse_zero {
            flags |= Self::VERSE_0;
        }
        flags
    }
}

impl BitOr for BibleFlags {
    type Output = BibleFlags;

    fn bitor(self, rhs: BibleFlags) -> BibleFlags {
        BibleFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for BibleFlags {
    fn bitor_assign(&mut self, rhs: BibleFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for BibleFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NONE => write!(f, "NONE"),
            Self::MULTIBOOK => write!(f, "MULTIBOOK"),
            Self::VERSE_0 => write!(f, "VERSE_0"),
            _ => write!(f, "MULTIBOOK | VERSE_0"),
        }
    }
}

/// Selects which of book, chapter and verse are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VerseParts(u8);

impl VerseParts {
    pub const NONE: VerseParts = VerseParts(0);
    pub const BOOK: VerseParts = VerseParts(0b001);
    pub const CHAP: VerseParts = VerseParts(0b010);
    pub const VERSE: VerseParts = VerseParts(0b100);
    pub const FULL_REF: VerseParts = VerseParts(0b111);
    pub const BOOK_CHAP: VerseParts = VerseParts(0b011);
    pub const BOOK_VERSE: VerseParts = VerseParts(0b101);
    pub const CHAP_VERSE: VerseParts = VerseParts(0b110);

    pub fn contains(self, other: VerseParts) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn without(self, other: VerseParts) -> VerseParts {
        self & !other
    }
}

impl BitOr for VerseParts {
    type Output = VerseParts;

    fn bitor(self, rhs: VerseParts) -> VerseParts {
        VerseParts(self.0 | rhs.0)
    }
}

impl BitOrAssign for VerseParts {
    fn bitor_assign(&mut self, rhs: VerseParts) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for VerseParts {
    type Output = VerseParts;

    fn bitand(self, rhs: VerseParts) -> VerseParts {
        VerseParts(self.0 & rhs.0)
    }
}

impl Not for VerseParts {
    type Output = VerseParts;

    fn not(self) -> VerseParts {
        VerseParts(!self.0 & Self::FULL_REF.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_containment() {
        assert!(BibleFlags::ALL.multibook());
        assert!(BibleFlags::ALL.verse_zero());
        assert!(!BibleFlags::NONE.multibook());
        assert!((BibleFlags::NONE | BibleFlags::VERSE_0).contains(BibleFlags::VERSE_0));
        assert_eq!(BibleFlags::from_modes(true, true), BibleFlags::ALL);
        assert_eq!(BibleFlags::from_modes(false, false), BibleFlags::NONE);
    }

    #[test]
    fn test_verse_parts_masks() {
        assert_eq!(VerseParts::FULL_REF.without(VerseParts::CHAP), VerseParts::BOOK_VERSE);
        assert_eq!(
            VerseParts::BOOK_CHAP.without(VerseParts::BOOK),
            VerseParts::CHAP
        );
        assert!(VerseParts::CHAP_VERSE.contains(VerseParts::VERSE));
        assert!(!VerseParts::BOOK_CHAP.contains(VerseParts::CHAP_VERSE));
    }
}
