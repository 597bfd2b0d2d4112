//! Default book tables
//!
//! One row per book, in canonical order. The row index is the book's `order`,
//! so `BOOK_DATA[book as usize]` is always the row for `book`.

/// Static metadata for one book
pub(super) struct BookData {
    pub abbrev: &'static str,
    pub title: &'static str,
    /// Characters of the title (after any "1 "/"2 "/"3 " prefix) needed to identify the book
    pub min_unique_chars: usize,
    /// Extra accepted spellings, matched case-insensitively with flexible spacing
    pub extra_abbrevs: &'static [&'static str],
    /// Highest verse number of each chapter; the length is the chapter count
    pub max_verses: &'static [u32],
    pub verse_zero_chapters: &'static [u32],
}

const PSALM_VERSE_ZERO_CHAPTERS: &[u32] = &[
    3, 4, 5, 6, 7, 8, 9, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27,
    28, 29, 30, 31, 32, 34, 35, 36, 37, 38, 39, 40, 41, 42, 44, 45, 46, 47, 48, 49, 50, 51, 52,
    53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 72, 73, 74, 75, 76,
    77, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 92, 98, 100, 101, 102, 103, 108,
    109, 110, 120, 121, 122, 123, 124, 125, 126, 127, 128, 129, 130, 131, 132, 133, 134, 138,
    139, 140, 141, 142, 143, 144, 145,
];

pub(super) static BOOK_DATA: [BookData; 66] = [
    BookData {
        abbrev: "Gen",
        title: "Genesis",
        min_unique_chars: 2,
        extra_abbrevs: &["Gn"],
        max_verses: &[
            31, 25, 24, 26, 32, 22, 24, 22, 29, 32, 32, 20, 18, 24, 21, 16, 27, 33, 38, 18, 34,
            24, 20, 67, 34, 35, 46, 22, 35, 43, 55, 32, 20, 31, 29, 43, 36, 30, 23, 23, 57, 38,
            34, 34, 28, 34, 31, 22, 33, 26,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Exod",
        title: "Exodus",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[
            22, 25, 22, 31, 23, 30, 25, 32, 35, 29, 10, 51, 22, 31, 27, 36, 16, 27, 25, 26, 36,
            31, 33, 18, 40, 37, 21, 43, 46, 38, 18, 35, 23, 35, 35, 38, 29, 31, 43, 38,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Lev",
        title: "Leviticus",
        min_unique_chars: 2,
        extra_abbrevs: &["Lv"],
        max_verses: &[
            17, 16, 17, 35, 19, 30, 38, 36, 24, 20, 47, 8, 59, 57, 33, 34, 16, 30, 37, 27, 24,
            33, 44, 23, 55, 46, 34,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Num",
        title: "Numbers",
        min_unique_chars: 2,
        extra_abbrevs: &["Nm", "Nb"],
        max_verses: &[
            54, 34, 51, 49, 31, 27, 89, 26, 23, 36, 35, 16, 33, 45, 41, 50, 13, 32, 22, 29, 35,
            41, 30, 25, 18, 65, 23, 31, 40, 16, 54, 42, 56, 29, 34, 13,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Deut",
        title: "Deuteronomy",
        min_unique_chars: 2,
        extra_abbrevs: &["Dt"],
        max_verses: &[
            46, 37, 29, 49, 33, 25, 26, 20, 29, 22, 32, 32, 18, 29, 23, 22, 20, 22, 21, 20, 23,
            30, 25, 22, 19, 19, 26, 68, 29, 20, 30, 52, 29, 12,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Josh",
        title: "Joshua",
        min_unique_chars: 3,
        extra_abbrevs: &["Js", "Jsh"],
        max_verses: &[
            18, 24, 17, 24, 15, 27, 26, 35, 27, 43, 23, 24, 33, 15, 63, 10, 18, 28, 51, 9, 45,
            34, 16, 33,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Judg",
        title: "Judges",
        min_unique_chars: 4,
        extra_abbrevs: &["Jg", "Jdg", "Jdgs"],
        max_verses: &[
            36, 23, 31, 24, 31, 40, 25, 35, 57, 18, 40, 15, 25, 20, 20, 31, 13, 31, 30, 48, 25,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Ruth",
        title: "Ruth",
        min_unique_chars: 2,
        extra_abbrevs: &["Ruth"],
        max_verses: &[22, 23, 18, 22],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "1Sam",
        title: "1 Samuel",
        min_unique_chars: 1,
        extra_abbrevs: &["1 Sm"],
        max_verses: &[
            28, 36, 21, 22, 12, 21, 17, 22, 27, 27, 15, 25, 23, 52, 35, 23, 58, 30, 24, 42, 15,
            23, 29, 22, 44, 25, 12, 25, 11, 31, 13,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "2Sam",
        title: "2 Samuel",
        min_unique_chars: 1,
        extra_abbrevs: &["2 Sm"],
        max_verses: &[
            27, 32, 39, 12, 25, 23, 29, 18, 13, 19, 27, 31, 39, 33, 37, 23, 29, 33, 43, 26, 22,
            51, 39, 25,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "1Kgs",
        title: "1 Kings",
        min_unique_chars: 1,
        extra_abbrevs: &["1 Kg", "1 Kgs"],
        max_verses: &[
            53, 46, 28, 34, 18, 38, 51, 66, 28, 29, 43, 33, 34, 31, 34, 34, 24, 46, 21, 43, 29,
            53,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "2Kgs",
        title: "2 Kings",
        min_unique_chars: 1,
        extra_abbrevs: &["2 Kg", "2 Kgs"],
        max_verses: &[
            18, 25, 27, 44, 27, 33, 20, 29, 37, 36, 21, 21, 25, 29, 38, 20, 41, 37, 37, 21, 26,
            20, 37, 20, 30,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "1Chr",
        title: "1 Chronicles",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[
            54, 55, 24, 43, 26, 81, 40, 40, 44, 14, 47, 40, 14, 17, 29, 43, 27, 17, 19, 8, 30,
            19, 32, 31, 31, 32, 34, 21, 30,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "2Chr",
        title: "2 Chronicles",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[
            17, 18, 17, 22, 14, 42, 22, 18, 31, 19, 23, 16, 22, 15, 19, 14, 19, 34, 11, 37, 20,
            12, 21, 27, 28, 23, 9, 27, 36, 27, 21, 33, 25, 33, 27, 23,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Ezra",
        title: "Ezra",
        min_unique_chars: 3,
        extra_abbrevs: &[],
        max_verses: &[11, 70, 13, 24, 17, 22, 28, 36, 15, 44],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Neh",
        title: "Nehemiah",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[
            11, 20, 32, 23, 19, 19, 73, 18, 38, 39, 36, 47, 31,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Esth",
        title: "Esther",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[22, 23, 15, 17, 14, 14, 10, 17, 32, 3],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Job",
        title: "Job",
        min_unique_chars: 3,
        extra_abbrevs: &["Jb"],
        max_verses: &[
            22, 13, 26, 21, 27, 30, 21, 22, 35, 22, 20, 25, 28, 22, 35, 22, 16, 21, 29, 29, 34,
            30, 17, 25, 6, 14, 23, 28, 25, 31, 40, 22, 33, 37, 16, 33, 24, 41, 30, 24, 34, 17,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Psa",
        title: "Psalms",
        min_unique_chars: 2,
        extra_abbrevs: &["Pslm", "Psm", "Pss"],
        max_verses: &[
            6, 12, 8, 8, 12, 10, 17, 9, 20, 18, 7, 8, 6, 7, 5, 11, 15, 50, 14, 9, 13, 31, 6,
            10, 22, 12, 14, 9, 11, 12, 24, 11, 22, 22, 28, 12, 40, 22, 13, 17, 13, 11, 5, 26,
            17, 11, 9, 14, 20, 23, 19, 9, 6, 7, 23, 13, 11, 11, 17, 12, 8, 12, 11, 10, 13, 20,
            7, 35, 36, 5, 24, 20, 28, 23, 10, 12, 20, 72, 13, 19, 16, 8, 18, 12, 13, 17, 7, 18,
            52, 17, 16, 15, 5, 23, 11, 13, 12, 9, 9, 5, 8, 28, 22, 35, 45, 48, 43, 13, 31, 7,
            10, 10, 9, 8, 18, 19, 2, 29, 176, 7, 8, 9, 4, 8, 5, 6, 5, 6, 8, 8, 3, 18, 3, 3, 21,
            26, 9, 8, 24, 13, 10, 7, 12, 15, 21, 10, 20, 14, 9, 6,
        ],
        verse_zero_chapters: PSALM_VERSE_ZERO_CHAPTERS,
    },
    BookData {
        abbrev: "Prov",
        title: "Proverbs",
        min_unique_chars: 2,
        extra_abbrevs: &["Prv"],
        max_verses: &[
            33, 22, 35, 27, 23, 35, 27, 36, 18, 32, 31, 28, 25, 35, 33, 33, 28, 24, 29, 30, 31,
            29, 35, 34, 28, 28, 27, 28, 27, 33, 31,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Eccl",
        title: "Ecclesiastes",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[18, 26, 22, 16, 20, 12, 29, 17, 18, 20, 10, 14],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Song",
        title: "Song of Songs",
        min_unique_chars: 2,
        extra_abbrevs: &["Song of Sol", "Song of Solo", "Song of Solomon", "SOS"],
        max_verses: &[17, 17, 11, 16, 16, 13, 13, 14],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Isa",
        title: "Isaiah",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[
            31, 22, 26, 6, 30, 13, 25, 22, 21, 34, 16, 6, 22, 32, 9, 14, 14, 7, 25, 6, 17, 25,
            18, 23, 12, 21, 13, 29, 24, 33, 9, 20, 24, 17, 10, 22, 38, 22, 8, 31, 29, 25, 28,
            28, 25, 13, 15, 22, 26, 11, 23, 15, 12, 17, 13, 12, 21, 14, 21, 22, 11, 12, 19, 12,
            25, 24,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Jer",
        title: "Jeremiah",
        min_unique_chars: 2,
        extra_abbrevs: &["Jr"],
        max_verses: &[
            19, 37, 25, 31, 31, 30, 34, 22, 26, 25, 23, 17, 27, 22, 21, 21, 27, 23, 15, 18, 14,
            30, 40, 10, 38, 24, 22, 17, 32, 24, 40, 44, 26, 22, 19, 32, 21, 28, 18, 16, 18, 22,
            13, 30, 5, 28, 7, 47, 39, 46, 64, 34,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Lam",
        title: "Lamentations",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[22, 22, 66, 22, 22],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Ezek",
        title: "Ezekiel",
        min_unique_chars: 3,
        extra_abbrevs: &["Ezk"],
        max_verses: &[
            28, 10, 27, 17, 17, 14, 27, 18, 11, 22, 25, 28, 23, 23, 8, 63, 24, 32, 14, 49, 32,
            31, 49, 27, 17, 21, 36, 26, 21, 26, 18, 32, 33, 31, 15, 38, 28, 23, 29, 49, 26, 20,
            27, 31, 25, 24, 23, 35,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Dan",
        title: "Daniel",
        min_unique_chars: 2,
        extra_abbrevs: &["Dn"],
        max_verses: &[21, 49, 30, 37, 31, 28, 28, 27, 27, 21, 45, 13],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Hos",
        title: "Hosea",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[
            11, 23, 5, 19, 15, 11, 16, 14, 17, 15, 12, 14, 16, 9,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Joel",
        title: "Joel",
        min_unique_chars: 3,
        extra_abbrevs: &["Jl"],
        max_verses: &[20, 32, 21],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Amos",
        title: "Amos",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[15, 16, 15, 13, 27, 14, 17, 14, 15],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Obad",
        title: "Obadiah",
        min_unique_chars: 2,
        extra_abbrevs: &["Obd"],
        max_verses: &[21],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Jona",
        title: "Jonah",
        min_unique_chars: 3,
        extra_abbrevs: &["Jnh"],
        max_verses: &[17, 10, 10, 11],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Mic",
        title: "Micah",
        min_unique_chars: 2,
        extra_abbrevs: &["Mc"],
        max_verses: &[16, 13, 12, 13, 15, 16, 20],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Nah",
        title: "Nahum",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[15, 13, 19],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Hab",
        title: "Habakkuk",
        min_unique_chars: 3,
        extra_abbrevs: &["Hbk"],
        max_verses: &[17, 20, 19],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Zeph",
        title: "Zephaniah",
        min_unique_chars: 3,
        extra_abbrevs: &["Zp", "Zph"],
        max_verses: &[18, 15, 20],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Hag",
        title: "Haggai",
        min_unique_chars: 3,
        extra_abbrevs: &["Hg"],
        max_verses: &[15, 23],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Zech",
        title: "Zechariah",
        min_unique_chars: 3,
        extra_abbrevs: &["Zc"],
        max_verses: &[
            21, 13, 10, 14, 11, 15, 14, 23, 17, 12, 17, 14, 9, 21,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Mal",
        title: "Malachi",
        min_unique_chars: 3,
        extra_abbrevs: &["Ml"],
        max_verses: &[14, 17, 18, 6],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Matt",
        title: "Matthew",
        min_unique_chars: 3,
        extra_abbrevs: &["Mt"],
        max_verses: &[
            25, 23, 17, 25, 48, 34, 29, 34, 38, 42, 30, 50, 58, 36, 39, 28, 27, 35, 30, 34, 46,
            46, 39, 51, 46, 75, 66, 20,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Mark",
        title: "Mark",
        min_unique_chars: 3,
        extra_abbrevs: &["Mk", "Mrk"],
        max_verses: &[
            45, 28, 35, 41, 43, 56, 37, 38, 50, 52, 33, 44, 37, 72, 47, 20,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Luke",
        title: "Luke",
        min_unique_chars: 2,
        extra_abbrevs: &["Lk"],
        max_verses: &[
            80, 52, 38, 44, 39, 49, 50, 56, 62, 42, 54, 59, 35, 35, 32, 31, 37, 43, 48, 47, 38,
            71, 56, 53,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "John",
        title: "John",
        min_unique_chars: 3,
        extra_abbrevs: &["Jn", "Jhn"],
        max_verses: &[
            51, 25, 36, 54, 47, 71, 53, 59, 41, 42, 57, 50, 38, 31, 27, 33, 26, 40, 42, 31, 25,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Acts",
        title: "Acts",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[
            26, 47, 26, 37, 42, 15, 60, 40, 43, 48, 30, 25, 52, 28, 41, 40, 34, 28, 41, 38, 40,
            30, 35, 27, 27, 32, 44, 31,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Rom",
        title: "Romans",
        min_unique_chars: 2,
        extra_abbrevs: &["Rm"],
        max_verses: &[
            32, 29, 31, 25, 21, 23, 25, 39, 33, 21, 36, 21, 14, 23, 33, 27,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "1Cor",
        title: "1 Corinthians",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[
            31, 16, 23, 21, 13, 20, 40, 13, 27, 33, 34, 31, 13, 40, 58, 24,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "2Cor",
        title: "2 Corinthians",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[
            24, 17, 18, 18, 21, 18, 16, 24, 15, 18, 33, 21, 14,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Gal",
        title: "Galatians",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[24, 21, 29, 31, 26, 18],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Eph",
        title: "Ephesians",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[23, 22, 21, 32, 33, 24],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Phil",
        title: "Philippians",
        min_unique_chars: 4,
        extra_abbrevs: &["Pp", "Php"],
        max_verses: &[30, 30, 21, 23],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Col",
        title: "Colossians",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[29, 23, 25, 18],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "1Th",
        title: "1 Thessalonians",
        min_unique_chars: 2,
        extra_abbrevs: &["1 Ths"],
        max_verses: &[10, 20, 13, 18, 28],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "2Th",
        title: "2 Thessalonians",
        min_unique_chars: 2,
        extra_abbrevs: &["2 Ths"],
        max_verses: &[12, 17, 18],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "1Tim",
        title: "1 Timothy",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[20, 15, 16, 16, 25, 21],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "2Tim",
        title: "2 Timothy",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[18, 26, 17, 22],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Tit",
        title: "Titus",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[16, 15, 15],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Phlm",
        title: "Philemon",
        min_unique_chars: 5,
        extra_abbrevs: &["Pm", "Phm", "Phlm"],
        max_verses: &[25],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Heb",
        title: "Hebrews",
        min_unique_chars: 2,
        extra_abbrevs: &[],
        max_verses: &[
            14, 18, 19, 16, 14, 20, 28, 13, 28, 39, 40, 29, 25,
        ],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Jam",
        title: "James",
        min_unique_chars: 2,
        extra_abbrevs: &["Jm", "Jas"],
        max_verses: &[27, 26, 18, 17, 20],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "1Pet",
        title: "1 Peter",
        min_unique_chars: 1,
        extra_abbrevs: &["1 Pt"],
        max_verses: &[25, 25, 22, 19, 14],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "2Pet",
        title: "2 Peter",
        min_unique_chars: 1,
        extra_abbrevs: &["2 Pt"],
        max_verses: &[21, 22, 18],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "1Jn",
        title: "1 John",
        min_unique_chars: 1,
        extra_abbrevs: &["1 Jn", "1 Jhn"],
        max_verses: &[10, 29, 24, 21, 21],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "2Jn",
        title: "2 John",
        min_unique_chars: 1,
        extra_abbrevs: &["2 Jn", "2 Jhn"],
        max_verses: &[13],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "3Jn",
        title: "3 John",
        min_unique_chars: 1,
        extra_abbrevs: &["3 Jn", "3 Jhn"],
        max_verses: &[14],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Jude",
        title: "Jude",
        min_unique_chars: 4,
        extra_abbrevs: &[],
        max_verses: &[25],
        verse_zero_chapters: &[],
    },
    BookData {
        abbrev: "Rev",
        title: "Revelation",
        min_unique_chars: 2,
        extra_abbrevs: &["The Revelation", "The Revelation to John"],
        max_verses: &[
            20, 29, 22, 11, 14, 17, 17, 13, 21, 11, 19, 17, 18, 20, 8, 21, 18, 24, 21, 15, 27,
            21,
        ],
        verse_zero_chapters: &[],
    },
];
