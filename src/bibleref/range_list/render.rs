//! Turning a range list back into text, and regrouping it
//!
//! Both walks track the same context a reader builds up: the current book, the
//! current chapter, and whether the last thing written was a verse number. A
//! range only prints the parts of its start and end that differ from that
//! context, so "Mark 5:6-8, 10" rather than "Mark 5:6-8, Mark 5:10".
//!
//! `regroup` mirrors the decisions of `render` with `preserve_groups` off, and
//! places a group boundary wherever that rendering would use the major separator.

use super::RangeList;
use crate::bibleref::catalog::Book;
use crate::bibleref::flags::{BibleFlags, VerseParts};
use crate::bibleref::range::Range;
use crate::bibleref::settings::RenderOptions;

/// Which separator precedes the next range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListSep {
    None,
    Major,
    Minor,
}

#[derive(Debug, Default)]
struct Context {
    book: Option<Book>,
    chapter: Option<u32>,
    at_verse_level: bool,
}

impl RangeList {
    /// Render with `options`.
    ///
    /// With `preserve_groups` the major separator appears exactly between groups,
    /// so parsing the output gives back an equal list. Without it the separators
    /// are chosen for the most conventional text.
    pub fn render(&self, options: &RenderOptions) -> String {
        let flags = options.flags;
        let preserve_groups = options.preserve_groups;
        let mut ctx = Context::default();
        let mut list_sep = ListSep::None;
        let mut first_range = true;
        let mut out = String::new();

        for group in self.groups() {
            for range in group {
                let mut force_dual_ref = false;
                let mut start_parts;

                if range.spans_start_book(flags) {
                    // Whole-book starts always repeat the book name
                    start_parts = VerseParts::BOOK;
                    ctx.chapter = None;
                    ctx.at_verse_level = false;
                    if !preserve_groups {
                        list_sep = ListSep::Major;
                    }
                } else if starts_whole_chapter(range, flags) {
                    if ctx.book == Some(range.start().book()) {
                        if !preserve_groups {
                            list_sep = ListSep::Major;
                            start_parts = VerseParts::CHAP;
                            ctx.at_verse_level = false;
                        } else if list_sep == ListSep::Major
                            || (!ctx.at_verse_level && range.spans_end_chap(flags))
                        {
                            start_parts = VerseParts::CHAP;
                            ctx.at_verse_level = false;
                        } else {
                            // After a minor separator a bare chapter number would read as a verse
                            start_parts = VerseParts::CHAP_VERSE;
                            ctx.at_verse_level = true;
                            force_dual_ref = true;
                        }
                    } else {
                        if !preserve_groups {
                            list_sep = ListSep::Major;
                        }
                        start_parts = VerseParts::BOOK_CHAP;
                        ctx.at_verse_level = false;
                    }
                    ctx.chapter = Some(range.start().chapter());
                } else {
                    if ctx.book == Some(range.start().book()) {
                        if ctx.at_verse_level && ctx.chapter == Some(range.start().chapter()) {
                            if range.chap_count(false) > 1 {
                                // Repeat the chapter when a verse list runs on into the next chapter
                                start_parts = VerseParts::CHAP_VERSE;
                                if !preserve_groups {
                                    list_sep = ListSep::Major;
                                }
                            } else {
                                start_parts = VerseParts::VERSE;
                            }
                        } else {
                            if !preserve_groups {
                                list_sep = ListSep::Major;
                            }
                            start_parts = VerseParts::CHAP_VERSE;
                        }
                    } else {
                        if !preserve_groups {
                            list_sep = ListSep::Major;
                        }
                        start_parts = VerseParts::FULL_REF;
                    }
                    ctx.chapter = Some(range.start().chapter());
                    ctx.at_verse_level = true;
                }

                ctx.book = Some(range.start().book());
                if options.force_start_verses
                    && !start_parts.contains(VerseParts::VERSE)
                    && !range.spans_end_chap(flags)
                {
                    start_parts |= VerseParts::VERSE;
                    ctx.at_verse_level = true;
                }

                let start = range.start().render(options, start_parts);
                let end = if !force_dual_ref && is_single_ref(range, flags) {
                    None
                } else {
                    let end_parts = end_parts(range, &mut ctx, flags);
                    Some(range.end().render(options, end_parts))
                };

                if first_range {
                    list_sep = ListSep::None;
                    first_range = false;
                }
                let sep = match list_sep {
                    ListSep::None => String::new(),
                    ListSep::Major => options.separators.major_list().to_string(),
                    ListSep::Minor => options.separators.minor_list().to_string(),
                };
                let piece = match end {
                    Some(end) => format!("{} {}{}{}", sep, start, options.separators.range(), end),
                    None => format!("{} {}", sep, start),
                };
                if options.no_space {
                    out.push_str(&piece.replace(' ', ""));
                } else {
                    out.push_str(piece.trim());
                }

                list_sep = ListSep::Minor;
            }

            if preserve_groups {
                list_sep = ListSep::Major;
                ctx.at_verse_level = false;
            }
        }
        out
    }

    /// Clear the groups and re-partition the list into its most natural groups.
    ///
    /// A new group starts at every whole-book or whole-chapter start, at every
    /// change of book, and wherever a verse-level range moves to another chapter.
    pub fn regroup(&mut self, flags: BibleFlags) {
        self.0.clear_groups();

        let mut ctx = Context::default();
        let mut cursor = self.0.first_node();
        while let Some(id) = cursor {
            let range = *self.0.value(id);
            let mut show_start_verse = false;

            if range.spans_start_book(flags) {
                self.0.start_group_at(id);
                ctx.chapter = None;
                ctx.at_verse_level = false;
            } else if starts_whole_chapter(&range, flags) {
                self.0.start_group_at(id);
                ctx.chapter = Some(range.start().chapter());
                ctx.at_verse_level = false;
            } else {
                let continues_chapter = ctx.book == Some(range.start().book())
                    && ctx.at_verse_level
                    && ctx.chapter == Some(range.start().chapter())
                    && range.chap_count(false) <= 1;
                if !continues_chapter {
                    self.0.start_group_at(id);
                }
                ctx.chapter = Some(range.start().chapter());
                ctx.at_verse_level = true;
                show_start_verse = true;
            }

            ctx.book = Some(range.start().book());
            if !show_start_verse && !range.spans_end_chap(flags) {
                ctx.at_verse_level = true;
            }

            if !is_single_ref(&range, flags) {
                end_parts(&range, &mut ctx, flags);
            }
            cursor = self.0.next_node(id);
        }
    }
}

/// Starts with a whole chapter that can be named by its number.
///
/// Single-chapter books never print a chapter number, so their ranges are
/// always written from the verse.
fn starts_whole_chapter(range: &Range, flags: BibleFlags) -> bool {
    range.spans_start_chap(flags) && !range.start().book().is_single_chapter()
}

fn is_single_ref(range: &Range, flags: BibleFlags) -> bool {
    range.is_whole_book(flags) || range.is_whole_chap(flags) || range.is_single_verse()
}

/// Parts of the end verse to print, updating the context to where the range ends
fn end_parts(range: &Range, ctx: &mut Context, flags: BibleFlags) -> VerseParts {
    let end = range.end();
    if end.book() != range.start().book() {
        ctx.at_verse_level = false;
    }

    let parts = if range.spans_end_book(flags) {
        ctx.chapter = None;
        ctx.at_verse_level = false;
        VerseParts::BOOK
    } else if !ctx.at_verse_level && range.spans_end_chap(flags) {
        let parts = if ctx.book == Some(end.book()) {
            VerseParts::CHAP
        } else {
            VerseParts::BOOK_CHAP
        };
        ctx.chapter = Some(end.chapter());
        ctx.at_verse_level = false;
        parts
    } else {
        let parts = if ctx.book != Some(end.book()) {
            VerseParts::FULL_REF
        } else if ctx.chapter == Some(end.chapter()) {
            VerseParts::VERSE
        } else {
            VerseParts::CHAP_VERSE
        };
        ctx.chapter = Some(end.chapter());
        ctx.at_verse_level = true;
        parts
    };
    ctx.book = Some(end.book());
    parts
}
