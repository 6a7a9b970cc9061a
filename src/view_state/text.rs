//! Field text as it appears in the grid.
//!
//! Control characters would break the one-terminal-row-per-record layout, so
//! they are replaced by a single placeholder glyph before both measuring and
//! drawing. A CRLF pair counts as one line break.

use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

/// Glyph drawn in place of line breaks and other control characters.
pub const CONTROL_PLACEHOLDER: char = '\u{23CE}';

/// Field text with control characters substituted.
///
/// Borrows the input when it contains nothing to substitute.
pub fn display_text(field: &str) -> Cow<'_, str> {
    if !field.chars().any(char::is_control) {
        return Cow::Borrowed(field);
    }

    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' && chars.peek() == Some(&'\n') {
            chars.next();
        }
        out.push(if c.is_control() { CONTROL_PLACEHOLDER } else { c });
    }
    Cow::Owned(out)
}

/// Width of the field in terminal cells, after substitution.
pub fn display_width(field: &str) -> usize {
    display_text(field).width()
}
