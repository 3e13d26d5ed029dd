//! Splits a pasted deck list into a maindeck block and a sideboard block.
//!
//! Rules are tried in order, first match wins:
//!
//! 1. A sideboard marker line (`Sideboard`, `Side:`, `// SIDEBOARD`, ...).
//!    Text before it is the maindeck, text after it the sideboard; the
//!    marker line itself is dropped.
//! 2. The first blank line after some content. Text before it is the
//!    maindeck, everything after it the sideboard.
//! 3. Otherwise the whole input is the maindeck.
//!
//! A line with no digits that contains "side" (e.g. a comment mentioning
//! a card named "Sideways ...") also counts as a marker. Card lines always
//! start with a quantity, so they never trigger rule 1.

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker: only non-digit characters, then "side" or "sideboard", optional colon.
static SIDEBOARD_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[^0-9]*side(?:board)?:?").unwrap());

/// Maindeck and optional sideboard block of a deck list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections<'a> {
    pub maindeck: &'a str,
    pub sideboard: Option<&'a str>,
}

/// Whether a line is a sideboard header such as `Sideboard:` or `// SIDEBOARD`.
pub fn is_sideboard_marker(line: &str) -> bool {
    SIDEBOARD_MARKER.is_match(line.trim())
}

/// Whether a line is empty or whitespace only.
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// Split raw input into maindeck and sideboard blocks.
pub fn split_sections(input: &str) -> Sections<'_> {
    let input = input.trim();

    if let Some((start, end)) = find_line(input, is_sideboard_marker) {
        return Sections {
            maindeck: &input[..start],
            sideboard: non_blank(&input[end..]),
        };
    }

    // `input` is trimmed, so a blank line can only sit between two blocks.
    if let Some((start, end)) = find_line(input, is_blank_line) {
        return Sections {
            maindeck: &input[..start],
            sideboard: non_blank(&input[end..]),
        };
    }

    Sections {
        maindeck: input,
        sideboard: None,
    }
}

/// Byte range (including the line break) of the first line matching `predicate`.
fn find_line(input: &str, predicate: impl Fn(&str) -> bool) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in input.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        if predicate(line) {
            return Some((start, offset));
        }
    }
    None
}

fn non_blank(block: &str) -> Option<&str> {
    (!block.trim().is_empty()).then_some(block)
}
