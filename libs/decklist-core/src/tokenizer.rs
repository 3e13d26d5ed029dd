//! Card line tokenizer.
//!
//! Accepted notations:
//! ```text
//! 3 Lightning Bolt
//! 3x Lightning Bolt
//! x3 Lightning Bolt
//! 3X Lightning Bolt
//! 1 Aether Spellbomb (JMP) 456
//! ```
//! Everything from the first `(` on is dropped, which strips Arena set
//! codes and collector numbers.
//!
//! Spacing around the `x` is optional (`4xLightning Bolt`, `3 x Lightning
//! Bolt`, `4Lightning Bolt`). A spaced `x` is only a marker when more
//! whitespace follows it, so `2 Xenagos, the Reveler` keeps its first
//! letter. Without a space the `x` is always read as the marker.

use once_cell::sync::Lazy;
use regex::Regex;

/// Optional leading `x`, quantity, then a separator tried in order: spaced
/// `x`, glued `x`, plain whitespace. The name runs up to `(`.
static CARD_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^x?\s*([0-9]+)(?:\s*x\s+|x|\s*)([^(]+)").unwrap());

/// Quantity and name read from one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLine<'a> {
    pub amount: u32,
    pub name: &'a str,
}

/// Tokenize a single line. Returns `None` for anything that is not a card
/// line: blanks, comments, headers like `Creatures [9]`, zero or
/// out-of-range quantities.
pub fn tokenize_line(line: &str) -> Option<CardLine<'_>> {
    let captures = CARD_LINE.captures(line.trim())?;

    let amount: u32 = captures.get(1)?.as_str().parse().ok()?;
    if amount == 0 {
        return None;
    }

    let name = captures.get(2)?.as_str().trim();
    if name.is_empty() {
        return None;
    }

    Some(CardLine { amount, name })
}
