//! Text export of parsed deck lists.
//!
//! The output reparses to the same entries, so it can be handed back to
//! users for editing.

use crate::types::{CardEntry, ParseResult, Section};

/// Header line written between maindeck and sideboard.
pub const SIDEBOARD_HEADER: &str = "Sideboard";

/// Render a result as `<amount> <name>` lines, maindeck first.
pub fn to_decklist_text(result: &ParseResult) -> String {
    let lines_for = |section: Section| -> Vec<String> {
        result
            .entries()
            .iter()
            .filter(|e| e.section == section)
            .map(format_line)
            .collect()
    };

    let maindeck = lines_for(Section::Maindeck);
    let sideboard = lines_for(Section::Sideboard);

    let mut lines = maindeck;
    if !sideboard.is_empty() {
        lines.push(String::new());
        lines.push(SIDEBOARD_HEADER.to_string());
        lines.extend(sideboard);
    }

    lines.join("\n")
}

fn format_line(entry: &CardEntry) -> String {
    format!("{} {}", entry.amount, entry.name)
}
