//! Functional edits on a parsed deck list.
//!
//! Each edit returns a new [`ParseResult`]; the input is left untouched.
//! Entries are matched by exact name and section.

use crate::card_db::CardLookup;
use crate::classifier::classify;
use crate::types::{CardEntry, ParseResult, Section};

/// Add one copy of a card, appending a new entry if it is not listed yet.
pub fn add_card<K: CardLookup + ?Sized>(
    result: &ParseResult,
    name: &str,
    section: Section,
    cards: &K,
) -> ParseResult {
    let name = name.trim();
    let mut entries = result.entries().to_vec();

    match find_entry(&entries, name, section) {
        Some(index) => {
            entries[index].amount = entries[index].amount.saturating_add(1);
        }
        None => {
            let classification = classify(name, section, cards);
            entries.push(CardEntry {
                amount: 1,
                name: name.to_string(),
                category: classification.category,
                resolved: classification.resolved,
                section,
            });
        }
    }

    ParseResult::from_entries(entries)
}

/// Set the amount of a listed card. An amount of zero removes the entry.
pub fn set_amount(result: &ParseResult, name: &str, section: Section, amount: u32) -> ParseResult {
    let mut entries = result.entries().to_vec();

    if let Some(index) = find_entry(&entries, name.trim(), section) {
        if amount == 0 {
            entries.remove(index);
        } else {
            entries[index].amount = amount;
        }
    }

    ParseResult::from_entries(entries)
}

/// Keep only entries whose name was found in the card database.
pub fn only_resolved(result: &ParseResult) -> ParseResult {
    ParseResult::from_entries(
        result
            .entries()
            .iter()
            .filter(|e| e.resolved)
            .cloned()
            .collect(),
    )
}

fn find_entry(entries: &[CardEntry], name: &str, section: Section) -> Option<usize> {
    entries
        .iter()
        .position(|e| e.name == name && e.section == section)
}
