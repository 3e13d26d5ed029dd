//! Deck list parser.
//!
//! # Format
//! ```text
//! //Main
//! 4 Lightning Bolt
//! 3x Rift Bolt
//! 4 Darksteel Citadel (C21) 285
//!
//! //Sideboard
//! 2 Pyroblast
//! ```
//! Lines without a leading quantity (headers, comments, blanks) are
//! skipped. Parsing never fails: unknown names are kept as unresolved
//! entries.

use crate::card_db::CardLookup;
use crate::classifier::classify;
use crate::splitter::split_sections;
use crate::tokenizer::tokenize_line;
use crate::types::{CardEntry, ParseResult, Section};

/// Parse a deck list against a card database.
pub fn parse_list<K: CardLookup + ?Sized>(input: &str, cards: &K) -> ParseResult {
    let sections = split_sections(input);

    let mut entries = Vec::new();
    collect_entries(sections.maindeck, Section::Maindeck, cards, &mut entries);
    if let Some(sideboard) = sections.sideboard {
        collect_entries(sideboard, Section::Sideboard, cards, &mut entries);
    }

    let result = ParseResult::from_entries(entries);
    tracing::debug!(
        entries = result.total_entries(),
        maindeck = result.maindeck_count(),
        sideboard = result.sideboard_count(),
        unresolved = result.unresolved_count(),
        "Parsed decklist"
    );
    result
}

fn collect_entries<K: CardLookup + ?Sized>(
    block: &str,
    section: Section,
    cards: &K,
    entries: &mut Vec<CardEntry>,
) {
    for line in block.lines() {
        let Some(card_line) = tokenize_line(line) else {
            continue;
        };

        let classification = classify(card_line.name, section, cards);
        entries.push(CardEntry {
            amount: card_line.amount,
            name: card_line.name.to_string(),
            category: classification.category,
            resolved: classification.resolved,
            section,
        });
    }
}
