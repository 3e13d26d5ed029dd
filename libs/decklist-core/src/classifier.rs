//! Card type classification.

use crate::card_db::{CardLookup, CardRecord};
use crate::types::{CardCategory, Section};

/// Category precedence for cards with several types, first match wins.
///
/// A land creature is a Land, an artifact creature is an Artifact.
pub const CATEGORY_PRECEDENCE: &[(&str, CardCategory)] = &[
    ("Land", CardCategory::Land),
    ("Artifact", CardCategory::Artifact),
    ("Enchantment", CardCategory::Enchantment),
    ("Creature", CardCategory::Creature),
    ("Planeswalker", CardCategory::Planeswalker),
    ("Instant", CardCategory::Instant),
    ("Sorcery", CardCategory::Sorcery),
    ("Attraction", CardCategory::Attraction),
];

/// Outcome of classifying one card name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: CardCategory,
    pub resolved: bool,
}

/// Pick the display category for a card's type list.
pub fn category_for_types<S: AsRef<str>>(types: &[S]) -> CardCategory {
    CATEGORY_PRECEDENCE
        .iter()
        .find(|(type_name, _)| types.iter().any(|t| t.as_ref() == *type_name))
        .map(|(_, category)| *category)
        .unwrap_or(CardCategory::Other)
}

/// Classify a card name read from the given section.
///
/// Sideboard cards become [`CardCategory::Sideboard`] unless they are
/// Attractions, which keep their category wherever they appear.
pub fn classify<K: CardLookup + ?Sized>(name: &str, section: Section, cards: &K) -> Classification {
    let record = cards.lookup(&name.to_lowercase());

    let category = match record {
        None => CardCategory::Other,
        Some(CardRecord::Attraction) => CardCategory::Attraction,
        Some(CardRecord::Types(types)) => category_for_types(types.as_slice()),
    };

    let category = match (section, category) {
        (_, CardCategory::Attraction) => CardCategory::Attraction,
        (Section::Sideboard, _) => CardCategory::Sideboard,
        (Section::Maindeck, category) => category,
    };

    Classification {
        category,
        resolved: record.is_some(),
    }
}
