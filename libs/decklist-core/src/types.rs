//! Core types for parsed deck lists.

use serde::{Deserialize, Serialize};

/// Display category assigned to a parsed card entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardCategory {
    Land,
    Instant,
    Sorcery,
    Artifact,
    Enchantment,
    Creature,
    Planeswalker,
    Attraction,
    Other,
    Sideboard,
}

impl CardCategory {
    /// All categories in display order.
    pub const ALL: [CardCategory; 10] = [
        Self::Land,
        Self::Instant,
        Self::Sorcery,
        Self::Artifact,
        Self::Enchantment,
        Self::Creature,
        Self::Planeswalker,
        Self::Attraction,
        Self::Other,
        Self::Sideboard,
    ];

    /// Get the category name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Land => "Land",
            Self::Instant => "Instant",
            Self::Sorcery => "Sorcery",
            Self::Artifact => "Artifact",
            Self::Enchantment => "Enchantment",
            Self::Creature => "Creature",
            Self::Planeswalker => "Planeswalker",
            Self::Attraction => "Attraction",
            Self::Other => "Other",
            Self::Sideboard => "Sideboard",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Block of the input a card line was read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Maindeck,
    Sideboard,
}

/// One card line of a parsed deck list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    pub amount: u32,
    pub name: String,
    pub category: CardCategory,
    /// Whether the name was found in the card database.
    pub resolved: bool,
    pub section: Section,
}

impl CardEntry {
    /// Whether this entry counts towards the sideboard total.
    pub fn is_sideboard(&self) -> bool {
        self.category == CardCategory::Sideboard
    }
}

/// Aggregated result of parsing a deck list.
///
/// Only constructed through [`ParseResult::from_entries`], so the summary
/// counts always agree with the entries. Card totals are `u64`: a sum of
/// `u32` amounts never overflows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    entries: Vec<CardEntry>,
    maindeck_count: u64,
    sideboard_count: u64,
    unresolved_count: usize,
}

impl ParseResult {
    /// Build a result from entries in encounter order.
    pub fn from_entries(entries: Vec<CardEntry>) -> Self {
        let mut maindeck_count = 0u64;
        let mut sideboard_count = 0u64;
        let mut unresolved_count = 0usize;

        for entry in &entries {
            if entry.is_sideboard() {
                sideboard_count += u64::from(entry.amount);
            } else {
                maindeck_count += u64::from(entry.amount);
            }
            if !entry.resolved {
                unresolved_count += 1;
            }
        }

        Self {
            entries,
            maindeck_count,
            sideboard_count,
            unresolved_count,
        }
    }

    pub fn entries(&self) -> &[CardEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<CardEntry> {
        self.entries
    }

    pub fn maindeck_count(&self) -> u64 {
        self.maindeck_count
    }

    pub fn sideboard_count(&self) -> u64 {
        self.sideboard_count
    }

    pub fn unresolved_count(&self) -> usize {
        self.unresolved_count
    }

    pub fn total_entries(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries counted towards the maindeck.
    pub fn maindeck(&self) -> impl Iterator<Item = &CardEntry> {
        self.entries.iter().filter(|e| !e.is_sideboard())
    }

    /// Entries counted towards the sideboard.
    pub fn sideboard(&self) -> impl Iterator<Item = &CardEntry> {
        self.entries.iter().filter(|e| e.is_sideboard())
    }

    /// Entries grouped by category in display order. Empty groups are omitted.
    pub fn grouped(&self) -> Vec<(CardCategory, Vec<&CardEntry>)> {
        CardCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let group: Vec<_> = self
                    .entries
                    .iter()
                    .filter(|e| e.category == category)
                    .collect();
                (!group.is_empty()).then_some((category, group))
            })
            .collect()
    }
}

impl Default for ParseResult {
    fn default() -> Self {
        Self::from_entries(Vec::new())
    }
}
