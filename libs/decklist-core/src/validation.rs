//! Deck size rules applied to a parsed deck list.

use crate::types::ParseResult;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deck construction limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRules {
    pub min_maindeck: u32,
    pub max_sideboard: u32,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            min_maindeck: 60,
            max_sideboard: 15,
        }
    }
}

/// A rule a deck list does not satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckViolation {
    #[error("The mainboard must have at least {min} cards")]
    MaindeckTooSmall { count: u64, min: u32 },

    #[error("The sideboard must have a maximum of {max} cards")]
    SideboardTooLarge { count: u64, max: u32 },

    #[error("{count} card name(s) could not be found")]
    UnresolvedCards { count: usize },
}

impl DeckViolation {
    /// Stable snake_case identifier, used as the `kind` field in API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MaindeckTooSmall { .. } => "maindeck_too_small",
            Self::SideboardTooLarge { .. } => "sideboard_too_large",
            Self::UnresolvedCards { .. } => "unresolved_cards",
        }
    }

    /// Whether the violation makes the deck illegal. Unresolved names are
    /// only a warning.
    pub fn is_blocking(&self) -> bool {
        !matches!(self, Self::UnresolvedCards { .. })
    }
}

/// Check a parsed deck list against the rules.
pub fn validate(result: &ParseResult, rules: &DeckRules) -> Vec<DeckViolation> {
    let mut violations = Vec::new();

    if result.maindeck_count() < u64::from(rules.min_maindeck) {
        violations.push(DeckViolation::MaindeckTooSmall {
            count: result.maindeck_count(),
            min: rules.min_maindeck,
        });
    }

    if result.sideboard_count() > u64::from(rules.max_sideboard) {
        violations.push(DeckViolation::SideboardTooLarge {
            count: result.sideboard_count(),
            max: rules.max_sideboard,
        });
    }

    if result.unresolved_count() > 0 {
        violations.push(DeckViolation::UnresolvedCards {
            count: result.unresolved_count(),
        });
    }

    violations
}
