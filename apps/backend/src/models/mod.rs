//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from decklist-core
pub use decklist_core::{CardCategory, CardEntry, DeckRules, DeckViolation, ParseResult, Section};

// === Decklist Types ===

/// Request body carrying a raw deck list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecklistRequest {
    pub decklist: String,
}

/// Cards of one display category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: CardCategory,
    pub count: u64,
    pub cards: Vec<CardEntry>,
}

/// Parsed deck list with grouped listing and rule checks.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResponse {
    pub cards: Vec<CardEntry>,
    pub maindeck: u64,
    pub sideboard: u64,
    pub unresolved: usize,
    pub total_entries: usize,
    pub groups: Vec<CategoryGroup>,
    pub violations: Vec<ViolationResponse>,
}

impl ParseResponse {
    pub fn new(result: &ParseResult, violations: &[DeckViolation]) -> Self {
        let groups = result
            .grouped()
            .into_iter()
            .map(|(category, entries)| CategoryGroup {
                category,
                count: entries.iter().map(|e| u64::from(e.amount)).sum(),
                cards: entries.into_iter().cloned().collect(),
            })
            .collect();

        Self {
            cards: result.entries().to_vec(),
            maindeck: result.maindeck_count(),
            sideboard: result.sideboard_count(),
            unresolved: result.unresolved_count(),
            total_entries: result.total_entries(),
            groups,
            violations: violations.iter().map(ViolationResponse::from).collect(),
        }
    }
}

/// Validation request with optional rule overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub decklist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_maindeck: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sideboard: Option<u32>,
}

impl ValidateRequest {
    /// Default rules with this request's overrides applied.
    pub fn rules(&self) -> DeckRules {
        let defaults = DeckRules::default();
        DeckRules {
            min_maindeck: self.min_maindeck.unwrap_or(defaults.min_maindeck),
            max_sideboard: self.max_sideboard.unwrap_or(defaults.max_sideboard),
        }
    }
}

/// One failed rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolationResponse {
    pub kind: String,
    pub message: String,
    pub blocking: bool,
}

impl From<&DeckViolation> for ViolationResponse {
    fn from(violation: &DeckViolation) -> Self {
        Self {
            kind: violation.kind().to_string(),
            message: violation.to_string(),
            blocking: violation.is_blocking(),
        }
    }
}

/// Validation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    /// False if any blocking violation was found.
    pub valid: bool,
    pub maindeck: u64,
    pub sideboard: u64,
    pub violations: Vec<ViolationResponse>,
}

/// Normalize request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeRequest {
    pub decklist: String,
    /// Drop cards not found in the card database.
    #[serde(default)]
    pub resolved_only: bool,
}

/// Single-card edit. Without `amount` one copy is added; with `amount`
/// the listed count is set, and 0 removes the card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRequest {
    pub decklist: String,
    pub name: String,
    #[serde(default)]
    pub section: Section,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,
}

/// Edited deck list as text plus its parse.
#[derive(Debug, Clone, Serialize)]
pub struct EditResponse {
    pub decklist: String,
    #[serde(flatten)]
    pub parsed: ParseResponse,
}

// === Card Types ===

/// Result of looking up a single card name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardLookupResponse {
    pub name: String,
    pub resolved: bool,
    pub category: CardCategory,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Response after reloading the card database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub cards: usize,
}
