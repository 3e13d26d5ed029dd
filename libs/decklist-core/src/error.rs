//! Error types for decklist-core.
//!
//! Parsing a deck list never fails; these errors only come from loading
//! the card database.

use thiserror::Error;

/// Result type alias using CardDatabaseError.
pub type Result<T> = std::result::Result<T, CardDatabaseError>;

/// Errors that can occur while loading the card database.
#[derive(Debug, Error)]
pub enum CardDatabaseError {
    #[error("failed to read card database: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid card database JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid record for card {name}: {reason}")]
    InvalidRecord { name: String, reason: String },
}
