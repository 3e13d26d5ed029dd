//! Read-only card database used to resolve and classify card names.
//!
//! # Format
//! The database is built offline from a full card dump and stored as a
//! JSON object keyed by lowercase card name:
//! ```json
//! {
//!   "lightning bolt": ["Instant"],
//!   "dryad arbor": ["Land", "Creature"],
//!   "bounce chamber": "Attraction"
//! }
//! ```

use crate::error::{CardDatabaseError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Sentinel value marking an Attraction card in the database file.
pub const ATTRACTION_SENTINEL: &str = "Attraction";

/// What the database knows about one card name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord", into = "RawRecord")]
pub enum CardRecord {
    /// Card types as printed, e.g. `["Artifact", "Land"]`.
    Types(Vec<String>),
    /// Non-standard promotional card, stored as the `"Attraction"` marker.
    Attraction,
}

/// On-disk shape of a record: a type list or a bare marker string.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawRecord {
    Types(Vec<String>),
    Marker(String),
}

impl TryFrom<RawRecord> for CardRecord {
    type Error = String;

    fn try_from(raw: RawRecord) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawRecord::Types(types) if types.is_empty() => Err("empty type list".to_string()),
            RawRecord::Types(types) => Ok(Self::Types(types)),
            RawRecord::Marker(marker) if marker == ATTRACTION_SENTINEL => Ok(Self::Attraction),
            RawRecord::Marker(marker) => Err(format!("unknown card marker {marker:?}")),
        }
    }
}

impl From<CardRecord> for RawRecord {
    fn from(record: CardRecord) -> Self {
        match record {
            CardRecord::Types(types) => Self::Types(types),
            CardRecord::Attraction => Self::Marker(ATTRACTION_SENTINEL.to_string()),
        }
    }
}

/// Lookup seam between the parser and whatever holds card data.
pub trait CardLookup: Send + Sync {
    /// Look up a card by its lowercase name.
    fn lookup(&self, lowercase_name: &str) -> Option<&CardRecord>;

    /// Whether a card with this lowercase name exists.
    fn contains(&self, lowercase_name: &str) -> bool {
        self.lookup(lowercase_name).is_some()
    }
}

/// Immutable map from lowercase card name to its record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDatabase {
    cards: HashMap<String, CardRecord>,
}

impl CardDatabase {
    /// Build a database from `(name, record)` pairs. Names are lowercased.
    pub fn from_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = (S, CardRecord)>,
        S: AsRef<str>,
    {
        records.into_iter().collect()
    }

    /// Parse the JSON document written by the offline database builder.
    ///
    /// Malformed JSON is a `Json` error; a well-formed value that is not a
    /// card record (unknown marker, empty type list) is `InvalidRecord`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, RawRecord> = serde_json::from_str(json)?;

        raw.into_iter()
            .map(|(name, record)| match CardRecord::try_from(record) {
                Ok(record) => Ok((name, record)),
                Err(reason) => Err(CardDatabaseError::InvalidRecord { name, reason }),
            })
            .collect()
    }

    /// Load the database from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let db = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), cards = db.len(), "Loaded card database");
        Ok(db)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, CardRecord)> for CardDatabase {
    fn from_iter<T: IntoIterator<Item = (S, CardRecord)>>(iter: T) -> Self {
        Self {
            cards: iter
                .into_iter()
                .map(|(name, record)| (name.as_ref().to_lowercase(), record))
                .collect(),
        }
    }
}

impl CardLookup for CardDatabase {
    fn lookup(&self, lowercase_name: &str) -> Option<&CardRecord> {
        self.cards.get(lowercase_name)
    }
}
