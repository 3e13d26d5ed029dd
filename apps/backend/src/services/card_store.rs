//! Runtime holder for the card database snapshot.
//!
//! Requests take a cheap `Arc` clone of the current snapshot and parse
//! without holding the lock. A reload builds a complete new database and
//! swaps the `Arc`; in-flight parses keep using the old one.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use decklist_core::CardDatabase;

use crate::error::{ApiError, Result};

pub struct CardStore {
    current: RwLock<Arc<CardDatabase>>,
    source: Option<PathBuf>,
}

impl CardStore {
    /// Load the database from a JSON file. The path is kept for reloads.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let database = CardDatabase::load(&path)?;
        Ok(Self {
            current: RwLock::new(Arc::new(database)),
            source: Some(path),
        })
    }

    /// Wrap an in-memory database. Such a store cannot be reloaded from disk.
    pub fn from_database(database: CardDatabase) -> Self {
        Self {
            current: RwLock::new(Arc::new(database)),
            source: None,
        }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<CardDatabase> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Publish a new snapshot.
    pub fn replace(&self, database: CardDatabase) {
        let database = Arc::new(database);
        match self.current.write() {
            Ok(mut guard) => *guard = database,
            Err(poisoned) => *poisoned.into_inner() = database,
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Re-read the source file and swap the snapshot. On failure the
    /// previous snapshot stays in place.
    pub fn reload(&self) -> Result<usize> {
        let path = self
            .source
            .as_ref()
            .ok_or_else(|| ApiError::BadRequest("card database has no source file".to_string()))?;

        let database = CardDatabase::load(path).map_err(|e| {
            tracing::warn!("Keeping previous card database, reload failed: {}", e);
            e
        })?;

        let count = database.len();
        self.replace(database);
        tracing::info!("Card database reloaded ({} cards)", count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decklist_core::{CardLookup, CardRecord};

    fn write_db(file: &tempfile::NamedTempFile, json: &str) {
        std::fs::write(file.path(), json).unwrap();
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let store = CardStore::from_database(CardDatabase::from_records([(
            "mountain",
            CardRecord::Types(vec!["Land".into()]),
        )]));

        let before = store.snapshot();
        store.replace(CardDatabase::default());

        assert!(before.contains("mountain"));
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_reload_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_db(&file, r#"{"mountain": ["Land"]}"#);

        let store = CardStore::load(file.path()).unwrap();
        assert_eq!(store.snapshot().len(), 1);

        write_db(&file, r#"{"mountain": ["Land"], "island": ["Land"]}"#);
        assert_eq!(store.reload().unwrap(), 2);
        assert!(store.snapshot().contains("island"));
    }

    #[test]
    fn test_failed_reload_keeps_snapshot() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_db(&file, r#"{"mountain": ["Land"]}"#);
        let store = CardStore::load(file.path()).unwrap();

        write_db(&file, "not json");
        assert!(store.reload().is_err());
        assert!(store.snapshot().contains("mountain"));
    }

    #[test]
    fn test_in_memory_store_cannot_reload() {
        let store = CardStore::from_database(CardDatabase::default());
        assert!(matches!(store.reload(), Err(ApiError::BadRequest(_))));
    }
}
