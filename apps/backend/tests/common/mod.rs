//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up the router with a card database
//! - Helper functions for creating request bodies
//!
//! No external services are required; the card database is written to a
//! temporary file so reload tests can rewrite it.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use tempfile::NamedTempFile;

use decklist_backend::services::card_store::CardStore;
use decklist_backend::{router, AppState};

/// Test context holding the card store and router.
pub struct TestContext {
    pub cards: Arc<CardStore>,
    database_file: NamedTempFile,
    app: Router,
}

impl TestContext {
    /// Create a new test context backed by the fixture card database.
    ///
    /// # Panics
    /// Panics if the temporary database file cannot be written or loaded.
    pub fn new() -> Self {
        let database_file = NamedTempFile::new().expect("Failed to create temp file");
        std::fs::write(database_file.path(), fixtures::CARD_DATABASE_JSON)
            .expect("Failed to write card database");

        let cards = Arc::new(
            CardStore::load(database_file.path()).expect("Failed to load card database"),
        );

        let app = router(AppState {
            cards: cards.clone(),
        });

        Self {
            cards,
            database_file,
            app,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Overwrite the card database file (without reloading).
    pub fn rewrite_database(&self, json: &str) {
        std::fs::write(self.database_file.path(), json).expect("Failed to rewrite card database");
    }
}
