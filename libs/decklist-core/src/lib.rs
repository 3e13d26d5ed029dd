//! Decklist parsing and classification engine.
//!
//! Provides:
//! - Section splitting (maindeck / sideboard) for pasted deck lists
//! - Line tokenizing for `3 Name`, `3x Name`, `x3 Name` and Arena exports
//! - Card classification against an injected card database
//! - Round-trip export, deck validation and functional edits

pub mod card_db;
pub mod classifier;
pub mod edit;
pub mod error;
pub mod export;
pub mod parser;
pub mod splitter;
pub mod tokenizer;
pub mod types;
pub mod validation;

pub use card_db::{CardDatabase, CardLookup, CardRecord};
pub use classifier::{classify, Classification, CATEGORY_PRECEDENCE};
pub use error::{CardDatabaseError, Result};
pub use export::to_decklist_text;
pub use parser::parse_list;
pub use splitter::{split_sections, Sections};
pub use tokenizer::{tokenize_line, CardLine};
pub use types::{CardCategory, CardEntry, ParseResult, Section};
pub use validation::{validate, DeckRules, DeckViolation};
