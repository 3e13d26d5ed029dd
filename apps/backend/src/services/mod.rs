pub mod card_store;
pub mod watcher;
