//! Test fixtures and factory functions for creating test data.

use serde_json::json;

/// Card database JSON in the offline builder's format.
pub const CARD_DATABASE_JSON: &str = r#"{
    "lightning bolt": ["Instant"],
    "rift bolt": ["Sorcery"],
    "goblin guide": ["Creature"],
    "monastery swiftspear": ["Creature"],
    "mountain": ["Land"],
    "dryad arbor": ["Land", "Creature"],
    "pyroblast": ["Instant"],
    "roiling vortex": ["Enchantment"],
    "bounce chamber": "Attraction"
}"#;

/// Generate a burn deck list with the given maindeck and sideboard sizes.
///
/// The maindeck is filled with Mountains after a playset of Lightning Bolt,
/// the sideboard with Pyroblasts.
pub fn burn_decklist(maindeck: u32, sideboard: u32) -> String {
    let mut lines = Vec::new();
    let bolts = maindeck.min(4);
    if bolts > 0 {
        lines.push(format!("{} Lightning Bolt", bolts));
    }
    if maindeck > bolts {
        lines.push(format!("{} Mountain", maindeck - bolts));
    }
    if sideboard > 0 {
        lines.push("Sideboard".to_string());
        lines.push(format!("{} Pyroblast", sideboard));
    }
    lines.join("\n")
}

/// Create a parse/normalize request body.
pub fn decklist_request(decklist: &str) -> serde_json::Value {
    json!({ "decklist": decklist })
}

/// Create a validate request body with optional rule overrides.
pub fn validate_request(
    decklist: &str,
    min_maindeck: Option<u32>,
    max_sideboard: Option<u32>,
) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert("decklist".to_string(), json!(decklist));
    if let Some(min) = min_maindeck {
        obj.insert("min_maindeck".to_string(), json!(min));
    }
    if let Some(max) = max_sideboard {
        obj.insert("max_sideboard".to_string(), json!(max));
    }
    serde_json::Value::Object(obj)
}
