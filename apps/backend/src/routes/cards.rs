//! Card database endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use decklist_core::{classify, CardLookup, CardRecord, Section};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/cards/:name
pub async fn lookup(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CardLookupResponse>> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("Card name is empty".to_string()));
    }

    let cards = state.cards.snapshot();
    let classification = classify(name, Section::Maindeck, &*cards);
    let types = match cards.lookup(&name.to_lowercase()) {
        Some(CardRecord::Types(types)) => types.clone(),
        Some(CardRecord::Attraction) => vec![CardCategory::Attraction.to_string()],
        None => Vec::new(),
    };

    Ok(Json(CardLookupResponse {
        name: name.to_string(),
        resolved: classification.resolved,
        category: classification.category,
        types,
    }))
}

/// POST /api/cards/reload
/// Re-reads the card database file and swaps in the new snapshot
pub async fn reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>> {
    let store = state.cards.clone();
    let cards = tokio::task::spawn_blocking(move || store.reload())
        .await
        .map_err(|e| ApiError::Internal(format!("Reload task failed: {}", e)))??;

    Ok(Json(ReloadResponse { cards }))
}
