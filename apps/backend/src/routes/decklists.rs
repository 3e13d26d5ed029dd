//! Decklist endpoints

use axum::{extract::State, Json};
use decklist_core::{edit, parse_list, to_decklist_text, validate, DeckRules};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/decklists/parse
pub async fn parse(
    State(state): State<AppState>,
    Json(request): Json<DecklistRequest>,
) -> Result<Json<ParseResponse>> {
    let cards = state.cards.snapshot();
    let result = parse_list(&request.decklist, &*cards);
    let violations = validate(&result, &DeckRules::default());

    Ok(Json(ParseResponse::new(&result, &violations)))
}

/// POST /api/decklists/validate
pub async fn validate_decklist(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>> {
    let cards = state.cards.snapshot();
    let result = parse_list(&request.decklist, &*cards);
    let violations = validate(&result, &request.rules());

    tracing::debug!(
        "Validated decklist: {} maindeck, {} sideboard, {} violations",
        result.maindeck_count(),
        result.sideboard_count(),
        violations.len()
    );

    Ok(Json(ValidateResponse {
        valid: !violations.iter().any(DeckViolation::is_blocking),
        maindeck: result.maindeck_count(),
        sideboard: result.sideboard_count(),
        violations: violations.iter().map(ViolationResponse::from).collect(),
    }))
}

/// POST /api/decklists/edit
/// Applies one card edit and returns the rewritten deck list
pub async fn edit_decklist(
    State(state): State<AppState>,
    Json(request): Json<EditRequest>,
) -> Result<Json<EditResponse>> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("Card name is empty".to_string()));
    }

    let cards = state.cards.snapshot();
    let result = parse_list(&request.decklist, &*cards);
    let result = match request.amount {
        Some(amount) => edit::set_amount(&result, name, request.section, amount),
        None => edit::add_card(&result, name, request.section, &*cards),
    };
    let violations = validate(&result, &DeckRules::default());

    Ok(Json(EditResponse {
        decklist: to_decklist_text(&result),
        parsed: ParseResponse::new(&result, &violations),
    }))
}

/// POST /api/decklists/normalize
/// Returns the deck list rewritten as `<amount> <name>` lines
pub async fn normalize(
    State(state): State<AppState>,
    Json(request): Json<NormalizeRequest>,
) -> Result<Json<DecklistRequest>> {
    let cards = state.cards.snapshot();
    let mut result = parse_list(&request.decklist, &*cards);
    if request.resolved_only {
        result = edit::only_resolved(&result);
    }

    Ok(Json(DecklistRequest {
        decklist: to_decklist_text(&result),
    }))
}
