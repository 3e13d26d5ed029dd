//! Card database API tests.

mod common;

use axum_test::TestServer;
use pretty_assertions::assert_eq;

use common::fixtures;
use common::TestContext;

/// Test lookup of a multi-typed card uses the first matching category.
#[tokio::test]
async fn test_lookup_dryad_arbor() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/cards/Dryad%20Arbor").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["name"], "Dryad Arbor");
    assert_eq!(body["resolved"], true);
    assert_eq!(body["category"], "Land");
    assert_eq!(body["types"], serde_json::json!(["Land", "Creature"]));
}

/// Test lookup is case-insensitive.
#[tokio::test]
async fn test_lookup_case_insensitive() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/cards/LIGHTNING%20BOLT").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["category"], "Instant");
}

/// Test attractions report their marker type.
#[tokio::test]
async fn test_lookup_attraction() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/cards/Bounce%20Chamber").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["category"], "Attraction");
    assert_eq!(body["types"], serde_json::json!(["Attraction"]));
}

/// Test unknown names are returned as unresolved rather than an error.
#[tokio::test]
async fn test_lookup_unknown() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/cards/Mystery%20Card").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["resolved"], false);
    assert_eq!(body["category"], "Other");
    assert!(body["types"].as_array().unwrap().is_empty());
}

/// Test blank names are rejected.
#[tokio::test]
async fn test_lookup_blank_name() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/cards/%20%20").await;

    response.assert_status_bad_request();
}

/// Test reload picks up a rewritten database file.
#[tokio::test]
async fn test_reload() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    ctx.rewrite_database(r#"{"mystery card": ["Artifact"]}"#);

    let response = server.post("/api/cards/reload").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["cards"], 1);

    let response = server.get("/api/cards/Mystery%20Card").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["category"], "Artifact");

    let response = server.get("/api/cards/Lightning%20Bolt").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["resolved"], false);
}

/// Test a failed reload keeps serving the previous database.
#[tokio::test]
async fn test_reload_failure_keeps_snapshot() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    ctx.rewrite_database("{ not json");

    let response = server.post("/api/cards/reload").await;
    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "card_database_error");

    let response = server
        .post("/api/decklists/parse")
        .json(&fixtures::decklist_request("4 Lightning Bolt"))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["cards"][0]["category"], "Instant");
    assert_eq!(ctx.cards.snapshot().len(), 9);
}
