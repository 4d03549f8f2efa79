mod common;

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use serde_json::json;
use trailpass::api::handlers::badges::{
    create_badge_handler, delete_badge_handler, get_badge_handler, list_badges_handler,
};
use trailpass::domain::Collection;
use trailpass::domain::entities::Badge;

use common::{InMemoryRecordStore, TestContext, create_test_state};

fn make_server(ctx: &TestContext) -> TestServer {
    let app = Router::new()
        .route(
            "/api/badges",
            get(list_badges_handler).post(create_badge_handler),
        )
        .route(
            "/api/badges/{id}",
            get(get_badge_handler).delete(delete_badge_handler),
        )
        .with_state(ctx.state.clone());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_create_badge_success() {
    let ctx = create_test_state(InMemoryRecordStore::with(&[(Collection::Stage, &[5])]));
    let server = make_server(&ctx);

    let response = server
        .post("/api/badges")
        .json(&json!({
            "stage_id": 5,
            "name": "Summit Finisher",
            "image_key": "uploads/abc123def456.png"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["stage_id"], 5);
}

#[tokio::test]
async fn test_create_badge_for_missing_stage_is_404() {
    // Missing stage surfaces as not-found, not as a field failure.
    let ctx = create_test_state(InMemoryRecordStore::with(&[(Collection::Stage, &[])]));
    let server = make_server(&ctx);

    let response = server
        .post("/api/badges")
        .json(&json!({
            "stage_id": 99,
            "name": "Summit Finisher",
            "image_key": "uploads/abc123def456.png"
        }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_badge_removes_artwork() {
    let ctx = create_test_state(InMemoryRecordStore::default());
    ctx.badges.insert(Badge {
        id: 1,
        stage_id: 5,
        name: "Summit Finisher".to_string(),
        image_key: "uploads/abc123def456.png".to_string(),
        created_at: chrono::Utc::now(),
    });
    let server = make_server(&ctx);

    let response = server.delete("/api/badges/1").await;
    response.assert_status_ok();

    let deleted = ctx.media.deleted.lock().unwrap();
    assert_eq!(deleted.as_slice(), ["uploads/abc123def456.png"]);
}

#[tokio::test]
async fn test_delete_missing_badge_is_404() {
    let ctx = create_test_state(InMemoryRecordStore::default());
    let server = make_server(&ctx);

    let response = server.delete("/api/badges/1").await;
    response.assert_status_not_found();

    assert!(ctx.media.deleted.lock().unwrap().is_empty());
}
