mod common;

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use serde_json::json;
use trailpass::api::handlers::stages::{
    create_stage_handler, get_stage_handler, list_stages_handler, update_stage_handler,
};
use trailpass::domain::Collection;

use common::{InMemoryRecordStore, TestContext, create_test_state, stage_fixture};

fn make_server(ctx: &TestContext) -> TestServer {
    let app = Router::new()
        .route("/api/stages", get(list_stages_handler).post(create_stage_handler))
        .route(
            "/api/stages/{id}",
            get(get_stage_handler).patch(update_stage_handler),
        )
        .with_state(ctx.state.clone());
    TestServer::new(app).unwrap()
}

fn valid_body() -> serde_json::Value {
    json!({
        "name": "Seongsan Ridge",
        "region_id": 1,
        "distance_meters": 12400,
        "duration": { "hours": 5, "minutes": 10 },
        "open_time": "07:30:00",
        "close_time": "18:00:00",
        "difficulty": 3,
        "description": r#"[{"type":"paragraph","text":"Steep but rewarding."}]"#
    })
}

#[tokio::test]
async fn test_create_stage_success() {
    let ctx = create_test_state(InMemoryRecordStore::with(&[(Collection::Region, &[1])]));
    let server = make_server(&ctx);

    let response = server.post("/api/stages").json(&valid_body()).await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["statusCode"], 201);
    assert_eq!(body["data"]["duration"]["hours"], 5);
    assert_eq!(body["data"]["duration"]["minutes"], 10);
    assert_eq!(body["data"]["open_time"], "07:30:00");
}

#[tokio::test]
async fn test_create_stage_unknown_region_is_field_failure() {
    let ctx = create_test_state(InMemoryRecordStore::with(&[(Collection::Region, &[])]));
    let server = make_server(&ctx);

    let response = server.post("/api/stages").json(&valid_body()).await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert!(body["error"]["details"]["fields"]["region_id"].is_array());
}

#[tokio::test]
async fn test_create_stage_malformed_time_rejected() {
    let ctx = create_test_state(InMemoryRecordStore::with(&[(Collection::Region, &[1])]));
    let server = make_server(&ctx);

    let mut body = valid_body();
    body["open_time"] = json!("7:30:00");

    let response = server.post("/api/stages").json(&body).await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_stage_oversized_description_rejected() {
    let ctx = create_test_state(InMemoryRecordStore::with(&[(Collection::Region, &[1])]));
    let server = make_server(&ctx);

    let mut body = valid_body();
    body["description"] = json!(format!(
        r#"[{{"type":"paragraph","text":"{}"}}]"#,
        "a".repeat(4001)
    ));

    let response = server.post("/api/stages").json(&body).await;
    response.assert_status_bad_request();
    let parsed: serde_json::Value = response.json();
    assert!(parsed["error"]["details"]["fields"]["description"].is_array());
}

#[tokio::test]
async fn test_get_stage_flat_and_histogram_ratings() {
    let ctx = create_test_state(InMemoryRecordStore::default());
    ctx.stages.insert(stage_fixture(7, 1));
    let server = make_server(&ctx);

    let flat = server.get("/api/stages/7").await;
    flat.assert_status_ok();
    let flat_body: serde_json::Value = flat.json();
    assert_eq!(flat_body["data"]["rating_five_count"], 4);
    assert!(flat_body["data"].get("star_counts").is_none());

    let histogram = server.get("/api/stages/7?star_counts=true").await;
    histogram.assert_status_ok();
    let histogram_body: serde_json::Value = histogram.json();
    assert_eq!(histogram_body["data"]["star_counts"]["5"], 4);
    assert!(histogram_body["data"].get("rating_five_count").is_none());
}

#[tokio::test]
async fn test_get_stage_not_found() {
    let ctx = create_test_state(InMemoryRecordStore::default());
    let server = make_server(&ctx);

    let response = server.get("/api/stages/99").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_list_stages_envelope_and_total() {
    let ctx = create_test_state(InMemoryRecordStore::default());
    ctx.stages.insert(stage_fixture(1, 1));
    ctx.stages.insert(stage_fixture(2, 1));
    let server = make_server(&ctx);

    let response = server.get("/api/stages").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["statusCode"], 200);
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["stages"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_stages_bad_sort_falls_back() {
    let ctx = create_test_state(InMemoryRecordStore::default());
    ctx.stages.insert(stage_fixture(1, 1));
    let server = make_server(&ctx);

    // An unparseable sort value must not fail the request.
    let response = server.get("/api/stages?sort=no_such_column").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_update_stage_duration() {
    let ctx = create_test_state(InMemoryRecordStore::default());
    ctx.stages.insert(stage_fixture(3, 1));
    let server = make_server(&ctx);

    let response = server
        .patch("/api/stages/3")
        .json(&json!({ "duration": { "hours": 2, "minutes": 45 } }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["duration"]["hours"], 2);
    assert_eq!(body["data"]["duration"]["minutes"], 45);
}

#[tokio::test]
async fn test_update_stage_rejects_61_minutes() {
    let ctx = create_test_state(InMemoryRecordStore::default());
    ctx.stages.insert(stage_fixture(3, 1));
    let server = make_server(&ctx);

    let response = server
        .patch("/api/stages/3")
        .json(&json!({ "duration": { "hours": 2, "minutes": 61 } }))
        .await;

    response.assert_status_bad_request();
}
