mod common;

use axum::routing::get;
use axum::{Router, middleware};
use axum_test::TestServer;
use serde_json::json;
use trailpass::api::handlers::users::{get_profile_handler, update_profile_handler};
use trailpass::api::middleware::auth;

use common::{InMemoryRecordStore, TestContext, bearer_token, create_test_state, user_fixture};

fn make_server(ctx: &TestContext) -> TestServer {
    let app = Router::new()
        .route(
            "/api/users/me",
            get(get_profile_handler).patch(update_profile_handler),
        )
        .route_layer(middleware::from_fn(auth::layer))
        .with_state(ctx.state.clone());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_get_own_profile() {
    let ctx = create_test_state(InMemoryRecordStore::default());
    ctx.users.insert(user_fixture(9, "KR"));
    let server = make_server(&ctx);

    let response = server
        .get("/api/users/me")
        .authorization_bearer(bearer_token(9))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["id"], 9);
    assert_eq!(body["data"]["country_code"], "KR");
}

#[tokio::test]
async fn test_update_phone_matching_country() {
    let ctx = create_test_state(InMemoryRecordStore::default());
    ctx.users.insert(user_fixture(9, "GB"));
    let server = make_server(&ctx);

    let response = server
        .patch("/api/users/me")
        .authorization_bearer(bearer_token(9))
        .json(&json!({ "phone_number": "07911123456" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["phone_number"], "07911123456");
}

#[tokio::test]
async fn test_same_phone_rejected_for_other_country() {
    // The number that passed for GB above must fail when the stored
    // profile's country is KR.
    let ctx = create_test_state(InMemoryRecordStore::default());
    ctx.users.insert(user_fixture(9, "KR"));
    let server = make_server(&ctx);

    let response = server
        .patch("/api/users/me")
        .authorization_bearer(bearer_token(9))
        .json(&json!({ "phone_number": "07911123456" }))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert!(body["error"]["details"]["fields"]["phone_number"].is_array());
}

#[tokio::test]
async fn test_country_change_revalidates_stored_phone() {
    // Switching the country without touching the phone must re-check the
    // stored phone against the new country.
    let ctx = create_test_state(InMemoryRecordStore::default());
    let mut user = user_fixture(9, "GB");
    user.phone_number = Some("07911123456".to_string());
    ctx.users.insert(user);
    let server = make_server(&ctx);

    let response = server
        .patch("/api/users/me")
        .authorization_bearer(bearer_token(9))
        .json(&json!({ "country_code": "KR" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_update_passport_for_country() {
    let ctx = create_test_state(InMemoryRecordStore::default());
    ctx.users.insert(user_fixture(9, "KR"));
    let server = make_server(&ctx);

    let response = server
        .patch("/api/users/me")
        .authorization_bearer(bearer_token(9))
        .json(&json!({ "passport_number": "M12345678" }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_profile_requires_token() {
    let ctx = create_test_state(InMemoryRecordStore::default());
    let server = make_server(&ctx);

    server.get("/api/users/me").await.assert_status_unauthorized();
}
