use axum::http::StatusCode;
use test_utils::roblox::MockRoblox;

use super::*;

/// Tests that the OpenAPI document is served and describes the rank endpoint.
///
/// Expected: 200 with a `post` operation under `/api/rank`
#[tokio::test]
async fn serves_openapi_document() {
    let roblox = MockRoblox::start().await;

    let (status, body) = send(
        app(api_key_config(&roblox, None)),
        "GET",
        "/api/openapi.json",
        "",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Rank Relay");
    assert!(body["paths"]["/api/rank"]["post"].is_object());
    assert!(body["components"]["schemas"]["SetRankDto"].is_object());
}
