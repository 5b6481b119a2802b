use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use test_utils::{fixture, roblox::MockRoblox};
use tower::ServiceExt;
use url::Url;

use crate::server::{
    config::{Config, RobloxApiUrls, RobloxCredential},
    startup,
    state::AppState,
};

mod docs;

/// Configuration pointing every Roblox API at `roblox_url`.
fn config(
    roblox_url: &str,
    credential: Option<RobloxCredential>,
    group_id: Option<u64>,
    webhook: Option<&str>,
) -> Config {
    Config {
        bind_address: "127.0.0.1:0".parse().unwrap(),
        credential,
        group_id,
        discord_webhook_url: webhook.map(|url| Url::parse(url).unwrap()),
        roblox: RobloxApiUrls {
            users: roblox_url.to_string(),
            auth: roblox_url.to_string(),
            groups: roblox_url.to_string(),
        },
    }
}

/// Complete Open Cloud configuration, optionally with a webhook.
fn api_key_config(roblox: &MockRoblox, webhook: Option<&str>) -> Config {
    config(
        &roblox.url(),
        Some(RobloxCredential::ApiKey(fixture::API_KEY.to_string())),
        Some(fixture::GROUP_ID),
        webhook,
    )
}

fn app(config: Config) -> Router {
    startup::app(AppState::new(config, reqwest::Client::new()))
}

/// Sends one request through the router and decodes the JSON answer.
///
/// Non-JSON answers decode to `Value::Null`.
async fn send(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn post(app: Router, body: &Value) -> (StatusCode, Value) {
    send(app, "POST", "/api/rank", &body.to_string()).await
}
