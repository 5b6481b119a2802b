//! Mock Discord webhook sink.

use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

static WEBHOOK_PATH: &str = "/api/webhooks/1234567890/webhook-token";

pub struct MockWebhook {
    server: MockServer,
}

impl MockWebhook {
    /// Starts a webhook that answers `204 No Content`, like Discord without `?wait=true`.
    pub async fn start() -> Self {
        Self::respond_with(ResponseTemplate::new(204)).await
    }

    /// Starts a webhook that answers every post with `status`.
    pub async fn failing(status: u16) -> Self {
        Self::respond_with(ResponseTemplate::new(status).set_body_string("webhook failure")).await
    }

    async fn respond_with(response: ResponseTemplate) -> Self {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(WEBHOOK_PATH))
            .respond_with(response)
            .mount(&server)
            .await;

        Self { server }
    }

    /// Full webhook URL to configure in the service.
    pub fn url(&self) -> String {
        format!("{}{}", self.server.uri(), WEBHOOK_PATH)
    }

    /// JSON payloads posted to the webhook, in order.
    pub async fn payloads(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }
}
