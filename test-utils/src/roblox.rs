//! Mock Roblox web API.
//!
//! One `wiremock` server plays the users, auth and groups APIs; point all three base URLs
//! of the service configuration at `MockRoblox::url()`. Any request without a mounted mock
//! is answered with wiremock's default 404.

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

use crate::fixture::{self, RoleFixture};

pub struct MockRoblox {
    server: MockServer,
}

impl MockRoblox {
    /// Starts a new mock server on a random port.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Returns the base URL of the mock server, without trailing slash.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Serves the role list of a group.
    pub async fn with_roles(&self, group_id: u64, roles: &[RoleFixture]) {
        Mock::given(method("GET"))
            .and(path(format!("/v1/groups/{}/roles", group_id)))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixture::roles_body(group_id, roles)),
            )
            .mount(&self.server)
            .await;
    }

    /// Accepts `cookie` as a valid session belonging to the fixture bot account.
    pub async fn with_authenticated_user(&self, cookie: &str) {
        Mock::given(method("GET"))
            .and(path("/v1/users/authenticated"))
            .and(header("cookie", cookie_header(cookie).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": fixture::BOT_USER_ID,
                "name": fixture::BOT_USERNAME,
                "displayName": fixture::BOT_USERNAME,
            })))
            .mount(&self.server)
            .await;
    }

    /// Rejects every session cookie.
    pub async fn reject_cookie(&self) {
        Mock::given(method("GET"))
            .and(path("/v1/users/authenticated"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(fixture::errors_body(0, "Authorization has been denied for this request.")),
            )
            .mount(&self.server)
            .await;
    }

    /// Hands out `token` the way Roblox does: a 403 carrying the `x-csrf-token` header.
    pub async fn with_csrf_token(&self, cookie: &str, token: &str) {
        Mock::given(method("POST"))
            .and(path("/v2/logout"))
            .and(header("cookie", cookie_header(cookie).as_str()))
            .respond_with(
                ResponseTemplate::new(403)
                    .insert_header("x-csrf-token", token)
                    .set_body_json(fixture::errors_body(0, "Token Validation Failed")),
            )
            .mount(&self.server)
            .await;
    }

    /// Full cookie handshake for `fixture::COOKIE` and `fixture::CSRF_TOKEN`.
    pub async fn with_cookie_session(&self) {
        self.with_authenticated_user(fixture::COOKIE).await;
        self.with_csrf_token(fixture::COOKIE, fixture::CSRF_TOKEN)
            .await;
    }

    /// Accepts a role set of `user_id` to `role_id`, answering with an empty object.
    pub async fn accept_role_set(&self, group_id: u64, user_id: i64, role_id: u64) {
        self.respond_to_role_set(
            group_id,
            user_id,
            Some(role_id),
            ResponseTemplate::new(200).set_body_json(json!({})),
        )
        .await;
    }

    /// Answers role sets of `user_id` with an arbitrary response.
    ///
    /// When `role_id` is given, only requests whose body is `{"roleId": role_id}` match.
    pub async fn respond_to_role_set(
        &self,
        group_id: u64,
        user_id: i64,
        role_id: Option<u64>,
        response: ResponseTemplate,
    ) {
        let mut mock = Mock::given(method("PATCH"))
            .and(path(format!("/v1/groups/{}/users/{}", group_id, user_id)));

        if let Some(role_id) = role_id {
            mock = mock.and(body_json(json!({ "roleId": role_id })));
        }

        mock.respond_with(response).mount(&self.server).await;
    }

    /// Answers role sets of `user_id` with `status` and a Roblox error envelope.
    pub async fn fail_role_set(&self, group_id: u64, user_id: i64, status: u16, message: &str) {
        self.respond_to_role_set(
            group_id,
            user_id,
            None,
            ResponseTemplate::new(status).set_body_json(fixture::errors_body(0, message)),
        )
        .await;
    }

    /// Returns all requests received by the server.
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Returns the role-set (`PATCH`) requests received by the server.
    pub async fn role_set_requests(&self) -> Vec<Request> {
        self.requests()
            .await
            .into_iter()
            .filter(|request| request.method.as_str() == "PATCH")
            .collect()
    }

    /// Decodes the JSON body of a recorded request.
    pub fn json_body(request: &Request) -> Value {
        serde_json::from_slice(&request.body).unwrap_or(Value::Null)
    }
}

fn cookie_header(cookie: &str) -> String {
    format!(".ROBLOSECURITY={}", cookie)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the CSRF mock behaves like Roblox.
    ///
    /// Expected: 403 with the token in the `x-csrf-token` header
    #[tokio::test]
    async fn csrf_endpoint_hands_out_token_with_403() {
        let roblox = MockRoblox::start().await;
        roblox.with_cookie_session().await;

        let response = reqwest::Client::new()
            .post(format!("{}/v2/logout", roblox.url()))
            .header("cookie", cookie_header(fixture::COOKIE))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 403);
        assert_eq!(
            response.headers().get("x-csrf-token").unwrap(),
            fixture::CSRF_TOKEN
        );
    }

    /// Tests that only PATCH requests are reported as role sets.
    ///
    /// Expected: one role-set request out of two received
    #[tokio::test]
    async fn role_set_requests_filters_patch() {
        let roblox = MockRoblox::start().await;
        roblox.with_roles(fixture::GROUP_ID, &fixture::roles()).await;
        roblox
            .accept_role_set(fixture::GROUP_ID, fixture::TARGET_USER_ID, fixture::OFFICER.0)
            .await;

        let client = reqwest::Client::new();
        client
            .get(format!("{}/v1/groups/{}/roles", roblox.url(), fixture::GROUP_ID))
            .send()
            .await
            .unwrap();
        let response = client
            .patch(format!(
                "{}/v1/groups/{}/users/{}",
                roblox.url(),
                fixture::GROUP_ID,
                fixture::TARGET_USER_ID
            ))
            .json(&json!({ "roleId": fixture::OFFICER.0 }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(roblox.requests().await.len(), 2);

        let role_sets = roblox.role_set_requests().await;
        assert_eq!(role_sets.len(), 1);
        assert_eq!(
            MockRoblox::json_body(&role_sets[0]),
            json!({ "roleId": fixture::OFFICER.0 })
        );
    }
}
