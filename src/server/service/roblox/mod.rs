//! Roblox ranking provider.
//!
//! `RankProvider` is the single entry point for changing a member's role. The configured
//! credential decides how requests are authenticated:
//!
//! - **Cookie session** (`cookie`) - verifies the `.ROBLOSECURITY` cookie and fetches an
//!   `X-CSRF-TOKEN` before the role set
//! - **Open Cloud** (`open_cloud`) - attaches the `x-api-key` header
//!
//! Both strategies share role resolution and the role-set call itself.

pub mod cookie;
pub mod open_cloud;

use dioxus_logger::tracing;
use reqwest::{RequestBuilder, Response};
use serde_json::Value;

use crate::server::{
    config::{RobloxApiUrls, RobloxCredential},
    error::roblox::RobloxError,
    model::{
        rank::{RankChange, RankUpdate},
        roblox::{GroupRole, GroupRolesResponse, RobloxErrorsBody, RoleSetBody},
    },
};

/// Headers authenticating a role-set request.
#[derive(Default)]
pub struct RoleSetAuth {
    headers: Vec<(&'static str, String)>,
}

impl RoleSetAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    fn apply(&self, mut request: RequestBuilder) -> RequestBuilder {
        for (name, value) in &self.headers {
            request = request.header(*name, value);
        }
        request
    }
}

/// Changes group roles through the Roblox web API.
pub struct RankProvider<'a> {
    /// HTTP client for Roblox API requests.
    pub http_client: &'a reqwest::Client,
    /// Base URLs of the Roblox APIs.
    pub urls: &'a RobloxApiUrls,
    /// Credential selecting the authentication strategy.
    pub credential: &'a RobloxCredential,
}

impl<'a> RankProvider<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        urls: &'a RobloxApiUrls,
        credential: &'a RobloxCredential,
    ) -> Self {
        Self {
            http_client,
            urls,
            credential,
        }
    }

    /// Sets the target user's role in the group.
    ///
    /// Authenticates with the configured strategy, resolves the requested role id or rank
    /// number against the group's roles, then issues the role set. Nothing is retried.
    ///
    /// # Arguments
    /// - `group_id` - Group to change the role in
    /// - `change` - Validated rank change
    ///
    /// # Returns
    /// - `Ok(RankUpdate)` - Role changed
    /// - `Err(RobloxError::InvalidCookie)` - Session cookie rejected
    /// - `Err(RobloxError::RoleNotFound)` - No role in the group matches the request
    /// - `Err(RobloxError::Api)` - Roblox answered with a non-success status
    /// - `Err(RobloxError::Transport)` - Roblox could not be reached
    pub async fn set_rank(
        &self,
        group_id: u64,
        change: &RankChange,
    ) -> Result<RankUpdate, RobloxError> {
        let auth = match self.credential {
            RobloxCredential::Cookie(cookie) => {
                cookie::CookieSession::new(self.http_client, self.urls, cookie)
                    .authenticate()
                    .await?
            }
            RobloxCredential::ApiKey(api_key) => open_cloud::authenticate(api_key),
        };

        let role = self.resolve_role(group_id, change.desired_rank_id).await?;

        let response = self
            .set_role(group_id, change.target_user_id, role.id, &auth)
            .await?;

        Ok(RankUpdate {
            group_id,
            user_id: change.target_user_id,
            role,
            response,
        })
    }

    /// Finds the group role matching a role id or, failing that, a rank number.
    ///
    /// # Returns
    /// - `Ok(GroupRole)` - Matching role
    /// - `Err(RobloxError::RoleNotFound)` - No role has that id or rank
    pub async fn resolve_role(
        &self,
        group_id: u64,
        requested: i64,
    ) -> Result<GroupRole, RobloxError> {
        let url = format!("{}/v1/groups/{}/roles", self.urls.groups, group_id);

        let response = self.http_client.get(url).send().await?;
        let roles = ensure_success(response)
            .await?
            .json::<GroupRolesResponse>()
            .await?
            .roles;

        find_role(roles, requested).ok_or(RobloxError::RoleNotFound {
            group_id,
            requested,
        })
    }

    async fn set_role(
        &self,
        group_id: u64,
        user_id: i64,
        role_id: u64,
        auth: &RoleSetAuth,
    ) -> Result<Option<Value>, RobloxError> {
        let url = format!(
            "{}/v1/groups/{}/users/{}",
            self.urls.groups, group_id, user_id
        );

        tracing::debug!(
            "Setting role {} for user {} in group {}",
            role_id,
            user_id,
            group_id
        );

        let request = self.http_client.patch(url).json(&RoleSetBody { role_id });
        let response = auth.apply(request).send().await?;
        let text = ensure_success(response).await?.text().await?;

        Ok(serde_json::from_str::<Value>(&text)
            .ok()
            .filter(|body| !is_empty_body(body)))
    }
}

/// Picks the role whose id equals `requested`, otherwise the role whose rank does.
pub fn find_role(mut roles: Vec<GroupRole>, requested: i64) -> Option<GroupRole> {
    let index = roles
        .iter()
        .position(|role| i64::try_from(role.id).is_ok_and(|id| id == requested))
        .or_else(|| {
            roles
                .iter()
                .position(|role| i64::from(role.rank) == requested)
        })?;

    Some(roles.swap_remove(index))
}

/// Passes successful responses through and turns anything else into `RobloxError::Api`.
///
/// The error message starts with `Roblox responded with status code {status}` and is
/// followed by the first message of Roblox's `errors` envelope when present.
pub async fn ensure_success(response: Response) -> Result<Response, RobloxError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let body = serde_json::from_str::<Value>(&text).ok();

    let upstream_message = body
        .clone()
        .and_then(|body| serde_json::from_value::<RobloxErrorsBody>(body).ok())
        .and_then(|errors| errors.errors.into_iter().next())
        .map(|entry| entry.message)
        .filter(|message| !message.is_empty());

    let mut message = format!("Roblox responded with status code {}", status.as_u16());
    if let Some(upstream_message) = upstream_message {
        message.push_str(": ");
        message.push_str(&upstream_message);
    }

    Err(RobloxError::Api {
        status,
        message,
        body,
    })
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod test;
