//! Session cookie authentication.
//!
//! Roblox web endpoints authenticated by cookie require an `X-CSRF-TOKEN` on every
//! mutating request. The token is obtained by posting to the auth API's logout endpoint
//! without one: Roblox refuses with 403 and hands out a fresh token in the response
//! headers, without logging the session out.

use dioxus_logger::tracing;
use reqwest::{header::COOKIE, StatusCode};

use crate::server::{
    config::RobloxApiUrls,
    error::roblox::RobloxError,
    model::roblox::AuthenticatedUser,
    service::roblox::{ensure_success, RoleSetAuth},
};

pub static CSRF_HEADER: &str = "x-csrf-token";

/// Cookie-authenticated session for one request.
pub struct CookieSession<'a> {
    http_client: &'a reqwest::Client,
    urls: &'a RobloxApiUrls,
    cookie: &'a str,
}

impl<'a> CookieSession<'a> {
    pub fn new(http_client: &'a reqwest::Client, urls: &'a RobloxApiUrls, cookie: &'a str) -> Self {
        Self {
            http_client,
            urls,
            cookie,
        }
    }

    /// Verifies the cookie and prepares role-set headers.
    ///
    /// # Returns
    /// - `Ok(RoleSetAuth)` - Cookie and CSRF token headers
    /// - `Err(RobloxError::InvalidCookie)` - Roblox does not accept the cookie
    /// - `Err(RobloxError::UnexpectedResponse)` - No CSRF token was handed out
    pub async fn authenticate(&self) -> Result<RoleSetAuth, RobloxError> {
        let user = self.authenticated_user().await?;
        tracing::info!(
            "Logged in to Roblox as {} ({}, display name {})",
            user.name,
            user.id,
            user.display_name.as_deref().unwrap_or(user.name.as_str())
        );

        let token = self.csrf_token().await?;

        Ok(RoleSetAuth::new()
            .header("cookie", self.cookie_header())
            .header(CSRF_HEADER, token))
    }

    /// Resolves the account the cookie belongs to.
    pub async fn authenticated_user(&self) -> Result<AuthenticatedUser, RobloxError> {
        let response = self
            .http_client
            .get(format!("{}/v1/users/authenticated", self.urls.users))
            .header(COOKIE, self.cookie_header())
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(RobloxError::InvalidCookie);
        }

        Ok(ensure_success(response)
            .await?
            .json::<AuthenticatedUser>()
            .await?)
    }

    /// Obtains a CSRF token for the session.
    pub async fn csrf_token(&self) -> Result<String, RobloxError> {
        let response = self
            .http_client
            .post(format!("{}/v2/logout", self.urls.auth))
            .header(COOKIE, self.cookie_header())
            .send()
            .await?;

        if let Some(token) = response
            .headers()
            .get(CSRF_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|token| !token.is_empty())
        {
            return Ok(token.to_string());
        }

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(RobloxError::InvalidCookie);
        }

        Err(RobloxError::UnexpectedResponse(format!(
            "no {} header in response to CSRF token request (status {})",
            CSRF_HEADER,
            response.status().as_u16()
        )))
    }

    fn cookie_header(&self) -> String {
        format!(".ROBLOSECURITY={}", self.cookie)
    }
}
