//! Roblox provider failures and their translation into HTTP responses.
//!
//! Upstream failures are classified through `FAILURE_TABLE`, an ordered list of
//! status-code and message-substring matchers. The first matching row decides the
//! `FailureKind`; transport errors that never produced a response fall back to
//! `FailureKind::NoResponse` and everything else to `FailureKind::Unclassified`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use serde_json::Value;
use thiserror::Error;

use crate::model::api::ApiResponseDto;

#[derive(Error, Debug)]
pub enum RobloxError {
    /// HTTP request to Roblox failed at the transport level, or the answer could not be read.
    #[error("Roblox request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The session cookie was rejected while resolving the authenticated user.
    #[error("Invalid security cookie: Roblox rejected the session credential")]
    InvalidCookie,

    /// Roblox answered with a non-success status code.
    #[error("{message}")]
    Api {
        /// Status code returned by Roblox
        status: StatusCode,
        /// Summary including the status code and the first upstream error message
        message: String,
        /// Raw response body when it was valid JSON
        body: Option<Value>,
    },

    /// Neither a role id nor a rank number in the group matched the requested value.
    #[error("Role {requested} does not exist in group {group_id}")]
    RoleNotFound {
        /// Group that was searched
        group_id: u64,
        /// Requested role id or rank number
        requested: i64,
    },

    /// Roblox answered successfully but without something the protocol requires.
    #[error("Unexpected response from Roblox: {0}")]
    UnexpectedResponse(String),
}

/// Stable taxonomy of provider failures surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    BadRequest,
    AuthenticationFailed,
    Forbidden,
    NotFound,
    RateLimited,
    NoResponse,
    Unclassified,
}

impl FailureKind {
    pub fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::NoResponse | Self::Unclassified => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. `raw` is only used by `Unclassified`.
    pub fn message(self, raw: &str) -> String {
        match self {
            Self::BadRequest => "Bad Request to Roblox API. Check Group ID or Role ID.".to_string(),
            Self::AuthenticationFailed => {
                "Authentication failed: Invalid Roblox credential.".to_string()
            }
            Self::Forbidden => {
                "Roblox API Forbidden: Check group permissions or user status.".to_string()
            }
            Self::NotFound => "Not Found: Group, user or role may not exist.".to_string(),
            Self::RateLimited => "Roblox API Rate Limited. Try again later.".to_string(),
            Self::NoResponse => "No response from Roblox API.".to_string(),
            Self::Unclassified => format!("Server-side error during ranking: {}", raw),
        }
    }
}

/// Single row condition of the failure table.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    Status(u16),
    Message(&'static str),
}

impl Matcher {
    fn matches(self, status: Option<StatusCode>, message: &str) -> bool {
        match self {
            Self::Status(code) => status.is_some_and(|s| s.as_u16() == code),
            Self::Message(pattern) => message.contains(pattern),
        }
    }
}

/// Ordered classification rules; first match wins.
pub const FAILURE_TABLE: &[(Matcher, FailureKind)] = &[
    (
        Matcher::Message("Invalid security cookie"),
        FailureKind::AuthenticationFailed,
    ),
    (Matcher::Status(401), FailureKind::AuthenticationFailed),
    (
        Matcher::Message("Roblox responded with status code 403"),
        FailureKind::Forbidden,
    ),
    (Matcher::Status(403), FailureKind::Forbidden),
    (Matcher::Message("Rate Limit"), FailureKind::RateLimited),
    (Matcher::Status(429), FailureKind::RateLimited),
    (Matcher::Status(404), FailureKind::NotFound),
    (Matcher::Status(400), FailureKind::BadRequest),
];

/// Looks up the first table row matching the status code or message.
pub fn classify(status: Option<StatusCode>, message: &str) -> Option<FailureKind> {
    FAILURE_TABLE
        .iter()
        .find(|(matcher, _)| matcher.matches(status, message))
        .map(|(_, kind)| *kind)
}

impl RobloxError {
    /// Status code attributed to this failure, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(err) => err.status(),
            Self::Api { status, .. } => Some(*status),
            Self::RoleNotFound { .. } => Some(StatusCode::NOT_FOUND),
            Self::InvalidCookie | Self::UnexpectedResponse(_) => None,
        }
    }

    pub fn kind(&self) -> FailureKind {
        if let Some(kind) = classify(self.status(), &self.to_string()) {
            return kind;
        }

        match self {
            Self::Transport(err) if err.is_connect() || err.is_timeout() || err.is_request() => {
                FailureKind::NoResponse
            }
            _ => FailureKind::Unclassified,
        }
    }

    /// Diagnostic payload for the `error` field: the upstream body when there is one,
    /// otherwise the raw error text.
    pub fn detail(&self) -> Value {
        match self {
            Self::Api {
                body: Some(body), ..
            } => body.clone(),
            err => Value::String(err.to_string()),
        }
    }
}

/// Converts provider failures into HTTP responses.
///
/// # Returns
/// - Status and message decided by `RobloxError::kind()`, with the upstream body or raw
///   error text attached as `error`
impl IntoResponse for RobloxError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let raw = self.to_string();

        tracing::error!("Error while changing rank ({:?}): {}", kind, raw);

        let body = ApiResponseDto::failure(kind.message(&raw)).with_error(self.detail());

        (kind.status(), Json(body)).into_response()
    }
}
