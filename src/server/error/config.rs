use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ApiResponseDto;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but cannot be used.
    ///
    /// Only fatal for settings the process cannot start without (listen address). Ranking
    /// settings are validated lazily so a misconfigured deployment still answers requests.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// Raw value read from the environment
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Neither a session cookie nor an Open Cloud API key is configured.
    #[error("Neither ROBLOX_OPEN_CLOUD_API_KEY nor ROBLOX_COOKIE is set")]
    MissingCredential,

    /// `GROUP_ID` is missing or not a positive integer.
    #[error("GROUP_ID is not set or is not a valid number")]
    InvalidGroupId,
}

/// Converts configuration errors into HTTP responses.
///
/// Every configuration problem results in 500 Internal Server Error with a fixed message;
/// the precise cause is only logged.
impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        tracing::error!("Server configuration error: {}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponseDto::failure("Server configuration error.")),
        )
            .into_response()
    }
}
