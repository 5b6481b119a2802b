use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ApiResponseDto;

pub static INVALID_INPUT_MESSAGE: &str = "Invalid input: targetUserID (or userId) and desiredRankId must be integers, initiatorUserID an integer and initiatorUsername a string.";

/// Errors detected in the inbound request before any upstream call is made.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Endpoint only accepts POST.
    #[error("Method Not Allowed: {0}. Only POST requests are accepted.")]
    MethodNotAllowed(Method),

    /// Request had no body at all.
    #[error("Missing request body.")]
    MissingBody,

    /// Body is not JSON, or is JSON but not an object.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    /// A field is missing or has the wrong JSON type.
    ///
    /// Carries a per-field type summary used only for logging.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Converts request errors into HTTP responses.
///
/// # Returns
/// - 405 Method Not Allowed - For `MethodNotAllowed`
/// - 400 Bad Request - For `MissingBody`, `MalformedBody` and `InvalidInput`
impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::info!("Rejected request: {}", self);

        let (status, message) = match self {
            Self::MethodNotAllowed(_) => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed. Only POST requests are accepted.",
            ),
            Self::MissingBody => (StatusCode::BAD_REQUEST, "Missing request body."),
            Self::MalformedBody(_) => (
                StatusCode::BAD_REQUEST,
                "Invalid request body: expected a JSON object.",
            ),
            Self::InvalidInput(_) => (StatusCode::BAD_REQUEST, INVALID_INPUT_MESSAGE),
        };

        (status, Json(ApiResponseDto::failure(message))).into_response()
    }
}
