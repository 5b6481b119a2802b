//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into the `{success:false, message, error?}` envelope. The `AppError`
//! enum is the top-level error type: it wraps the domain errors, each of which owns its own
//! status code mapping, and implements `IntoResponse` for use as a handler return type.
//!
//! `NotificationError` is not part of `AppError`: webhook failures are logged
//! by the rank service and never reach a response.

pub mod config;
pub mod notification;
pub mod request;
pub mod roblox;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ApiResponseDto,
    server::error::{config::ConfigError, request::RequestError, roblox::RobloxError},
};

/// Top-level application error type.
///
/// Aggregates every error that can end a request early and provides automatic conversion
/// to HTTP responses. Domain errors delegate to their own `IntoResponse` implementation.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or the per-request completeness check.
    ///
    /// Always results in 500 Internal Server Error.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Inbound request rejected before any upstream call.
    ///
    /// Delegates to `RequestError::into_response()` (405 or 400).
    #[error(transparent)]
    RequestErr(#[from] RequestError),

    /// Roblox rejected or failed the rank change.
    ///
    /// Delegates to `RobloxError::into_response()`, which classifies the failure.
    #[error(transparent)]
    RobloxErr(#[from] RobloxError),

    /// I/O error, typically binding the listener during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 / 405 - For `RequestErr`, delegated to `RequestError::into_response()`
/// - 401 / 403 / 404 / 429 / 500 - For `RobloxErr`, delegated to `RobloxError::into_response()`
/// - 500 Internal Server Error - For configuration, I/O and internal errors
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigErr(err) => err.into_response(),
            Self::RequestErr(err) => err.into_response(),
            Self::RobloxErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponseDto::failure("Internal server error")),
        )
            .into_response()
    }
}
