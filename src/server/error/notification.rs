use axum::http::StatusCode;
use thiserror::Error;

/// Failures while posting a rank change notification.
///
/// Never converted into a response: the rank service logs these and carries on with the
/// response it already computed.
#[derive(Error, Debug)]
pub enum NotificationError {
    /// Webhook could not be reached.
    #[error("Failed to send Discord webhook notification: {0}")]
    Request(#[from] reqwest::Error),

    /// Discord answered with a non-success status.
    #[error("Discord webhook responded with status {status}: {body}")]
    Rejected {
        /// Status code returned by Discord
        status: StatusCode,
        /// Response body, possibly empty
        body: String,
    },

    /// Failure to convert the current time to a Discord timestamp.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },
}
