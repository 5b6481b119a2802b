//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed by
//! the handlers. The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.
//!
//! The state includes:
//! - Process configuration (credential, group, webhook, upstream URLs)
//! - HTTP client for Roblox and Discord requests

use std::sync::Arc;

use crate::server::config::Config;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: the configuration sits behind an `Arc` and
/// `reqwest::Client` uses an `Arc` internally. Nothing in here is mutable, so requests
/// never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    /// Configuration read at startup.
    ///
    /// Ranking settings may be incomplete; handlers re-check them on every request.
    pub config: Arc<Config>,

    /// HTTP client for external API requests.
    ///
    /// Configured without redirects. Used for the Roblox API and the Discord webhook.
    pub http_client: reqwest::Client,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `config` - Process configuration
    /// - `http_client` - HTTP client for external API requests
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(config: Config, http_client: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            http_client,
        }
    }
}
