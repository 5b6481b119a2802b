use axum::Router;
use dioxus_logger::tracing;
use tower_http::trace::TraceLayer;

use crate::server::{error::AppError, router::router, state::AppState};

static USER_AGENT: &str = concat!("rank-relay/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used for Roblox and Discord requests.
///
/// Redirects are disabled: neither Roblox nor Discord redirect API calls, and following
/// one would forward the session cookie or API key to another host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::InternalError)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
}

/// Builds the complete application: routes, state and request tracing.
///
/// No CORS layer is installed. Callers are game servers, and a CORS layer would answer
/// `OPTIONS` itself instead of the 405 fallback.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        },
    }
}
