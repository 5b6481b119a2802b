mod model;
mod server;

use dioxus_logger::tracing::{self, Level};

use crate::server::{config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = Config::from_env()?;
    config.log_summary();

    let http_client = startup::setup_reqwest_client()?;
    let bind_address = config.bind_address;

    let app = startup::app(AppState::new(config, http_client));

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    tracing::info!("Starting server on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
