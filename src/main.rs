use std::sync::Arc;
use std::time::Duration;

use backend::config::settings::AppConfig;
use backend::infrastructure::storage::local::PdfStorage;
use backend::infrastructure::youtube::client::YouTubeClient;
use backend::state::AppState;
use backend::app;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting server...");

    let config = AppConfig::new();
    let port = config.server_port;

    let storage = PdfStorage::init(&config.pdf_output_dir).await?;
    let fetcher = YouTubeClient::new(Duration::from_secs(config.fetch_timeout_secs))?;

    let state = AppState::new(config, Arc::new(fetcher), storage);
    let app = app::create_app(state).await;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}
