use anyhow::Result;
use postpulse_api::app;
use postpulse_api::state::AppState;
use postpulse_client::DEFAULT_SOURCE_URL;
use postpulse_processing::DEFAULT_FETCH_LIMIT;
use postpulse_store::DEFAULT_OUTPUT_PATH;
use tokio::net::TcpListener;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let source_url =
        std::env::var("SOURCE_URL").unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string());
    let fetch_limit = std::env::var("FETCH_LIMIT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_FETCH_LIMIT);
    let output_path =
        std::env::var("OUTPUT_PATH").unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string());
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    let state = AppState::new(&source_url, fetch_limit, &output_path)?;
    let router = app(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
