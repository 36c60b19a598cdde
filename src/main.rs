mod config;
mod routes;

use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "abroad-advise failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = Arc::new(config::ServerConfig::from_env()?);
    let port = config.port;
    tracing::info!(api_base_url = %config.api_base_url, "backend API");

    let app = routes::app(config)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "abroad-advise listening");
    axum::serve(listener, app).await?;
    Ok(())
}
