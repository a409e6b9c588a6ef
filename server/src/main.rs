#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Ok(path) = dotenvy::dotenv() {
        tracing::info!(path = %path.display(), "loaded .env");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "rental site stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, origin = %config.site_origin, "rental site listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
