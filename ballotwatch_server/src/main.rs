use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use ballotwatch_api::Client;
use ballotwatch_server::config::ServerConfig;
use ballotwatch_server::routes::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ballotwatch=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;

    // Credential is validated here, once; a bad key never becomes a
    // per-request configuration error.
    let civic = Client::new(config.civic_api_key.clone())
        .context("failed to construct civic API client")?;

    let app = routes::router(AppState::new(civic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
