//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! `blog::BlogError` rendered through `kernel::error::AppError`.

use axum::Router;
use blog::{BlogConfig, SqliteGateway, blog_router};
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,blog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config()?;

    // Storage: one connection per request, opened by the context binder
    let gateway = SqliteGateway::from_url(&config.database_url)?;

    // Fail fast if the database cannot be created or migrated
    gateway.open().await?.close().await?;
    tracing::info!(database_url = %config.database_url, "Storage ready");

    // Build router
    let app = Router::new()
        .merge(blog_router(gateway, config))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = env::var("LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_config() -> anyhow::Result<BlogConfig> {
    let mut config = if cfg!(debug_assertions) {
        BlogConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 = env::var("SESSION_SECRET")
            .map_err(|_| anyhow::anyhow!("SESSION_SECRET must be set in production"))?;
        let secret_bytes = platform::crypto::from_base64(secret_b64.trim())?;
        let session_secret: [u8; 32] = secret_bytes
            .try_into()
            .map_err(|_| anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes"))?;
        BlogConfig {
            session_secret,
            ..BlogConfig::default()
        }
    };

    if let Ok(database_url) = env::var("DATABASE_URL") {
        config.database_url = database_url;
    }

    Ok(config)
}
