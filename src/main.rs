//! Bistro Backend - Restaurant Ordering API
//! Mission: Serve the menu, reviews, carts, and user accounts behind a
//! JWT guard chain backed by MongoDB

use anyhow::{Context, Result};
use bistro_backend::{
    api::{create_router, AppState},
    auth::JwtHandler,
    config::Config,
    middleware::request_logging,
    store::Store,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env()?;

    let store = Store::connect(&config).await?;

    let jwt_handler = Arc::new(JwtHandler::new(
        config.access_token_secret.clone(),
        config.jwt_expiration_hours,
    ));

    let state = AppState {
        store: Arc::new(store),
        jwt_handler,
    };

    let app = create_router(state)
        .layer(axum::middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("🎯 Bistro backend listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Initialize tracing with env-filter overrides
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bistro_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
