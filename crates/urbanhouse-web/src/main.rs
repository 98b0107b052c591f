mod api;
mod config;
mod dto;
mod error;
mod state;
mod ws;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use urbanhouse_core::ListingStore;

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "urbanhouse_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::load()?;
    let bind_addr = config.bind_addr;

    let listings = &config.site.listings;
    let store = ListingStore::load(&listings.path)
        .with_context(|| format!("failed to load listings from {}", listings.path.display()))?
        .with_featured_limit(listings.featured_limit);

    let state = AppState {
        config: Arc::new(config),
        store,
    };

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("urbanhouse-web listening on http://{}", bind_addr);
    axum::serve(listener, app(state)).await?;

    Ok(())
}

/// Builds the full router: JSON API under `/api`, carousel socket under `/ws`.
pub(crate) fn app(state: AppState) -> Router {
    // Read-only site: listings are only ever fetched
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .nest("/api", api::router())
        .nest("/ws", ws::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
