//! HTTP API layer with Axum routes and extractors.
//!
//! This crate provides:
//! - REST API routes over the marketplace ledger
//! - The caller-identity extractor
//! - Response types and error payloads

pub mod extractors;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use tessera_core::marketplace::Ledger;

/// Application state shared across handlers.
///
/// The ledger is the only shared resource; the write lock serializes id
/// allocation and the payment/record update, so concurrent double-purchases
/// resolve to exactly one success.
#[derive(Clone, Default)]
pub struct AppState {
    /// The marketplace ledger.
    pub ledger: Arc<RwLock<Ledger>>,
}

impl AppState {
    /// Creates state around a fresh, empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
