//! Marketplace statistics routes.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use crate::AppState;

/// Creates the stats router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}

/// GET /stats - Aggregate marketplace counters.
async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    let ledger = state.ledger.read().await;
    Json(ledger.stats()).into_response()
}
