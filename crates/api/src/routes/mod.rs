//! API route definitions.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::AppState;
use tessera_core::marketplace::MarketError;
use tessera_shared::types::ListingId;

pub mod accounts;
pub mod health;
pub mod listings;
pub mod purchases;
pub mod stats;

/// Creates the API router with all routes.
pub fn api_routes() -> axum::Router<AppState> {
    axum::Router::new()
        .merge(health::routes())
        .merge(listings::routes())
        .merge(purchases::routes())
        .merge(accounts::routes())
        .merge(stats::routes())
}

/// Renders a marketplace error as the standard error payload.
pub(crate) fn error_response(err: &MarketError) -> Response {
    let status = StatusCode::from_u16(err.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}

/// Parses a raw path segment into a listing id.
///
/// Zero is never assigned, so it maps to the same not-found payload an
/// unknown id produces.
pub(crate) fn parse_listing_id(raw: u64) -> Result<ListingId, Response> {
    ListingId::new(raw).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "LISTING_NOT_FOUND",
                "message": format!("Listing not found: {raw}"),
            })),
        )
            .into_response()
    })
}
