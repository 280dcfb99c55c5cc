//! Listing management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{AppState, extractors::Caller};
use crate::routes::{error_response, parse_listing_id};
use tessera_core::marketplace::CreateListingInput;
use tessera_shared::types::{AccountId, Amount};

/// Request body for creating a listing.
#[derive(Debug, Deserialize)]
pub struct CreateListingRequest {
    /// Opaque content reference.
    pub data_hash: String,
    /// Opaque quality-proof payload.
    pub quality_proof: String,
    /// Fixed price in the smallest currency unit, as a decimal string.
    pub price: Amount,
}

/// Creates the listings router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/listings", post(create_listing))
        .route("/listings/{id}", get(get_listing))
        .route("/listings/seller/{account_id}", get(get_seller_listings))
}

/// POST /listings - Register a new listing for the calling seller.
async fn create_listing(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Json(payload): Json<CreateListingRequest>,
) -> impl IntoResponse {
    let mut ledger = state.ledger.write().await;

    let id = match ledger.create_listing(
        caller,
        CreateListingInput {
            data_hash: payload.data_hash,
            quality_proof: payload.quality_proof,
            price: payload.price,
        },
    ) {
        Ok(id) => id,
        Err(e) => return error_response(&e),
    };

    info!(listing_id = %id, seller = %caller, "Listing created");

    // The id was just allocated, so the lookup cannot fail
    match ledger.listing(id) {
        Ok(listing) => (StatusCode::CREATED, Json(listing.clone())).into_response(),
        Err(e) => error_response(&e),
    }
}

/// GET `/listings/{id}` - Get a listing snapshot.
async fn get_listing(
    State(state): State<AppState>,
    Path(raw_id): Path<u64>,
) -> impl IntoResponse {
    let id = match parse_listing_id(raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let ledger = state.ledger.read().await;
    match ledger.listing(id) {
        Ok(listing) => Json(listing.clone()).into_response(),
        Err(e) => error_response(&e),
    }
}

/// GET `/listings/seller/{account_id}` - All listings by a seller.
async fn get_seller_listings(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> impl IntoResponse {
    let seller = AccountId::from_uuid(account_id);
    let ledger = state.ledger.read().await;

    Json(json!({
        "seller": seller,
        "listings": ledger.seller_listings(seller),
    }))
    .into_response()
}
