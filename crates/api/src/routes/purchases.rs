//! Purchase routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{AppState, extractors::Caller};
use crate::routes::{error_response, parse_listing_id};
use tessera_shared::types::{AccountId, Amount, ListingId};

/// Request body for purchasing a listing.
///
/// `payment` is the value the caller attaches to the call; it must exactly
/// equal the listing price.
#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    /// Attached payment in the smallest currency unit, as a decimal string.
    pub payment: Amount,
}

/// Creates the purchases router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/listings/{id}/purchase", post(purchase_listing))
        .route("/listings/{id}/status/{buyer_id}", get(purchase_status))
        .route("/purchases/buyer/{account_id}", get(get_buyer_purchases))
}

/// POST `/listings/{id}/purchase` - Pay the listing price to unlock access.
async fn purchase_listing(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Path(raw_id): Path<u64>,
    Json(payload): Json<PurchaseRequest>,
) -> impl IntoResponse {
    let id = match parse_listing_id(raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let mut ledger = state.ledger.write().await;
    match ledger.purchase(caller, id, payload.payment) {
        Ok(record) => {
            info!(
                listing_id = %id,
                buyer = %caller,
                amount = %record.amount_paid,
                "Purchase completed"
            );
            Json(record).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// GET `/listings/{id}/status/{buyer_id}` - Has this buyer paid?
///
/// A nonexistent listing id reports "not purchased" rather than an error.
async fn purchase_status(
    State(state): State<AppState>,
    Path((raw_id, buyer_id)): Path<(u64, Uuid)>,
) -> impl IntoResponse {
    let buyer = AccountId::from_uuid(buyer_id);
    let ledger = state.ledger.read().await;

    let purchased =
        ListingId::new(raw_id).is_some_and(|id| ledger.has_purchased(id, buyer));

    Json(json!({
        "listing_id": raw_id,
        "buyer": buyer,
        "purchased": purchased,
    }))
    .into_response()
}

/// GET `/purchases/buyer/{account_id}` - All purchases by a buyer.
async fn get_buyer_purchases(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> impl IntoResponse {
    let buyer = AccountId::from_uuid(account_id);
    let ledger = state.ledger.read().await;

    Json(json!({
        "buyer": buyer,
        "purchases": ledger.buyer_purchases(buyer),
    }))
    .into_response()
}
