//! Account balance routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use uuid::Uuid;

use crate::AppState;
use tessera_shared::types::AccountId;

/// Creates the accounts router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/accounts/{account_id}/balance", get(get_balance))
}

/// GET `/accounts/{account_id}/balance` - Funds credited to an account.
///
/// Unknown accounts report a zero balance.
async fn get_balance(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> impl IntoResponse {
    let account = AccountId::from_uuid(account_id);
    let ledger = state.ledger.read().await;

    Json(json!({
        "account": account,
        "balance": ledger.balance_of(account),
    }))
    .into_response()
}
