//! Request extractors.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;

use tessera_shared::AppError;
use tessera_shared::types::AccountId;

/// Header carrying the caller's principal identity.
///
/// The hosting environment authenticates the principal; this service only
/// records and compares it.
pub const CALLER_HEADER: &str = "x-account-id";

/// Extractor for the caller identity on mutating routes.
///
/// Rejects requests with a missing or malformed `x-account-id` header.
#[derive(Debug, Clone, Copy)]
pub struct Caller(pub AccountId);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(CALLER_HEADER)
            .and_then(|value| value.to_str().ok());

        let Some(raw) = header else {
            return Err(unauthorized(AppError::Unauthorized(format!(
                "{CALLER_HEADER} header is required"
            ))));
        };

        raw.parse::<AccountId>().map(Caller).map_err(|_| {
            unauthorized(AppError::Unauthorized(format!(
                "{CALLER_HEADER} header must be a valid UUID"
            )))
        })
    }
}

fn unauthorized(error: AppError) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": error.error_code(),
            "message": error.to_string(),
        })),
    )
        .into_response()
}
