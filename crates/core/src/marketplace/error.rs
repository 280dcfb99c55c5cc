//! Marketplace error types.
//!
//! All mutating operations are all-or-nothing: every error here means the
//! ledger state is unchanged, so callers may always safely retry.

use thiserror::Error;
use tessera_shared::types::{AccountId, Amount, ListingId};

/// Errors that can occur during marketplace operations.
#[derive(Debug, Error)]
pub enum MarketError {
    // ========== Validation Errors ==========
    /// Listing content reference cannot be empty.
    #[error("Data hash cannot be empty")]
    EmptyDataHash,

    /// Quality proof payload cannot be empty.
    #[error("Quality proof cannot be empty")]
    EmptyQualityProof,

    // ========== Lookup Errors ==========
    /// Referenced listing id is outside the valid range.
    #[error("Listing not found: {0}")]
    ListingNotFound(ListingId),

    // ========== Payment Errors ==========
    /// Attached payment does not exactly equal the listing price.
    #[error("Incorrect payment. Expected: {expected}, got: {actual}")]
    IncorrectPayment {
        /// The listing price.
        expected: Amount,
        /// The amount the caller attached.
        actual: Amount,
    },

    /// This buyer has already paid for this listing.
    #[error("Listing {listing_id} already purchased by {buyer}")]
    AlreadyPurchased {
        /// The listing in question.
        listing_id: ListingId,
        /// The buyer attempting the duplicate purchase.
        buyer: AccountId,
    },

    // ========== Overflow Errors ==========
    /// The next listing id would exceed the representable range.
    #[error("Listing id space exhausted")]
    IdOverflow,

    /// Crediting the seller would overflow their balance.
    #[error("Balance overflow for account {0}")]
    BalanceOverflow(AccountId),
}

impl MarketError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDataHash => "EMPTY_DATA_HASH",
            Self::EmptyQualityProof => "EMPTY_QUALITY_PROOF",
            Self::ListingNotFound(_) => "LISTING_NOT_FOUND",
            Self::IncorrectPayment { .. } => "INCORRECT_PAYMENT",
            Self::AlreadyPurchased { .. } => "ALREADY_PURCHASED",
            Self::IdOverflow => "ID_OVERFLOW",
            Self::BalanceOverflow(_) => "BALANCE_OVERFLOW",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation errors
            Self::EmptyDataHash | Self::EmptyQualityProof => 400,

            // 402 Payment Required
            Self::IncorrectPayment { .. } => 402,

            // 404 Not Found
            Self::ListingNotFound(_) => 404,

            // 409 Conflict - duplicate purchase
            Self::AlreadyPurchased { .. } => 409,

            // 500 Internal Server Error - fail closed, never wrap
            Self::IdOverflow | Self::BalanceOverflow(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(MarketError::EmptyDataHash.error_code(), "EMPTY_DATA_HASH");
        assert_eq!(
            MarketError::EmptyQualityProof.error_code(),
            "EMPTY_QUALITY_PROOF"
        );
        assert_eq!(
            MarketError::ListingNotFound(ListingId::FIRST).error_code(),
            "LISTING_NOT_FOUND"
        );
        assert_eq!(
            MarketError::IncorrectPayment {
                expected: Amount::new(100),
                actual: Amount::new(50),
            }
            .error_code(),
            "INCORRECT_PAYMENT"
        );
        assert_eq!(
            MarketError::AlreadyPurchased {
                listing_id: ListingId::FIRST,
                buyer: AccountId::new(),
            }
            .error_code(),
            "ALREADY_PURCHASED"
        );
        assert_eq!(MarketError::IdOverflow.error_code(), "ID_OVERFLOW");
        assert_eq!(
            MarketError::BalanceOverflow(AccountId::new()).error_code(),
            "BALANCE_OVERFLOW"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(MarketError::EmptyDataHash.http_status_code(), 400);
        assert_eq!(
            MarketError::IncorrectPayment {
                expected: Amount::new(100),
                actual: Amount::new(50),
            }
            .http_status_code(),
            402
        );
        assert_eq!(
            MarketError::ListingNotFound(ListingId::FIRST).http_status_code(),
            404
        );
        assert_eq!(
            MarketError::AlreadyPurchased {
                listing_id: ListingId::FIRST,
                buyer: AccountId::new(),
            }
            .http_status_code(),
            409
        );
        assert_eq!(MarketError::IdOverflow.http_status_code(), 500);
    }

    #[test]
    fn test_error_display() {
        let err = MarketError::IncorrectPayment {
            expected: Amount::new(10_000_000_000_000_000),
            actual: Amount::new(1),
        };
        assert_eq!(
            err.to_string(),
            "Incorrect payment. Expected: 10000000000000000, got: 1"
        );

        let err = MarketError::ListingNotFound(ListingId::new(9).unwrap());
        assert_eq!(err.to_string(), "Listing not found: 9");
    }
}
