//! Marketplace domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tessera_shared::types::{AccountId, Amount, ListingId};

/// A seller's fixed-price offer of a data asset.
///
/// All fields are immutable after creation. The content itself never moves
/// through this system; `data_hash` is an opaque reference to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Sequential id, assigned by the ledger in creation order.
    pub id: ListingId,
    /// The principal that created the listing.
    pub seller: AccountId,
    /// Opaque content reference. Never parsed.
    pub data_hash: String,
    /// Opaque caller-supplied metadata (e.g. serialized column stats).
    /// Never validated for schema.
    pub quality_proof: String,
    /// Fixed price in the smallest currency unit. May be zero.
    pub price: Amount,
    /// True at creation; no deactivation operation exists.
    pub active: bool,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new listing.
#[derive(Debug, Clone)]
pub struct CreateListingInput {
    /// Opaque content reference. Must be non-empty.
    pub data_hash: String,
    /// Opaque quality-proof payload. Must be non-empty.
    pub quality_proof: String,
    /// Fixed price in the smallest currency unit.
    pub price: Amount,
}

/// Record of a completed purchase: one per (listing, buyer) pair.
///
/// Created only by a successful purchase and never removed; the per-pair
/// state machine has a single one-way transition `NotPurchased -> Purchased`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// The purchased listing.
    pub listing_id: ListingId,
    /// The paying principal.
    pub buyer: AccountId,
    /// The amount transferred to the seller (equals the listing price).
    pub amount_paid: Amount,
    /// When the purchase completed.
    pub purchased_at: DateTime<Utc>,
}

/// Aggregate marketplace counters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MarketStats {
    /// Count of listings ever created.
    pub total_listings: u64,
    /// Count of completed purchases.
    pub total_purchases: u64,
    /// Sum of all amounts transferred to sellers.
    pub total_volume: Amount,
}
