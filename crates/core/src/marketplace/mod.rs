//! Marketplace ledger for data assets.
//!
//! This module implements the core marketplace functionality:
//! - Listings (fixed-price offers of off-chain data assets)
//! - Purchase records (per-buyer access rights)
//! - Seller balance accounting
//! - Error types for marketplace operations
//! - The ledger state machine tying them together

pub mod error;
pub mod ledger;
pub mod types;

#[cfg(test)]
mod ledger_props;

pub use error::MarketError;
pub use ledger::Ledger;
pub use types::{CreateListingInput, Listing, MarketStats, PurchaseRecord};
