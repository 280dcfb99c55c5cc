//! The marketplace ledger state machine.
//!
//! A `Ledger` holds all listings, purchase records, and seller balances, and
//! enforces the funds-handling invariants:
//!
//! - listing ids are dense and sequential, starting at 1, never reused
//! - a (listing, buyer) pair transitions `NotPurchased -> Purchased` exactly
//!   once, and never back
//! - the payment credit and the purchase-record write are a single atomic
//!   unit: every failing operation leaves the ledger unchanged
//!
//! The ledger is a plain value owned by its host (an application server, a
//! simulated chain state, a test). Both mutating operations take `&mut self`,
//! so a host that shares the instance serializes them through a lock.

use std::collections::HashMap;

use chrono::Utc;
use tessera_shared::types::{AccountId, Amount, ListingId};

use super::error::MarketError;
use super::types::{CreateListingInput, Listing, MarketStats, PurchaseRecord};

/// All marketplace state: listings, purchase records, seller balances.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Listings in creation order; index `i` holds id `i + 1`.
    listings: Vec<Listing>,
    /// One record per completed (listing, buyer) purchase.
    purchases: HashMap<(ListingId, AccountId), PurchaseRecord>,
    /// Listing ids per seller, in creation order.
    seller_index: HashMap<AccountId, Vec<ListingId>>,
    /// Purchased listing ids per buyer, in purchase order.
    buyer_index: HashMap<AccountId, Vec<ListingId>>,
    /// Funds credited to sellers.
    balances: HashMap<AccountId, Amount>,
    /// Sum of all payments ever transferred.
    total_volume: Amount,
}

impl Ledger {
    /// Creates an empty ledger: no listings, no purchases, no balances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new listing for `caller` and returns its assigned id.
    ///
    /// Ids are allocated sequentially (current total + 1). Allocation fails
    /// closed with `IdOverflow` rather than wrapping.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDataHash` or `EmptyQualityProof` if either opaque
    /// payload is empty, and `IdOverflow` if the id space is exhausted.
    pub fn create_listing(
        &mut self,
        caller: AccountId,
        input: CreateListingInput,
    ) -> Result<ListingId, MarketError> {
        if input.data_hash.is_empty() {
            return Err(MarketError::EmptyDataHash);
        }
        if input.quality_proof.is_empty() {
            return Err(MarketError::EmptyQualityProof);
        }

        let id = self
            .total_listings()
            .checked_add(1)
            .and_then(ListingId::new)
            .ok_or(MarketError::IdOverflow)?;

        self.listings.push(Listing {
            id,
            seller: caller,
            data_hash: input.data_hash,
            quality_proof: input.quality_proof,
            price: input.price,
            active: true,
            created_at: Utc::now(),
        });
        self.seller_index.entry(caller).or_default().push(id);

        Ok(id)
    }

    /// Purchases `listing_id` for `caller`, attaching `payment`.
    ///
    /// The attached payment must exactly equal the listing price; neither
    /// underpayment nor overpayment is accepted. On success the payment is
    /// credited to the seller and the purchase record is created.
    ///
    /// # Errors
    ///
    /// Returns `ListingNotFound`, `AlreadyPurchased`, `IncorrectPayment`, or
    /// `BalanceOverflow`. Every error leaves the ledger unchanged.
    pub fn purchase(
        &mut self,
        caller: AccountId,
        listing_id: ListingId,
        payment: Amount,
    ) -> Result<PurchaseRecord, MarketError> {
        let (seller, price) = {
            let listing = self.listing(listing_id)?;
            (listing.seller, listing.price)
        };

        if self.purchases.contains_key(&(listing_id, caller)) {
            return Err(MarketError::AlreadyPurchased {
                listing_id,
                buyer: caller,
            });
        }
        if payment != price {
            return Err(MarketError::IncorrectPayment {
                expected: price,
                actual: payment,
            });
        }

        // Stage both credits before touching any state; all checks precede
        // all writes, so no partial purchase is ever observable.
        let seller_balance = self
            .balance_of(seller)
            .checked_add(payment)
            .ok_or(MarketError::BalanceOverflow(seller))?;
        let total_volume = self
            .total_volume
            .checked_add(payment)
            .ok_or(MarketError::BalanceOverflow(seller))?;

        let record = PurchaseRecord {
            listing_id,
            buyer: caller,
            amount_paid: payment,
            purchased_at: Utc::now(),
        };

        self.purchases.insert((listing_id, caller), record.clone());
        self.buyer_index.entry(caller).or_default().push(listing_id);
        self.balances.insert(seller, seller_balance);
        self.total_volume = total_volume;

        Ok(record)
    }

    /// Returns the listing with the given id.
    ///
    /// # Errors
    ///
    /// Returns `ListingNotFound` if `id` is outside `[1, total_listings]`.
    pub fn listing(&self, id: ListingId) -> Result<&Listing, MarketError> {
        self.listings
            .get(id.index())
            .ok_or(MarketError::ListingNotFound(id))
    }

    /// Returns the count of listings ever created.
    #[must_use]
    pub fn total_listings(&self) -> u64 {
        len_as_u64(self.listings.len())
    }

    /// Returns whether `buyer` has paid for `listing_id`.
    ///
    /// A nonexistent listing id is simply "not purchased", never an error.
    #[must_use]
    pub fn has_purchased(&self, listing_id: ListingId, buyer: AccountId) -> bool {
        self.purchases.contains_key(&(listing_id, buyer))
    }

    /// Returns all listings created by `seller`, in creation order.
    #[must_use]
    pub fn seller_listings(&self, seller: AccountId) -> Vec<&Listing> {
        self.seller_index
            .get(&seller)
            .into_iter()
            .flatten()
            .filter_map(|id| self.listings.get(id.index()))
            .collect()
    }

    /// Returns all purchases made by `buyer`, in purchase order.
    #[must_use]
    pub fn buyer_purchases(&self, buyer: AccountId) -> Vec<&PurchaseRecord> {
        self.buyer_index
            .get(&buyer)
            .into_iter()
            .flatten()
            .filter_map(|id| self.purchases.get(&(*id, buyer)))
            .collect()
    }

    /// Returns the funds credited to `account`; zero for unknown accounts.
    #[must_use]
    pub fn balance_of(&self, account: AccountId) -> Amount {
        self.balances.get(&account).copied().unwrap_or(Amount::ZERO)
    }

    /// Returns aggregate marketplace counters.
    #[must_use]
    pub fn stats(&self) -> MarketStats {
        MarketStats {
            total_listings: self.total_listings(),
            total_purchases: len_as_u64(self.purchases.len()),
            total_volume: self.total_volume,
        }
    }
}

/// Collection lengths fit u64 on every supported target.
#[allow(clippy::cast_possible_truncation)]
const fn len_as_u64(len: usize) -> u64 {
    len as u64
}
