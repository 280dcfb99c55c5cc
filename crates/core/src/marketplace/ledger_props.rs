//! Property-based tests for the marketplace ledger.
//!
//! - Property 1: Listing Id Density
//! - Property 2: Exact-Payment Enforcement
//! - Property 3: Purchase Idempotence Rejection
//! - Property 4: Funds Conservation

use proptest::prelude::*;
use tessera_shared::types::{AccountId, Amount, ListingId};

use super::error::MarketError;
use super::ledger::Ledger;
use super::types::CreateListingInput;

/// Strategy to generate prices, zero included (free listings are legal).
fn price() -> impl Strategy<Value = Amount> {
    (0u128..1_000_000_000_000_000_000u128).prop_map(Amount::new)
}

/// Strategy to generate non-empty opaque payloads.
fn opaque_payload() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,32}"
}

fn make_input(data_hash: String, quality_proof: String, price: Amount) -> CreateListingInput {
    CreateListingInput {
        data_hash,
        quality_proof,
        price,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Listing Id Density
    // =========================================================================

    /// *For any* sequence of successful creations, ids are exactly
    /// `1..=count` in call order and the total matches the call count.
    #[test]
    fn prop_ids_dense_and_sequential(
        payloads in prop::collection::vec((opaque_payload(), opaque_payload(), price()), 1..20),
    ) {
        let mut ledger = Ledger::new();
        let seller = AccountId::new();

        for (i, (hash, proof, price)) in payloads.iter().enumerate() {
            let id = ledger
                .create_listing(seller, make_input(hash.clone(), proof.clone(), *price))
                .unwrap();
            prop_assert_eq!(id.get(), (i as u64) + 1);
        }
        prop_assert_eq!(ledger.total_listings(), payloads.len() as u64);

        // Every assigned id resolves; the one past the end does not
        for (i, (hash, proof, price)) in payloads.iter().enumerate() {
            let listing = ledger
                .listing(ListingId::new((i as u64) + 1).unwrap())
                .unwrap();
            prop_assert_eq!(&listing.data_hash, hash);
            prop_assert_eq!(&listing.quality_proof, proof);
            prop_assert_eq!(listing.price, *price);
        }
        let past_end = ListingId::new(payloads.len() as u64 + 1).unwrap();
        prop_assert!(ledger.listing(past_end).is_err());
    }

    // =========================================================================
    // Property 2: Exact-Payment Enforcement
    // =========================================================================

    /// *For any* payment different from the listing price, the purchase
    /// SHALL fail with IncorrectPayment and change no state.
    #[test]
    fn prop_inexact_payment_rejected(
        listing_price in price(),
        payment in price(),
    ) {
        prop_assume!(listing_price != payment);

        let mut ledger = Ledger::new();
        let seller = AccountId::new();
        let buyer = AccountId::new();

        let id = ledger
            .create_listing(seller, make_input("Qm".into(), "{}".into(), listing_price))
            .unwrap();

        let result = ledger.purchase(buyer, id, payment);
        prop_assert!(matches!(result, Err(MarketError::IncorrectPayment { .. })), "expected IncorrectPayment");
        prop_assert!(!ledger.has_purchased(id, buyer));
        prop_assert!(ledger.balance_of(seller).is_zero());
    }

    /// *For any* price, paying exactly that price succeeds and credits the
    /// seller by exactly that amount.
    #[test]
    fn prop_exact_payment_accepted(listing_price in price()) {
        let mut ledger = Ledger::new();
        let seller = AccountId::new();
        let buyer = AccountId::new();

        let id = ledger
            .create_listing(seller, make_input("Qm".into(), "{}".into(), listing_price))
            .unwrap();

        ledger.purchase(buyer, id, listing_price).unwrap();
        prop_assert!(ledger.has_purchased(id, buyer));
        prop_assert_eq!(ledger.balance_of(seller), listing_price);
    }

    // =========================================================================
    // Property 3: Purchase Idempotence Rejection
    // =========================================================================

    /// *For any* completed purchase, repeating it SHALL fail with
    /// AlreadyPurchased and transfer no additional funds.
    #[test]
    fn prop_repeat_purchase_rejected(listing_price in price(), attempts in 1usize..5) {
        let mut ledger = Ledger::new();
        let seller = AccountId::new();
        let buyer = AccountId::new();

        let id = ledger
            .create_listing(seller, make_input("Qm".into(), "{}".into(), listing_price))
            .unwrap();
        ledger.purchase(buyer, id, listing_price).unwrap();

        for _ in 0..attempts {
            let result = ledger.purchase(buyer, id, listing_price);
            prop_assert!(matches!(result, Err(MarketError::AlreadyPurchased { .. })), "expected AlreadyPurchased");
        }
        prop_assert!(ledger.has_purchased(id, buyer));
        prop_assert_eq!(ledger.balance_of(seller), listing_price);
    }

    // =========================================================================
    // Property 4: Funds Conservation
    // =========================================================================

    /// *For any* mix of successful purchases across listings and buyers, the
    /// sum of seller balances SHALL equal the sum of recorded payments.
    #[test]
    fn prop_funds_conserved(
        prices in prop::collection::vec(price(), 1..8),
        buyer_count in 1usize..4,
    ) {
        let mut ledger = Ledger::new();
        let sellers: Vec<_> = prices.iter().map(|_| AccountId::new()).collect();
        let buyers: Vec<_> = (0..buyer_count).map(|_| AccountId::new()).collect();

        let mut ids = Vec::new();
        for (seller, price) in sellers.iter().zip(&prices) {
            ids.push(
                ledger
                    .create_listing(*seller, make_input("Qm".into(), "{}".into(), *price))
                    .unwrap(),
            );
        }

        let mut expected_volume: u128 = 0;
        for buyer in &buyers {
            for (id, price) in ids.iter().zip(&prices) {
                ledger.purchase(*buyer, *id, *price).unwrap();
                expected_volume += price.get();
            }
        }

        let credited: u128 = sellers.iter().map(|s| ledger.balance_of(*s).get()).sum();
        prop_assert_eq!(credited, expected_volume);
        prop_assert_eq!(ledger.stats().total_volume.get(), expected_volume);
        prop_assert_eq!(
            ledger.stats().total_purchases,
            (ids.len() * buyers.len()) as u64
        );
    }
}
