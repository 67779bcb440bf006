//! Property-based tests using `proptest` for the pool invariants.
//!
//! 1. **Deposit non-dilution** — accepted amounts back every minted share.
//! 2. **Deposit bounds** — never more than offered; dust is a no-op.
//! 3. **Withdraw non-over-extraction** — remaining shares keep their backing.
//!    Both 1 and 3 also run with quantities up to `u128::MAX >> 8`.
//! 4. **Swap invariant** — `k` never decreases, strictly grows with a fee.
//! 5. **Quote/commit agreement** — quotes predict the committed outcome.
//! 6. **Liquidity round trip** — deposit then withdraw returns ≤ accepted.
//! 7. **All-or-nothing** — failed operations leave the pool unchanged.

use primitive_types::U256;
use proptest::prelude::*;

use crate::domain::{Amount, FeeRate, Shares, SwapDirection};
use crate::error::AmmError;
use crate::traits::{LiquidityPool, SwapPool};

use super::Pool;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn wide(v: u128) -> U256 {
    U256::from(v)
}

fn make_pool(rx: u128, ry: u128, ps: u128) -> Pool {
    Pool::new(Amount::new(rx), Amount::new(ry), Shares::new(ps))
}

fn fee_from_bps(bps: u32) -> FeeRate {
    let Ok(rate) = FeeRate::from_basis_points(bps) else {
        panic!("valid fee rate");
    };
    rate
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserves and supplies in `[1, 10^12]`.
fn quantity_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000u128
}

/// Offered or swapped amounts, zero included.
fn amount_strategy() -> impl Strategy<Value = u128> {
    0u128..=1_000_000_000_000u128
}

/// Reserves, supplies and offers near the top of the `u128` range.
fn wide_quantity_strategy() -> impl Strategy<Value = u128> {
    1u128..=(u128::MAX >> 8)
}

/// Fee rates from 0 up to 99.99%.
fn fee_bps_strategy() -> impl Strategy<Value = u32> {
    0u32..10_000u32
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    prop_oneof![Just(SwapDirection::XToY), Just(SwapDirection::YToX)]
}

// ---------------------------------------------------------------------------
// Deposit
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_deposit_never_dilutes(
        rx in quantity_strategy(),
        ry in quantity_strategy(),
        ps in quantity_strategy(),
        x in amount_strategy(),
        y in amount_strategy(),
    ) {
        let mut pool = make_pool(rx, ry, ps);
        let Ok(outcome) = pool.deposit(Amount::new(x), Amount::new(y)) else {
            return Ok(());
        };
        let (ax, ay, pc) = outcome.into_parts();

        prop_assert!(wide(ax.get()) * wide(ps) >= wide(pc.get()) * wide(rx));
        prop_assert!(wide(ay.get()) * wide(ps) >= wide(pc.get()) * wide(ry));

        // Backing per share after ≥ before, on both sides.
        let new_ps = pool.share_supply().get();
        prop_assert!(wide(pool.reserve_x().get()) * wide(ps) >= wide(rx) * wide(new_ps));
        prop_assert!(wide(pool.reserve_y().get()) * wide(ps) >= wide(ry) * wide(new_ps));
    }

    #[test]
    fn prop_deposit_within_offer(
        rx in quantity_strategy(),
        ry in quantity_strategy(),
        ps in quantity_strategy(),
        x in amount_strategy(),
        y in amount_strategy(),
    ) {
        let before = make_pool(rx, ry, ps);
        let mut pool = before;
        let Ok(outcome) = pool.deposit(Amount::new(x), Amount::new(y)) else {
            return Ok(());
        };

        prop_assert!(outcome.accepted_x().get() <= x);
        prop_assert!(outcome.accepted_y().get() <= y);
        if outcome.is_empty() {
            prop_assert!(outcome.accepted_x().is_zero() && outcome.accepted_y().is_zero());
            prop_assert_eq!(pool, before);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_deposit_never_dilutes_wide(
        rx in wide_quantity_strategy(),
        ry in wide_quantity_strategy(),
        ps in wide_quantity_strategy(),
        x in wide_quantity_strategy(),
        y in wide_quantity_strategy(),
    ) {
        let before = make_pool(rx, ry, ps);
        let mut pool = before;
        let outcome = match pool.deposit(Amount::new(x), Amount::new(y)) {
            Ok(outcome) => outcome,
            Err(err) => {
                prop_assert!(matches!(err, AmmError::Overflow(_)));
                prop_assert_eq!(pool, before);
                return Ok(());
            }
        };
        let (ax, ay, pc) = outcome.into_parts();

        prop_assert!(ax.get() <= x && ay.get() <= y);
        prop_assert!(wide(ax.get()) * wide(ps) >= wide(pc.get()) * wide(rx));
        prop_assert!(wide(ay.get()) * wide(ps) >= wide(pc.get()) * wide(ry));
    }
}

// ---------------------------------------------------------------------------
// Withdraw
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_withdraw_never_over_extracts(
        rx in quantity_strategy(),
        ry in quantity_strategy(),
        ps in quantity_strategy(),
        burn_frac in 0u32..=1_000u32,
        bps in fee_bps_strategy(),
    ) {
        let burned = ps * u128::from(burn_frac) / 1_000;
        let mut pool = make_pool(rx, ry, ps);
        let Ok(outcome) = pool.withdraw(Shares::new(burned), fee_from_bps(bps)) else {
            panic!("burn within supply must succeed");
        };
        let (wx, wy) = outcome.amounts();

        prop_assert!(wide(burned) * wide(rx) >= wide(wx.get()) * wide(ps));
        prop_assert!(wide(burned) * wide(ry) >= wide(wy.get()) * wide(ps));
        prop_assert_eq!(pool.share_supply(), Shares::new(ps - burned));
    }

    #[test]
    fn prop_withdraw_never_over_extracts_wide(
        rx in wide_quantity_strategy(),
        ry in wide_quantity_strategy(),
        ps in wide_quantity_strategy(),
        burn_frac in 0u32..=1_000u32,
        bps in fee_bps_strategy(),
    ) {
        let burned = (wide(ps) * wide(u128::from(burn_frac)) / wide(1_000)).low_u128();
        let mut pool = make_pool(rx, ry, ps);
        let Ok(outcome) = pool.withdraw(Shares::new(burned), fee_from_bps(bps)) else {
            panic!("burn within supply must succeed");
        };
        let (wx, wy) = outcome.amounts();

        prop_assert!(wide(burned) * wide(rx) >= wide(wx.get()) * wide(ps));
        prop_assert!(wide(burned) * wide(ry) >= wide(wy.get()) * wide(ps));
        prop_assert_eq!(pool.share_supply(), Shares::new(ps - burned));
    }

    #[test]
    fn prop_withdraw_beyond_supply_is_rejected(
        rx in quantity_strategy(),
        ry in quantity_strategy(),
        ps in quantity_strategy(),
        extra in 1u128..=1_000u128,
    ) {
        let before = make_pool(rx, ry, ps);
        let mut pool = before;
        let result = pool.withdraw(Shares::new(ps + extra), FeeRate::ZERO);
        prop_assert!(matches!(result, Err(AmmError::InvalidAmount(_))));
        prop_assert_eq!(pool, before);
    }

    #[test]
    fn prop_liquidity_round_trip_loses_nothing_for_pool(
        rx in quantity_strategy(),
        ry in quantity_strategy(),
        ps in quantity_strategy(),
        x in amount_strategy(),
        y in amount_strategy(),
    ) {
        let mut pool = make_pool(rx, ry, ps);
        let Ok(deposit) = pool.deposit(Amount::new(x), Amount::new(y)) else {
            return Ok(());
        };
        let Ok(withdraw) = pool.withdraw(deposit.minted(), FeeRate::ZERO) else {
            panic!("burning freshly minted shares must succeed");
        };

        prop_assert!(withdraw.withdrawn_x() <= deposit.accepted_x());
        prop_assert!(withdraw.withdrawn_y() <= deposit.accepted_y());
        prop_assert!(pool.reserve_x().get() >= rx);
        prop_assert!(pool.reserve_y().get() >= ry);
        prop_assert_eq!(pool.share_supply(), Shares::new(ps));
    }
}

// ---------------------------------------------------------------------------
// Swap
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_swap_k_never_decreases(
        rx in quantity_strategy(),
        ry in quantity_strategy(),
        amount in amount_strategy(),
        bps in fee_bps_strategy(),
        direction in direction_strategy(),
    ) {
        let mut pool = make_pool(rx, ry, 1);
        let k_before = pool.invariant_k();
        let Ok(outcome) = pool.swap(direction, Amount::new(amount), fee_from_bps(bps)) else {
            return Ok(());
        };
        let k_after = pool.invariant_k();

        prop_assert!(k_after >= k_before);
        if bps > 0 && amount > 0 {
            prop_assert!(k_after > k_before, "fee-bearing swap must grow k");
        }
        if amount == 0 {
            prop_assert!(outcome.is_empty());
            prop_assert_eq!(pool, make_pool(rx, ry, 1));
        }
        prop_assert!(!pool.reserve_x().is_zero() && !pool.reserve_y().is_zero());
    }

    #[test]
    fn prop_swap_moves_price_against_trader(
        rx in quantity_strategy(),
        ry in quantity_strategy(),
        amount in amount_strategy(),
    ) {
        let mut pool = make_pool(rx, ry, 1);
        let Ok(before) = pool.price() else {
            return Ok(());
        };
        let Ok(_) = pool.swap_x_for_y(Amount::new(amount), FeeRate::ZERO) else {
            return Ok(());
        };
        let Ok(after) = pool.price() else {
            return Ok(());
        };
        // Selling X makes X cheaper: x per y rises.
        prop_assert!(after >= before);
    }

    #[test]
    fn prop_quote_matches_commit(
        rx in quantity_strategy(),
        ry in quantity_strategy(),
        ps in quantity_strategy(),
        amount in amount_strategy(),
        bps in fee_bps_strategy(),
        direction in direction_strategy(),
    ) {
        let mut pool = make_pool(rx, ry, ps);
        let fee = fee_from_bps(bps);
        let quoted = pool.quote_swap(direction, Amount::new(amount), fee);
        let committed = pool.swap(direction, Amount::new(amount), fee);
        prop_assert_eq!(quoted, committed);

        let quoted = pool.quote_deposit(Amount::new(amount), Amount::new(amount));
        let committed = pool.deposit(Amount::new(amount), Amount::new(amount));
        prop_assert_eq!(quoted, committed);
    }
}
