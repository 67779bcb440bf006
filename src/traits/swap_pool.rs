//! Swap and pricing trait.
//!
//! [`SwapPool`] covers the read side of a pool (price, invariant,
//! depletion) and the swap transition.
//!
//! # Fee Invariant
//!
//! The fee is taken out of the input amount **before** pricing, and the
//! full input (fee included) is added to the input reserve:
//!
//! ```text
//! effective  = amount_in × (1 − fee_rate)
//! amount_out = ⌊reserve_out × effective / (reserve_in + effective)⌋
//! ```
//!
//! so `reserve_x × reserve_y` never decreases across a swap.

use primitive_types::U256;

use crate::domain::{Amount, FeeRate, Price, SwapDirection, SwapOutcome};
use crate::error::AmmError;

/// Price queries and constant product swaps.
///
/// # Errors
///
/// - [`AmmError::UndefinedPrice`] — a reserve is zero.
/// - [`AmmError::DepletedPool`] — the pool cannot price or swap.
/// - [`AmmError::Overflow`] — a reserve would exceed `u128`.
pub trait SwapPool {
    /// Returns `reserve_x / reserve_y` as an exact ratio.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UndefinedPrice`] if either reserve is zero, regardless
    ///   of share supply.
    /// - [`AmmError::DepletedPool`] if the share supply is zero.
    fn price(&self) -> Result<Price, AmmError>;

    /// Returns `reserve_x × reserve_y`.
    #[must_use]
    fn invariant_k(&self) -> U256;

    /// Returns `true` if the share supply or either reserve is zero.
    #[must_use]
    fn is_depleted(&self) -> bool;

    /// Computes a swap without touching the pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DepletedPool`] if the pool is depleted.
    /// - [`AmmError::Overflow`] if the input reserve would overflow.
    fn quote_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
        fee_rate: FeeRate,
    ) -> Result<SwapOutcome, AmmError>;

    /// Executes a swap.  A zero input yields a zero output and leaves the
    /// pool unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`SwapPool::quote_swap`]; on error the pool is unchanged.
    fn swap(
        &mut self,
        direction: SwapDirection,
        amount_in: Amount,
        fee_rate: FeeRate,
    ) -> Result<SwapOutcome, AmmError>;
}
