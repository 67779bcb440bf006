//! Liquidity provision trait extending [`SwapPool`].
//!
//! # Share Backing Invariant
//!
//! Let `bx = reserve_x / share_supply` and `by = reserve_y / share_supply`
//! be the backing of one share.  Neither [`LiquidityPool::deposit`] nor
//! [`LiquidityPool::withdraw`] may decrease `bx` or `by` for the shares
//! that remain outstanding.  Both round every quantity that leaves the
//! pool down and every quantity that enters it up.

use super::SwapPool;
use crate::domain::{Amount, DepositOutcome, FeeRate, Shares, WithdrawOutcome};
use crate::error::AmmError;

/// Deposits and withdrawals against the share supply.
pub trait LiquidityPool: SwapPool {
    /// Returns the outstanding share supply.
    #[must_use]
    fn share_supply(&self) -> Shares;

    /// Computes a deposit without touching the pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DepletedPool`] if the pool is depleted; re-seeding is
    ///   the caller's bootstrap step.
    /// - [`AmmError::Overflow`] if a reserve or the supply would overflow.
    fn quote_deposit(
        &self,
        offered_x: Amount,
        offered_y: Amount,
    ) -> Result<DepositOutcome, AmmError>;

    /// Deposits up to `offered_x` / `offered_y` and mints shares.
    ///
    /// Offers too small to mint a whole share return
    /// [`DepositOutcome::NONE`] and leave the pool unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`LiquidityPool::quote_deposit`]; on error the pool is
    /// unchanged.
    fn deposit(
        &mut self,
        offered_x: Amount,
        offered_y: Amount,
    ) -> Result<DepositOutcome, AmmError>;

    /// Computes a withdrawal without touching the pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `burned` exceeds the share supply.
    fn quote_withdraw(&self, burned: Shares, fee_rate: FeeRate)
        -> Result<WithdrawOutcome, AmmError>;

    /// Burns `burned` shares and pays out the proportional reserves, less
    /// `fee_rate`.  The fee stays in the pool.  Burning the whole supply
    /// pays out the whole pool with the fee waived.  A depleted pool pays
    /// nothing and burns nothing.
    ///
    /// # Errors
    ///
    /// Same as [`LiquidityPool::quote_withdraw`]; on error the pool is
    /// unchanged.
    fn withdraw(&mut self, burned: Shares, fee_rate: FeeRate)
        -> Result<WithdrawOutcome, AmmError>;
}
