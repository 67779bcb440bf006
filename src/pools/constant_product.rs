//! The constant product pool engine (`x · y = k`).
//!
//! [`Pool`] is a plain value: two reserves and a share supply.  Every
//! transition is computed against the current state first ("quote"), the
//! next state is derived with checked arithmetic, and only then is `self`
//! replaced.  An error therefore never leaves a half-applied update.
//!
//! # Rounding
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Deposit share ratio (18 digits) | down |
//! | Shares minted | down |
//! | Amounts accepted on deposit | up |
//! | Gross withdrawal | down |
//! | Withdrawal after fee | down |
//! | Swap output | down |
//!
//! # Deposit Algorithm
//!
//! 1. `ratio = min(⌊x / rx⌋₁₈, ⌊y / ry⌋₁₈)` (18-digit fixed point)
//! 2. `minted = ⌊ps × ratio⌋`
//! 3. `accepted_x = ⌈rx × minted / ps⌉`, `accepted_y = ⌈ry × minted / ps⌉`
//!
//! Step 3 is exact, so `accepted_x · ps ≥ minted · rx` holds with no
//! rounding slack, and step 1 bounds `accepted_x ≤ x`, `accepted_y ≤ y`.

use core::fmt;

use primitive_types::U256;

use crate::config::PoolConfig;
use crate::domain::{
    Amount, DepositOutcome, FeeRate, Price, Rounding, Shares, SwapDirection, SwapOutcome,
    WithdrawOutcome,
};
use crate::error::AmmError;
use crate::math::{mul_div, mul_div_wide, narrow_u256, CheckedArithmetic, Decimal};
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

/// A two-asset constant product pool backed by a share token.
///
/// # State
///
/// - `reserve_x` / `reserve_y` — the pool's balances of each asset
/// - `share_supply` — outstanding pool-share tokens
///
/// The pool is **depleted** when any of the three is zero.  A depleted
/// pool refuses prices, swaps and deposits; re-seeding it is the caller's
/// bootstrap step.
///
/// # Example
///
/// ```rust
/// use xyk_pool::domain::{Amount, FeeRate, Shares};
/// use xyk_pool::pools::Pool;
/// use xyk_pool::traits::LiquidityPool;
///
/// let mut pool = Pool::new(Amount::new(2_000), Amount::new(100), Shares::new(10_000));
///
/// let deposit = pool.deposit(Amount::new(200), Amount::new(10)).expect("active pool");
/// assert_eq!(deposit.minted(), Shares::new(1_000));
///
/// let out = pool.swap_x_for_y(Amount::new(220), FeeRate::ZERO).expect("active pool");
/// assert_eq!(out.amount_out(), Amount::new(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pool {
    reserve_x: Amount,
    reserve_y: Amount,
    share_supply: Shares,
}

impl Pool {
    /// Creates a pool record from any triple, including depleted ones.
    pub const fn new(reserve_x: Amount, reserve_y: Amount, share_supply: Shares) -> Self {
        Self {
            reserve_x,
            reserve_y,
            share_supply,
        }
    }

    /// Returns the X reserve.
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Returns the Y reserve.
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Returns `(reserve_x, reserve_y)`.
    pub const fn balances(&self) -> (Amount, Amount) {
        (self.reserve_x, self.reserve_y)
    }

    /// Swaps X in for Y out.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_x_for_y(
        &mut self,
        input_x: Amount,
        fee_rate: FeeRate,
    ) -> Result<SwapOutcome, AmmError> {
        self.swap(SwapDirection::XToY, input_x, fee_rate)
    }

    /// Swaps Y in for X out.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_y_for_x(
        &mut self,
        input_y: Amount,
        fee_rate: FeeRate,
    ) -> Result<SwapOutcome, AmmError> {
        self.swap(SwapDirection::YToX, input_y, fee_rate)
    }

    /// Constant product output for `amount_in` with the fee deducted.
    ///
    /// `effective = amount_in × (1 − fee)` stays scaled by 10¹⁸, so the fee
    /// never introduces a second rounding step:
    ///
    /// `out = ⌊reserve_out × effective / (reserve_in × 10¹⁸ + effective)⌋`
    fn swap_output(
        reserve_in: Amount,
        reserve_out: Amount,
        amount_in: Amount,
        fee_rate: FeeRate,
    ) -> Result<Amount, AmmError> {
        let effective = U256::from(amount_in.get())
            .checked_mul(fee_rate.complement().raw())
            .ok_or(AmmError::Overflow("effective input overflow"))?;
        let denominator = U256::from(reserve_in.get())
            .checked_mul(Decimal::ONE.raw())
            .and_then(|scaled| scaled.checked_add(effective))
            .ok_or(AmmError::Overflow("swap denominator overflow"))?;
        let out = mul_div_wide(
            U256::from(reserve_out.get()),
            effective,
            denominator,
            Rounding::Down,
        )?;
        narrow_u256(out)
            .map(Amount::new)
            .ok_or(AmmError::Overflow("swap output exceeds u128"))
    }

    fn after_deposit(&self, outcome: &DepositOutcome) -> Result<Self, AmmError> {
        Ok(Self {
            reserve_x: self.reserve_x.safe_add(&outcome.accepted_x())?,
            reserve_y: self.reserve_y.safe_add(&outcome.accepted_y())?,
            share_supply: self.share_supply.safe_add(&outcome.minted())?,
        })
    }

    fn after_withdraw(&self, outcome: &WithdrawOutcome) -> Result<Self, AmmError> {
        Ok(Self {
            reserve_x: self.reserve_x.safe_sub(&outcome.withdrawn_x())?,
            reserve_y: self.reserve_y.safe_sub(&outcome.withdrawn_y())?,
            share_supply: self.share_supply.safe_sub(&outcome.burned())?,
        })
    }

    fn after_swap(&self, outcome: &SwapOutcome) -> Result<Self, AmmError> {
        let mut next = *self;
        let (reserve_in, reserve_out) = match outcome.direction() {
            SwapDirection::XToY => (&mut next.reserve_x, &mut next.reserve_y),
            SwapDirection::YToX => (&mut next.reserve_y, &mut next.reserve_x),
        };
        *reserve_in = reserve_in.safe_add(&outcome.amount_in())?;
        *reserve_out = reserve_out.safe_sub(&outcome.amount_out())?;
        Ok(next)
    }
}

impl FromConfig<PoolConfig> for Pool {
    /// Creates an active pool from a validated configuration.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self::new(
            config.reserve_x(),
            config.reserve_y(),
            config.share_supply(),
        ))
    }
}

impl SwapPool for Pool {
    fn price(&self) -> Result<Price, AmmError> {
        let price = Price::from_amounts(self.reserve_x, self.reserve_y)?;
        if self.share_supply.is_zero() {
            return Err(AmmError::DepletedPool);
        }
        Ok(price)
    }

    fn invariant_k(&self) -> U256 {
        // u128 × u128 < 2^256
        U256::from(self.reserve_x.get()) * U256::from(self.reserve_y.get())
    }

    fn is_depleted(&self) -> bool {
        self.share_supply.is_zero() || self.reserve_x.is_zero() || self.reserve_y.is_zero()
    }

    fn quote_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
        fee_rate: FeeRate,
    ) -> Result<SwapOutcome, AmmError> {
        if self.is_depleted() {
            return Err(AmmError::DepletedPool);
        }
        if amount_in.is_zero() {
            return Ok(SwapOutcome::none(direction));
        }

        let (reserve_in, reserve_out) = match direction {
            SwapDirection::XToY => (self.reserve_x, self.reserve_y),
            SwapDirection::YToX => (self.reserve_y, self.reserve_x),
        };
        let amount_out = Self::swap_output(reserve_in, reserve_out, amount_in, fee_rate)?;
        let fee = Amount::new(fee_rate.fee_on(amount_in.get(), Rounding::Up)?);

        let outcome = SwapOutcome::new(direction, amount_in, amount_out, fee);
        self.after_swap(&outcome)?;
        Ok(outcome)
    }

    fn swap(
        &mut self,
        direction: SwapDirection,
        amount_in: Amount,
        fee_rate: FeeRate,
    ) -> Result<SwapOutcome, AmmError> {
        let outcome = self.quote_swap(direction, amount_in, fee_rate)?;
        if outcome.is_empty() {
            tracing::trace!("swap {}: zero input, pool unchanged", direction);
            return Ok(outcome);
        }
        *self = self.after_swap(&outcome)?;
        tracing::debug!(
            "swap {}: in {}, out {}, fee {}; now {}",
            direction,
            outcome.amount_in(),
            outcome.amount_out(),
            outcome.fee(),
            self
        );
        Ok(outcome)
    }
}

impl LiquidityPool for Pool {
    fn share_supply(&self) -> Shares {
        self.share_supply
    }

    fn quote_deposit(
        &self,
        offered_x: Amount,
        offered_y: Amount,
    ) -> Result<DepositOutcome, AmmError> {
        if self.is_depleted() {
            return Err(AmmError::DepletedPool);
        }
        let rx = self.reserve_x.get();
        let ry = self.reserve_y.get();
        let ps = self.share_supply.get();

        // The binding side is the one with the smaller truncated ratio.
        let ratio_x = Decimal::from_ratio(offered_x.get(), rx, Rounding::Down)?;
        let ratio_y = Decimal::from_ratio(offered_y.get(), ry, Rounding::Down)?;
        let minted = ratio_x.min(ratio_y).mul_int(ps, Rounding::Down)?;
        if minted == 0 {
            return Ok(DepositOutcome::NONE);
        }

        let accepted_x = mul_div(rx, minted, ps, Rounding::Up)?;
        let accepted_y = mul_div(ry, minted, ps, Rounding::Up)?;

        let outcome = DepositOutcome::new(
            Amount::new(accepted_x),
            Amount::new(accepted_y),
            Shares::new(minted),
        );
        self.after_deposit(&outcome)?;
        Ok(outcome)
    }

    fn deposit(
        &mut self,
        offered_x: Amount,
        offered_y: Amount,
    ) -> Result<DepositOutcome, AmmError> {
        let outcome = self.quote_deposit(offered_x, offered_y)?;
        if outcome.is_empty() {
            tracing::trace!(
                "deposit ({}, {}) too small to mint a share; pool unchanged",
                offered_x,
                offered_y
            );
            return Ok(outcome);
        }
        *self = self.after_deposit(&outcome)?;
        tracing::debug!(
            "deposit: accepted ({}, {}) of ({}, {}), minted {}; now {}",
            outcome.accepted_x(),
            outcome.accepted_y(),
            offered_x,
            offered_y,
            outcome.minted(),
            self
        );
        Ok(outcome)
    }

    fn quote_withdraw(
        &self,
        burned: Shares,
        fee_rate: FeeRate,
    ) -> Result<WithdrawOutcome, AmmError> {
        if burned > self.share_supply {
            return Err(AmmError::InvalidAmount("burned shares exceed share supply"));
        }
        // Nothing backs the shares of a depleted pool; they are kept, not
        // burned for zero.
        if burned.is_zero() || self.is_depleted() {
            return Ok(WithdrawOutcome::new(Amount::ZERO, Amount::ZERO, Shares::ZERO));
        }
        // The last holder takes everything; there is nobody left to keep
        // the fee for.
        if burned == self.share_supply {
            return Ok(WithdrawOutcome::new(self.reserve_x, self.reserve_y, burned));
        }

        let ps = self.share_supply.get();
        let gross_x = mul_div(self.reserve_x.get(), burned.get(), ps, Rounding::Down)?;
        let gross_y = mul_div(self.reserve_y.get(), burned.get(), ps, Rounding::Down)?;
        let withdrawn_x = fee_rate.net_of_fee(gross_x, Rounding::Down)?;
        let withdrawn_y = fee_rate.net_of_fee(gross_y, Rounding::Down)?;

        Ok(WithdrawOutcome::new(
            Amount::new(withdrawn_x),
            Amount::new(withdrawn_y),
            burned,
        ))
    }

    fn withdraw(
        &mut self,
        burned: Shares,
        fee_rate: FeeRate,
    ) -> Result<WithdrawOutcome, AmmError> {
        let outcome = self.quote_withdraw(burned, fee_rate)?;
        if outcome.burned().is_zero() {
            tracing::trace!("withdraw {}: nothing to pay out, pool unchanged", burned);
            return Ok(outcome);
        }
        *self = self.after_withdraw(&outcome)?;
        tracing::debug!(
            "withdraw: burned {}, paid ({}, {}) at fee {}; now {}",
            burned,
            outcome.withdrawn_x(),
            outcome.withdrawn_y(),
            fee_rate,
            self
        );
        Ok(outcome)
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pool(rx={}, ry={}, ps={})",
            self.reserve_x, self.reserve_y, self.share_supply
        )
    }
}
