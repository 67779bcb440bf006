//! Caller-owned fee rates.

use core::fmt;

use crate::domain::FeeRate;
use crate::error::AmmError;

/// Fee rates a caller applies to the pool's operations.
///
/// The engine never reads a schedule on its own: the caller picks the rate
/// from here and passes it to each [`withdraw`](crate::traits::LiquidityPool::withdraw)
/// or [`swap`](crate::traits::SwapPool::swap) call.
///
/// # Examples
///
/// ```
/// use xyk_pool::config::FeeSchedule;
///
/// let Ok(fees) = FeeSchedule::from_basis_points(30, 30) else { unreachable!() };
/// assert_eq!(fees.swap().to_string(), "0.003000000000000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FeeSchedule {
    swap: FeeRate,
    withdrawal: FeeRate,
}

impl FeeSchedule {
    /// A schedule that charges nothing.
    pub const FREE: Self = Self {
        swap: FeeRate::ZERO,
        withdrawal: FeeRate::ZERO,
    };

    /// Creates a schedule from validated rates.
    pub const fn new(swap: FeeRate, withdrawal: FeeRate) -> Self {
        Self { swap, withdrawal }
    }

    /// Creates a schedule from basis points.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFeeRate`] if either value is 10 000 bp or
    /// more.
    pub fn from_basis_points(swap_bps: u32, withdrawal_bps: u32) -> Result<Self, AmmError> {
        Ok(Self {
            swap: FeeRate::from_basis_points(swap_bps)?,
            withdrawal: FeeRate::from_basis_points(withdrawal_bps)?,
        })
    }

    /// Returns the swap fee rate.
    #[must_use]
    pub const fn swap(&self) -> FeeRate {
        self.swap
    }

    /// Returns the withdrawal fee rate.
    #[must_use]
    pub const fn withdrawal(&self) -> FeeRate {
        self.withdrawal
    }
}

impl fmt::Display for FeeSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeSchedule(swap={}, withdrawal={})", self.swap, self.withdrawal)
    }
}
