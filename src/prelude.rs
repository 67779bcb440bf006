//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use xyk_pool::prelude::*;
//!
//! let mut pool = Pool::new(Amount::new(2_000), Amount::new(100), Shares::new(10_000));
//! assert!(!pool.is_depleted());
//! assert!(pool.deposit(Amount::ZERO, Amount::ZERO).is_ok());
//! ```

pub use crate::config::{FeeSchedule, PoolConfig};
pub use crate::domain::{
    Amount, DepositOutcome, FeeRate, Price, Rounding, Shares, SwapDirection, SwapOutcome,
    WithdrawOutcome,
};
pub use crate::error::{AmmError, Result};
pub use crate::math::{CheckedArithmetic, Decimal};
pub use crate::pools::Pool;
pub use crate::traits::{FromConfig, LiquidityPool, SwapPool};
