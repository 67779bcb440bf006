//! Value types for the pool engine.
//!
//! Quantities are unsigned newtypes so reserve amounts and share amounts
//! cannot be confused, and negative values cannot be represented.

mod amount;
mod fee_rate;
mod liquidity_outcome;
mod price;
mod rounding;
mod shares;
mod swap_direction;
mod swap_outcome;

pub use amount::Amount;
pub use fee_rate::FeeRate;
pub use liquidity_outcome::{DepositOutcome, WithdrawOutcome};
pub use price::Price;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_direction::SwapDirection;
pub use swap_outcome::SwapOutcome;
