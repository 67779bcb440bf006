//! Arithmetic utilities for the pool engine.
//!
//! - [`mul_div`] / [`mul_div_wide`] — `a × b / c` with a 512-bit intermediate.
//! - [`Decimal`] — 18-digit fixed point with explicit truncation direction.
//! - [`CheckedArithmetic`] — `Result`-returning add/sub on quantity newtypes.
//!
//! # Feature-gated conversions
//!
//! | Feature | Adds |
//! |---------|------|
//! | `fixed-point` | `Decimal::to_fixed` and `Price::to_fixed` (`I80F48`) |

mod checked;
mod decimal;
mod wide;

pub use checked::CheckedArithmetic;
pub use decimal::{Decimal, DECIMAL_PRECISION};
pub use primitive_types::U256;
pub use wide::{mul_div, mul_div_wide};

pub(crate) use wide::narrow_u256;
