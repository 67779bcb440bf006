//! Widening `a × b / c` with explicit rounding.
//!
//! Every proportional quantity in the pool (`reserve × shares / supply`,
//! `reserve_out × input / (reserve_in + input)`) multiplies two values of
//! the same width before dividing.  Doing that in `u128` overflows long
//! before the quotient does, so the product is formed in 512 bits from
//! [`U256`] operands and narrowed only after the division.

use primitive_types::{U256, U512};

use crate::domain::Rounding;
use crate::error::{AmmError, Result};

/// Narrows a `U512` to `U256`, or `None` if any high word is set.
fn narrow_u512(value: U512) -> Option<U256> {
    if value.bits() > 256 {
        return None;
    }
    let U512(ref words) = value;
    Some(U256([words[0], words[1], words[2], words[3]]))
}

/// Narrows a `U256` to `u128`, or `None` if it does not fit.
pub(crate) fn narrow_u256(value: U256) -> Option<u128> {
    if value.bits() > 128 {
        return None;
    }
    Some(value.low_u128())
}

/// Computes `a × b / denominator` in 512-bit precision.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient exceeds 256 bits.
pub fn mul_div_wide(a: U256, b: U256, denominator: U256, rounding: Rounding) -> Result<U256> {
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let (quotient, remainder) = a.full_mul(b).div_mod(U512::from(denominator));
    // The product is below 2^512 - 1, so the increment cannot overflow.
    let quotient = if rounding.is_up() && !remainder.is_zero() {
        quotient + U512::one()
    } else {
        quotient
    };
    narrow_u512(quotient).ok_or(AmmError::Overflow("mul_div quotient exceeds 256 bits"))
}

/// Computes `a × b / denominator` for `u128` operands.
///
/// ```
/// use xyk_pool::domain::Rounding;
/// use xyk_pool::math::mul_div;
///
/// // The product overflows u128 but the quotient does not.
/// let big = u128::MAX / 2;
/// assert_eq!(mul_div(big, 4, 8, Rounding::Down), Ok(big / 2));
/// ```
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient exceeds `u128`.
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128> {
    let quotient = mul_div_wide(
        U256::from(a),
        U256::from(b),
        U256::from(denominator),
        rounding,
    )?;
    narrow_u256(quotient).ok_or(AmmError::Overflow("mul_div quotient exceeds 128 bits"))
}
