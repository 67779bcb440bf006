//! Fixed-point decimal with 18 fractional digits.
//!
//! [`Decimal`] stores `value × 10¹⁸` in a [`U256`].  Every operation that
//! can lose precision takes a [`Rounding`] argument, so the truncation
//! direction is always visible at the call site instead of being a library
//! default.
//!
//! ```
//! use xyk_pool::domain::Rounding;
//! use xyk_pool::math::Decimal;
//!
//! let Ok(third) = Decimal::from_ratio(1, 3, Rounding::Down) else { unreachable!() };
//! assert_eq!(third.to_string(), "0.333333333333333333");
//!
//! let Ok(third_up) = Decimal::from_ratio(1, 3, Rounding::Up) else { unreachable!() };
//! assert_eq!(third_up.to_string(), "0.333333333333333334");
//! ```

use core::fmt;
use core::str::FromStr;

use primitive_types::U256;

use super::wide::{mul_div_wide, narrow_u256};
use crate::domain::Rounding;
use crate::error::{AmmError, Result};

/// Number of fractional decimal digits.
pub const DECIMAL_PRECISION: u32 = 18;

/// `10^DECIMAL_PRECISION`.
const SCALE: u64 = 1_000_000_000_000_000_000;

/// Non-negative fixed-point number with [`DECIMAL_PRECISION`] fractional
/// digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimal(U256);

impl Decimal {
    /// Zero.
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));

    /// One.
    pub const ONE: Self = Self(U256([SCALE, 0, 0, 0]));

    fn scale() -> U256 {
        U256::from(SCALE)
    }

    /// Builds a decimal from its raw scaled representation.
    #[must_use]
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// Returns the raw scaled representation (`value × 10¹⁸`).
    #[must_use]
    pub const fn raw(&self) -> U256 {
        self.0
    }

    /// Converts an integer exactly.
    #[must_use]
    pub fn from_int(value: u128) -> Self {
        // u128 × 10^18 < 2^188, always fits.
        Self(U256::from(value) * Self::scale())
    }

    /// Computes `numerator / denominator` at 18-digit precision.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
    pub fn from_ratio(numerator: u128, denominator: u128, rounding: Rounding) -> Result<Self> {
        mul_div_wide(
            U256::from(numerator),
            Self::scale(),
            U256::from(denominator),
            rounding,
        )
        .map(Self)
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked subtraction. Returns `None` if `other > self`.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Multiplies an integer by this decimal and rounds to an integer.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds `u128`.
    pub fn mul_int(&self, value: u128, rounding: Rounding) -> Result<u128> {
        let product = mul_div_wide(U256::from(value), self.0, Self::scale(), rounding)?;
        narrow_u256(product).ok_or(AmmError::Overflow("decimal product exceeds u128"))
    }

    /// Converts to an `I80F48` fixed-point number.
    ///
    /// The 18-digit decimal fraction is truncated to 48 binary digits.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the integer part exceeds the
    /// `I80F48` range.
    #[cfg(feature = "fixed-point")]
    pub fn to_fixed(&self) -> Result<fixed::types::I80F48> {
        use fixed::types::I80F48;

        let (int_part, frac_part) = self.0.div_mod(Self::scale());
        let int_part = narrow_u256(int_part)
            .and_then(I80F48::checked_from_num)
            .ok_or(AmmError::Overflow("decimal exceeds I80F48 range"))?;
        let frac = I80F48::from_num(frac_part.low_u64())
            .checked_div(I80F48::from_num(SCALE))
            .ok_or(AmmError::Overflow("decimal fraction conversion"))?;
        int_part
            .checked_add(frac)
            .ok_or(AmmError::Overflow("decimal exceeds I80F48 range"))
    }
}

impl From<u128> for Decimal {
    fn from(value: u128) -> Self {
        Self::from_int(value)
    }
}

impl FromStr for Decimal {
    type Err = AmmError;

    /// Parses plain decimal notation such as `"12"`, `"0.003"` or `".5"`.
    fn from_str(s: &str) -> Result<Self> {
        let (int_digits, frac_digits) = s.split_once('.').unwrap_or((s, ""));
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(AmmError::InvalidDecimal("no digits"));
        }
        if frac_digits.len() > DECIMAL_PRECISION as usize {
            return Err(AmmError::InvalidDecimal("more than 18 fractional digits"));
        }

        let ten = U256::from(10u8);
        let mut raw = U256::zero();
        for byte in int_digits.bytes().chain(frac_digits.bytes()) {
            if !byte.is_ascii_digit() {
                return Err(AmmError::InvalidDecimal("expected ASCII digits"));
            }
            raw = raw
                .checked_mul(ten)
                .and_then(|v| v.checked_add(U256::from(byte - b'0')))
                .ok_or(AmmError::InvalidDecimal("value exceeds 256 bits"))?;
        }
        for _ in frac_digits.len()..DECIMAL_PRECISION as usize {
            raw = raw
                .checked_mul(ten)
                .ok_or(AmmError::InvalidDecimal("value exceeds 256 bits"))?;
        }
        Ok(Self(raw))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (int_part, frac_part) = self.0.div_mod(Self::scale());
        write!(f, "{}.{:018}", int_part, frac_part.low_u64())
    }
}
