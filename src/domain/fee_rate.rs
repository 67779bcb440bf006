//! Fee rate in `[0, 1)`.

use core::fmt;
use core::str::FromStr;

use super::Rounding;
use crate::error::{AmmError, Result};
use crate::math::Decimal;

/// Basis-point denominator (10 000 bp = 100%).
const BPS_DENOMINATOR: u128 = 10_000;

/// A fraction in `[0, 1)` charged on withdrawals or swap inputs.
///
/// The upper bound is exclusive: a 100% fee would turn every swap into a
/// donation and every withdrawal into a burn, so it is rejected at
/// construction rather than handled at each use.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::FeeRate;
///
/// let Ok(rate) = "0.003".parse::<FeeRate>() else { unreachable!() };
/// assert_eq!(FeeRate::from_basis_points(30), Ok(rate));
/// assert!("1".parse::<FeeRate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FeeRate(Decimal);

impl FeeRate {
    /// No fee.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Validates and wraps a decimal rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFeeRate`] if `rate >= 1`.
    pub fn new(rate: Decimal) -> Result<Self> {
        if rate >= Decimal::ONE {
            return Err(AmmError::InvalidFeeRate("fee rate must be below 1"));
        }
        Ok(Self(rate))
    }

    /// Builds a rate from basis points (1 bp = 0.01%).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFeeRate`] if `bps >= 10_000`.
    pub fn from_basis_points(bps: u32) -> Result<Self> {
        let rate = Decimal::from_ratio(u128::from(bps), BPS_DENOMINATOR, Rounding::Down)?;
        Self::new(rate)
    }

    /// Returns the rate as a decimal.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns `true` for a zero rate.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `1 - rate`, the fraction that survives the fee.
    #[must_use]
    pub fn complement(&self) -> Decimal {
        // rate < 1 is enforced at construction.
        Decimal::ONE.checked_sub(&self.0).unwrap_or(Decimal::ZERO)
    }

    /// Returns `value × rate`, rounded as requested.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the product exceeds `u128`.
    pub fn fee_on(&self, value: u128, rounding: Rounding) -> Result<u128> {
        self.0.mul_int(value, rounding)
    }

    /// Returns `value × (1 - rate)`, rounded as requested.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the product exceeds `u128`.
    pub fn net_of_fee(&self, value: u128, rounding: Rounding) -> Result<u128> {
        self.complement().mul_int(value, rounding)
    }
}

impl TryFrom<Decimal> for FeeRate {
    type Error = AmmError;

    fn try_from(rate: Decimal) -> Result<Self> {
        Self::new(rate)
    }
}

impl FromStr for FeeRate {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with('-') {
            return Err(AmmError::InvalidFeeRate("fee rate must not be negative"));
        }
        let rate = s
            .parse::<Decimal>()
            .map_err(|_| AmmError::InvalidFeeRate("fee rate is not a decimal number"))?;
        Self::new(rate)
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn rate(s: &str) -> FeeRate {
        let Ok(r) = s.parse::<FeeRate>() else {
            panic!("valid fee rate {s}");
        };
        r
    }

    #[test]
    fn zero_is_default() {
        assert_eq!(FeeRate::default(), FeeRate::ZERO);
        assert!(FeeRate::ZERO.is_zero());
        assert_eq!(FeeRate::ZERO.complement(), Decimal::ONE);
    }

    #[test]
    fn one_and_above_rejected() {
        assert!(matches!(
            FeeRate::new(Decimal::ONE),
            Err(AmmError::InvalidFeeRate(_))
        ));
        assert!(matches!(
            FeeRate::from_basis_points(10_000),
            Err(AmmError::InvalidFeeRate(_))
        ));
        assert!("1.5".parse::<FeeRate>().is_err());
    }

    #[test]
    fn negative_rejected() {
        let Err(AmmError::InvalidFeeRate(msg)) = "-0.01".parse::<FeeRate>() else {
            panic!("expected InvalidFeeRate");
        };
        assert!(msg.contains("negative"));
    }

    #[test]
    fn malformed_rejected() {
        assert!(matches!(
            "abc".parse::<FeeRate>(),
            Err(AmmError::InvalidFeeRate(_))
        ));
    }

    #[test]
    fn basis_points_match_decimal() {
        assert_eq!(FeeRate::from_basis_points(30), Ok(rate("0.003")));
        assert_eq!(FeeRate::from_basis_points(9_999), Ok(rate("0.9999")));
    }

    #[test]
    fn net_and_fee_split() {
        let r = rate("0.003");
        assert_eq!(r.net_of_fee(200, Rounding::Down), Ok(199));
        assert_eq!(r.fee_on(200, Rounding::Up), Ok(1));
        assert_eq!(r.net_of_fee(10, Rounding::Down), Ok(9));
    }
}
