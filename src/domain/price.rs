//! Exact pool price as a reduced ratio.

use core::cmp::Ordering;
use core::fmt;

use primitive_types::U256;

use super::{Amount, Rounding};
use crate::error::{AmmError, Result};
use crate::math::Decimal;

/// Exact ratio `numerator / denominator`, kept in lowest terms.
///
/// The pool price `reserve_x / reserve_y` is never truncated: equality and
/// ordering compare the exact rationals, and conversion to a fixed-point
/// [`Decimal`] takes an explicit [`Rounding`].
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{Amount, Price, Rounding};
///
/// let Ok(p) = Price::from_amounts(Amount::new(200), Amount::new(300)) else { unreachable!() };
/// assert_eq!((p.numerator(), p.denominator()), (2, 3));
/// assert_eq!(p.to_decimal(Rounding::Down).map(|d| d.to_string()),
///            Ok("0.666666666666666666".to_owned()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Price {
    numerator: u128,
    denominator: u128,
}

const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl Price {
    /// Price ratio of 1:1.
    pub const ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Builds `numerator / denominator` in lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
    pub const fn new(numerator: u128, denominator: u128) -> Result<Self> {
        if denominator == 0 {
            return Err(AmmError::DivisionByZero);
        }
        // denominator > 0, so the gcd is never zero.
        let g = gcd(numerator, denominator);
        Ok(Self {
            numerator: numerator / g,
            denominator: denominator / g,
        })
    }

    /// Builds the price of one unit of `quote` in terms of `base` reserves:
    /// `base / quote`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UndefinedPrice`] if either amount is zero.
    pub const fn from_amounts(base: Amount, quote: Amount) -> Result<Self> {
        if base.is_zero() || quote.is_zero() {
            return Err(AmmError::UndefinedPrice);
        }
        Self::new(base.get(), quote.get())
    }

    /// Returns the reduced numerator.
    #[must_use]
    pub const fn numerator(&self) -> u128 {
        self.numerator
    }

    /// Returns the reduced denominator.
    #[must_use]
    pub const fn denominator(&self) -> u128 {
        self.denominator
    }

    /// Converts to an 18-digit fixed-point decimal.
    ///
    /// # Errors
    ///
    /// Propagates [`Decimal::from_ratio`] errors.
    pub fn to_decimal(&self, rounding: Rounding) -> Result<Decimal> {
        Decimal::from_ratio(self.numerator, self.denominator, rounding)
    }

    /// Lossy floating-point approximation, for display and simulation.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Converts to `I80F48`, truncating.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the price exceeds the `I80F48`
    /// range.
    #[cfg(feature = "fixed-point")]
    pub fn to_fixed(&self) -> Result<fixed::types::I80F48> {
        self.to_decimal(Rounding::Down)?.to_fixed()
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        // a/b vs c/d  <=>  a·d vs c·b; both products fit in 256 bits.
        let lhs = U256::from(self.numerator) * U256::from(other.denominator);
        let rhs = U256::from(other.numerator) * U256::from(self.denominator);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
