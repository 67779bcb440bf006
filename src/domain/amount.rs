//! Raw asset quantity held in a reserve or moved across the pool boundary.

use core::fmt;

use crate::error::AmmError;

/// A quantity of one of the two backing assets, in its smallest unit.
///
/// `Amount` is unsigned: a negative quantity cannot be constructed, and
/// conversion from a signed integer fails with
/// [`AmmError::InvalidAmount`].  Arithmetic methods are checked and return
/// `None` instead of wrapping.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::Amount;
///
/// let a = Amount::new(10);
/// assert_eq!(a.checked_sub(&Amount::new(3)), Some(Amount::new(7)));
/// assert!(Amount::try_from(-1_i128).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Largest representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a raw `u128`.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw `u128`.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` if `other > self`.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

impl TryFrom<i128> for Amount {
    type Error = AmmError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        u128::try_from(value)
            .map(Self)
            .map_err(|_| AmmError::InvalidAmount("amount must not be negative"))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
