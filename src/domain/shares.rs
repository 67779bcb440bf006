//! Pool-share token quantities.

use core::fmt;

use crate::error::AmmError;

/// A quantity of pool-share tokens.
///
/// Kept distinct from [`Amount`](super::Amount) so that reserve quantities
/// and share quantities cannot be mixed up at a call site.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::Shares;
///
/// let supply = Shares::new(10_000);
/// assert_eq!(supply.checked_sub(&Shares::new(1_000)), Some(Shares::new(9_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw `u128`.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw `u128`.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if there are no shares.
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

impl From<u128> for Shares {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl TryFrom<i128> for Shares {
    type Error = AmmError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        u128::try_from(value)
            .map(Self)
            .map_err(|_| AmmError::InvalidAmount("share amount must not be negative"))
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
