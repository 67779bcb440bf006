//! Fallible arithmetic on the quantity newtypes.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning inherent methods of
//! [`Amount`] and [`Shares`] into [`Result`]s with a specific
//! [`AmmError`] variant, so pool code can use `?` throughout.
//!
//! ```
//! use xyk_pool::domain::Amount;
//! use xyk_pool::math::CheckedArithmetic;
//!
//! assert!(Amount::MAX.safe_add(&Amount::new(1)).is_err());
//! assert_eq!(Amount::new(5).safe_sub(&Amount::new(2)), Ok(Amount::new(3)));
//! ```

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible addition and subtraction.
///
/// # Contract
///
/// - No panics and no saturation; every failure is an `Err`.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum is not representable.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the difference would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("share supply overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("share supply underflow"))
    }
}
