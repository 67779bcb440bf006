//! Explicit rounding direction for division.

/// Rounding direction for every lossy division in the crate.
///
/// There is no default: each call site names the direction that keeps the
/// rounding error on the pool's side.
///
/// ```
/// use xyk_pool::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(Rounding::Down.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Towards positive infinity (ceiling).
    Up,
    /// Towards zero (floor, for the unsigned values used here).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
