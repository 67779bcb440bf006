//! Outcome of a swap.

use core::fmt;

use super::{Amount, SwapDirection};

/// Amounts exchanged by one swap.
///
/// `fee` is the portion of `amount_in` (rounded up) that was excluded from
/// pricing.  It stays in the pool: the whole `amount_in` is added to the
/// input reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapOutcome {
    pub(crate) const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> Self {
        Self {
            direction,
            amount_in,
            amount_out,
            fee,
        }
    }

    /// A swap of zero input: nothing moves.
    pub(crate) const fn none(direction: SwapDirection) -> Self {
        Self::new(direction, Amount::ZERO, Amount::ZERO, Amount::ZERO)
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the amount paid into the pool.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the amount paid out of the pool.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee portion of the input.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Returns `true` if nothing was exchanged.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.amount_in.is_zero() && self.amount_out.is_zero()
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swap {}(in={}, out={}, fee={})",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}
