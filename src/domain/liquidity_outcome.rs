//! Outcomes of deposits and withdrawals.

use core::fmt;

use super::{Amount, Shares};

/// Result of a deposit: what the pool kept and what it minted.
///
/// # Invariants
///
/// For the pool state `(rx, ry, ps)` before the deposit:
///
/// - `accepted_x · ps ≥ minted · rx`
/// - `accepted_y · ps ≥ minted · ry`
/// - `minted == 0` implies both accepted amounts are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DepositOutcome {
    accepted_x: Amount,
    accepted_y: Amount,
    minted: Shares,
}

impl DepositOutcome {
    /// Nothing accepted, nothing minted.
    pub const NONE: Self = Self {
        accepted_x: Amount::ZERO,
        accepted_y: Amount::ZERO,
        minted: Shares::ZERO,
    };

    pub(crate) const fn new(accepted_x: Amount, accepted_y: Amount, minted: Shares) -> Self {
        Self {
            accepted_x,
            accepted_y,
            minted,
        }
    }

    /// Returns the X amount taken from the depositor.
    pub const fn accepted_x(&self) -> Amount {
        self.accepted_x
    }

    /// Returns the Y amount taken from the depositor.
    pub const fn accepted_y(&self) -> Amount {
        self.accepted_y
    }

    /// Returns the shares minted to the depositor.
    pub const fn minted(&self) -> Shares {
        self.minted
    }

    /// Returns `(accepted_x, accepted_y, minted)`.
    pub const fn into_parts(self) -> (Amount, Amount, Shares) {
        (self.accepted_x, self.accepted_y, self.minted)
    }

    /// Returns `true` if the deposit was too small to mint anything.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.minted.is_zero()
    }
}

impl fmt::Display for DepositOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(x={}, y={}, minted={})",
            self.accepted_x, self.accepted_y, self.minted
        )
    }
}

/// Result of a withdrawal: what the pool paid out for the burned shares.
///
/// # Invariants
///
/// For the pool state `(rx, ry, ps)` before the withdrawal:
///
/// - `burned · rx ≥ withdrawn_x · ps`
/// - `burned · ry ≥ withdrawn_y · ps`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WithdrawOutcome {
    withdrawn_x: Amount,
    withdrawn_y: Amount,
    burned: Shares,
}

impl WithdrawOutcome {
    pub(crate) const fn new(withdrawn_x: Amount, withdrawn_y: Amount, burned: Shares) -> Self {
        Self {
            withdrawn_x,
            withdrawn_y,
            burned,
        }
    }

    /// Returns the X amount paid out.
    pub const fn withdrawn_x(&self) -> Amount {
        self.withdrawn_x
    }

    /// Returns the Y amount paid out.
    pub const fn withdrawn_y(&self) -> Amount {
        self.withdrawn_y
    }

    /// Returns the shares burned.
    pub const fn burned(&self) -> Shares {
        self.burned
    }

    /// Returns `(withdrawn_x, withdrawn_y)`.
    pub const fn amounts(&self) -> (Amount, Amount) {
        (self.withdrawn_x, self.withdrawn_y)
    }
}

impl fmt::Display for WithdrawOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdraw(burned={}, x={}, y={})",
            self.burned, self.withdrawn_x, self.withdrawn_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_none() {
        assert!(DepositOutcome::NONE.is_empty());
        assert_eq!(DepositOutcome::default(), DepositOutcome::NONE);
        assert_eq!(
            DepositOutcome::NONE.into_parts(),
            (Amount::ZERO, Amount::ZERO, Shares::ZERO)
        );
    }

    #[test]
    fn deposit_display() {
        let d = DepositOutcome::new(Amount::new(66), Amount::new(99), Shares::new(99));
        assert_eq!(d.to_string(), "Deposit(x=66, y=99, minted=99)");
    }

    #[test]
    fn withdraw_accessors() {
        let w = WithdrawOutcome::new(Amount::new(199), Amount::new(9), Shares::new(1_000));
        assert_eq!(w.amounts(), (Amount::new(199), Amount::new(9)));
        assert_eq!(w.burned(), Shares::new(1_000));
        assert_eq!(w.to_string(), "Withdraw(burned=1000, x=199, y=9)");
    }
}
