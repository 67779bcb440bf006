//! Initial state for an active pool.

use core::fmt;

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// The initial `(reserve_x, reserve_y, share_supply)` triple of a pool.
///
/// The caller owns bootstrapping (including the first share issuance), so
/// this only checks that the triple describes an active pool.
///
/// # Derived Values
///
/// - Initial price: `P₀ = reserve_x / reserve_y`
/// - Initial invariant: `k = reserve_x × reserve_y`
///
/// # Validation
///
/// Both reserves and the share supply must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    reserve_x: Amount,
    reserve_y: Amount,
    share_supply: Shares,
}

impl PoolConfig {
    /// Creates and validates a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DepletedPool`] if any component is zero.
    pub fn new(reserve_x: Amount, reserve_y: Amount, share_supply: Shares) -> Result<Self, AmmError> {
        let config = Self {
            reserve_x,
            reserve_y,
            share_supply,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DepletedPool`] if any component is zero.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.reserve_x.is_zero() || self.reserve_y.is_zero() || self.share_supply.is_zero() {
            return Err(AmmError::DepletedPool);
        }
        Ok(())
    }

    /// Returns the initial X reserve.
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Returns the initial Y reserve.
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Returns the initial share supply.
    pub const fn share_supply(&self) -> Shares {
        self.share_supply
    }
}

impl fmt::Display for PoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolConfig(rx={}, ry={}, ps={})",
            self.reserve_x, self.reserve_y, self.share_supply
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_config() {
        let Ok(cfg) = PoolConfig::new(Amount::new(2_000), Amount::new(100), Shares::new(10_000))
        else {
            panic!("expected Ok");
        };
        assert_eq!(cfg.reserve_x(), Amount::new(2_000));
        assert_eq!(cfg.reserve_y(), Amount::new(100));
        assert_eq!(cfg.share_supply(), Shares::new(10_000));
    }

    #[test]
    fn zero_components_rejected() {
        let one = Amount::new(1);
        assert_eq!(
            PoolConfig::new(Amount::ZERO, one, Shares::new(1)),
            Err(AmmError::DepletedPool)
        );
        assert_eq!(
            PoolConfig::new(one, Amount::ZERO, Shares::new(1)),
            Err(AmmError::DepletedPool)
        );
        assert_eq!(
            PoolConfig::new(one, one, Shares::ZERO),
            Err(AmmError::DepletedPool)
        );
    }
}
