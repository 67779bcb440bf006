//! Construction from a validated configuration.

use crate::error::AmmError;

/// Builds a value from its configuration struct.
///
/// Implementations **must** validate the configuration; a successfully
/// built value is always in a valid initial state.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for Pool`
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
