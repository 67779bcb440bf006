//! Unified error types for the pool engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Every error is detected before any pool field is touched,
//! so a returned error always means the pool is unchanged.

use thiserror::Error;

/// Errors produced by the pool engine and its value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// Price requested on a pool with a zero reserve.
    #[error("price is undefined while a reserve is zero")]
    UndefinedPrice,

    /// Swap, price or deposit attempted on a depleted pool.
    #[error("pool is depleted")]
    DepletedPool,

    /// Negative amount, or burning more shares than exist.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// Fee rate outside `[0, 1)`.
    #[error("invalid fee rate: {0}")]
    InvalidFeeRate(&'static str),

    /// Malformed fixed-point decimal literal.
    #[error("invalid decimal: {0}")]
    InvalidDecimal(&'static str),

    /// Result does not fit the target integer width.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Subtraction below zero.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
