//! Caller-supplied configuration.
//!
//! - [`PoolConfig`] — initial reserves and share supply of an active pool.
//! - [`FeeSchedule`] — swap and withdrawal fee rates the caller applies.

mod fee_schedule;
mod pool_config;

pub use fee_schedule::FeeSchedule;
pub use pool_config::PoolConfig;
