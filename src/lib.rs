//! # xyk-pool
//!
//! Invariant engine for a two-asset constant product liquidity pool: two
//! reserves `(X, Y)` backed by a fungible share token, with deposit,
//! withdraw and swap transitions that never leak value through rounding.
//!
//! The engine is a plain value type.  It moves no tokens, persists nothing
//! and performs no authorization; callers pass reserves, supplies and fee
//! rates in and get amounts back.  Callers serving concurrent requests
//! against one pool must serialize the mutating calls themselves.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `fixed-point` | no | `I80F48` conversions for [`Decimal`](math::Decimal) and [`Price`](domain::Price) |
//!
//! # Quick Start
//!
//! ```rust
//! use xyk_pool::prelude::*;
//!
//! // 1. A pool created by the caller's bootstrap step
//! let config = PoolConfig::new(Amount::new(2_000), Amount::new(100), Shares::new(10_000))
//!     .expect("non-zero reserves and supply");
//! let mut pool = Pool::from_config(&config).expect("valid config");
//!
//! // 2. Price is an exact ratio
//! assert_eq!(pool.price().expect("active pool").to_string(), "20/1");
//!
//! // 3. Deposit mints shares without diluting existing holders
//! let deposit = pool.deposit(Amount::new(200), Amount::new(10)).expect("active pool");
//! assert_eq!(deposit.into_parts(), (Amount::new(200), Amount::new(10), Shares::new(1_000)));
//!
//! // 4. Withdraw with a 0.3% fee that stays in the pool
//! let fees = FeeSchedule::from_basis_points(30, 30).expect("valid fees");
//! let out = pool.withdraw(Shares::new(1_000), fees.withdrawal()).expect("within supply");
//! assert_eq!(out.amounts(), (Amount::new(199), Amount::new(9)));
//!
//! // 5. Swaps never decrease k
//! let k = pool.invariant_k();
//! pool.swap_x_for_y(Amount::new(1_000), fees.swap()).expect("active pool");
//! assert!(pool.invariant_k() > k);
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`FeeRate`](domain::FeeRate), [`Price`](domain::Price), outcomes |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) and [`FeeSchedule`](config::FeeSchedule) |
//! | [`pools`]  | [`Pool`](pools::Pool), the engine |
//! | [`math`]   | Widening `mul_div` with explicit rounding, fixed-point [`Decimal`](math::Decimal) |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
