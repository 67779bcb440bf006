//! The constant product pool engine.
//!
//! | Type | Model |
//! |------|-------|
//! | [`Pool`] | `x · y = k`, 50/50, share-token backed |

pub mod constant_product;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use constant_product::Pool;
