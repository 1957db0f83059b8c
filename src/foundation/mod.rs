//! Shared value types and errors.

/// Value types shared by every layer of the crate.
pub mod core;
/// Error taxonomy.
pub mod error;
pub(crate) mod math;
