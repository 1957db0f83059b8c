//! Offline export.
//!
//! Bakes a job's layers for every output frame, serially or on a rayon pool.

pub mod bake;
/// Per-frame fingerprints.
pub mod fingerprint;
