//! Preset animation: easing curves, timing regimes, the preset table and its output.

/// Easing curves.
pub mod ease;
pub mod preset;
pub mod timing;
/// The evaluated visual adjustment.
pub mod transform;
