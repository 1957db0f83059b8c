//! Evaluation entry points: the evaluator, layer placement and picker previews.

pub mod evaluator;
/// Text layers and their on-canvas placement.
pub mod layer;
pub mod preview;
