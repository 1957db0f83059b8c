//! textmotion computes the animated transform of text overlays.
//!
//! Given a layer's declared animation (a named preset, or a user-drawn motion path) and an
//! elapsed time, [`evaluate`] returns the exact [`Transform`] to apply. Evaluation is a pure
//! function of its inputs, so it supports arbitrary seeking and out-of-order, multi-threaded
//! export:
//!
//! - Pick an [`AnimationPreset`] and timing in an [`AnimationSpec`]
//! - Optionally attach an [`AnimationPath`]
//! - Call [`evaluate`] per layer per frame, or [`bake`] a whole [`BakeJob`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod animation;
pub mod eval;
pub mod export;
pub mod foundation;
pub mod path;

pub use crate::animation::ease::Ease;
pub use crate::animation::preset::{AnimationPreset, PresetCategory, evaluate_preset};
pub use crate::animation::transform::{Property, Transform};
pub use crate::eval::evaluator::{AnimationSpec, evaluate};
pub use crate::eval::layer::{LayerPosition, Placement, TextLayer, evaluate_layer, resolve_placement};
pub use crate::eval::preview::evaluate_preview;
pub use crate::export::bake::{
    BakeJob, BakedFrame, BakedLayer, BakedTimeline, ExportThreading, bake, bake_all,
};
pub use crate::export::fingerprint::FrameFingerprint;
pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, PathPoint, Point, Vec2};
pub use crate::foundation::error::{MotionError, MotionResult};
pub use crate::path::authoring::StockShape;
pub use crate::path::interp::interpolate;
pub use crate::path::model::{AnimationPath, CurveKind, PathKind};
