//! The composition root: one pure `evaluate(spec, path, elapsed, canvas) -> Transform`.
//!
//! Nothing here keeps state between calls. The same inputs always produce a bit-identical
//! [`Transform`], which is what scrubbing and multi-threaded export rely on.

use crate::{
    animation::{
        preset::{AnimationPreset, evaluate_preset},
        timing::{loop_restart, one_shot},
        transform::Transform,
    },
    foundation::{
        core::Canvas,
        error::{MotionError, MotionResult},
    },
    path::{interp::interpolate, model::AnimationPath},
};

/// Declared animation of one layer, as authored in the preset picker.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSpec {
    /// Which preset to play.
    pub preset: AnimationPreset,
    /// Seconds before a one-shot animation starts.
    #[serde(default, alias = "delay")]
    pub delay_seconds: f64,
    /// Length of one run (one-shot) or one cycle (loop). `<= 0` means already complete.
    #[serde(default = "default_duration_seconds", alias = "duration")]
    pub duration_seconds: f64,
    /// Repeat path presets with a restart. Other categories ignore it.
    #[serde(default, rename = "loop")]
    pub looping: bool,
    /// Reserved pause between loop cycles; currently unused by every regime.
    #[serde(default, alias = "loopDelay")]
    pub loop_delay_seconds: f64,
}

fn default_duration_seconds() -> f64 {
    AnimationSpec::DEFAULT_DURATION_SECS
}

impl AnimationSpec {
    /// Duration used when a document omits `durationSeconds`.
    pub const DEFAULT_DURATION_SECS: f64 = 0.8;

    /// Spec for `preset` with default timing.
    pub fn new(preset: AnimationPreset) -> Self {
        Self {
            preset,
            delay_seconds: 0.0,
            duration_seconds: Self::DEFAULT_DURATION_SECS,
            looping: false,
            loop_delay_seconds: 0.0,
        }
    }

    /// Builder-style delay override.
    pub fn with_delay(mut self, secs: f64) -> Self {
        self.delay_seconds = secs;
        self
    }

    /// Builder-style duration override.
    pub fn with_duration(mut self, secs: f64) -> Self {
        self.duration_seconds = secs;
        self
    }

    /// Builder-style loop flag override.
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Report authoring mistakes: non-finite timings and negative delays.
    ///
    /// [`evaluate`] does not call this and copes with all of these on its own. A non-positive
    /// duration is legal and means "already complete".
    pub fn validate(&self) -> MotionResult<()> {
        for (name, v) in [
            ("delaySeconds", self.delay_seconds),
            ("durationSeconds", self.duration_seconds),
            ("loopDelaySeconds", self.loop_delay_seconds),
        ] {
            if !v.is_finite() {
                return Err(MotionError::validation(format!("{name} must be finite, got {v}")));
            }
        }
        if self.delay_seconds < 0.0 {
            return Err(MotionError::validation(format!(
                "delaySeconds must be >= 0, got {}",
                self.delay_seconds
            )));
        }
        if self.loop_delay_seconds < 0.0 {
            return Err(MotionError::validation(format!(
                "loopDelaySeconds must be >= 0, got {}",
                self.loop_delay_seconds
            )));
        }
        Ok(())
    }
}

/// Evaluate one layer's animation at `elapsed_secs`.
///
/// Non-path presets read the canonical preset table. Path presets (`motionPath`,
/// `curvePath`) walk `path` and translate the layer by the offset of the current path point
/// from the path's centroid, scaled to `canvas` pixels. A path preset without a path (or with
/// an empty one) yields [`Transform::IDENTITY`].
pub fn evaluate(
    spec: &AnimationSpec,
    path: Option<&AnimationPath>,
    elapsed_secs: f64,
    canvas: Canvas,
) -> Transform {
    if !spec.preset.is_path() {
        return evaluate_preset(
            spec.preset,
            elapsed_secs,
            spec.delay_seconds,
            spec.duration_seconds,
        );
    }
    let Some(path) = path else {
        return Transform::IDENTITY;
    };
    evaluate_path(spec, path, elapsed_secs, canvas)
}

/// Path progress: restart loop over the duration when looping, else one-shot after the delay.
///
/// Path motion never ping-pongs and is always linear in time.
pub fn path_progress(spec: &AnimationSpec, elapsed_secs: f64) -> f64 {
    if spec.looping {
        loop_restart(elapsed_secs, spec.duration_seconds)
    } else {
        one_shot(elapsed_secs, spec.delay_seconds, spec.duration_seconds).progress
    }
}

fn evaluate_path(
    spec: &AnimationSpec,
    path: &AnimationPath,
    elapsed_secs: f64,
    canvas: Canvas,
) -> Transform {
    let Some(center) = path.centroid() else {
        tracing::trace!("path preset with an empty path evaluates to identity");
        return Transform::IDENTITY;
    };
    let p = interpolate(path, path_progress(spec, elapsed_secs));
    let dx = (f64::from(p.x) - f64::from(center.x)) * f64::from(canvas.width);
    let dy = (f64::from(p.y) - f64::from(center.y)) * f64::from(canvas.height);
    Transform {
        translate_x: dx as f32,
        translate_y: dy as f32,
        ..Transform::IDENTITY
    }
    .clamped()
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
