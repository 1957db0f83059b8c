//! Turning drawn input into [`AnimationPath`]s.
//!
//! Raw samples arrive in canvas pixels (one per pointer move). They are thinned, normalized by
//! the canvas size and clamped onto the canvas before they become path points.

use std::f64::consts::{FRAC_PI_2, TAU};

use kurbo::Point;

use crate::{
    foundation::{
        core::{Canvas, PathPoint},
        error::{MotionError, MotionResult},
    },
    path::model::{AnimationPath, PathKind},
};

const SIMPLIFY_THRESHOLD: usize = 10;
const STOCK_RADIUS_FRACTION: f64 = 0.6;

/// Thin a dense stroke to roughly ten samples.
///
/// Up to ten samples pass through unchanged. Above that, every `ceil(len / 10)`-th sample is
/// kept, plus the last one so the stroke still ends where the pointer was lifted.
pub fn simplify(samples: &[Point]) -> Vec<Point> {
    if samples.len() <= SIMPLIFY_THRESHOLD {
        return samples.to_vec();
    }
    let step = samples.len().div_ceil(SIMPLIFY_THRESHOLD);
    let last = samples.len() - 1;
    samples
        .iter()
        .enumerate()
        .filter(|(i, _)| i % step == 0 || *i == last)
        .map(|(_, p)| *p)
        .collect()
}

/// Normalize a pixel-space sample to the canvas and clamp it into `[0, 1]`.
pub fn normalize_sample(sample: Point, canvas: Canvas) -> PathPoint {
    let x = (sample.x / f64::from(canvas.width)).clamp(0.0, 1.0);
    let y = (sample.y / f64::from(canvas.height)).clamp(0.0, 1.0);
    PathPoint::new(x as f32, y as f32)
}

impl AnimationPath {
    /// Build a path from pointer samples in canvas pixels.
    ///
    /// Samples are thinned with [`simplify`] and then normalized with [`normalize_sample`].
    /// Non-finite samples are dropped.
    pub fn from_raw_samples(
        kind: PathKind,
        samples: &[Point],
        canvas: Canvas,
    ) -> MotionResult<Self> {
        if canvas.is_empty() {
            return Err(MotionError::validation(format!(
                "cannot normalize samples on an empty {}x{} canvas",
                canvas.width, canvas.height
            )));
        }
        let finite: Vec<Point> = samples.iter().copied().filter(|p| p.is_finite()).collect();
        if finite.len() != samples.len() {
            tracing::debug!(
                dropped = samples.len() - finite.len(),
                "dropping non-finite path samples"
            );
        }
        let points = simplify(&finite)
            .into_iter()
            .map(|p| normalize_sample(p, canvas))
            .collect();
        Ok(Self::new(kind, points))
    }
}

/// Closed circle around the canvas center: 13 samples, the last repeating the first.
pub fn circle_samples(canvas: Canvas) -> Vec<Point> {
    let (center, radius) = stock_circle(canvas);
    (0..=12)
        .map(|i| {
            let angle = TAU * f64::from(i) / 12.0;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Two sine periods across the middle 80% of the canvas width: 21 samples.
pub fn wave_samples(canvas: Canvas) -> Vec<Point> {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let amplitude = h * 0.15;
    let cy = h / 2.0;
    (0..=20)
        .map(|i| {
            let t = f64::from(i) / 20.0;
            Point::new(w * 0.1 + w * 0.8 * t, cy + amplitude * (t * 2.0 * TAU).sin())
        })
        .collect()
}

/// Quarter circle from the right of center sweeping up to the top: 11 samples.
pub fn quarter_arc_samples(canvas: Canvas) -> Vec<Point> {
    let (center, radius) = stock_circle(canvas);
    (0..=10)
        .map(|i| {
            let angle = FRAC_PI_2 * f64::from(i) / 10.0;
            Point::new(
                center.x + radius * angle.cos(),
                center.y - radius * angle.sin(),
            )
        })
        .collect()
}

/// Stock shapes offered next to the freehand canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StockShape {
    /// [`circle_samples`], traversed as a circular path.
    Circle,
    /// [`wave_samples`], traversed as a wave path.
    Wave,
    /// [`quarter_arc_samples`], traversed as an arc path.
    Arc,
}

impl StockShape {
    /// Pixel samples for this shape on `canvas`.
    pub fn samples(self, canvas: Canvas) -> Vec<Point> {
        match self {
            Self::Circle => circle_samples(canvas),
            Self::Wave => wave_samples(canvas),
            Self::Arc => quarter_arc_samples(canvas),
        }
    }

    /// Path kind that traverses this shape the way it is drawn.
    pub fn path_kind(self) -> PathKind {
        match self {
            Self::Circle => PathKind::Circular,
            Self::Wave => PathKind::Wave,
            Self::Arc => PathKind::Arc,
        }
    }

    /// Normalized path for this shape on `canvas`.
    pub fn to_path(self, canvas: Canvas) -> MotionResult<AnimationPath> {
        AnimationPath::from_raw_samples(self.path_kind(), &self.samples(canvas), canvas)
    }
}

fn stock_circle(canvas: Canvas) -> (Point, f64) {
    let cx = f64::from(canvas.width) / 2.0;
    let cy = f64::from(canvas.height) / 2.0;
    (Point::new(cx, cy), cx.min(cy) * STOCK_RADIUS_FRACTION)
}

#[cfg(test)]
#[path = "../../tests/unit/path/authoring.rs"]
mod tests;
