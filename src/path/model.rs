use crate::foundation::{
    core::PathPoint,
    error::{MotionError, MotionResult},
};

/// Interpolation family of an [`AnimationPath`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PathKind {
    /// Constant-speed polyline through the points.
    Linear,
    /// Single Bezier curve whose control points are sampled from the points.
    Bezier,
    /// Full revolution around the points' centroid.
    Circular,
    /// Partial sweep from the first point's angle to the last point's angle.
    Arc,
    /// Drawn wave; traversed as a polyline.
    Wave,
    /// Freehand path; traversed as a Catmull-Rom spline.
    Custom,
}

/// Degree selector for [`PathKind::Bezier`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurveKind {
    /// Three control points.
    #[default]
    Quadratic,
    /// Four control points.
    Cubic,
}

/// User-authored motion trajectory in normalized canvas space.
///
/// Point order is significant. Any number of points is accepted; interpolation degrades
/// gracefully when there are too few for the chosen kind.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationPath {
    /// Interpolation family.
    #[serde(alias = "type")]
    pub kind: PathKind,
    /// Ordered normalized points.
    #[serde(default)]
    pub points: Vec<PathPoint>,
    /// Bezier degree; ignored by the other kinds.
    #[serde(default, alias = "curveType")]
    pub curve_kind: CurveKind,
}

impl AnimationPath {
    /// Create a path of `kind` through `points` with a quadratic curve kind.
    pub fn new(kind: PathKind, points: Vec<PathPoint>) -> Self {
        Self {
            kind,
            points,
            curve_kind: CurveKind::Quadratic,
        }
    }

    /// Builder-style curve kind override.
    pub fn with_curve(mut self, curve_kind: CurveKind) -> Self {
        self.curve_kind = curve_kind;
        self
    }

    /// Arithmetic mean of the points, or `None` for an empty path.
    pub fn centroid(&self) -> Option<PathPoint> {
        centroid(&self.points)
    }

    /// Report non-finite coordinates.
    ///
    /// Evaluation never calls this; it is for authoring tools that want to reject bad input
    /// early. Out-of-range but finite coordinates are allowed.
    pub fn validate(&self) -> MotionResult<()> {
        for (i, p) in self.points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(MotionError::validation(format!(
                    "path point {i} has a non-finite coordinate ({}, {})",
                    p.x, p.y
                )));
            }
        }
        Ok(())
    }
}

pub(crate) fn centroid(points: &[PathPoint]) -> Option<PathPoint> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points.iter().fold((0.0f64, 0.0f64), |(sx, sy), p| {
        (sx + f64::from(p.x), sy + f64::from(p.y))
    });
    Some(PathPoint::new((sx / n) as f32, (sy / n) as f32))
}

#[cfg(test)]
#[path = "../../tests/unit/path/model.rs"]
mod tests;
