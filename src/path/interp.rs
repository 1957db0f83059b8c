//! Progress-to-point mapping along an [`AnimationPath`].
//!
//! Each algorithm has a minimum point count. Below it, evaluation falls back silently:
//! cubic -> quadratic -> linear, and circular/arc/Catmull-Rom -> linear. Linear itself
//! returns the single point, or [`PathPoint::CENTER`] for an empty path.

use std::f64::consts::TAU;

use kurbo::{CubicBez, ParamCurve, Point, QuadBez, Vec2};

use crate::{
    foundation::{core::PathPoint, math::clamp01},
    path::model::{AnimationPath, CurveKind, PathKind},
};

/// Point on `path` at normalized `progress` (clamped to `[0, 1]`).
pub fn interpolate(path: &AnimationPath, progress: f64) -> PathPoint {
    let pts = path.points.as_slice();
    match path.kind {
        PathKind::Linear | PathKind::Wave => linear(pts, progress),
        PathKind::Bezier => match path.curve_kind {
            CurveKind::Quadratic => quadratic_bezier(pts, progress),
            CurveKind::Cubic => cubic_bezier(pts, progress),
        },
        PathKind::Circular => circular(pts, progress),
        PathKind::Arc => arc(pts, progress),
        PathKind::Custom => catmull_rom(pts, progress),
    }
}

/// Constant-speed traversal of the polyline through `points`.
pub fn linear(points: &[PathPoint], progress: f64) -> PathPoint {
    let t = clamp01(progress);
    match points {
        [] => return PathPoint::CENTER,
        [only] => return *only,
        _ => {}
    }

    let pts: Vec<Point> = points.iter().map(|p| p.to_point()).collect();
    let mut cumulative = Vec::with_capacity(pts.len());
    cumulative.push(0.0f64);
    for w in pts.windows(2) {
        let last = cumulative[cumulative.len() - 1];
        cumulative.push(last + w[0].distance(w[1]));
    }
    let total = cumulative[cumulative.len() - 1];
    if total == 0.0 {
        return points[0];
    }

    let target = t * total;
    let seg = cumulative
        .partition_point(|&c| c < target)
        .saturating_sub(1)
        .min(pts.len() - 2);
    let (start, end) = (cumulative[seg], cumulative[seg + 1]);
    let local = if end > start {
        (target - start) / (end - start)
    } else {
        0.0
    };
    PathPoint::from_point(pts[seg].lerp(pts[seg + 1], local))
}

/// Quadratic Bezier through `points[0]`, `points[len / 2]`, `points[len - 1]`.
pub fn quadratic_bezier(points: &[PathPoint], progress: f64) -> PathPoint {
    if points.len() < 3 {
        tracing::trace!(points = points.len(), "quadratic bezier falls back to linear");
        return linear(points, progress);
    }
    let curve = QuadBez::new(
        points[0].to_point(),
        points[points.len() / 2].to_point(),
        points[points.len() - 1].to_point(),
    );
    PathPoint::from_point(curve.eval(clamp01(progress)))
}

/// Cubic Bezier through `points[0]`, `points[len / 3]`, `points[2 * len / 3]`, `points[len - 1]`.
pub fn cubic_bezier(points: &[PathPoint], progress: f64) -> PathPoint {
    if points.len() < 4 {
        tracing::trace!(points = points.len(), "cubic bezier falls back to quadratic");
        return quadratic_bezier(points, progress);
    }
    let n = points.len();
    let curve = CubicBez::new(
        points[0].to_point(),
        points[n / 3].to_point(),
        points[2 * n / 3].to_point(),
        points[n - 1].to_point(),
    );
    PathPoint::from_point(curve.eval(clamp01(progress)))
}

/// One full revolution around the centroid, at the mean distance of the points from it.
pub fn circular(points: &[PathPoint], progress: f64) -> PathPoint {
    let Some((center, radius)) = fitted_circle(points) else {
        tracing::trace!(points = points.len(), "circular path falls back to linear");
        return linear(points, progress);
    };
    let angle = clamp01(progress) * TAU;
    PathPoint::from_point(center + Vec2::from_angle(angle) * radius)
}

/// Sweep around the fitted circle from the first point's angle to the last point's angle.
pub fn arc(points: &[PathPoint], progress: f64) -> PathPoint {
    let Some((center, radius)) = fitted_circle(points) else {
        tracing::trace!(points = points.len(), "arc path falls back to linear");
        return linear(points, progress);
    };
    let start = (points[0].to_point() - center).atan2();
    let end = (points[points.len() - 1].to_point() - center).atan2();
    let angle = start + (end - start) * clamp01(progress);
    PathPoint::from_point(center + Vec2::from_angle(angle) * radius)
}

/// Uniform Catmull-Rom spline through every point, with end neighbors clamped.
pub fn catmull_rom(points: &[PathPoint], progress: f64) -> PathPoint {
    if points.len() < 4 {
        tracing::trace!(points = points.len(), "catmull-rom falls back to linear");
        return linear(points, progress);
    }
    let t = clamp01(progress);
    let last = points.len() - 1;
    let segments = last;
    let scaled = t * segments as f64;
    let seg = (scaled.floor() as usize).min(segments - 1);
    let u = scaled - seg as f64;

    let p0 = points[seg.saturating_sub(1)].to_point();
    let p1 = points[seg].to_point();
    let p2 = points[(seg + 1).min(last)].to_point();
    let p3 = points[(seg + 2).min(last)].to_point();

    let u2 = u * u;
    let u3 = u2 * u;
    let axis = |a: f64, b: f64, c: f64, d: f64| {
        0.5 * ((2.0 * b)
            + (-a + c) * u
            + (2.0 * a - 5.0 * b + 4.0 * c - d) * u2
            + (-a + 3.0 * b - 3.0 * c + d) * u3)
    };
    PathPoint::from_point(Point::new(
        axis(p0.x, p1.x, p2.x, p3.x),
        axis(p0.y, p1.y, p2.y, p3.y),
    ))
}

fn fitted_circle(points: &[PathPoint]) -> Option<(Point, f64)> {
    if points.len() < 3 {
        return None;
    }
    let n = points.len() as f64;
    let sum = points
        .iter()
        .fold(Vec2::ZERO, |acc, p| acc + p.to_point().to_vec2());
    let center = (sum / n).to_point();
    let radius = points
        .iter()
        .map(|p| p.to_point().distance(center))
        .sum::<f64>()
        / n;
    Some((center, radius))
}

#[cfg(test)]
#[path = "../../tests/unit/path/interp.rs"]
mod tests;
