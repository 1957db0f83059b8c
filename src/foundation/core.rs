use crate::foundation::error::{MotionError, MotionResult};

pub use kurbo::{Point, Vec2};

/// A 2D coordinate normalized to the canvas: `(0, 0)` is top-left, `(1, 1)` bottom-right.
///
/// Values outside `[0, 1]` are accepted and simply land off-canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathPoint {
    /// Horizontal position as a fraction of canvas width.
    pub x: f32,
    /// Vertical position as a fraction of canvas height.
    pub y: f32,
}

impl PathPoint {
    /// Canvas center, used when a path has no points at all.
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    /// Create a point from normalized coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other` in normalized units.
    pub fn distance(self, other: Self) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Widen to a kurbo point for curve math.
    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }

    /// Narrow a kurbo point back to a normalized path point.
    pub fn from_point(p: Point) -> Self {
        Self {
            x: p.x as f32,
            y: p.y as f32,
        }
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a canvas of `width x height` pixels.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width as `f32`, for pixel math.
    pub fn width_f32(self) -> f32 {
        self.width as f32
    }

    /// Height as `f32`, for pixel math.
    pub fn height_f32(self) -> f32 {
        self.height as f32
    }

    /// Return `true` when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Absolute 0-based frame index in export timeline space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)` in timeline space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> MotionResult<Self> {
        if start.0 > end.0 {
            return Err(MotionError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames contained in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Return `true` when the range has no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> MotionResult<Self> {
        if den == 0 {
            return Err(MotionError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(MotionError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Timestamp in seconds of the start of frame `f`.
    ///
    /// Computed as `f * den / num` so that every frame maps to the same `f64` no matter which
    /// worker asks for it.
    pub fn frame_to_secs(self, f: FrameIndex) -> f64 {
        (f.0 as f64) * f64::from(self.den) / f64::from(self.num)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
