//! Time-to-progress mapping.
//!
//! Every function here is a pure function of elapsed time: there is no running clock, so
//! evaluating an earlier time rewinds and a later time fast-forwards. That is what lets the
//! export pipeline evaluate frames out of order on many threads.

use crate::foundation::math::clamp01;

/// Result of the one-shot regime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OneShot {
    /// Normalized progress in `[0, 1]`.
    pub progress: f64,
    /// `true` once `elapsed >= delay`.
    pub active: bool,
}

/// How a preset row turns elapsed time into progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Regime {
    /// Runs once after the delay, then holds at `1`.
    OneShot,
    /// Sawtooth: `0 -> 1`, jump back to `0`, repeat.
    LoopRestart,
    /// Triangle: `0 -> 1` over the first half of the period, `1 -> 0` over the second.
    LoopReverse,
}

impl Regime {
    /// Progress for this regime. Loop regimes ignore `delay` and start at elapsed `0`.
    pub fn progress(self, elapsed: f64, delay: f64, duration: f64) -> f64 {
        match self {
            Self::OneShot => one_shot(elapsed, delay, duration).progress,
            Self::LoopRestart => loop_restart(elapsed, duration),
            Self::LoopReverse => loop_reverse(elapsed, duration),
        }
    }

    /// Return `true` for the two repeating regimes.
    pub fn is_loop(self) -> bool {
        !matches!(self, Self::OneShot)
    }
}

/// One-shot timing: `clamp((elapsed - delay) / duration, 0, 1)`.
///
/// A non-positive (or NaN) duration means the animation is already complete once active, so
/// progress jumps straight to `1` instead of dividing by zero.
pub fn one_shot(elapsed: f64, delay: f64, duration: f64) -> OneShot {
    let active = elapsed >= delay;
    let progress = if !active {
        0.0
    } else if duration.is_nan() || duration <= 0.0 {
        1.0
    } else {
        clamp01((elapsed - delay) / duration)
    };
    OneShot { progress, active }
}

/// Sawtooth timing: `frac(elapsed / period)`.
///
/// Negative elapsed times wrap the same way as positive ones, so scrubbing before zero is
/// still periodic. A non-positive or non-finite period holds at `0`.
pub fn loop_restart(elapsed: f64, period: f64) -> f64 {
    phase(elapsed, period)
}

/// Triangle timing with the peak at half a period.
pub fn loop_reverse(elapsed: f64, period: f64) -> f64 {
    let p = phase(elapsed, period);
    if p <= 0.5 { 2.0 * p } else { 2.0 - 2.0 * p }
}

fn phase(elapsed: f64, period: f64) -> f64 {
    if !period.is_finite() || period <= 0.0 || !elapsed.is_finite() {
        return 0.0;
    }
    let p = (elapsed / period).rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if p >= 1.0 { 0.0 } else { p }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
