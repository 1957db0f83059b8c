/// Easing functions used to reshape normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    /// Identity: `f(t) = t`.
    Linear,
    /// Cubic ease-in/out, C1-continuous and monotonic.
    Smooth,
    /// Four-segment piecewise quadratic that lands with decaying bounces.
    Bounce,
    /// Back-out curve that overshoots past `1` before settling.
    Overshoot,
}

impl Ease {
    const BOUNCE_N1: f64 = 7.5625;
    const BOUNCE_D1: f64 = 2.75;
    const OVERSHOOT_S: f64 = 1.70158;

    /// Apply this easing function to normalized progress `t`.
    ///
    /// Input is clamped to `[0, 1]`. Output satisfies `f(0) = 0` and `f(1) = 1`; only
    /// [`Ease::Overshoot`] leaves `[0, 1]` in between.
    pub fn apply(self, t: f64) -> f64 {
        let t = crate::foundation::math::clamp01(t);
        // Endpoints are pinned so rounding in the piecewise constants never leaks into f(0)/f(1).
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Self::Linear => t,
            Self::Smooth => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Bounce => bounce_out(t),
            Self::Overshoot => {
                let s = Self::OVERSHOOT_S;
                let u = t - 1.0;
                u * u * ((s + 1.0) * u + s) + 1.0
            }
        }
    }
}

fn bounce_out(t: f64) -> f64 {
    let n1 = Ease::BOUNCE_N1;
    let d1 = Ease::BOUNCE_D1;
    if t < 1.0 / d1 {
        n1 * t * t
    } else if t < 2.0 / d1 {
        let t = t - 1.5 / d1;
        n1 * t * t + 0.75
    } else if t < 2.5 / d1 {
        let t = t - 2.25 / d1;
        n1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / d1;
        n1 * t * t + 0.984375
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
