//! The canonical preset table.
//!
//! Each preset maps to a static slice of [`Track`] rows. Live playback, thumbnail previews and
//! offline export all read this one table.

use crate::{
    animation::ease::Ease,
    animation::timing::Regime,
    animation::transform::{Property, Transform},
    foundation::math::lerp_f32,
};

use Property::{
    Blur, GlowOpacity, GlowRadius, Hue, Opacity, Reveal, Rotation, RotationX, RotationY, Scale,
    TranslateX, TranslateY,
};

/// Grouping used by the preset picker; it also fixes the default timing regime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PresetCategory {
    /// One-shot animations that bring a layer in.
    Entrance,
    /// One-shot animations that take a layer out.
    Exit,
    /// Repeating animations.
    Loop,
    /// Motion along an authored path.
    Path,
}

impl PresetCategory {
    /// All categories in picker order.
    pub const ALL: [Self; 4] = [Self::Entrance, Self::Exit, Self::Loop, Self::Path];

    /// Human-readable section title.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Entrance => "Entrance",
            Self::Exit => "Exit",
            Self::Loop => "Loop",
            Self::Path => "Path",
        }
    }
}

/// Named, pre-authored animation recipe.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationPreset {
    FadeIn,
    FadeSlideUp,
    FadeSlideDown,
    FadeSlideLeft,
    FadeSlideRight,
    ZoomIn,
    BounceIn,
    PopIn,
    Typewriter,
    BlurIn,
    FlipInX,
    FlipInY,

    FadeOut,
    SlideOutUp,
    SlideOutDown,
    ZoomOut,
    BlurOut,
    ShrinkOut,

    Pulse,
    Bounce,
    Float,
    Wiggle,
    Rotate,
    Glow,
    Shake,
    Heartbeat,
    ColorCycle,
    Swing,
    Flash,

    MotionPath,
    CurvePath,
}

/// One row of the preset table: drive `property` from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Channel written by this row.
    pub property: Property,
    /// Value at progress `0`.
    pub from: f32,
    /// Value at progress `1`.
    pub to: f32,
    /// Easing applied to progress before interpolation.
    pub ease: Ease,
    /// How elapsed time becomes progress.
    pub regime: Regime,
    /// Fraction of the [`AnimationSpec`](crate::AnimationSpec) duration used as this row's
    /// duration (or loop period).
    pub duration_scale: f32,
}

impl Track {
    const fn new(property: Property, from: f32, to: f32, ease: Ease, regime: Regime) -> Self {
        Self {
            property,
            from,
            to,
            ease,
            regime,
            duration_scale: 1.0,
        }
    }

    const fn once(property: Property, from: f32, to: f32) -> Self {
        Self::new(property, from, to, Ease::Smooth, Regime::OneShot)
    }

    const fn oscillate(property: Property, from: f32, to: f32) -> Self {
        Self::new(property, from, to, Ease::Smooth, Regime::LoopReverse)
    }

    const fn spin(property: Property, from: f32, to: f32) -> Self {
        Self::new(property, from, to, Ease::Linear, Regime::LoopRestart)
    }

    const fn scaled(mut self, duration_scale: f32) -> Self {
        self.duration_scale = duration_scale;
        self
    }

    /// Value of this row at `elapsed` seconds for a spec with `delay` and `duration`.
    pub fn sample(&self, elapsed: f64, delay: f64, duration: f64) -> f32 {
        let period = duration * f64::from(self.duration_scale);
        let progress = self.regime.progress(elapsed, delay, period);
        lerp_f32(self.from, self.to, self.ease.apply(progress))
    }
}

const FADE_IN: &[Track] = &[Track::once(Opacity, 0.0, 1.0)];
const FADE_SLIDE_UP: &[Track] = &[
    Track::once(Opacity, 0.0, 1.0),
    Track::once(TranslateY, 50.0, 0.0),
];
const FADE_SLIDE_DOWN: &[Track] = &[
    Track::once(Opacity, 0.0, 1.0),
    Track::once(TranslateY, -50.0, 0.0),
];
const FADE_SLIDE_LEFT: &[Track] = &[
    Track::once(Opacity, 0.0, 1.0),
    Track::once(TranslateX, 50.0, 0.0),
];
const FADE_SLIDE_RIGHT: &[Track] = &[
    Track::once(Opacity, 0.0, 1.0),
    Track::once(TranslateX, -50.0, 0.0),
];
const ZOOM_IN: &[Track] = &[Track::once(Scale, 0.0, 1.0), Track::once(Opacity, 0.0, 1.0)];
const BOUNCE_IN: &[Track] = &[
    Track::new(Scale, 0.3, 1.0, Ease::Bounce, Regime::OneShot),
    Track::once(Opacity, 0.0, 1.0).scaled(0.3),
];
const POP_IN: &[Track] = &[Track::new(Scale, 0.0, 1.0, Ease::Overshoot, Regime::OneShot)];
const TYPEWRITER: &[Track] = &[Track::once(Reveal, 0.0, 1.0)];
const BLUR_IN: &[Track] = &[Track::once(Blur, 20.0, 0.0), Track::once(Opacity, 0.0, 1.0)];
const FLIP_IN_X: &[Track] = &[
    Track::once(RotationX, 90.0, 0.0),
    Track::once(Opacity, 0.0, 1.0),
];
const FLIP_IN_Y: &[Track] = &[
    Track::once(RotationY, 90.0, 0.0),
    Track::once(Opacity, 0.0, 1.0),
];

const FADE_OUT: &[Track] = &[Track::once(Opacity, 1.0, 0.0)];
const SLIDE_OUT_UP: &[Track] = &[
    Track::once(Opacity, 1.0, 0.0),
    Track::once(TranslateY, 0.0, -100.0),
];
const SLIDE_OUT_DOWN: &[Track] = &[
    Track::once(Opacity, 1.0, 0.0),
    Track::once(TranslateY, 0.0, 100.0),
];
const ZOOM_OUT: &[Track] = &[Track::once(Scale, 1.0, 0.0), Track::once(Opacity, 1.0, 0.0)];
const BLUR_OUT: &[Track] = &[Track::once(Blur, 0.0, 20.0), Track::once(Opacity, 1.0, 0.0)];
const SHRINK_OUT: &[Track] = &[Track::once(Scale, 1.0, 0.0), Track::once(Opacity, 1.0, 0.0)];

const PULSE: &[Track] = &[Track::oscillate(Scale, 1.0, 1.15)];
const BOUNCE: &[Track] = &[Track::oscillate(TranslateY, 0.0, -15.0)];
const FLOAT: &[Track] = &[Track::oscillate(TranslateY, 0.0, -10.0)];
const WIGGLE: &[Track] = &[Track::oscillate(Rotation, -5.0, 5.0)];
const ROTATE: &[Track] = &[Track::spin(Rotation, 0.0, 360.0)];
const GLOW: &[Track] = &[
    Track::oscillate(GlowRadius, 0.0, 12.0),
    Track::oscillate(GlowOpacity, 0.0, 0.8),
];
const SHAKE: &[Track] = &[Track::oscillate(TranslateX, -8.0, 8.0).scaled(0.2)];
const HEARTBEAT: &[Track] = &[Track::oscillate(Scale, 1.0, 1.3).scaled(0.5)];
const COLOR_CYCLE: &[Track] = &[Track::spin(Hue, 0.0, 360.0)];
const SWING: &[Track] = &[Track::oscillate(Rotation, -15.0, 15.0)];
const FLASH: &[Track] = &[Track::oscillate(Opacity, 1.0, 0.0).scaled(0.5)];

impl AnimationPreset {
    /// Every preset in picker order.
    pub const ALL: [Self; 31] = [
        Self::FadeIn,
        Self::FadeSlideUp,
        Self::FadeSlideDown,
        Self::FadeSlideLeft,
        Self::FadeSlideRight,
        Self::ZoomIn,
        Self::BounceIn,
        Self::PopIn,
        Self::Typewriter,
        Self::BlurIn,
        Self::FlipInX,
        Self::FlipInY,
        Self::FadeOut,
        Self::SlideOutUp,
        Self::SlideOutDown,
        Self::ZoomOut,
        Self::BlurOut,
        Self::ShrinkOut,
        Self::Pulse,
        Self::Bounce,
        Self::Float,
        Self::Wiggle,
        Self::Rotate,
        Self::Glow,
        Self::Shake,
        Self::Heartbeat,
        Self::ColorCycle,
        Self::Swing,
        Self::Flash,
        Self::MotionPath,
        Self::CurvePath,
    ];

    /// Table rows driven by this preset. Path presets have none.
    pub fn tracks(self) -> &'static [Track] {
        match self {
            Self::FadeIn => FADE_IN,
            Self::FadeSlideUp => FADE_SLIDE_UP,
            Self::FadeSlideDown => FADE_SLIDE_DOWN,
            Self::FadeSlideLeft => FADE_SLIDE_LEFT,
            Self::FadeSlideRight => FADE_SLIDE_RIGHT,
            Self::ZoomIn => ZOOM_IN,
            Self::BounceIn => BOUNCE_IN,
            Self::PopIn => POP_IN,
            Self::Typewriter => TYPEWRITER,
            Self::BlurIn => BLUR_IN,
            Self::FlipInX => FLIP_IN_X,
            Self::FlipInY => FLIP_IN_Y,
            Self::FadeOut => FADE_OUT,
            Self::SlideOutUp => SLIDE_OUT_UP,
            Self::SlideOutDown => SLIDE_OUT_DOWN,
            Self::ZoomOut => ZOOM_OUT,
            Self::BlurOut => BLUR_OUT,
            Self::ShrinkOut => SHRINK_OUT,
            Self::Pulse => PULSE,
            Self::Bounce => BOUNCE,
            Self::Float => FLOAT,
            Self::Wiggle => WIGGLE,
            Self::Rotate => ROTATE,
            Self::Glow => GLOW,
            Self::Shake => SHAKE,
            Self::Heartbeat => HEARTBEAT,
            Self::ColorCycle => COLOR_CYCLE,
            Self::Swing => SWING,
            Self::Flash => FLASH,
            Self::MotionPath | Self::CurvePath => &[],
        }
    }

    /// Picker section this preset belongs to.
    pub fn category(self) -> PresetCategory {
        match self {
            Self::FadeIn
            | Self::FadeSlideUp
            | Self::FadeSlideDown
            | Self::FadeSlideLeft
            | Self::FadeSlideRight
            | Self::ZoomIn
            | Self::BounceIn
            | Self::PopIn
            | Self::Typewriter
            | Self::BlurIn
            | Self::FlipInX
            | Self::FlipInY => PresetCategory::Entrance,
            Self::FadeOut
            | Self::SlideOutUp
            | Self::SlideOutDown
            | Self::ZoomOut
            | Self::BlurOut
            | Self::ShrinkOut => PresetCategory::Exit,
            Self::Pulse
            | Self::Bounce
            | Self::Float
            | Self::Wiggle
            | Self::Rotate
            | Self::Glow
            | Self::Shake
            | Self::Heartbeat
            | Self::ColorCycle
            | Self::Swing
            | Self::Flash => PresetCategory::Loop,
            Self::MotionPath | Self::CurvePath => PresetCategory::Path,
        }
    }

    /// Return `true` for presets delegated to the path interpolator.
    pub fn is_path(self) -> bool {
        self.category() == PresetCategory::Path
    }

    /// Label shown in the picker.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::FadeIn => "Fade In",
            Self::FadeSlideUp => "Slide Up",
            Self::FadeSlideDown => "Slide Down",
            Self::FadeSlideLeft => "Slide Left",
            Self::FadeSlideRight => "Slide Right",
            Self::ZoomIn => "Zoom In",
            Self::BounceIn => "Bounce In",
            Self::PopIn => "Pop In",
            Self::Typewriter => "Typewriter",
            Self::BlurIn => "Blur In",
            Self::FlipInX => "Flip In X",
            Self::FlipInY => "Flip In Y",
            Self::FadeOut => "Fade Out",
            Self::SlideOutUp => "Slide Out Up",
            Self::SlideOutDown => "Slide Out Down",
            Self::ZoomOut => "Zoom Out",
            Self::BlurOut => "Blur Out",
            Self::ShrinkOut => "Shrink Out",
            Self::Pulse => "Pulse",
            Self::Bounce => "Bounce",
            Self::Float => "Float",
            Self::Wiggle => "Wiggle",
            Self::Rotate => "Rotate",
            Self::Glow => "Glow",
            Self::Shake => "Shake",
            Self::Heartbeat => "Heartbeat",
            Self::ColorCycle => "Color Cycle",
            Self::Swing => "Swing",
            Self::Flash => "Flash",
            Self::MotionPath => "Motion Path",
            Self::CurvePath => "Curve Path",
        }
    }

    /// Fixed thumbnail duration used by the preset picker, in seconds.
    ///
    /// These ignore the layer's configured duration.
    pub fn preview_duration_secs(self) -> f64 {
        match self {
            Self::BounceIn | Self::PopIn => 0.6,
            Self::Wiggle => 0.8,
            Self::Bounce | Self::Heartbeat | Self::Swing | Self::Flash => 1.2,
            Self::Pulse | Self::Glow => 1.6,
            Self::Float | Self::Rotate | Self::ColorCycle => 2.0,
            _ => 1.0,
        }
    }
}

/// Evaluate the table rows of `preset` at `elapsed` seconds.
///
/// Channels no row mentions keep their identity value. The result is clamped into valid
/// ranges. Path presets yield [`Transform::IDENTITY`].
pub fn evaluate_preset(
    preset: AnimationPreset,
    elapsed: f64,
    delay: f64,
    duration: f64,
) -> Transform {
    let mut out = Transform::IDENTITY;
    for track in preset.tracks() {
        out.set(track.property, track.sample(elapsed, delay, duration));
    }
    out.clamped()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/preset.rs"]
mod tests;
