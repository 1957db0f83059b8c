use crate::foundation::math::Fnv1a64;

/// Visual adjustment applied to a layer at one instant.
///
/// Translation is in pixels relative to the layer's base placement; angles are in degrees.
/// [`Transform::IDENTITY`] (also the `Default`) leaves the layer untouched.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transform {
    /// Opacity multiplier in `[0, 1]`.
    pub opacity: f32,
    /// Horizontal offset in pixels.
    pub translate_x: f32,
    /// Vertical offset in pixels.
    pub translate_y: f32,
    /// Horizontal scale factor, `>= 0`.
    pub scale_x: f32,
    /// Vertical scale factor, `>= 0`.
    pub scale_y: f32,
    /// In-plane rotation in degrees.
    pub rotation_degrees: f32,
    /// Flip rotation around the horizontal axis, in degrees.
    pub rotation_x_degrees: f32,
    /// Flip rotation around the vertical axis, in degrees.
    pub rotation_y_degrees: f32,
    /// Gaussian blur radius, `>= 0`.
    pub blur_radius: f32,
    /// Fraction of the text revealed, in `[0, 1]`.
    pub reveal: f32,
    /// Glow (shadow) radius, `>= 0`.
    pub glow_radius: f32,
    /// Glow (shadow) opacity in `[0, 1]`.
    pub glow_opacity: f32,
    /// Hue rotation angle in degrees.
    ///
    /// Computed only; applying it to glyph color is left to the renderer.
    pub hue_degrees: f32,
}

impl Transform {
    /// The transform that leaves a layer unchanged.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
        rotation_degrees: 0.0,
        rotation_x_degrees: 0.0,
        rotation_y_degrees: 0.0,
        blur_radius: 0.0,
        reveal: 1.0,
        glow_radius: 0.0,
        glow_opacity: 0.0,
        hue_degrees: 0.0,
    };

    /// Write `value` into the channel(s) driven by `property`.
    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::Opacity => self.opacity = value,
            Property::TranslateX => self.translate_x = value,
            Property::TranslateY => self.translate_y = value,
            Property::Scale => {
                self.scale_x = value;
                self.scale_y = value;
            }
            Property::Rotation => self.rotation_degrees = value,
            Property::RotationX => self.rotation_x_degrees = value,
            Property::RotationY => self.rotation_y_degrees = value,
            Property::Blur => self.blur_radius = value,
            Property::Reveal => self.reveal = value,
            Property::GlowRadius => self.glow_radius = value,
            Property::GlowOpacity => self.glow_opacity = value,
            Property::Hue => self.hue_degrees = value,
        }
    }

    /// Clamp every channel into its valid range. NaN channels fall back to identity.
    pub fn clamped(self) -> Self {
        fn unit(v: f32, fallback: f32) -> f32 {
            if v.is_nan() { fallback } else { v.clamp(0.0, 1.0) }
        }
        fn non_negative(v: f32, fallback: f32) -> f32 {
            if v.is_nan() { fallback } else { v.max(0.0) }
        }
        fn finite(v: f32, fallback: f32) -> f32 {
            if v.is_finite() { v } else { fallback }
        }

        let id = Self::IDENTITY;
        Self {
            opacity: unit(self.opacity, id.opacity),
            translate_x: finite(self.translate_x, id.translate_x),
            translate_y: finite(self.translate_y, id.translate_y),
            scale_x: finite(non_negative(self.scale_x, id.scale_x), id.scale_x),
            scale_y: finite(non_negative(self.scale_y, id.scale_y), id.scale_y),
            rotation_degrees: finite(self.rotation_degrees, id.rotation_degrees),
            rotation_x_degrees: finite(self.rotation_x_degrees, id.rotation_x_degrees),
            rotation_y_degrees: finite(self.rotation_y_degrees, id.rotation_y_degrees),
            blur_radius: finite(non_negative(self.blur_radius, id.blur_radius), id.blur_radius),
            reveal: unit(self.reveal, id.reveal),
            glow_radius: finite(non_negative(self.glow_radius, id.glow_radius), id.glow_radius),
            glow_opacity: unit(self.glow_opacity, id.glow_opacity),
            hue_degrees: finite(self.hue_degrees, id.hue_degrees),
        }
    }

    /// Number of leading characters of `text` visible under the current [`Transform::reveal`].
    pub fn visible_chars(&self, text: &str) -> usize {
        let total = text.chars().count();
        let shown = (total as f64 * f64::from(self.reveal)).floor();
        if shown.is_nan() || shown <= 0.0 {
            0
        } else {
            (shown as usize).min(total)
        }
    }

    /// Return `true` when every channel equals identity bit-for-bit.
    pub fn is_identity(&self) -> bool {
        self.channels()
            .iter()
            .zip(Self::IDENTITY.channels())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }

    pub(crate) fn write_bits(&self, h: &mut Fnv1a64) {
        for c in self.channels() {
            h.write_u32(c.to_bits());
        }
    }

    fn channels(&self) -> [f32; 13] {
        [
            self.opacity,
            self.translate_x,
            self.translate_y,
            self.scale_x,
            self.scale_y,
            self.rotation_degrees,
            self.rotation_x_degrees,
            self.rotation_y_degrees,
            self.blur_radius,
            self.reveal,
            self.glow_radius,
            self.glow_opacity,
            self.hue_degrees,
        ]
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A single animatable channel (or channel pair) of a [`Transform`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    /// [`Transform::opacity`].
    Opacity,
    /// [`Transform::translate_x`].
    TranslateX,
    /// [`Transform::translate_y`].
    TranslateY,
    /// Uniform scale: both [`Transform::scale_x`] and [`Transform::scale_y`].
    Scale,
    /// [`Transform::rotation_degrees`].
    Rotation,
    /// [`Transform::rotation_x_degrees`].
    RotationX,
    /// [`Transform::rotation_y_degrees`].
    RotationY,
    /// [`Transform::blur_radius`].
    Blur,
    /// [`Transform::reveal`].
    Reveal,
    /// [`Transform::glow_radius`].
    GlowRadius,
    /// [`Transform::glow_opacity`].
    GlowOpacity,
    /// [`Transform::hue_degrees`].
    Hue,
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transform.rs"]
mod tests;
