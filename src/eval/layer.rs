use kurbo::{Affine, Point, Vec2};

use crate::{
    animation::transform::Transform,
    eval::evaluator::{AnimationSpec, evaluate},
    foundation::core::Canvas,
    path::model::AnimationPath,
};

/// Base placement of a layer, before any animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayerPosition {
    /// Horizontal center as a fraction of canvas width.
    pub x: f32,
    /// Vertical center as a fraction of canvas height.
    pub y: f32,
    /// Base rotation in degrees.
    pub rotation: f32,
    /// Base uniform scale.
    pub scale: f32,
}

impl Default for LayerPosition {
    fn default() -> Self {
        Self {
            x: 0.5,
            y: 0.5,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

/// A text overlay as handed over by the editor.
///
/// Only `animation` and `path` drive evaluation; `style` is carried through untouched for the
/// renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLayer {
    /// Stable layer id.
    pub id: String,
    /// Text content.
    pub text: String,
    /// Base placement.
    #[serde(default)]
    pub position: LayerPosition,
    /// Renderer-owned styling payload.
    #[serde(default)]
    pub style: serde_json::Value,
    /// Declared animation, if any.
    #[serde(default)]
    pub animation: Option<AnimationSpec>,
    /// Motion path for path presets.
    #[serde(default)]
    pub path: Option<AnimationPath>,
    /// Hidden layers are skipped by export.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Stacking order; higher draws on top.
    #[serde(default)]
    pub z_index: i32,
}

fn default_visible() -> bool {
    true
}

impl TextLayer {
    /// Visible, unanimated layer centered on the canvas.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            position: LayerPosition::default(),
            style: serde_json::Value::Null,
            animation: None,
            path: None,
            visible: true,
            z_index: 0,
        }
    }

    /// Builder-style animation override.
    pub fn with_animation(mut self, spec: AnimationSpec) -> Self {
        self.animation = Some(spec);
        self
    }

    /// Builder-style path override.
    pub fn with_path(mut self, path: AnimationPath) -> Self {
        self.path = Some(path);
        self
    }

    /// Builder-style base position override.
    pub fn with_position(mut self, position: LayerPosition) -> Self {
        self.position = position;
        self
    }
}

/// Animated transform of `layer` at `elapsed_secs`; identity when it has no animation.
pub fn evaluate_layer(layer: &TextLayer, elapsed_secs: f64, canvas: Canvas) -> Transform {
    match &layer.animation {
        Some(spec) => evaluate(spec, layer.path.as_ref(), elapsed_secs, canvas),
        None => Transform::IDENTITY,
    }
}

/// Absolute on-canvas placement of a layer for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Layer center in canvas pixels.
    pub center_x: f32,
    /// Layer center in canvas pixels.
    pub center_y: f32,
    /// Combined horizontal scale.
    pub scale_x: f32,
    /// Combined vertical scale.
    pub scale_y: f32,
    /// Combined in-plane rotation in degrees.
    pub rotation_degrees: f32,
    /// Final opacity; `0` for hidden layers.
    pub opacity: f32,
}

impl Placement {
    /// Layer-local to canvas affine: scale, then rotate, then move to the center.
    pub fn affine(&self) -> Affine {
        Affine::translate(Vec2::new(f64::from(self.center_x), f64::from(self.center_y)))
            * Affine::rotate(f64::from(self.rotation_degrees).to_radians())
            * Affine::scale_non_uniform(f64::from(self.scale_x), f64::from(self.scale_y))
    }

    /// Layer center as a kurbo point.
    pub fn center(&self) -> Point {
        Point::new(f64::from(self.center_x), f64::from(self.center_y))
    }
}

/// Combine the layer's base position with an evaluated transform.
pub fn resolve_placement(layer: &TextLayer, transform: &Transform, canvas: Canvas) -> Placement {
    let base = layer.position;
    Placement {
        center_x: base.x * canvas.width_f32() + transform.translate_x,
        center_y: base.y * canvas.height_f32() + transform.translate_y,
        scale_x: base.scale * transform.scale_x,
        scale_y: base.scale * transform.scale_y,
        rotation_degrees: base.rotation + transform.rotation_degrees,
        opacity: if layer.visible { transform.opacity } else { 0.0 },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/layer.rs"]
mod tests;
