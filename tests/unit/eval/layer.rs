use super::*;
use crate::{
    animation::preset::AnimationPreset,
    foundation::core::PathPoint,
    path::model::PathKind,
};

const CANVAS: Canvas = Canvas::new(800, 600);

#[test]
fn editor_document_deserializes_with_defaults() {
    let json = r#"{
        "id": "title",
        "text": "Hello",
        "style": { "font": "System", "size": 32 },
        "animation": { "preset": "fadeSlideUp", "duration": 1.2 }
    }"#;
    let layer: TextLayer = serde_json::from_str(json).unwrap();
    assert_eq!(layer.position, LayerPosition::default());
    assert!(layer.visible);
    assert_eq!(layer.z_index, 0);
    assert_eq!(layer.style["size"], 32);
    let spec = layer.animation.unwrap();
    assert_eq!(spec.preset, AnimationPreset::FadeSlideUp);
    assert_eq!(spec.duration_seconds, 1.2);
}

#[test]
fn unanimated_layer_is_identity() {
    let layer = TextLayer::new("a", "static");
    assert!(evaluate_layer(&layer, 3.0, CANVAS).is_identity());
}

#[test]
fn evaluate_layer_forwards_path() {
    let path = AnimationPath::new(
        PathKind::Linear,
        vec![PathPoint::new(0.0, 0.5), PathPoint::new(1.0, 0.5)],
    );
    let layer = TextLayer::new("p", "moving")
        .with_animation(AnimationSpec::new(AnimationPreset::MotionPath).with_duration(1.0))
        .with_path(path);
    let t = evaluate_layer(&layer, 0.0, CANVAS);
    assert_eq!(t.translate_x, -400.0);
    assert_eq!(t.translate_y, 0.0);
}

#[test]
fn placement_combines_base_and_transform() {
    let layer = TextLayer::new("a", "x").with_position(LayerPosition {
        x: 0.25,
        y: 0.5,
        rotation: 10.0,
        scale: 2.0,
    });
    let transform = Transform {
        translate_x: 20.0,
        translate_y: -30.0,
        scale_x: 0.5,
        scale_y: 1.5,
        rotation_degrees: 5.0,
        opacity: 0.75,
        ..Transform::IDENTITY
    };
    let p = resolve_placement(&layer, &transform, CANVAS);
    assert_eq!(p.center_x, 220.0);
    assert_eq!(p.center_y, 270.0);
    assert_eq!(p.scale_x, 1.0);
    assert_eq!(p.scale_y, 3.0);
    assert_eq!(p.rotation_degrees, 15.0);
    assert_eq!(p.opacity, 0.75);
}

#[test]
fn hidden_layer_has_zero_opacity() {
    let mut layer = TextLayer::new("h", "hidden");
    layer.visible = false;
    let p = resolve_placement(&layer, &Transform::IDENTITY, CANVAS);
    assert_eq!(p.opacity, 0.0);
}

#[test]
fn affine_maps_origin_to_center() {
    let layer = TextLayer::new("a", "x");
    let p = resolve_placement(&layer, &Transform::IDENTITY, CANVAS);
    let mapped = p.affine() * Point::ORIGIN;
    assert!((mapped - p.center()).hypot() < 1e-9);
    let right = p.affine() * Point::new(1.0, 0.0);
    assert!((right - Point::new(401.0, 300.0)).hypot() < 1e-9);
}
