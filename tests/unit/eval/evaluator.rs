use super::*;
use crate::{
    foundation::core::PathPoint,
    path::model::{CurveKind, PathKind},
};

const CANVAS: Canvas = Canvas::new(1000, 500);

fn square_path() -> AnimationPath {
    AnimationPath::new(
        PathKind::Linear,
        vec![
            PathPoint::new(0.0, 0.0),
            PathPoint::new(1.0, 0.0),
            PathPoint::new(1.0, 1.0),
            PathPoint::new(0.0, 1.0),
        ],
    )
}

#[test]
fn spec_defaults_from_minimal_json() {
    let spec: AnimationSpec = serde_json::from_str(r#"{ "preset": "fadeIn" }"#).unwrap();
    assert_eq!(spec, AnimationSpec::new(AnimationPreset::FadeIn));
    assert_eq!(spec.duration_seconds, 0.8);

    let spec: AnimationSpec = serde_json::from_str(
        r#"{ "preset": "motionPath", "delaySeconds": 0.5, "durationSeconds": 2.0, "loop": true }"#,
    )
    .unwrap();
    assert!(spec.looping);
    assert_eq!(spec.delay_seconds, 0.5);
}

#[test]
fn validate_reports_authoring_mistakes() {
    let ok = AnimationSpec::new(AnimationPreset::Pulse).with_duration(-1.0);
    assert!(ok.validate().is_ok());
    assert!(
        AnimationSpec::new(AnimationPreset::Pulse)
            .with_delay(-0.1)
            .validate()
            .is_err()
    );
    assert!(
        AnimationSpec::new(AnimationPreset::Pulse)
            .with_duration(f64::NAN)
            .validate()
            .is_err()
    );
}

#[test]
fn non_path_presets_delegate_to_the_table() {
    let spec = AnimationSpec::new(AnimationPreset::ZoomIn)
        .with_delay(0.2)
        .with_duration(0.6);
    for t in [0.0, 0.2, 0.35, 0.5, 0.8, 5.0] {
        assert_eq!(
            evaluate(&spec, Some(&square_path()), t, CANVAS),
            evaluate_preset(AnimationPreset::ZoomIn, t, 0.2, 0.6)
        );
    }
}

#[test]
fn path_preset_translates_around_centroid() {
    let spec = AnimationSpec::new(AnimationPreset::MotionPath).with_duration(4.0);
    let path = square_path();
    // Centroid (0.5, 0.5); progress 0 sits on (0, 0).
    let start = evaluate(&spec, Some(&path), 0.0, CANVAS);
    assert_eq!(start.translate_x, -500.0);
    assert_eq!(start.translate_y, -250.0);
    assert_eq!(start.opacity, 1.0);
    assert_eq!(start.scale_x, 1.0);
    // Halfway along the three unit segments: (1, 0.5).
    let mid = evaluate(&spec, Some(&path), 2.0, CANVAS);
    assert_eq!(mid.translate_x, 500.0);
    assert_eq!(mid.translate_y, 0.0);
}

#[test]
fn one_shot_path_waits_for_delay_and_holds_at_end() {
    let spec = AnimationSpec::new(AnimationPreset::CurvePath)
        .with_delay(1.0)
        .with_duration(2.0);
    let path = square_path();
    let before = evaluate(&spec, Some(&path), 0.5, CANVAS);
    let at_start = evaluate(&spec, Some(&path), 1.0, CANVAS);
    assert_eq!(before, at_start);
    let end = evaluate(&spec, Some(&path), 3.0, CANVAS);
    let later = evaluate(&spec, Some(&path), 30.0, CANVAS);
    assert_eq!(end, later);
    assert_eq!(end.translate_x, -500.0);
    assert_eq!(end.translate_y, 250.0);
}

#[test]
fn looping_path_restarts_and_ignores_delay() {
    let spec = AnimationSpec::new(AnimationPreset::MotionPath)
        .with_delay(10.0)
        .with_duration(4.0)
        .with_loop(true);
    let path = square_path();
    assert_eq!(path_progress(&spec, 1.0), 0.25);
    assert_eq!(path_progress(&spec, 5.0), 0.25);
    assert_eq!(
        evaluate(&spec, Some(&path), 1.0, CANVAS),
        evaluate(&spec, Some(&path), 5.0, CANVAS)
    );
    assert_eq!(path_progress(&spec, 4.0), 0.0);
}

#[test]
fn missing_or_empty_path_is_identity() {
    let spec = AnimationSpec::new(AnimationPreset::MotionPath);
    assert!(evaluate(&spec, None, 0.3, CANVAS).is_identity());
    let empty = AnimationPath::new(PathKind::Custom, vec![]);
    assert!(evaluate(&spec, Some(&empty), 0.3, CANVAS).is_identity());
}

#[test]
fn single_point_path_stays_put() {
    let spec = AnimationSpec::new(AnimationPreset::MotionPath);
    let path = AnimationPath::new(PathKind::Circular, vec![PathPoint::new(0.3, 0.9)]);
    assert!(evaluate(&spec, Some(&path), 0.4, CANVAS).is_identity());
}

#[test]
fn evaluation_is_bit_identical_across_calls() {
    let path = AnimationPath::new(
        PathKind::Bezier,
        vec![
            PathPoint::new(0.1, 0.9),
            PathPoint::new(0.3, 0.1),
            PathPoint::new(0.7, 0.2),
            PathPoint::new(0.9, 0.8),
        ],
    )
    .with_curve(CurveKind::Cubic);
    for preset in AnimationPreset::ALL {
        let spec = AnimationSpec::new(preset).with_delay(0.1).with_duration(0.9);
        for i in 0..40 {
            let t = f64::from(i) * 0.0371;
            let a = evaluate(&spec, Some(&path), t, CANVAS);
            let b = evaluate(&spec, Some(&path), t, CANVAS);
            assert_eq!(format!("{a:?}"), format!("{b:?}"));
            assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
        }
    }
}

#[test]
fn seeking_backwards_matches_fresh_evaluation() {
    let spec = AnimationSpec::new(AnimationPreset::Wiggle).with_duration(0.5);
    let forward: Vec<Transform> = (0..20)
        .map(|i| evaluate(&spec, None, f64::from(i) * 0.05, CANVAS))
        .collect();
    for i in (0..20).rev() {
        assert_eq!(evaluate(&spec, None, f64::from(i) * 0.05, CANVAS), forward[i as usize]);
    }
}
