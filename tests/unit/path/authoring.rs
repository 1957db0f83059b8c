use super::*;

fn stroke(n: usize) -> Vec<Point> {
    (0..n).map(|i| Point::new(i as f64, 0.0)).collect()
}

#[test]
fn simplify_passes_short_strokes_through() {
    assert!(simplify(&[]).is_empty());
    assert_eq!(simplify(&stroke(10)), stroke(10));
}

#[test]
fn simplify_keeps_every_step_and_the_last() {
    // 25 samples -> step 3 -> indices 0, 3, ..., 24; 24 is already a multiple.
    let out = simplify(&stroke(25));
    let xs: Vec<f64> = out.iter().map(|p| p.x).collect();
    let expected: Vec<f64> = (0..=24).step_by(3).map(|i| i as f64).collect();
    assert_eq!(xs, expected);

    // 35 samples -> step 4 -> indices 0, 4, ..., 32, then last index 34 appended.
    let out = simplify(&stroke(35));
    assert_eq!(out.len(), 10);
    assert_eq!(out.last().map(|p| p.x), Some(34.0));
}

#[test]
fn simplify_thins_slightly_long_strokes() {
    for n in [11, 15, 19, 20, 29, 100, 1000] {
        let out = simplify(&stroke(n));
        assert!(out.len() <= 11, "{n} samples kept {}", out.len());
        assert!(out.len() < n, "{n} samples were not thinned");
        assert_eq!(out.first().map(|p| p.x), Some(0.0));
        assert_eq!(out.last().map(|p| p.x), Some((n - 1) as f64));
    }
}

#[test]
fn from_raw_samples_normalizes_and_clamps() {
    let canvas = Canvas::new(200, 100);
    let samples = [
        Point::new(50.0, 25.0),
        Point::new(-10.0, 150.0),
        Point::new(200.0, 100.0),
    ];
    let path = AnimationPath::from_raw_samples(PathKind::Custom, &samples, canvas).unwrap();
    assert_eq!(path.kind, PathKind::Custom);
    assert_eq!(
        path.points,
        vec![
            PathPoint::new(0.25, 0.25),
            PathPoint::new(0.0, 1.0),
            PathPoint::new(1.0, 1.0),
        ]
    );
}

#[test]
fn from_raw_samples_drops_non_finite_and_rejects_empty_canvas() {
    let canvas = Canvas::new(100, 100);
    let samples = [Point::new(f64::NAN, 1.0), Point::new(50.0, 50.0)];
    let path = AnimationPath::from_raw_samples(PathKind::Linear, &samples, canvas).unwrap();
    assert_eq!(path.points, vec![PathPoint::new(0.5, 0.5)]);

    let err = AnimationPath::from_raw_samples(PathKind::Linear, &samples, Canvas::new(0, 10))
        .unwrap_err();
    assert!(matches!(err, MotionError::Validation(_)));
}

#[test]
fn stock_shapes_have_expected_sample_counts() {
    let canvas = Canvas::new(400, 300);
    assert_eq!(circle_samples(canvas).len(), 13);
    assert_eq!(wave_samples(canvas).len(), 21);
    assert_eq!(quarter_arc_samples(canvas).len(), 11);
}

#[test]
fn circle_is_closed_and_sized_to_short_side() {
    let canvas = Canvas::new(400, 300);
    let pts = circle_samples(canvas);
    let center = Point::new(200.0, 150.0);
    for p in &pts {
        assert!((p.distance(center) - 90.0).abs() < 1e-9);
    }
    assert!(pts[0].distance(pts[12]) < 1e-9);
}

#[test]
fn wave_spans_middle_of_canvas() {
    let canvas = Canvas::new(1000, 200);
    let pts = wave_samples(canvas);
    assert_eq!(pts[0], Point::new(100.0, 100.0));
    assert!((pts[20].x - 900.0).abs() < 1e-9);
    let max_dev = pts.iter().map(|p| (p.y - 100.0).abs()).fold(0.0, f64::max);
    assert!(max_dev <= 30.0 + 1e-9);
    assert!(max_dev > 28.0);
}

#[test]
fn quarter_arc_rises_from_right_to_top() {
    let canvas = Canvas::new(200, 200);
    let pts = quarter_arc_samples(canvas);
    assert_eq!(pts[0], Point::new(160.0, 100.0));
    assert!((pts[10].x - 100.0).abs() < 1e-9);
    assert!((pts[10].y - 40.0).abs() < 1e-9);
}

#[test]
fn stock_shape_paths_use_matching_kinds() {
    let canvas = Canvas::new(640, 480);
    let circle = StockShape::Circle.to_path(canvas).unwrap();
    assert_eq!(circle.kind, PathKind::Circular);
    assert_eq!(circle.points.len(), 13);
    let wave = StockShape::Wave.to_path(canvas).unwrap();
    assert_eq!(wave.kind, PathKind::Wave);
    assert_eq!(wave.points.len(), 8);
    let arc = StockShape::Arc.to_path(canvas).unwrap();
    assert_eq!(arc.kind, PathKind::Arc);
    for p in circle.points.iter().chain(&wave.points).chain(&arc.points) {
        assert!((0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y));
    }
}
