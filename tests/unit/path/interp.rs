use super::*;

fn pts(raw: &[(f32, f32)]) -> Vec<PathPoint> {
    raw.iter().map(|&(x, y)| PathPoint::new(x, y)).collect()
}

fn close(a: PathPoint, b: PathPoint) -> bool {
    (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
}

fn ring(center: (f32, f32), r: f32, n: usize) -> Vec<PathPoint> {
    (0..n)
        .map(|i| {
            let a = std::f32::consts::TAU * i as f32 / n as f32;
            PathPoint::new(center.0 + r * a.cos(), center.1 + r * a.sin())
        })
        .collect()
}

#[test]
fn linear_is_arc_length_uniform() {
    let p = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    assert_eq!(linear(&p, 0.0), PathPoint::new(0.0, 0.0));
    assert_eq!(linear(&p, 0.25), PathPoint::new(0.5, 0.0));
    assert_eq!(linear(&p, 0.5), PathPoint::new(1.0, 0.0));
    assert_eq!(linear(&p, 0.75), PathPoint::new(1.0, 0.5));
    assert_eq!(linear(&p, 1.0), PathPoint::new(1.0, 1.0));
}

#[test]
fn linear_weights_by_segment_length_not_index() {
    // Short first segment (0.1), long second one (0.9).
    let p = pts(&[(0.0, 0.0), (0.1, 0.0), (1.0, 0.0)]);
    let mid = linear(&p, 0.5);
    assert!(close(mid, PathPoint::new(0.5, 0.0)));
}

#[test]
fn linear_degenerate_inputs() {
    assert_eq!(linear(&[], 0.3), PathPoint::CENTER);
    let one = pts(&[(0.2, 0.7)]);
    assert_eq!(linear(&one, 0.9), PathPoint::new(0.2, 0.7));
    let stacked = pts(&[(0.4, 0.4), (0.4, 0.4), (0.4, 0.4)]);
    assert_eq!(linear(&stacked, 0.6), PathPoint::new(0.4, 0.4));
}

#[test]
fn linear_clamps_progress() {
    let p = pts(&[(0.0, 0.0), (1.0, 0.0)]);
    assert_eq!(linear(&p, -1.0), PathPoint::new(0.0, 0.0));
    assert_eq!(linear(&p, 2.0), PathPoint::new(1.0, 0.0));
}

#[test]
fn quadratic_bezier_midpoint_is_exact() {
    let p = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    assert_eq!(quadratic_bezier(&p, 0.5), PathPoint::new(0.75, 0.25));
    assert_eq!(quadratic_bezier(&p, 0.0), PathPoint::new(0.0, 0.0));
    assert_eq!(quadratic_bezier(&p, 1.0), PathPoint::new(1.0, 1.0));
}

#[test]
fn quadratic_bezier_picks_middle_control_by_integer_division() {
    // len 4 -> control index 2.
    let p = pts(&[(0.0, 0.0), (9.0, 9.0), (1.0, 0.0), (1.0, 1.0)]);
    assert_eq!(quadratic_bezier(&p, 0.5), PathPoint::new(0.75, 0.25));
}

#[test]
fn cubic_falls_back_through_quadratic_to_linear() {
    let three = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    assert_eq!(cubic_bezier(&three, 0.5), quadratic_bezier(&three, 0.5));
    let two = pts(&[(0.0, 0.0), (1.0, 0.0)]);
    assert_eq!(cubic_bezier(&two, 0.3), linear(&two, 0.3));
    assert_eq!(cubic_bezier(&[], 0.3), PathPoint::CENTER);
}

#[test]
fn cubic_bezier_uses_third_points() {
    let p = pts(&[
        (0.0, 0.0),
        (0.0, 0.0),
        (0.0, 1.0),
        (0.0, 0.0),
        (1.0, 1.0),
        (0.0, 0.0),
        (1.0, 0.0),
    ]);
    // len 7 -> controls 0, 2, 4, 6.
    let mid = cubic_bezier(&p, 0.5);
    let expected = PathPoint::new(
        (0.0 + 3.0 * 0.0 + 3.0 * 1.0 + 1.0) / 8.0,
        (0.0 + 3.0 * 1.0 + 3.0 * 1.0 + 0.0) / 8.0,
    );
    assert!(close(mid, expected));
}

#[test]
fn circular_is_antipodal_at_half_progress() {
    let center = PathPoint::new(0.5, 0.5);
    let p = ring((0.5, 0.5), 0.25, 8);
    let a = circular(&p, 0.0);
    let b = circular(&p, 0.5);
    assert!(close(b, PathPoint::new(2.0 * center.x - a.x, 2.0 * center.y - a.y)));
    assert!(close(a, PathPoint::new(0.75, 0.5)));
    assert!(close(circular(&p, 1.0), a));
}

#[test]
fn arc_sweeps_between_endpoint_angles() {
    // Points on a quarter circle from angle 0 to -pi/2 (screen "up").
    let p = pts(&[(1.0, 0.0), (0.7071, -0.7071), (0.0, -1.0)]);
    let start = arc(&p, 0.0);
    let end = arc(&p, 1.0);
    let center = AnimationPath::new(PathKind::Arc, p.clone()).centroid().unwrap();
    let a0 = (start.y - center.y).atan2(start.x - center.x);
    let a1 = (end.y - center.y).atan2(end.x - center.x);
    let e0 = (p[0].y - center.y).atan2(p[0].x - center.x);
    let e1 = (p[2].y - center.y).atan2(p[2].x - center.x);
    assert!((a0 - e0).abs() < 1e-4);
    assert!((a1 - e1).abs() < 1e-4);
}

#[test]
fn catmull_rom_passes_through_points() {
    let p = pts(&[(0.0, 0.0), (0.3, 0.6), (0.6, 0.2), (1.0, 1.0)]);
    assert!(close(catmull_rom(&p, 0.0), p[0]));
    assert!(close(catmull_rom(&p, 1.0 / 3.0), p[1]));
    assert!(close(catmull_rom(&p, 2.0 / 3.0), p[2]));
    assert!(close(catmull_rom(&p, 1.0), p[3]));
}

#[test]
fn catmull_rom_with_three_points_matches_linear() {
    let p = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    for i in 0..=20 {
        let t = f64::from(i) / 20.0;
        assert_eq!(catmull_rom(&p, t), linear(&p, t));
    }
}

#[test]
fn dispatch_routes_by_kind() {
    let p = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    let path = |kind| AnimationPath::new(kind, p.clone());
    assert_eq!(interpolate(&path(PathKind::Linear), 0.25), linear(&p, 0.25));
    assert_eq!(interpolate(&path(PathKind::Wave), 0.25), linear(&p, 0.25));
    assert_eq!(
        interpolate(&path(PathKind::Bezier), 0.5),
        PathPoint::new(0.75, 0.25)
    );
    assert_eq!(
        interpolate(&path(PathKind::Bezier).with_curve(CurveKind::Cubic), 0.5),
        PathPoint::new(0.75, 0.25)
    );
    assert_eq!(interpolate(&path(PathKind::Circular), 0.3), circular(&p, 0.3));
    assert_eq!(interpolate(&path(PathKind::Custom), 0.3), linear(&p, 0.3));
}

#[test]
fn fallback_for_too_few_points_never_panics() {
    for kind in [
        PathKind::Linear,
        PathKind::Bezier,
        PathKind::Circular,
        PathKind::Arc,
        PathKind::Wave,
        PathKind::Custom,
    ] {
        for n in 0..5 {
            let p = ring((0.5, 0.5), 0.2, n);
            for curve in [CurveKind::Quadratic, CurveKind::Cubic] {
                let path = AnimationPath::new(kind, p.clone()).with_curve(curve);
                let out = interpolate(&path, 0.37);
                assert!(out.x.is_finite() && out.y.is_finite());
            }
        }
    }
}
