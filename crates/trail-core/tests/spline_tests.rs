// Host-side tests for curvature, adaptive tension, and curve generation.

use glam::Vec2;
use trail_core::{curvature, segment_tension, smooth_path, PathCommand, TensionConfig, TrailPoint};

fn point(x: f32, y: f32) -> TrailPoint {
    TrailPoint {
        position: Vec2::new(x, y),
        timestamp_ms: 0.0,
        velocity: 1.0,
    }
}

#[test]
fn curvature_zero_on_straight_run() {
    let k = curvature(
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(20.0, 0.0),
    );
    assert!(k.abs() < 1e-6);
}

#[test]
fn curvature_half_on_right_angle() {
    let k = curvature(
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
    );
    assert!((k - 0.5).abs() < 1e-5);
}

#[test]
fn curvature_near_one_on_reversal() {
    let k = curvature(
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(0.1, 0.01),
    );
    assert!(k > 0.95, "reversal curvature was {k}");
}

#[test]
fn curvature_degenerate_segment_counts_as_straight() {
    let p = Vec2::new(5.0, 5.0);
    assert_eq!(curvature(p, p, Vec2::new(10.0, 5.0)), 0.0);
}

#[test]
fn segment_tension_bounds() {
    let cfg = TensionConfig::default();
    // straight and slow sits at the base
    assert!((segment_tension(&cfg, 0.0, 0.0) - cfg.base).abs() < 1e-6);
    // sharp and fast clamps at the max
    assert!((segment_tension(&cfg, 1.0, 10.0) - cfg.max).abs() < 1e-6);
    // everything in between stays inside the bounds
    for k in [0.0, 0.25, 0.5, 0.75, 1.0] {
        for v in [0.0, 0.5, 1.0, 3.0] {
            let t = segment_tension(&cfg, k, v);
            assert!(t >= cfg.base && t <= cfg.max, "tension {t} out of bounds");
        }
    }
}

#[test]
fn smooth_path_degenerate_inputs_draw_nothing() {
    let cfg = TensionConfig::default();
    assert!(smooth_path(&[], &cfg).is_empty());
    assert!(smooth_path(&[point(5.0, 5.0)], &cfg).is_empty());
}

#[test]
fn smooth_path_two_points_is_a_line() {
    let cfg = TensionConfig::default();
    let path = smooth_path(&[point(0.0, 0.0), point(10.0, 5.0)], &cfg);
    assert_eq!(path.len(), 2);
    assert_eq!(path[0], PathCommand::MoveTo(Vec2::new(0.0, 0.0)));
    assert_eq!(path[1], PathCommand::LineTo(Vec2::new(10.0, 5.0)));
}

#[test]
fn smooth_path_emits_one_curve_per_segment() {
    let cfg = TensionConfig::default();
    let points: Vec<TrailPoint> = (0..6).map(|i| point(i as f32 * 10.0, (i % 2) as f32)).collect();
    let path = smooth_path(&points, &cfg);
    assert_eq!(path.len(), points.len()); // MoveTo + (n-1) CurveTo
    assert!(matches!(path[0], PathCommand::MoveTo(_)));
    for cmd in &path[1..] {
        assert!(matches!(cmd, PathCommand::CurveTo { .. }));
    }
    // last curve lands on the last input point
    match path[path.len() - 1] {
        PathCommand::CurveTo { to, .. } => assert_eq!(to, points[5].position),
        _ => panic!("expected CurveTo"),
    }
}

#[test]
fn zig_zag_tension_trends_to_max() {
    // Scenario: rapid direction reversals across a small radius. The
    // per-segment tension should push toward the configured maximum.
    let cfg = TensionConfig::default();
    let points: Vec<Vec2> = (0..8)
        .map(|i| Vec2::new(if i % 2 == 0 { 0.0 } else { 50.0 }, i as f32))
        .collect();
    for w in points.windows(3) {
        let k = curvature(w[0], w[1], w[2]);
        let tension = segment_tension(&cfg, k, 1.0);
        assert!(
            tension >= 0.9 * cfg.max,
            "expected near-max tension on reversal, got {tension}"
        );
    }
}

#[test]
fn smooth_path_survives_repeated_reversals() {
    let cfg = TensionConfig::default();
    let points: Vec<TrailPoint> = (0..40)
        .map(|i| point(if i % 2 == 0 { 100.0 } else { 105.0 }, i as f32 * 0.5))
        .collect();
    let path = smooth_path(&points, &cfg);
    assert_eq!(path.len(), points.len());
    for cmd in &path {
        if let PathCommand::CurveTo {
            control1,
            control2,
            to,
        } = cmd
        {
            assert!(control1.is_finite() && control2.is_finite() && to.is_finite());
        }
    }
}
