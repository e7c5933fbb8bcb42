// Host-side integration tests for the trail engine. Timestamps are passed
// explicitly, so these step "animation frames" deterministically.

use glam::Vec2;
use trail_core::{ConfigError, TensionConfig, TrailConfig, TrailEngine, PathCommand};

const FRAME_MS: f64 = 8.0;

fn make_engine() -> TrailEngine {
    TrailEngine::new(TrailConfig::default())
}

/// Drag the raw pointer along `path` at one sample per frame, running a
/// frame after each sample. Returns the timestamp after the last frame.
fn drag(engine: &mut TrailEngine, path: impl Iterator<Item = Vec2>, start_ms: f64) -> f64 {
    let mut t = start_ms;
    for pos in path {
        engine.pointer_moved(pos, t);
        engine.frame(t, FRAME_MS as f32);
        t += FRAME_MS;
    }
    t
}

/// Hold the pointer still for `frames` frames starting at `start_ms`.
fn hold(engine: &mut TrailEngine, frames: usize, start_ms: f64) -> f64 {
    let mut t = start_ms;
    for _ in 0..frames {
        engine.frame(t, FRAME_MS as f32);
        t += FRAME_MS;
    }
    t
}

#[test]
fn default_config_validates() {
    assert!(TrailConfig::default().validate().is_ok());
}

#[test]
fn config_rejects_bad_values() {
    let mut cfg = TrailConfig::default();
    cfg.smoothing_factor = 0.0;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::SmoothingFactorOutOfRange(0.0))
    );

    let mut cfg = TrailConfig::default();
    cfg.max_trail_points = 1;
    assert_eq!(cfg.validate(), Err(ConfigError::TooFewTrailPoints(1)));

    let mut cfg = TrailConfig::default();
    cfg.tension = TensionConfig {
        base: 20.0,
        ..TensionConfig::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::InvertedTensionBounds(_, _))
    ));
}

#[test]
fn frame_before_any_pointer_sample_does_nothing() {
    let mut engine = make_engine();
    engine.frame(16.0, 16.0);
    engine.frame(32.0, 16.0);
    assert!(engine.trail().is_empty());
    assert!(engine.glyph().is_none());
    assert!(engine.curve().is_empty());
}

#[test]
fn first_sample_snaps_instead_of_interpolating() {
    let mut engine = make_engine();
    engine.pointer_moved(Vec2::new(300.0, 200.0), 0.0);
    let glyph = engine.glyph().expect("glyph after first sample");
    // snapped straight to the raw position, no streak from the sentinel
    assert_eq!(glyph.position, Vec2::new(300.0, 200.0));
}

#[test]
fn smoothing_decays_exponentially_toward_held_target() {
    let mut engine = make_engine();
    engine.pointer_moved(Vec2::new(0.0, 0.0), 0.0);
    engine.pointer_moved(Vec2::new(100.0, 0.0), 0.0);

    let k = engine.config().smoothing_factor;
    let mut t = FRAME_MS;
    for n in 1..=6 {
        engine.frame(t, FRAME_MS as f32);
        let expected_gap = 100.0 * (1.0 - k).powi(n);
        let gap = (engine.glyph().unwrap().position.x - 100.0).abs();
        assert!(
            (gap - expected_gap).abs() < 1e-3,
            "frame {n}: gap {gap}, expected {expected_gap}"
        );
        t += FRAME_MS;
    }
}

#[test]
fn trail_size_stays_bounded() {
    let mut cfg = TrailConfig::default();
    cfg.max_trail_points = 8;
    let mut engine = TrailEngine::new(cfg);
    let mut t = 0.0;
    for i in 0..500 {
        engine.pointer_moved(Vec2::new(i as f32 * 10.0, i as f32 * 10.0), t);
        engine.frame(t, FRAME_MS as f32);
        assert!(engine.trail().len() <= 8, "bound exceeded at frame {i}");
        t += FRAME_MS;
    }
}

#[test]
fn timestamps_are_monotonic() {
    let mut engine = make_engine();
    // wiggly drive with direction changes
    drag(
        &mut engine,
        (0..120).map(|i| Vec2::new(i as f32 * 6.0, if i % 2 == 0 { 40.0 } else { 60.0 })),
        0.0,
    );
    for w in engine.trail().windows(2) {
        assert!(w[0].timestamp_ms <= w[1].timestamp_ms);
    }
}

#[test]
fn adjacent_points_respect_minimum_spacing() {
    let mut engine = make_engine();
    // slow drag: short total path so the tail never starts trimming and
    // every adjacent pair is exactly as the sampler stored it
    drag(
        &mut engine,
        (0..50).map(|i| Vec2::new(i as f32 * 4.0, 10.0)),
        0.0,
    );
    let cfg = engine.config().clone();
    let points = engine.trail();
    assert!(points.len() >= 3, "expected a populated trail");
    for w in points.windows(2) {
        let distance = w[0].position.distance(w[1].position);
        let gap_ms = (w[1].timestamp_ms - w[0].timestamp_ms) as f32;
        // adaptive thresholds floor at half the configured base values
        assert!(distance >= cfg.min_point_distance * 0.5 - 1e-4);
        assert!(gap_ms >= cfg.min_point_interval_ms * 0.5 - 1e-4);
    }
}

#[test]
fn straight_line_drag_scenario() {
    // (0,0) -> (500,0) over 500 ms at 1 px/ms
    let mut engine = make_engine();
    let end = drag(
        &mut engine,
        (0..63).map(|i| Vec2::new(i as f32 * FRAME_MS as f32, 0.0)),
        0.0,
    );

    let points = engine.trail();
    assert!(points.len() >= 20, "got {} points", points.len());
    assert!(points.len() <= 80, "got {} points", points.len());
    for p in points {
        assert!(p.position.y.abs() < 1e-3);
        assert!(
            p.velocity >= 0.3 && p.velocity <= 2.0,
            "velocity {} out of expected range",
            p.velocity
        );
    }

    // once motion stops the smoothed position closes on the raw end point
    // within a few frames
    let raw_end = Vec2::new(62.0 * FRAME_MS as f32, 0.0);
    hold(&mut engine, 5, end);
    let gap = engine.glyph().unwrap().position.distance(raw_end);
    assert!(gap < 1.0, "smoothed position still {gap} px behind");
}

#[test]
fn curve_is_glued_to_the_live_pointer() {
    let mut engine = make_engine();
    drag(
        &mut engine,
        (0..40).map(|i| Vec2::new(i as f32 * 8.0, 20.0)),
        0.0,
    );
    let raw = Vec2::new(39.0 * 8.0, 20.0);
    let curve = engine.curve();
    let endpoint = match *curve.last().expect("non-empty curve") {
        PathCommand::CurveTo { to, .. } => to,
        PathCommand::LineTo(p) => p,
        PathCommand::MoveTo(p) => p,
    };
    assert!(endpoint.distance(raw) < 1e-3);
}

#[test]
fn stillness_empties_the_trail_and_keeps_it_empty() {
    let mut engine = make_engine();
    let end = drag(
        &mut engine,
        (0..60).map(|i| Vec2::new(i as f32 * 8.0, 30.0)),
        0.0,
    );
    assert!(!engine.trail().is_empty());

    // hold for 2x the stale threshold
    let frames = (2.0 * engine.config().stale_threshold_ms as f64 / FRAME_MS) as usize;
    let end = hold(&mut engine, frames, end);
    assert!(engine.trail().is_empty());

    // no spontaneous regrowth
    hold(&mut engine, 30, end);
    assert!(engine.trail().is_empty());
    assert!(engine.curve().is_empty());
}

#[test]
fn click_and_hold_scenario() {
    let mut engine = make_engine();
    engine.pointer_moved(Vec2::new(200.0, 200.0), 0.0);
    engine.set_pressed(true);
    let frames = (2.0 * engine.config().stale_threshold_ms as f64 / FRAME_MS) as usize;
    hold(&mut engine, frames, FRAME_MS);

    assert!(engine.trail().is_empty());
    let glyph = engine.glyph().unwrap();
    assert!(glyph.pressed);
    assert!(glyph.size < 12.0, "pressed glyph should shrink");

    engine.set_pressed(false);
    let glyph = engine.glyph().unwrap();
    assert!(!glyph.pressed);
    assert_eq!(glyph.size, 12.0);
}

#[test]
fn leave_suspends_sampling_but_keeps_the_store() {
    let mut engine = make_engine();
    let end = drag(
        &mut engine,
        (0..30).map(|i| Vec2::new(i as f32 * 8.0, 30.0)),
        0.0,
    );
    let before = engine.trail().len();
    assert!(before > 0);

    engine.pointer_left();
    assert!(engine.glyph().unwrap().opacity == 0.0);
    // one immediate frame: no new points appear while invisible
    engine.pointer_moved(Vec2::new(400.0, 30.0), end);
    engine.pointer_left();
    engine.frame(end, FRAME_MS as f32);
    for p in engine.trail() {
        assert!(p.position.x < 300.0, "sampled a point while invisible");
    }
}

#[test]
fn reentry_starts_a_fresh_trail() {
    let mut engine = make_engine();
    let end = drag(
        &mut engine,
        (0..40).map(|i| Vec2::new(100.0 + i as f32 * 2.0, 100.0)),
        0.0,
    );
    engine.pointer_left();

    engine.pointer_entered(Vec2::new(400.0, 50.0), end + 500.0);
    assert!(engine.trail().is_empty());
    assert_eq!(engine.glyph().unwrap().position, Vec2::new(400.0, 50.0));

    // new motion only produces points near the re-entry position, never a
    // connecting segment from the old region
    drag(
        &mut engine,
        (0..20).map(|i| Vec2::new(400.0 + i as f32 * 4.0, 50.0)),
        end + 500.0,
    );
    for p in engine.trail() {
        assert!(
            p.position.distance(Vec2::new(180.0, 100.0)) > 150.0,
            "point {:?} too close to the pre-leave path",
            p.position
        );
    }
}
