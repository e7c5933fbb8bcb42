use crate::config::TrailConfig;
use crate::constants::{
    CURSOR_SIZE, CURSOR_SIZE_PRESSED, POSITION_SENTINEL, SYNTHETIC_ENDPOINT_MIN_DISTANCE,
    TAIL_AVERAGE_WINDOW,
};
use crate::smoothing;
use crate::spline::{self, CurvePath};
use crate::trail::{Trail, TrailPoint};
use glam::Vec2;

/// Paint-layer snapshot of the cursor glyph.
#[derive(Clone, Copy, Debug)]
pub struct CursorGlyph {
    pub position: Vec2,
    /// Diameter in CSS px.
    pub size: f32,
    pub opacity: f32,
    pub pressed: bool,
}

#[inline]
fn is_valid_position(p: Vec2) -> bool {
    p.x >= 0.0 && p.y >= 0.0
}

/// The pointer-trail engine.
///
/// Pointer events write the raw-position cell and visibility/press flags;
/// [`frame`] then runs the three per-frame stages in order: position
/// smoother, trail sampler, tail advance. All timestamps are passed in
/// explicitly so the engine is deterministic under test.
///
/// [`frame`]: TrailEngine::frame
pub struct TrailEngine {
    config: TrailConfig,
    raw: Vec2,
    smoothed: Vec2,
    last_trail_position: Vec2,
    last_trail_time_ms: f64,
    last_move_time_ms: f64,
    velocity: f32,
    trail: Trail,
    visible: bool,
    pressed: bool,
    awaiting_first_sample: bool,
}

impl TrailEngine {
    pub fn new(config: TrailConfig) -> Self {
        let sentinel = Vec2::splat(POSITION_SENTINEL);
        Self {
            config,
            raw: sentinel,
            smoothed: sentinel,
            last_trail_position: sentinel,
            last_trail_time_ms: 0.0,
            last_move_time_ms: 0.0,
            velocity: 0.0,
            trail: Trail::new(),
            visible: false,
            pressed: false,
            awaiting_first_sample: true,
        }
    }

    #[inline]
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    #[inline]
    pub fn trail(&self) -> &[TrailPoint] {
        self.trail.points()
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Latest raw pointer sample. Snaps the smoothed position on the very
    /// first valid sample so no streak is drawn from the off-screen
    /// sentinel.
    pub fn pointer_moved(&mut self, position: Vec2, now_ms: f64) {
        self.raw = position;
        self.last_move_time_ms = now_ms;
        if self.awaiting_first_sample && is_valid_position(position) {
            self.snap_to(position, now_ms);
            self.awaiting_first_sample = false;
        }
        self.visible = true;
    }

    /// Pointer re-entered the viewport: forget the old path entirely so no
    /// segment connects the pre-leave and post-entry positions.
    pub fn pointer_entered(&mut self, position: Vec2, now_ms: f64) {
        log::debug!("pointer re-entry at {position:?}, clearing {} points", self.trail.len());
        self.raw = position;
        self.snap_to(position, now_ms);
        self.last_move_time_ms = now_ms;
        self.trail.clear();
        self.velocity = 0.0;
        self.visible = true;
        self.awaiting_first_sample = false;
    }

    /// Pointer left the viewport. Sampling is suspended but the stored
    /// trail is kept until re-entry or the stale timer fires.
    pub fn pointer_left(&mut self) {
        self.visible = false;
    }

    pub fn set_pressed(&mut self, down: bool) {
        self.pressed = down;
    }

    fn snap_to(&mut self, position: Vec2, now_ms: f64) {
        self.smoothed = position;
        self.last_trail_position = position;
        self.last_trail_time_ms = now_ms;
    }

    /// One animation tick. Skips all work until a valid raw sample exists.
    pub fn frame(&mut self, now_ms: f64, dt_ms: f32) {
        if !is_valid_position(self.raw) {
            return;
        }
        if self.awaiting_first_sample {
            self.snap_to(self.raw, now_ms);
            self.awaiting_first_sample = false;
        }
        self.smoothed =
            smoothing::smooth_toward(self.smoothed, self.raw, self.config.smoothing_factor);
        self.sample_trail(now_ms);
        self.advance_tail(now_ms, dt_ms);
    }

    fn sample_trail(&mut self, now_ms: f64) {
        let distance = self.smoothed.distance(self.last_trail_position);
        let elapsed = (now_ms - self.last_trail_time_ms) as f32;

        // A long pause means the old path is stale: hard clear, not a trim.
        if elapsed > self.config.stale_threshold_ms && !self.trail.is_empty() {
            log::debug!("stale trail cleared after {elapsed:.0} ms pause");
            self.trail.clear();
            self.last_trail_position = self.smoothed;
            self.last_trail_time_ms = now_ms;
            self.velocity = 0.0;
            return;
        }

        let instant_velocity = if elapsed > 0.0 { distance / elapsed } else { 0.0 };
        self.velocity = smoothing::blend_velocity(self.velocity, instant_velocity);

        let min_distance =
            smoothing::adaptive_min_distance(self.config.min_point_distance, self.velocity);
        let min_interval =
            smoothing::adaptive_min_interval(self.config.min_point_interval_ms, self.velocity);

        if distance >= min_distance
            && elapsed >= min_interval
            && self.visible
            && is_valid_position(self.smoothed)
        {
            self.last_trail_position = self.smoothed;
            self.last_trail_time_ms = now_ms;
            self.trail.push_bounded(
                TrailPoint {
                    position: self.smoothed,
                    timestamp_ms: now_ms,
                    velocity: instant_velocity.max(self.config.min_catch_up_velocity),
                },
                self.config.max_trail_points,
            );
        }
    }

    fn advance_tail(&mut self, now_ms: f64, dt_ms: f32) {
        if self.trail.len() < 2 {
            return;
        }
        let path_length = self.trail.path_length();
        let stopped =
            (now_ms - self.last_move_time_ms) as f32 > self.config.stop_threshold_ms;

        let tail_velocity = if stopped {
            self.trail
                .head_average_velocity(TAIL_AVERAGE_WINDOW)
                .max(self.config.min_catch_up_velocity)
        } else {
            self.trail.points()[0]
                .velocity
                .max(self.config.min_catch_up_velocity)
        };

        let target_length = if stopped { 0.0 } else { self.config.trail_length };
        let excess = (path_length - target_length).max(0.0);
        if excess > 0.0 || stopped {
            let offset = (tail_velocity * dt_ms).min(path_length);
            self.trail.advance_head(offset);
        }
    }

    /// Renderable curve for the current frame, glued to the live pointer
    /// position via a synthetic terminal point when the trail's last stored
    /// point lags behind it.
    pub fn curve(&self) -> CurvePath {
        let points = self.trail.points();
        if points.is_empty() || !is_valid_position(self.raw) {
            return CurvePath::new();
        }
        let last = points[points.len() - 1];
        if last.position.distance(self.raw) > SYNTHETIC_ENDPOINT_MIN_DISTANCE {
            let mut with_cursor: Vec<TrailPoint> = Vec::with_capacity(points.len() + 1);
            with_cursor.extend_from_slice(points);
            with_cursor.push(TrailPoint {
                position: self.raw,
                timestamp_ms: last.timestamp_ms,
                velocity: last.velocity,
            });
            spline::smooth_path(&with_cursor, &self.config.tension)
        } else {
            spline::smooth_path(points, &self.config.tension)
        }
    }

    /// Cursor glyph snapshot, `None` until the first valid pointer sample.
    pub fn glyph(&self) -> Option<CursorGlyph> {
        if self.awaiting_first_sample {
            return None;
        }
        Some(CursorGlyph {
            position: self.smoothed,
            size: if self.pressed {
                CURSOR_SIZE_PRESSED
            } else {
                CURSOR_SIZE
            },
            opacity: if self.visible { 1.0 } else { 0.0 },
            pressed: self.pressed,
        })
    }
}
