use crate::constants::DEFAULT_NEON_RGB;
use thiserror::Error;

/// Tension shaping for the spline generator.
///
/// Tension here is the control-handle divisor of the Catmull-Rom style
/// construction: a larger value pulls the handles closer to the anchors,
/// which tightens corners and reduces overshoot. The effective per-segment
/// value is `base` plus a curvature term plus a capped velocity term,
/// clamped to `[base, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TensionConfig {
    /// Divisor applied on straight, slow segments.
    pub base: f32,
    /// Upper clamp on the effective divisor.
    pub max: f32,
    /// Scale of the average segment velocity contribution.
    pub velocity_factor: f32,
    /// Cap on the velocity contribution before clamping.
    pub velocity_cap: f32,
}

impl Default for TensionConfig {
    fn default() -> Self {
        Self {
            base: 6.0,
            max: 15.0,
            velocity_factor: 2.0,
            velocity_cap: 3.0,
        }
    }
}

/// Tunable parameters for one trail engine instance.
///
/// The numeric defaults are knobs, not contracts; the policies they drive
/// (denser sampling at higher speed, tighter tension on sharper turns, tail
/// collapsing to zero once the pointer stops) are what the engine
/// guarantees.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailConfig {
    /// Trail stroke color, linear RGB in [0, 1].
    pub neon_color: [f32; 3],
    /// Target visible trail length in px while the pointer is moving.
    pub trail_length: f32,
    /// Hard cap on stored trail points; oldest are dropped first.
    pub max_trail_points: usize,
    /// Floor on tail-advance speed (px/ms) so the catch-up never stalls.
    pub min_catch_up_velocity: f32,
    /// Exponential low-pass coefficient in (0, 1]; larger tracks the raw
    /// pointer more tightly.
    pub smoothing_factor: f32,
    /// Base spatial gap (px) required between stored points.
    pub min_point_distance: f32,
    /// Base temporal gap (ms) required between stored points.
    pub min_point_interval_ms: f32,
    /// Idle time (ms) after which the pointer counts as stopped and the
    /// trail starts collapsing toward zero length.
    pub stop_threshold_ms: f32,
    /// Pause (ms) after which the whole trail is considered stale and
    /// cleared outright.
    pub stale_threshold_ms: f32,
    pub tension: TensionConfig,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            neon_color: DEFAULT_NEON_RGB,
            trail_length: 350.0,
            max_trail_points: 250,
            min_catch_up_velocity: 0.3,
            smoothing_factor: 0.5,
            min_point_distance: 2.0,
            min_point_interval_ms: 8.0,
            stop_threshold_ms: 50.0,
            stale_threshold_ms: 300.0,
            tension: TensionConfig::default(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("smoothing_factor must be in (0, 1], got {0}")]
    SmoothingFactorOutOfRange(f32),
    #[error("max_trail_points must be at least 2, got {0}")]
    TooFewTrailPoints(usize),
    #[error("trail_length must be positive, got {0}")]
    NonPositiveTrailLength(f32),
    #[error("min_catch_up_velocity must be positive, got {0}")]
    NonPositiveCatchUpVelocity(f32),
    #[error("tension base {0} exceeds max {1}")]
    InvertedTensionBounds(f32, f32),
}

impl TrailConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.smoothing_factor > 0.0 && self.smoothing_factor <= 1.0) {
            return Err(ConfigError::SmoothingFactorOutOfRange(
                self.smoothing_factor,
            ));
        }
        if self.max_trail_points < 2 {
            return Err(ConfigError::TooFewTrailPoints(self.max_trail_points));
        }
        if !(self.trail_length > 0.0) {
            return Err(ConfigError::NonPositiveTrailLength(self.trail_length));
        }
        if !(self.min_catch_up_velocity > 0.0) {
            return Err(ConfigError::NonPositiveCatchUpVelocity(
                self.min_catch_up_velocity,
            ));
        }
        if self.tension.base > self.tension.max {
            return Err(ConfigError::InvertedTensionBounds(
                self.tension.base,
                self.tension.max,
            ));
        }
        Ok(())
    }
}
