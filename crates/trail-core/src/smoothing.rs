use glam::Vec2;

/// One exponential low-pass step toward `target`.
///
/// `k` in (0, 1]; larger values track the target more tightly at the cost
/// of passing through more jitter.
#[inline]
pub fn smooth_toward(prev: Vec2, target: Vec2, k: f32) -> Vec2 {
    prev + (target - prev) * k
}

/// Blend the running velocity estimate with the newest instantaneous
/// sample. Keeps 60% of the previous estimate so single-frame spikes do
/// not whip the adaptive thresholds around.
#[inline]
pub fn blend_velocity(prev: f32, instant: f32) -> f32 {
    prev * 0.6 + instant * 0.4
}

/// Minimum spatial gap between stored points at the given smoothed
/// velocity (px/ms). Shrinks toward half the base as speed rises, so fast
/// strokes sample more densely while a near-stationary pointer does not
/// flood the trail.
#[inline]
pub fn adaptive_min_distance(base: f32, velocity: f32) -> f32 {
    (base * (1.0 - velocity * 0.5)).max(base * 0.5)
}

/// Minimum temporal gap between stored points, same policy as
/// [`adaptive_min_distance`].
#[inline]
pub fn adaptive_min_interval(base: f32, velocity: f32) -> f32 {
    (base * (1.0 - velocity * 0.5)).max(base * 0.5)
}
