use crate::config::TensionConfig;
use crate::trail::TrailPoint;
use glam::Vec2;
use smallvec::SmallVec;

/// Drawing command consumed by the paint layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    CurveTo {
        control1: Vec2,
        control2: Vec2,
        to: Vec2,
    },
}

/// Renderable curve description. Empty means nothing to draw.
pub type CurvePath = SmallVec<[PathCommand; 16]>;

/// Normalized sharpness of the turn at `p1`: 0 for a straight run, 1 for a
/// full reversal. Degenerate (near zero-length) segments count as straight.
pub fn curvature(p0: Vec2, p1: Vec2, p2: Vec2) -> f32 {
    let v1 = p1 - p0;
    let v2 = p2 - p1;
    let len1 = v1.length();
    let len2 = v2.length();
    if len1 < 1e-3 || len2 < 1e-3 {
        return 0.0;
    }
    let n1 = v1 / len1;
    let n2 = v2 / len2;
    let cross = n1.x * n2.y - n1.y * n2.x;
    let dot = n1.dot(n2);
    cross.atan2(dot).abs() / std::f32::consts::PI
}

/// Effective control-handle divisor for one segment. Curvature pushes it
/// toward `max` (tighter corners), velocity adds a capped amount, and the
/// result is clamped to the configured bounds.
pub fn segment_tension(cfg: &TensionConfig, curvature: f32, avg_velocity: f32) -> f32 {
    let curvature_term = curvature * (cfg.max - cfg.base);
    let velocity_term = (avg_velocity * cfg.velocity_factor).min(cfg.velocity_cap);
    (cfg.base + curvature_term + velocity_term).clamp(cfg.base, cfg.max)
}

/// Build a smooth curve through `points`.
///
/// Three or more points produce cubic segments through consecutive point
/// quadruples with per-segment adaptive tension; exactly two degenerate to
/// a straight line; fewer produce nothing.
pub fn smooth_path(points: &[TrailPoint], cfg: &TensionConfig) -> CurvePath {
    let mut path = CurvePath::new();
    if points.len() < 2 {
        return path;
    }
    path.push(PathCommand::MoveTo(points[0].position));
    if points.len() == 2 {
        path.push(PathCommand::LineTo(points[1].position));
        return path;
    }

    for i in 0..points.len() - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(points.len() - 1)];

        let k = curvature(p0.position, p1.position, p2.position);
        let avg_velocity = (p1.velocity + p2.velocity) * 0.5;
        let tension = segment_tension(cfg, k, avg_velocity);

        path.push(PathCommand::CurveTo {
            control1: p1.position + (p2.position - p0.position) / tension,
            control2: p2.position - (p3.position - p1.position) / tension,
            to: p2.position,
        });
    }
    path
}
