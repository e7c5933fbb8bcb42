use glam::Vec2;

/// One recorded sample along the pointer's path. Immutable once stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub position: Vec2,
    pub timestamp_ms: f64,
    /// Smoothed speed (px/ms) at capture time, floored at the configured
    /// catch-up velocity so the tail advance never stalls.
    pub velocity: f32,
}

/// Bounded, time-ordered sequence of trail points, oldest first.
///
/// Invariants: length never exceeds the bound passed to [`push_bounded`],
/// timestamps are non-decreasing, and a trail of fewer than two points
/// renders no visible path.
///
/// [`push_bounded`]: Trail::push_bounded
#[derive(Clone, Debug, Default)]
pub struct Trail {
    points: Vec<TrailPoint>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Append a point, dropping from the head once `max_points` is
    /// exceeded.
    pub fn push_bounded(&mut self, point: TrailPoint, max_points: usize) {
        self.points.push(point);
        if self.points.len() > max_points {
            let excess = self.points.len() - max_points;
            self.points.drain(..excess);
        }
    }

    /// Total polyline length in px.
    pub fn path_length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|w| w[0].position.distance(w[1].position))
            .sum()
    }

    /// Average recorded velocity of the oldest `n` points, 0 when empty.
    pub fn head_average_velocity(&self, n: usize) -> f32 {
        let take = self.points.len().min(n);
        if take == 0 {
            return 0.0;
        }
        let sum: f32 = self.points[..take].iter().map(|p| p.velocity).sum();
        sum / take as f32
    }

    /// Trim everything before `offset` px along the path, replacing the
    /// head with a point interpolated inside the straddling segment so the
    /// cut lands at sub-point granularity. Clears the trail when the offset
    /// consumes it entirely.
    pub fn advance_head(&mut self, offset: f32) {
        if offset <= 0.0 || self.points.len() < 2 {
            return;
        }

        let mut accumulated = 0.0_f32;
        let mut cut = None;
        for i in 1..self.points.len() {
            let segment = self.points[i].position.distance(self.points[i - 1].position);
            if accumulated + segment >= offset {
                let t = if segment > 0.0 {
                    (offset - accumulated) / segment
                } else {
                    0.0
                };
                cut = Some((i - 1, t));
                break;
            }
            accumulated += segment;
        }

        let Some((start, t)) = cut else {
            // Offset runs past the last point; nothing survives.
            self.points.clear();
            return;
        };

        let p1 = self.points[start];
        let p2 = self.points[start + 1];
        let head = TrailPoint {
            position: p1.position.lerp(p2.position, t),
            timestamp_ms: p1.timestamp_ms + (p2.timestamp_ms - p1.timestamp_ms) * f64::from(t),
            velocity: p1.velocity + (p2.velocity - p1.velocity) * t,
        };
        self.points.drain(..start);
        self.points[0] = head;
        if self.points.len() < 2 {
            self.points.clear();
        }
    }
}
