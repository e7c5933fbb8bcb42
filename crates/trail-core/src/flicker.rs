//! Neon tube flicker for the decorative top bar.
//!
//! A seeded sequencer generates intensity step sequences (a startup
//! struggle, then recurring micro-flicker clusters) and a driver steps
//! through them by wall-clock deltas. Intensity never drops fully dark;
//! phosphor glow keeps an ambient floor.

use rand::prelude::*;
use std::collections::VecDeque;

pub const INTENSITY_OFF: f32 = 0.15; // ambient glow floor
pub const INTENSITY_DIM: f32 = 0.4;
pub const INTENSITY_MEDIUM: f32 = 0.7;
pub const INTENSITY_BRIGHT: f32 = 0.9;
pub const INTENSITY_FULL: f32 = 1.0;
pub const INTENSITY_SURGE: f32 = 1.15; // brief overshoot above normal

/// One step of a flicker sequence: hold `intensity` for `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlickerStep {
    pub intensity: f32,
    pub duration_ms: f32,
}

/// Seeded generator of flicker sequences. Per-instance RNG keeps
/// independent bars decorrelated while staying deterministic under test.
pub struct FlickerSequencer {
    rng: StdRng,
}

impl FlickerSequencer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Startup struggle: a few failed strikes before the tube catches.
    pub fn startup_sequence(&mut self) -> Vec<FlickerStep> {
        let mut seq = vec![FlickerStep {
            intensity: INTENSITY_OFF,
            duration_ms: 100.0,
        }];
        let attempts = 2 + self.rng.gen_range(0..2);
        for _ in 0..attempts {
            seq.push(FlickerStep {
                intensity: INTENSITY_DIM + self.rng.gen::<f32>() * 0.3,
                duration_ms: 40.0 + self.rng.gen::<f32>() * 40.0,
            });
            seq.push(FlickerStep {
                intensity: INTENSITY_OFF,
                duration_ms: 80.0 + self.rng.gen::<f32>() * 120.0,
            });
        }
        seq.push(FlickerStep {
            intensity: INTENSITY_MEDIUM,
            duration_ms: 50.0,
        });
        seq.push(FlickerStep {
            intensity: INTENSITY_SURGE,
            duration_ms: 30.0,
        });
        seq.push(FlickerStep {
            intensity: INTENSITY_FULL,
            duration_ms: 50.0,
        });
        seq
    }

    /// Micro-flicker cluster: 2-4 quick dips with recoveries, the
    /// bzzzt-bzzzt pattern of a tired tube.
    pub fn flicker_cluster(&mut self) -> Vec<FlickerStep> {
        let mut cluster = Vec::new();
        let count = 2 + self.rng.gen_range(0..3);
        for i in 0..count {
            let dip = if self.rng.gen::<f32>() < 0.3 {
                INTENSITY_OFF
            } else if self.rng.gen::<f32>() < 0.5 {
                INTENSITY_DIM
            } else {
                INTENSITY_MEDIUM
            };
            cluster.push(FlickerStep {
                intensity: dip,
                duration_ms: 20.0 + self.rng.gen::<f32>() * 30.0,
            });
            let recovery = if self.rng.gen::<f32>() < 0.3 {
                INTENSITY_SURGE
            } else {
                INTENSITY_FULL
            };
            cluster.push(FlickerStep {
                intensity: recovery,
                duration_ms: 30.0 + self.rng.gen::<f32>() * 30.0,
            });
            if i < count - 1 {
                cluster.push(FlickerStep {
                    intensity: INTENSITY_FULL,
                    duration_ms: self.rng.gen::<f32>() * 80.0,
                });
            }
        }
        cluster
    }

    /// Idle gap before the next cluster, occasionally skewed longer.
    pub fn next_cluster_delay_ms(&mut self) -> f32 {
        let base = 2000.0 + self.rng.gen::<f32>() * 3000.0;
        let extra = if self.rng.gen::<f32>() < 0.3 {
            self.rng.gen::<f32>() * 2000.0
        } else {
            0.0
        };
        base + extra
    }
}

/// Steps flicker sequences by frame deltas and exposes the current glow
/// intensity. With reduced motion requested the driver is pinned at full
/// intensity and never animates.
pub struct FlickerDriver {
    sequencer: FlickerSequencer,
    queue: VecDeque<FlickerStep>,
    step_remaining_ms: f32,
    wait_ms: f32,
    intensity: f32,
    reduced_motion: bool,
}

impl FlickerDriver {
    pub fn new(seed: u64, reduced_motion: bool) -> Self {
        let mut sequencer = FlickerSequencer::new(seed);
        if reduced_motion {
            return Self {
                sequencer,
                queue: VecDeque::new(),
                step_remaining_ms: 0.0,
                wait_ms: 0.0,
                intensity: INTENSITY_FULL,
                reduced_motion: true,
            };
        }
        let queue: VecDeque<FlickerStep> = sequencer.startup_sequence().into();
        Self {
            sequencer,
            queue,
            step_remaining_ms: 0.0,
            wait_ms: 0.0,
            intensity: INTENSITY_OFF,
            reduced_motion: false,
        }
    }

    #[inline]
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Advance by `dt_ms` and return the current intensity. When the queue
    /// drains, the bar rests at full brightness until the next cluster's
    /// randomized delay elapses.
    pub fn tick(&mut self, dt_ms: f32) -> f32 {
        if self.reduced_motion {
            return self.intensity;
        }
        let mut budget = dt_ms.max(0.0);
        loop {
            if let Some(step) = self.queue.front().copied() {
                if self.step_remaining_ms <= 0.0 {
                    self.intensity = step.intensity;
                    self.step_remaining_ms = step.duration_ms;
                }
                if budget < self.step_remaining_ms {
                    self.step_remaining_ms -= budget;
                    break;
                }
                budget -= self.step_remaining_ms;
                self.step_remaining_ms = 0.0;
                self.queue.pop_front();
                if self.queue.is_empty() {
                    self.intensity = INTENSITY_FULL;
                    self.wait_ms = self.sequencer.next_cluster_delay_ms();
                }
            } else {
                if budget < self.wait_ms {
                    self.wait_ms -= budget;
                    break;
                }
                budget -= self.wait_ms;
                self.wait_ms = 0.0;
                self.queue.extend(self.sequencer.flicker_cluster());
            }
        }
        self.intensity
    }
}

/// Layered glow derived from an intensity value; mirrors the triple halo
/// the bar paints around its core.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowStyle {
    /// Core fill alpha, floored so the tube silhouette never vanishes.
    pub core_alpha: f32,
    pub halo_alpha: [f32; 3],
    pub halo_radius_px: [f32; 3],
}

impl GlowStyle {
    pub fn from_intensity(intensity: f32) -> Self {
        let i = intensity;
        Self {
            core_alpha: i.max(0.3),
            halo_alpha: [0.8 * i, 0.6 * i, 0.4 * i],
            halo_radius_px: [8.0 * i, 16.0 * i, 24.0 * i],
        }
    }
}
