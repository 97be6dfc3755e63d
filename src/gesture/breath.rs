//! Breath: a line that slowly swells and settles back flat.

use crate::gesture::svg::quad_path;
use crate::gesture::{Animator, Frame};
use std::f64::consts::PI;
use std::time::Duration;

pub const BREATH_DURATION: Duration = Duration::from_secs(15);
/// Apex height of the bulge at mid-breath (viewBox units).
pub const MAX_BULGE: f64 = 18.0;

const START_X: f64 = 10.0;
const END_X: f64 = 190.0;
const BASE_Y: f64 = 50.0;

#[derive(Debug, Clone, Default)]
pub struct BreathAnimator {
    running: bool,
    started_at: Duration,
}

impl BreathAnimator {
    /// Bulge height for a progress fraction in `[0, 1]`.
    pub fn bulge(progress: f64) -> f64 {
        MAX_BULGE * (PI * progress.clamp(0.0, 1.0)).sin()
    }

    /// Curve with the given apex height (positive bulges upward).
    pub fn path_for(bulge: f64) -> String {
        let mid_x = (START_X + END_X) / 2.0;
        quad_path(
            (START_X, BASE_Y),
            (mid_x, BASE_Y - 2.0 * bulge),
            (END_X, BASE_Y),
        )
    }
}

impl Animator for BreathAnimator {
    fn start(&mut self, now: Duration) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.started_at = now;
        true
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn tick(&mut self, now: Duration) -> Frame {
        if !self.running {
            return Frame {
                path: self.idle_path(),
                finished: true,
            };
        }

        let elapsed = now.saturating_sub(self.started_at);
        if elapsed >= BREATH_DURATION {
            self.running = false;
            return Frame {
                path: self.idle_path(),
                finished: true,
            };
        }

        let progress = elapsed.as_secs_f64() / BREATH_DURATION.as_secs_f64();
        Frame {
            path: Self::path_for(Self::bulge(progress)),
            finished: false,
        }
    }

    fn idle_path(&self) -> String {
        Self::path_for(0.0)
    }
}
