//! Flutter: the edge of a paper sheet bends inward, sways, and relaxes.
//!
//! The displayed displacement is smoothed toward a moving target every frame,
//! so it lags the target. The lag depends on the envelope: the sheet follows
//! closely at full strength and drifts back lazily while fading out. A run
//! only ends once the time is up *and* the displacement has settled, so the
//! last frame never snaps.

use crate::gesture::svg::paper_path;
use crate::gesture::{Animator, Frame};
use std::f64::consts::PI;
use std::time::Duration;

pub const FLUTTER_DURATION: Duration = Duration::from_secs(6);
pub const FADE_IN: Duration = Duration::from_millis(1200);
pub const FADE_OUT: Duration = Duration::from_millis(1800);

/// Inward pull at full envelope, before sway.
pub const BASE_INWARD: f64 = 10.0;
/// Residual displacement below which the sheet counts as settled.
pub const SETTLE_THRESHOLD: f64 = 0.05;

const SWAY_A: (f64, f64, f64) = (4.0, 0.9, 0.0); // amplitude, Hz, phase
const SWAY_B: (f64, f64, f64) = (2.0, 2.3, 1.1);

const SMOOTH_MIN: f64 = 0.06;
const SMOOTH_GAIN: f64 = 0.18;

#[derive(Debug, Clone, Default)]
pub struct FlutterAnimator {
    running: bool,
    started_at: Duration,
    current_inward: f64,
}

/// Cosine ease-in-out on `[0, 1]`.
fn ease(x: f64) -> f64 {
    0.5 - 0.5 * (PI * x.clamp(0.0, 1.0)).cos()
}

impl FlutterAnimator {
    /// Fade-in / fade-out envelope at `t` seconds into the run.
    pub fn envelope(t: f64) -> f64 {
        let fade_in = t / FADE_IN.as_secs_f64();
        let fade_out = (FLUTTER_DURATION.as_secs_f64() - t) / FADE_OUT.as_secs_f64();
        ease(fade_in.min(fade_out))
    }

    /// Two superposed sine waves.
    pub fn sway(t: f64) -> f64 {
        let wave = |(amp, hz, phase): (f64, f64, f64)| amp * (2.0 * PI * hz * t + phase).sin();
        wave(SWAY_A) + wave(SWAY_B)
    }

    /// Where the displacement is heading at `t`.
    pub fn target(t: f64) -> f64 {
        Self::envelope(t) * (BASE_INWARD + Self::sway(t))
    }

    pub fn current_inward(&self) -> f64 {
        self.current_inward
    }

    /// Whether a run that has been going for `elapsed` with residual
    /// displacement `inward` is over.
    pub fn is_settled(elapsed: Duration, inward: f64) -> bool {
        elapsed >= FLUTTER_DURATION && inward.abs() <= SETTLE_THRESHOLD
    }
}

impl Animator for FlutterAnimator {
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
        let t = elapsed.as_secs_f64();

        let env = Self::envelope(t);
        let target = Self::target(t);
        let k = SMOOTH_MIN + SMOOTH_GAIN * env;
        self.current_inward += (target - self.current_inward) * k;

        if Self::is_settled(elapsed, self.current_inward) {
            self.running = false;
            self.current_inward = 0.0;
            return Frame {
                path: self.idle_path(),
                finished: true,
            };
        }

        Frame {
            path: paper_path(self.current_inward),
            finished: false,
        }
    }

    fn idle_path(&self) -> String {
        paper_path(0.0)
    }
}
