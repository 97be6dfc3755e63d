//! Gesture animators: procedural SVG paths driven by an explicit tick source.
//!
//! Each animator owns its state (`running` guard, start time, smoothing
//! state), so several instances never share anything. A frame loop is
//! `start` once, then `tick` with the current elapsed time until a frame
//! reports `finished`. [`play`] does exactly that against a [`TickSource`].

pub mod breath;
pub mod flutter;
pub mod svg;
pub mod ticks;

pub use breath::BreathAnimator;
pub use flutter::FlutterAnimator;
pub use ticks::{FixedStepTicks, RealtimeTicks, TickSource};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    Breath,
    Flutter,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::Breath => "breath",
            Gesture::Flutter => "flutter",
        }
    }

    /// Fresh animator for this gesture.
    pub fn animator(&self) -> Box<dyn Animator> {
        match self {
            Gesture::Breath => Box::new(BreathAnimator::default()),
            Gesture::Flutter => Box::new(FlutterAnimator::default()),
        }
    }
}

/// One rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// SVG path data (`d` attribute)
    pub path: String,
    /// Last frame of the run; the animator is idle again
    pub finished: bool,
}

pub trait Animator {
    /// Begin a run at `now`. Returns `false` (and changes nothing) if a run
    /// is already in progress.
    fn start(&mut self, now: Duration) -> bool;

    fn is_running(&self) -> bool;

    /// Advance to `now` and render. When idle, returns the idle path with
    /// `finished` set.
    fn tick(&mut self, now: Duration) -> Frame;

    /// Path shown while no animation runs.
    fn idle_path(&self) -> String;
}

/// Drive `animator` to completion, yielding to `ticks` between frames.
/// Returns the number of frames rendered, 0 if the animator was busy.
pub fn play<A, T, F>(animator: &mut A, ticks: &mut T, mut on_frame: F) -> usize
where
    A: Animator + ?Sized,
    T: TickSource + ?Sized,
    F: FnMut(&Frame),
{
    if !animator.start(ticks.now()) {
        return 0;
    }

    let mut frames = 0;
    loop {
        let now = ticks.next_tick();
        let frame = animator.tick(now);
        frames += 1;
        on_frame(&frame);
        if frame.finished {
            break;
        }
    }
    frames
}
