//! Frame scheduling.

use std::thread;
use std::time::{Duration, Instant};

/// Single-threaded source of animation frames.
pub trait TickSource {
    /// Elapsed time since the source was created.
    fn now(&self) -> Duration;

    /// Yield until the next frame and return the new elapsed time.
    fn next_tick(&mut self) -> Duration;
}

/// Advances by a constant step without waiting. Used for offline rendering
/// and tests.
#[derive(Debug, Clone)]
pub struct FixedStepTicks {
    step: Duration,
    now: Duration,
}

impl FixedStepTicks {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            now: Duration::ZERO,
        }
    }

    pub fn from_fps(fps: u32) -> Self {
        Self::new(frame_interval(fps))
    }

    /// Jump the clock forward without producing a frame.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl TickSource for FixedStepTicks {
    fn now(&self) -> Duration {
        self.now
    }

    fn next_tick(&mut self) -> Duration {
        self.now += self.step;
        self.now
    }
}

/// Wall-clock frames: sleeps until the next frame boundary.
#[derive(Debug, Clone)]
pub struct RealtimeTicks {
    origin: Instant,
    interval: Duration,
    next: Instant,
}

impl RealtimeTicks {
    pub fn from_fps(fps: u32) -> Self {
        let origin = Instant::now();
        let interval = frame_interval(fps);
        Self {
            origin,
            interval,
            next: origin + interval,
        }
    }
}

impl TickSource for RealtimeTicks {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn next_tick(&mut self) -> Duration {
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
        }
        // Late frames are not replayed.
        self.next = Instant::now().max(self.next) + self.interval;
        self.origin.elapsed()
    }
}

/// Frame interval for `fps` (clamped to at least one frame per second).
pub fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(fps.max(1)))
}
