//! Frame time slicing
//!
//! Display frames arrive at whatever rate the host manages. Each frame's
//! elapsed time is cut into steps no longer than [`MAX_DELTA_MS`] so a slow
//! or stalled frame never feeds one huge step into the simulation.

use crate::consts::MAX_DELTA_MS;

/// Tracks wall-clock time between frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_delta: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_DELTA_MS)
    }
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            last_ms: None,
            max_delta,
        }
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }

    /// Milliseconds since the previous frame; 0 for the first frame
    pub fn elapsed(&mut self, now_ms: f64) -> f32 {
        let elapsed = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        elapsed
    }

    /// Consume a frame and return the simulation steps it covers
    pub fn advance(&mut self, now_ms: f64) -> Steps {
        let elapsed = self.elapsed(now_ms);
        Steps::new(elapsed, self.max_delta)
    }

    /// Forget the previous timestamp so the next frame counts as the first
    pub fn restart(&mut self) {
        self.last_ms = None;
    }
}

/// Full `max_delta` steps while enough time remains, then the remainder once
#[derive(Debug, Clone)]
pub struct Steps {
    remaining: f32,
    max_delta: f32,
    done: bool,
}

impl Steps {
    pub fn new(elapsed: f32, max_delta: f32) -> Self {
        Self {
            remaining: elapsed,
            max_delta,
            done: false,
        }
    }
}

impl Iterator for Steps {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.done {
            return None;
        }
        if self.remaining >= self.max_delta {
            self.remaining -= self.max_delta;
            return Some(self.max_delta);
        }
        self.done = true;
        Some(self.remaining)
    }
}
