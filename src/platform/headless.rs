//! Headless frame loop
//!
//! Drives a [`Game`] from a virtual display clock instead of a real one.
//! Used by the native binary and by tests.

use super::LoopHandle;
use crate::game::Game;
use crate::render::Surface;

#[derive(Debug)]
pub struct HeadlessLoop {
    frame_ms: f64,
    now_ms: f64,
    handle: LoopHandle,
}

impl Default for HeadlessLoop {
    /// A 60 Hz display
    fn default() -> Self {
        Self::new(60.0)
    }
}

impl HeadlessLoop {
    pub fn new(refresh_hz: f64) -> Self {
        Self {
            frame_ms: 1000.0 / refresh_hz.max(1.0),
            now_ms: 0.0,
            handle: LoopHandle::new(),
        }
    }

    /// Handle that stops this loop
    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    /// Virtual time of the last frame (ms)
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Run up to `max_frames` frames, calling `on_frame` after each one.
    ///
    /// Stops early once the handle is stopped, from `on_frame` or anywhere
    /// else. Returns the number of frames run.
    pub fn run<S, F>(
        &mut self,
        game: &mut Game,
        surface: &mut S,
        max_frames: u64,
        mut on_frame: F,
    ) -> u64
    where
        S: Surface + ?Sized,
        F: FnMut(&Game, &LoopHandle),
    {
        let mut frames = 0;
        while frames < max_frames && self.handle.is_running() {
            game.run_frame(self.now_ms, surface);
            frames += 1;
            on_frame(game, &self.handle);
            self.now_ms += self.frame_ms;
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::render::RecordingSurface;

    #[test]
    fn test_default_refresh_is_60hz() {
        let mut game = Game::new(Configuration::default(), 3);
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut runner = HeadlessLoop::default();

        runner.run(&mut game, &mut surface, 3, |_, _| {});

        assert!((runner.now_ms() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_runs_frame_budget() {
        let mut game = Game::new(Configuration::default(), 3);
        game.start();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut runner = HeadlessLoop::default();

        let frames = runner.run(&mut game, &mut surface, 120, |_, _| {});

        assert_eq!(frames, 120);
        assert_eq!(surface.frames, 120);
        assert!(game.state().time_ticks >= 120);
    }

    #[test]
    fn test_stop_from_callback_ends_loop() {
        let mut game = Game::new(Configuration::default(), 3);
        game.start();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut runner = HeadlessLoop::default();

        let frames = runner.run(&mut game, &mut surface, 1000, |game, handle| {
            if game.state().time_ticks >= 10 {
                handle.stop();
            }
        });

        assert_eq!(frames, 10);
        assert!(!runner.handle().is_running());
    }
}
