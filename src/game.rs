//! Game orchestrator
//!
//! Owns the simulation state, the computer player and the frame clock.
//! Hosts feed it key events and frame timestamps and hand it a surface to
//! draw on; everything else happens in here.

use crate::config::{Configuration, KeyAction};
use crate::error::SimError;
use crate::render::{Surface, draw_game, draw_start_screen};
use crate::sim::{AiPolicy, Collision, ComputerAi, FrameClock, GamePhase, GameState, tick};

pub struct Game {
    config: Configuration,
    state: GameState,
    ai: ComputerAi,
    clock: FrameClock,
}

impl Game {
    pub fn new(config: Configuration, seed: u64) -> Self {
        let state = GameState::new(&config, seed);
        log::info!("Game created with seed {seed}");
        Self {
            config,
            state,
            ai: ComputerAi::default(),
            clock: FrameClock::default(),
        }
    }

    pub fn with_ai_policy(mut self, policy: AiPolicy) -> Self {
        self.ai = ComputerAi::new(policy);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Leave the start screen. Returns false if already started.
    pub fn start(&mut self) -> bool {
        if self.state.phase != GamePhase::NotStarted {
            return false;
        }
        self.state.phase = GamePhase::Running;
        self.clock.restart();
        log::info!("Game started");
        true
    }

    pub fn toggle_pause(&mut self) {
        self.state.phase = match self.state.phase {
            GamePhase::Running => {
                log::info!("Paused");
                GamePhase::Paused
            }
            GamePhase::Paused => {
                log::info!("Resumed");
                GamePhase::Running
            }
            GamePhase::NotStarted => GamePhase::NotStarted,
        };
    }

    /// Put paddles and ball back at their spawn points; the score stays
    pub fn reset(&mut self) -> Result<(), SimError> {
        self.state.reset_entities()
    }

    pub fn on_key_down(&mut self, key: &str) {
        if self.state.phase == GamePhase::NotStarted {
            if self.config.controls.is_start_key(key) {
                self.start();
            }
            return;
        }

        let Some(action) = self.config.controls.action_for(key) else {
            return;
        };
        let move_speed = self.state.left_paddle.move_speed;
        match action {
            KeyAction::MoveUp => self.state.left_paddle.rect.speed.y = -move_speed,
            KeyAction::MoveDown => self.state.left_paddle.rect.speed.y = move_speed,
            KeyAction::Pause => self.toggle_pause(),
            KeyAction::Reset => {
                if let Err(e) = self.reset() {
                    log::error!("Reset failed: {e}");
                }
            }
        }
    }

    pub fn on_key_up(&mut self, key: &str) {
        if self.state.phase == GamePhase::NotStarted {
            return;
        }
        if let Some(KeyAction::MoveUp | KeyAction::MoveDown) =
            self.config.controls.action_for(key)
        {
            self.state.left_paddle.rect.speed.y = 0.0;
        }
    }

    /// One simulation update of `time_diff` milliseconds
    pub fn update(&mut self, time_diff: f32) -> Result<Collision, SimError> {
        tick(&mut self.state, &self.ai, time_diff)
    }

    /// Advance the simulation for a display frame at `now_ms`.
    ///
    /// Returns how many updates ran. Nothing runs before the game starts or
    /// while paused, but the clock keeps up so resuming does not replay the
    /// paused time. A failed update ends the frame's stepping.
    pub fn frame(&mut self, now_ms: f64) -> usize {
        match self.state.phase {
            GamePhase::NotStarted => 0,
            GamePhase::Paused => {
                self.clock.elapsed(now_ms);
                0
            }
            GamePhase::Running => {
                let mut updates = 0;
                for step in self.clock.advance(now_ms) {
                    if let Err(e) = self.update(step) {
                        log::error!("Tick {} halted: {e}", self.state.time_ticks);
                        break;
                    }
                    updates += 1;
                }
                updates
            }
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self.state.phase {
            GamePhase::NotStarted => {
                draw_start_screen(surface, &self.config.controls, &self.config.background)
            }
            GamePhase::Running | GamePhase::Paused => draw_game(surface, &self.state, &self.config),
        }
    }

    /// Simulate then draw; what a host calls once per display refresh
    pub fn run_frame<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> usize {
        let updates = self.frame(now_ms);
        self.draw(surface);
        updates
    }
}
