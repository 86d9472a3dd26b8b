//! Classic Pong - two paddles, one ball, a rectangular arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rectangle motion, collisions, AI, tick)
//! - `game`: Orchestrator owning the simulation, input and frame pacing
//! - `render`: Drawing onto an abstract 2D surface
//! - `platform`: Browser/headless frame loops
//! - `config`: Data-driven entity setup and key bindings

pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod render;
pub mod sim;

pub use config::{Configuration, Controls, KeyAction};
pub use error::{ConfigError, SimError};
pub use game::Game;
pub use render::Surface;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second used to cap a single step
    pub const SIM_HZ: f32 = 30.0;
    /// Largest time step (ms) fed to a single simulation update
    pub const MAX_DELTA_MS: f32 = 1000.0 / SIM_HZ;

    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Vertical speed per percent of paddle offset on deflection
    pub const BOUNCE_FACTOR: i32 = 8;

    /// Inclusive range for the ball's vertical speed after a reset
    pub const RESET_SPEED_MIN: i32 = -200;
    pub const RESET_SPEED_MAX: i32 = 200;
}
