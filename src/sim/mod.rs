//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the `time_diff` passed to a tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod frame;
pub mod rect;
pub mod state;
pub mod tick;

pub use ai::{AiPolicy, ComputerAi, follow_closely, follow_perfectly};
pub use collision::{Collision, CollisionDetector};
pub use frame::{FrameClock, Steps};
pub use rect::{Arena, MovingRect};
pub use state::{Ball, GamePhase, GameState, Paddle, Score, rand_int};
pub use tick::tick;
