//! Game configuration
//!
//! Entity dimensions, spawn positions, speeds, colors and key bindings.
//! Consumed read-only when a game is constructed. Every field is optional in
//! JSON; missing values fall back to the classic defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::error::ConfigError;

/// Ball setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub size: Vec2,
    /// Spawn position (top-left corner)
    pub pos: Vec2,
    /// Spawn speed in pixels per second
    pub speed: Vec2,
    pub color: String,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(10.0, 10.0),
            pos: Vec2::new(400.0, 300.0),
            speed: Vec2::new(400.0, 0.0),
            color: "#FFF".to_string(),
        }
    }
}

/// Paddle setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub size: Vec2,
    /// Spawn position (top-left corner)
    pub pos: Vec2,
    /// Vertical speed (pixels per second) used by keys and by the AI
    pub move_speed: f32,
    pub color: String,
}

impl PaddleConfig {
    pub fn left() -> Self {
        Self {
            size: Vec2::new(15.0, 100.0),
            pos: Vec2::new(10.0, 250.0),
            move_speed: 500.0,
            color: "#FFF".to_string(),
        }
    }

    pub fn right() -> Self {
        Self {
            pos: Vec2::new(775.0, 250.0),
            ..Self::left()
        }
    }
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self::left()
    }
}

/// Scoreboard text placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    pub font_face: String,
    pub font_size: String,
    pub font_color: String,
    pub left_pos: Vec2,
    pub right_pos: Vec2,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            font_face: "Arial".to_string(),
            font_size: "20px".to_string(),
            font_color: "#FFF".to_string(),
            left_pos: Vec2::new(200.0, 30.0),
            right_pos: Vec2::new(600.0, 30.0),
        }
    }
}

impl ScoreboardConfig {
    /// CSS-style font string, e.g. `20px Arial`
    pub fn font(&self) -> String {
        format!("{} {}", self.font_size, self.font_face)
    }
}

/// What a bound key does once the game is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveUp,
    MoveDown,
    Pause,
    Reset,
}

/// Keyboard bindings, matched case-insensitively against logical key names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub up_key: String,
    pub down_key: String,
    pub pause_key: String,
    pub reset_key: String,
    /// Only honoured on the start screen
    pub start_key: String,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            up_key: "w".to_string(),
            down_key: "s".to_string(),
            pause_key: "p".to_string(),
            reset_key: "r".to_string(),
            start_key: "p".to_string(),
        }
    }
}

impl Controls {
    /// Map a key name to its in-game action
    pub fn action_for(&self, key: &str) -> Option<KeyAction> {
        if key.eq_ignore_ascii_case(&self.up_key) {
            Some(KeyAction::MoveUp)
        } else if key.eq_ignore_ascii_case(&self.down_key) {
            Some(KeyAction::MoveDown)
        } else if key.eq_ignore_ascii_case(&self.pause_key) {
            Some(KeyAction::Pause)
        } else if key.eq_ignore_ascii_case(&self.reset_key) {
            Some(KeyAction::Reset)
        } else {
            None
        }
    }

    pub fn is_start_key(&self, key: &str) -> bool {
        key.eq_ignore_ascii_case(&self.start_key)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let bound = [
            ("up", &self.up_key),
            ("down", &self.down_key),
            ("pause", &self.pause_key),
            ("reset", &self.reset_key),
            ("start", &self.start_key),
        ];
        if let Some((name, _)) = bound.iter().find(|(_, key)| key.is_empty()) {
            return Err(ConfigError::Invalid(format!("{name} key is not bound")));
        }
        // Start shares a key with pause by default; the in-game actions must not overlap
        for (i, (a_name, a)) in bound[..4].iter().enumerate() {
            for (b_name, b) in &bound[i + 1..4] {
                if a.eq_ignore_ascii_case(b) {
                    return Err(ConfigError::Invalid(format!(
                        "{a_name} and {b_name} are both bound to '{a}'"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Arena width and height in pixels
    pub arena: Vec2,
    pub background: String,
    pub ball: BallConfig,
    pub left_paddle: PaddleConfig,
    pub right_paddle: PaddleConfig,
    pub scoreboard: ScoreboardConfig,
    pub controls: Controls,
    /// RNG seed; the host picks one from the clock when absent
    pub seed: Option<u64>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            arena: Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
            background: "#000".to_string(),
            ball: BallConfig::default(),
            left_paddle: PaddleConfig::left(),
            right_paddle: PaddleConfig::right(),
            scoreboard: ScoreboardConfig::default(),
            controls: Controls::default(),
            seed: None,
        }
    }
}

impl Configuration {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject setups the simulation cannot represent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena.x <= 0.0 || self.arena.y <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "arena must be positive, got {}x{}",
                self.arena.x, self.arena.y
            )));
        }

        let entities = [
            ("ball", self.ball.size),
            ("left paddle", self.left_paddle.size),
            ("right paddle", self.right_paddle.size),
        ];
        for (name, size) in entities {
            if size.x <= 0.0 || size.y <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} size must be positive, got {}x{}",
                    size.x, size.y
                )));
            }
            if size.x > self.arena.x || size.y > self.arena.y {
                return Err(ConfigError::Invalid(format!("{name} does not fit in the arena")));
            }
        }

        for (name, paddle) in [("left", &self.left_paddle), ("right", &self.right_paddle)] {
            if !paddle.move_speed.is_finite() || paddle.move_speed < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} paddle move speed must be a non-negative number"
                )));
            }
        }

        self.controls.validate()
    }
}
