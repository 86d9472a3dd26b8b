//! Game state and core simulation types
//!
//! The ball and both paddles wrap a [`MovingRect`] together with the values
//! needed to put them back where they started.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::{Arena, MovingRect};
use crate::config::{BallConfig, Configuration, PaddleConfig};
use crate::consts::*;
use crate::error::SimError;

/// Orchestrator-level phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen shown, waiting for the start key
    NotStarted,
    /// Simulation advancing every frame
    Running,
    /// Simulation frozen, rendering continues
    Paused,
}

/// Uniform integer in `[min, max]`
pub fn rand_int<R: Rng>(rng: &mut R, min: i32, max: i32) -> Result<i32, SimError> {
    if min > max {
        return Err(SimError::InvertedRange { min, max });
    }
    Ok(rng.random_range(min..=max))
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: MovingRect,
    pub color: String,
    origin: Vec2,
    origin_speed: Vec2,
}

impl Ball {
    pub fn new(arena: Arena, config: &BallConfig) -> Self {
        Self {
            rect: MovingRect::new(arena, config.size, config.pos, config.speed),
            color: config.color.clone(),
            origin: config.pos,
            origin_speed: config.speed,
        }
    }

    /// Back to the spawn point with the spawn horizontal speed and a fresh
    /// random vertical speed
    pub fn reset<R: Rng>(&mut self, rng: &mut R) -> Result<(), SimError> {
        let speed_y = rand_int(rng, RESET_SPEED_MIN, RESET_SPEED_MAX)?;
        self.rect.set_position(self.origin.x, self.origin.y);
        self.rect.set_speed(self.origin_speed.x, speed_y as f32);
        Ok(())
    }

    /// Where the ball sits along the paddle, as a signed percentage.
    ///
    /// 0 is dead center, -100 the top edge, +100 the bottom edge. The ball may
    /// already be past an edge when the hit is detected, so values beyond
    /// +-100 are possible.
    pub fn calc_paddle_offset(&self, paddle: &Paddle) -> i32 {
        let max_distance = paddle.rect.height() / 2.0;
        let distance = self.rect.center_y() - paddle.rect.center_y();
        // JS-style round: halves go toward +infinity
        (distance / max_distance * 100.0 + 0.5).floor() as i32
    }

    /// Bounce off `paddle`, steering by where it was hit.
    ///
    /// The ball is first moved one pixel clear of the paddle on the side it
    /// came from, otherwise the next tick would see the same overlap again.
    pub fn deflect_off_paddle(&mut self, paddle: &Paddle) -> Result<(), SimError> {
        let speed_x = self.rect.speed.x;
        let x = if speed_x < 0.0 {
            paddle.rect.right() + 1.0
        } else if speed_x > 0.0 {
            paddle.rect.left() - self.rect.width() - 1.0
        } else {
            return Err(SimError::ZeroHorizontalSpeed);
        };

        let offset = self.calc_paddle_offset(paddle);
        let bounce_speed = offset * BOUNCE_FACTOR;
        self.rect.set_position(x, self.rect.top());
        self.rect.set_speed(-speed_x, bounce_speed as f32);
        log::debug!("Deflected at offset {offset}%, vertical speed {bounce_speed}");
        Ok(())
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn origin_speed(&self) -> Vec2 {
        self.origin_speed
    }
}

/// A paddle, steered by a player or the computer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: MovingRect,
    pub color: String,
    /// Full vertical speed in pixels per second
    pub move_speed: f32,
    origin: Vec2,
}

impl Paddle {
    pub fn new(arena: Arena, config: &PaddleConfig) -> Self {
        Self {
            rect: MovingRect::new(arena, config.size, config.pos, Vec2::ZERO),
            color: config.color.clone(),
            move_speed: config.move_speed,
            origin: config.pos,
        }
    }

    /// Back to the spawn point, stopped
    pub fn reset(&mut self) {
        self.rect.set_position(self.origin.x, self.origin.y);
        self.rect.set_speed(0.0, 0.0);
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }
}

/// Points for each side; only ever incremented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

/// Everything the simulation mutates
#[derive(Debug, Clone)]
pub struct GameState {
    pub arena: Arena,
    pub phase: GamePhase,
    pub ball: Ball,
    /// Human-controlled
    pub left_paddle: Paddle,
    /// Computer-controlled
    pub right_paddle: Paddle,
    pub score: Score,
    /// Simulation updates applied so far
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    pub fn new(config: &Configuration, seed: u64) -> Self {
        let arena = Arena::from_size(config.arena);
        Self {
            arena,
            phase: GamePhase::NotStarted,
            ball: Ball::new(arena, &config.ball),
            left_paddle: Paddle::new(arena, &config.left_paddle),
            right_paddle: Paddle::new(arena, &config.right_paddle),
            score: Score::default(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Put both paddles and the ball back at their spawn points
    pub fn reset_entities(&mut self) -> Result<(), SimError> {
        self.left_paddle.reset();
        self.right_paddle.reset();
        self.ball.reset(&mut self.rng)?;
        log::debug!(
            "Entities reset, ball vertical speed {}",
            self.ball.rect.speed.y
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(800.0, 600.0)
    }

    fn paddle_at(y: f32) -> Paddle {
        let config = PaddleConfig {
            pos: Vec2::new(775.0, y),
            ..PaddleConfig::right()
        };
        Paddle::new(arena(), &config)
    }

    fn ball_with_center_y(center_y: f32) -> Ball {
        let config = BallConfig {
            pos: Vec2::new(760.0, center_y - 5.0),
            ..BallConfig::default()
        };
        Ball::new(arena(), &config)
    }

    #[test]
    fn test_rand_int_rejects_inverted_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(
            rand_int(&mut rng, 5, -5),
            Err(SimError::InvertedRange { min: 5, max: -5 })
        );
        assert_eq!(rand_int(&mut rng, 3, 3), Ok(3));
    }

    #[test]
    fn test_ball_reset_restores_origin() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut ball = Ball::new(arena(), &BallConfig::default());
        ball.rect.set_position(12.0, 34.0);
        ball.rect.set_speed(-999.0, 999.0);

        ball.reset(&mut rng).unwrap();
        let first = (ball.rect.pos(), ball.rect.speed.x);
        ball.reset(&mut rng).unwrap();

        assert_eq!(first, (Vec2::new(400.0, 300.0), 400.0));
        assert_eq!((ball.rect.pos(), ball.rect.speed.x), first);
        assert!((-200.0..=200.0).contains(&ball.rect.speed.y));
    }

    #[test]
    fn test_ball_reset_draws_whole_vertical_speeds() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut ball = Ball::new(arena(), &BallConfig::default());
        for _ in 0..200 {
            ball.reset(&mut rng).unwrap();
            let vy = ball.rect.speed.y;
            assert_eq!(vy.fract(), 0.0);
            assert!((-200.0..=200.0).contains(&vy));
        }
    }

    #[test]
    fn test_paddle_offset_center_and_edges() {
        let paddle = paddle_at(250.0);
        assert_eq!(ball_with_center_y(300.0).calc_paddle_offset(&paddle), 0);
        assert_eq!(ball_with_center_y(350.0).calc_paddle_offset(&paddle), 100);
        assert_eq!(ball_with_center_y(250.0).calc_paddle_offset(&paddle), -100);
        assert_eq!(ball_with_center_y(325.0).calc_paddle_offset(&paddle), 50);
    }

    #[test]
    fn test_paddle_offset_past_edge_exceeds_hundred() {
        let paddle = paddle_at(250.0);
        assert_eq!(ball_with_center_y(355.0).calc_paddle_offset(&paddle), 110);
    }

    #[test]
    fn test_deflect_moving_right_lands_left_of_paddle() {
        let paddle = paddle_at(250.0);
        let mut ball = ball_with_center_y(350.0);
        ball.rect.set_position(770.0, 345.0);
        ball.rect.set_speed(400.0, 0.0);

        ball.deflect_off_paddle(&paddle).unwrap();

        assert_eq!(ball.rect.pos().x, 775.0 - 10.0 - 1.0);
        assert_eq!(ball.rect.speed, Vec2::new(-400.0, 800.0));
        assert!(!ball.rect.is_overlapping(&paddle.rect));
    }

    #[test]
    fn test_deflect_moving_left_lands_right_of_paddle() {
        let config = PaddleConfig::left();
        let paddle = Paddle::new(arena(), &config);
        let mut ball = Ball::new(arena(), &BallConfig::default());
        ball.rect.set_position(20.0, 270.0);
        ball.rect.set_speed(-400.0, 100.0);

        ball.deflect_off_paddle(&paddle).unwrap();

        assert_eq!(ball.rect.pos().x, 10.0 + 15.0 + 1.0);
        assert_eq!(ball.rect.speed.x, 400.0);
        // center 275 vs 300 on a 50px half-height -> -50%
        assert_eq!(ball.rect.speed.y, -400.0);
    }

    #[test]
    fn test_deflect_with_zero_speed_is_fault_and_leaves_ball() {
        let paddle = paddle_at(250.0);
        let mut ball = ball_with_center_y(300.0);
        ball.rect.set_speed(0.0, 50.0);
        let before = ball.rect.clone();

        assert_eq!(
            ball.deflect_off_paddle(&paddle),
            Err(SimError::ZeroHorizontalSpeed)
        );
        assert_eq!(ball.rect, before);
    }

    #[test]
    fn test_paddle_reset_stops_and_returns() {
        let mut paddle = paddle_at(250.0);
        paddle.rect.set_position(775.0, 10.0);
        paddle.rect.set_speed(0.0, -500.0);
        paddle.reset();
        assert_eq!(paddle.rect.pos(), Vec2::new(775.0, 250.0));
        assert_eq!(paddle.rect.speed, Vec2::ZERO);
    }

    #[test]
    fn test_new_state_waits_on_start_screen() {
        let state = GameState::new(&Configuration::default(), 1);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.ball.rect.speed, Vec2::new(400.0, 0.0));
    }
}
