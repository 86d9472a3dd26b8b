//! One simulation update
//!
//! Detect, respond, steer the computer paddle, then integrate motion.

use super::ai::ComputerAi;
use super::collision::{Collision, CollisionDetector};
use super::state::GameState;
use crate::error::SimError;

/// Advance the game state by `time_diff` milliseconds.
///
/// Returns the collision that was handled. A [`SimError`] aborts the tick
/// before any entity has moved.
pub fn tick(state: &mut GameState, ai: &ComputerAi, time_diff: f32) -> Result<Collision, SimError> {
    let collision = CollisionDetector::new(
        state.arena,
        &state.left_paddle,
        &state.right_paddle,
        &state.ball,
    )
    .detect();

    match collision {
        Collision::LeftPaddle => state.ball.deflect_off_paddle(&state.left_paddle)?,
        Collision::RightPaddle => state.ball.deflect_off_paddle(&state.right_paddle)?,
        Collision::TopEdge | Collision::BottomEdge => {
            // Edges never trap the ball the way a paddle box can
            state.ball.rect.speed.y = -state.ball.rect.speed.y;
        }
        Collision::LeftEdge => {
            state.score.right += 1;
            log::debug!("Right scores: {} - {}", state.score.left, state.score.right);
            state.reset_entities()?;
        }
        Collision::RightEdge => {
            state.score.left += 1;
            log::debug!("Left scores: {} - {}", state.score.left, state.score.right);
            state.reset_entities()?;
        }
        Collision::None => {}
    }

    ai.update(&mut state.right_paddle, &state.ball);

    state.left_paddle.rect.update(time_diff);
    state.right_paddle.rect.update(time_diff);
    state.ball.rect.update(time_diff);
    state.time_ticks += 1;

    Ok(collision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::consts::MAX_DELTA_MS;
    use glam::Vec2;

    fn new_state() -> GameState {
        GameState::new(&Configuration::default(), 12345)
    }

    #[test]
    fn test_ball_at_left_edge_scores_for_right() {
        let mut state = new_state();
        state.ball.rect.set_position(0.0, 100.0);
        state.ball.rect.set_speed(-400.0, 0.0);
        state.left_paddle.rect.set_position(10.0, 400.0);

        let collision = tick(&mut state, &ComputerAi::default(), 0.0).unwrap();

        assert_eq!(collision, Collision::LeftEdge);
        assert_eq!(state.score.right, 1);
        assert_eq!(state.score.left, 0);
        assert_eq!(state.ball.rect.pos(), Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.rect.speed.x, 400.0);
        assert_eq!(state.left_paddle.rect.pos(), Vec2::new(10.0, 250.0));
    }

    #[test]
    fn test_ball_at_right_edge_scores_for_left() {
        let mut state = new_state();
        state.ball.rect.set_position(790.0, 50.0);

        let collision = tick(&mut state, &ComputerAi::default(), 0.0).unwrap();

        assert_eq!(collision, Collision::RightEdge);
        assert_eq!(state.score.left, 1);
        assert_eq!(state.ball.rect.pos(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_top_edge_reverses_vertical_speed() {
        let mut state = new_state();
        state.ball.rect.set_position(400.0, 0.0);
        state.ball.rect.set_speed(400.0, -150.0);

        assert_eq!(
            tick(&mut state, &ComputerAi::default(), 0.0).unwrap(),
            Collision::TopEdge
        );
        assert_eq!(state.ball.rect.speed, Vec2::new(400.0, 150.0));
    }

    #[test]
    fn test_bottom_edge_reverses_vertical_speed() {
        let mut state = new_state();
        state.ball.rect.set_position(400.0, 590.0);
        state.ball.rect.set_speed(400.0, 150.0);

        assert_eq!(
            tick(&mut state, &ComputerAi::default(), 0.0).unwrap(),
            Collision::BottomEdge
        );
        assert_eq!(state.ball.rect.speed, Vec2::new(400.0, -150.0));
        assert_eq!((state.score.left, state.score.right), (0, 0));
    }

    #[test]
    fn test_left_paddle_deflects_and_moves_away() {
        let mut state = new_state();
        // Overlapping the left paddle's right face, level with its bottom edge
        state.ball.rect.set_position(24.0, 345.0);
        state.ball.rect.set_speed(-400.0, 0.0);

        let collision = tick(&mut state, &ComputerAi::default(), MAX_DELTA_MS).unwrap();

        assert_eq!(collision, Collision::LeftPaddle);
        assert_eq!(state.ball.rect.speed, Vec2::new(400.0, 800.0));
        // Placed at 26, then 13 pixels right and 26 down
        assert_eq!(state.ball.rect.pos(), Vec2::new(39.0, 371.0));
        assert_eq!(state.left_paddle.rect.pos(), Vec2::new(10.0, 250.0));
    }

    #[test]
    fn test_right_paddle_deflects_and_moves_away() {
        let mut state = new_state();
        state.ball.rect.set_position(766.0, 345.0);
        state.ball.rect.set_speed(400.0, 0.0);

        let collision = tick(&mut state, &ComputerAi::default(), MAX_DELTA_MS).unwrap();

        assert_eq!(collision, Collision::RightPaddle);
        assert_eq!(state.ball.rect.speed.x, -400.0);
        assert_eq!(state.ball.rect.speed.y, 800.0);
        // Placed at 764, then 13 pixels of travel to the left
        assert_eq!(state.ball.rect.left(), 751.0);
    }

    #[test]
    fn test_zero_speed_deflection_halts_tick() {
        let mut state = new_state();
        state.ball.rect.set_position(25.0, 300.0);
        state.ball.rect.set_speed(0.0, 100.0);
        state.left_paddle.rect.set_speed(0.0, 500.0);
        let before = state.clone();

        let result = tick(&mut state, &ComputerAi::default(), MAX_DELTA_MS);

        assert_eq!(result, Err(SimError::ZeroHorizontalSpeed));
        assert_eq!(state.ball.rect, before.ball.rect);
        assert_eq!(state.left_paddle.rect, before.left_paddle.rect);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_ai_steers_right_paddle() {
        let mut state = new_state();
        state.ball.rect.set_position(400.0, 500.0);

        tick(&mut state, &ComputerAi::default(), 0.0).unwrap();

        assert_eq!(state.right_paddle.rect.speed.y, 500.0);
        assert_eq!(state.left_paddle.rect.speed.y, 0.0);
    }

    #[test]
    fn test_determinism() {
        // Same seed, same ticks, same outcome across resets
        let mut state1 = new_state();
        let mut state2 = new_state();
        let ai = ComputerAi::default();
        for _ in 0..3000 {
            tick(&mut state1, &ai, MAX_DELTA_MS).unwrap();
            tick(&mut state2, &ai, MAX_DELTA_MS).unwrap();
        }
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.ball.rect, state2.ball.rect);
        assert_eq!(state1.time_ticks, 3000);
    }
}
