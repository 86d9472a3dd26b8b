//! Computer paddle steering
//!
//! Re-evaluated every tick from the current ball and paddle positions; keeps
//! no memory between ticks.

use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AiPolicy {
    /// Chase the ball, slowing down as it lines up with the paddle center
    #[default]
    FollowClosely,
    /// Snap the paddle to the ball every tick (unbeatable)
    FollowPerfectly,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ComputerAi {
    pub policy: AiPolicy,
}

impl ComputerAi {
    pub fn new(policy: AiPolicy) -> Self {
        Self { policy }
    }

    pub fn update(&self, paddle: &mut Paddle, ball: &Ball) {
        match self.policy {
            AiPolicy::FollowClosely => follow_closely(paddle, ball),
            AiPolicy::FollowPerfectly => follow_perfectly(paddle, ball),
        }
    }
}

/// Vertical ball offset relative to the paddle center, in half-heights.
///
/// -1.0 is the top edge, 1.0 the bottom edge; beyond that the ball is
/// above or below the paddle entirely.
pub fn vertical_offset(paddle: &Paddle, ball: &Ball) -> f32 {
    (ball.rect.center_y() - paddle.rect.center_y()) / (paddle.rect.height() / 2.0)
}

/// Full speed while the ball is off the paddle, proportional once it is
/// within reach. The proportional band stops the paddle jittering around
/// the ball.
pub fn follow_closely(paddle: &mut Paddle, ball: &Ball) {
    let offset = vertical_offset(paddle, ball);
    let speed = if offset >= 1.0 {
        paddle.move_speed
    } else if offset <= -1.0 {
        -paddle.move_speed
    } else {
        paddle.move_speed * offset
    };
    paddle.rect.set_speed(0.0, speed);
}

pub fn follow_perfectly(paddle: &mut Paddle, ball: &Ball) {
    let x = paddle.rect.left();
    paddle
        .rect
        .set_position(x, ball.rect.top() - paddle.rect.height() / 2.0);
}
