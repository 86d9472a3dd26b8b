//! Collision classification
//!
//! One query per tick, one outcome per query. Arena edges are checked before
//! paddles: a ball that has left the field scores even if its box still
//! touches a paddle.

use super::rect::Arena;
use super::state::{Ball, Paddle};

/// What the ball is touching right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    None,
    LeftEdge,
    RightEdge,
    TopEdge,
    BottomEdge,
    LeftPaddle,
    RightPaddle,
}

/// Stateless view over the arena and the three moving entities
pub struct CollisionDetector<'a> {
    arena: Arena,
    left_paddle: &'a Paddle,
    right_paddle: &'a Paddle,
    ball: &'a Ball,
}

impl<'a> CollisionDetector<'a> {
    pub fn new(
        arena: Arena,
        left_paddle: &'a Paddle,
        right_paddle: &'a Paddle,
        ball: &'a Ball,
    ) -> Self {
        Self {
            arena,
            left_paddle,
            right_paddle,
            ball,
        }
    }

    pub fn is_ball_at_left_edge(&self) -> bool {
        self.ball.rect.left() <= 0.0
    }

    pub fn is_ball_at_right_edge(&self) -> bool {
        self.ball.rect.right() >= self.arena.width
    }

    pub fn is_ball_at_top_edge(&self) -> bool {
        self.ball.rect.top() <= 0.0
    }

    pub fn is_ball_at_bottom_edge(&self) -> bool {
        self.ball.rect.bottom() >= self.arena.height
    }

    /// First match wins: left, right, top, bottom edge, then left, right paddle
    pub fn detect(&self) -> Collision {
        let collision = if self.is_ball_at_left_edge() {
            Collision::LeftEdge
        } else if self.is_ball_at_right_edge() {
            Collision::RightEdge
        } else if self.is_ball_at_top_edge() {
            Collision::TopEdge
        } else if self.is_ball_at_bottom_edge() {
            Collision::BottomEdge
        } else if self.ball.rect.is_overlapping(&self.left_paddle.rect) {
            Collision::LeftPaddle
        } else if self.ball.rect.is_overlapping(&self.right_paddle.rect) {
            Collision::RightPaddle
        } else {
            Collision::None
        };
        if collision != Collision::None {
            log::trace!("Collision: {:?}", collision);
        }
        collision
    }
}
