//! Axis-aligned moving rectangle shared by the ball and the paddles
//!
//! Positions are the top-left corner in pixels. Speeds are signed pixels per
//! second. Motion is integrated in whole pixels: each axis accumulates elapsed
//! milliseconds until at least one pixel of travel is due, then moves by the
//! truncated pixel count and starts over. Slow speeds therefore move exactly
//! right on average no matter how the frame time is sliced.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The fixed playable area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_size(size: Vec2) -> Self {
        Self::new(size.x, size.y)
    }
}

/// A rectangle that moves inside an arena and never leaves it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingRect {
    pos: Vec2,
    size: Vec2,
    /// Pixels per second on each axis
    pub speed: Vec2,
    /// Milliseconds since the last whole-pixel move on each axis
    accum: Vec2,
    arena: Arena,
}

impl MovingRect {
    /// Create a rectangle; the position is clamped into the arena
    pub fn new(arena: Arena, size: Vec2, pos: Vec2, speed: Vec2) -> Self {
        let mut rect = Self {
            pos: Vec2::ZERO,
            size,
            speed,
            accum: Vec2::ZERO,
            arena,
        };
        rect.set_position(pos.x, pos.y);
        rect
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// Time accumulated per axis (ms)
    #[inline]
    pub fn accum(&self) -> Vec2 {
        self.accum
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Place the top-left corner, clamped so the rectangle stays in the arena
    pub fn set_position(&mut self, x: f32, y: f32) {
        let max_x = self.arena.width - self.size.x;
        let max_y = self.arena.height - self.size.y;
        // max(0) first keeps an oversized rectangle pinned at the origin
        self.pos = Vec2::new(x.min(max_x).max(0.0), y.min(max_y).max(0.0));
    }

    /// Move by a pixel offset (positive = right/down)
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.set_position(self.pos.x + dx, self.pos.y + dy);
    }

    pub fn set_speed(&mut self, x: f32, y: f32) {
        self.speed = Vec2::new(x, y);
    }

    /// Touching edges count as overlap
    pub fn is_overlapping(&self, other: &MovingRect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }

    /// Advance by `time_diff` milliseconds
    pub fn update(&mut self, time_diff: f32) {
        let (dx, accum_x) = step_axis(self.speed.x, self.accum.x, time_diff);
        let (dy, accum_y) = step_axis(self.speed.y, self.accum.y, time_diff);
        self.accum = Vec2::new(accum_x, accum_y);
        if dx != 0.0 || dy != 0.0 {
            self.move_by(dx, dy);
        }
    }
}

/// Integrate one axis: returns (whole pixels to move, new accumulator)
///
/// A zero speed clears the accumulator rather than carrying it through the
/// stationary tick, so time banked before a stop is never released after a
/// restart.
fn step_axis(speed: f32, accum: f32, time_diff: f32) -> (f32, f32) {
    if speed == 0.0 {
        // Stationary axes do not bank time
        return (0.0, 0.0);
    }
    let accum = accum + time_diff;
    let ms_per_pixel = 1000.0 / speed;
    if accum >= ms_per_pixel.abs() {
        ((accum / ms_per_pixel).trunc(), 0.0)
    } else {
        (0.0, accum)
    }
}
