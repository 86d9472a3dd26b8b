//! Drawing onto a 2D surface
//!
//! The game only ever fills rectangles and text. Hosts implement [`Surface`]
//! over whatever they draw with; rendering reads game state and never
//! changes it.

use crate::config::{Configuration, Controls, ScoreboardConfig};
use crate::sim::{GameState, MovingRect, Score};

/// Minimal drawing target
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Wipe the whole surface to `color`
    fn clear(&mut self, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    /// `font` is CSS-style, e.g. `20px Arial`; (x, y) is the text baseline start
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
}

const TITLE_FONT: &str = "40px Arial";
const CREDIT_FONT: &str = "16px Arial";
const LEGEND_FONT: &str = "20px Arial";
const TEXT_COLOR: &str = "#FFF";

fn fill_moving_rect<S: Surface + ?Sized>(surface: &mut S, rect: &MovingRect, color: &str) {
    let pos = rect.pos();
    surface.fill_rect(pos.x, pos.y, rect.width(), rect.height(), color);
}

pub fn draw_scoreboard<S: Surface + ?Sized>(
    surface: &mut S,
    score: &Score,
    config: &ScoreboardConfig,
) {
    let font = config.font();
    surface.fill_text(
        &score.left.to_string(),
        config.left_pos.x,
        config.left_pos.y,
        &font,
        &config.font_color,
    );
    surface.fill_text(
        &score.right.to_string(),
        config.right_pos.x,
        config.right_pos.y,
        &font,
        &config.font_color,
    );
}

/// One gameplay frame: background, scores, paddles, ball
pub fn draw_game<S: Surface + ?Sized>(surface: &mut S, state: &GameState, config: &Configuration) {
    surface.clear(&config.background);
    draw_scoreboard(surface, &state.score, &config.scoreboard);
    fill_moving_rect(surface, &state.left_paddle.rect, &state.left_paddle.color);
    fill_moving_rect(surface, &state.right_paddle.rect, &state.right_paddle.color);
    fill_moving_rect(surface, &state.ball.rect, &state.ball.color);
}

/// Title, credits, key legend and the start prompt
pub fn draw_start_screen<S: Surface + ?Sized>(
    surface: &mut S,
    controls: &Controls,
    background: &str,
) {
    surface.clear(background);
    surface.fill_text("HTML5  Pong", 277.0, 100.0, TITLE_FONT, TEXT_COLOR);
    surface.fill_text("Developed By: Nick Manley", 300.0, 140.0, CREDIT_FONT, TEXT_COLOR);

    let legend = [
        (&controls.up_key, "Move paddle up"),
        (&controls.down_key, "Move paddle down"),
        (&controls.pause_key, "Pause/Resume game"),
    ];
    for (row, (key, label)) in legend.iter().enumerate() {
        let y = 220.0 + row as f32 * 30.0;
        surface.fill_text(key, 290.0, y, LEGEND_FONT, TEXT_COLOR);
        surface.fill_text(label, 350.0, y, LEGEND_FONT, TEXT_COLOR);
    }

    let prompt = format!("Press '{}' to Play", controls.start_key);
    surface.fill_text(&prompt, 258.0, 350.0, TITLE_FONT, TEXT_COLOR);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { color: String },
    Rect { x: f32, y: f32, w: f32, h: f32, color: String },
    Text { text: String, x: f32, y: f32, font: String, color: String },
}

/// Surface that keeps the calls of the latest frame; used headless and in tests
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    pub commands: Vec<DrawCommand>,
    /// Frames started (one per `clear`)
    pub frames: u64,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            frames: 0,
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (f32, f32, f32, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { x, y, w, h, .. } => Some((*x, *y, *w, *h)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, color: &str) {
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::Clear {
            color: color.to_string(),
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color: color.to_string(),
        });
    }
}
