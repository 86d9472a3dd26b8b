//! Browser host: canvas 2D surface, keyboard wiring and the
//! requestAnimationFrame loop

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

use super::LoopHandle;
use crate::config::Configuration;
use crate::game::Game;
use crate::render::Surface;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// [`Surface`] backed by a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}

/// Route window key events into the game
pub fn install_keyboard(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().on_key_down(&event.key());
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().on_key_up(&event.key());
        });
        window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Request the next animation frame and record how to cancel it
fn schedule(handle: &LoopHandle, callback: &FrameCallback) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let id = {
        let slot = callback.borrow();
        let Some(closure) = slot.as_ref() else {
            return Ok(());
        };
        window.request_animation_frame(closure.as_ref().unchecked_ref())?
    };

    let callback = callback.clone();
    handle.set_canceller(move || {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(id);
        }
        // Break the closure's reference cycle
        callback.borrow_mut().take();
    });
    Ok(())
}

/// Render and simulate once per display refresh until the handle is stopped
pub fn start_animation_loop(
    game: Rc<RefCell<Game>>,
    mut surface: CanvasSurface,
) -> Result<LoopHandle, JsValue> {
    let handle = LoopHandle::new();
    let callback: FrameCallback = Rc::new(RefCell::new(None));

    let loop_handle = handle.clone();
    let next = callback.clone();
    *callback.borrow_mut() = Some(Closure::new(move |time: f64| {
        loop_handle.clear_canceller();
        if !loop_handle.is_running() {
            return;
        }
        game.borrow_mut().run_frame(time, &mut surface);
        if let Err(e) = schedule(&loop_handle, &next) {
            log::error!("Could not schedule next frame: {:?}", e);
            loop_handle.stop();
        }
    }));

    schedule(&handle, &callback)?;
    Ok(handle)
}

/// Set up the canvas with id `canvas` and start the game on it
pub fn run(config: Configuration) -> Result<LoopHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .ok_or_else(|| JsValue::from_str("no canvas"))?
        .dyn_into()?;

    canvas.set_width(config.arena.x as u32);
    canvas.set_height(config.arena.y as u32);
    canvas
        .style()
        .set_property("background", &config.background)?;

    let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
    let surface = CanvasSurface::from_canvas(&canvas)?;
    let game = Rc::new(RefCell::new(Game::new(config, seed)));

    install_keyboard(game.clone())?;
    let handle = start_animation_loop(game, surface)?;
    log::info!("Pong running on {}x{} canvas", canvas.width(), canvas.height());
    Ok(handle)
}
