//! Classic Pong entry point
//!
//! On the web the game runs on the page's canvas. Natively there is no
//! window: the game runs headless against a recording surface, with the
//! computer defending the right side and nobody on the left, and the final
//! score is logged.
//!
//! Native usage: `classic-pong [CONFIG.json] [SECONDS]`, or
//! `classic-pong --dump-config` to print the default configuration.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    log::info!("Classic Pong starting...");
    match classic_pong::platform::web::run(classic_pong::Configuration::default()) {
        // The frame callback keeps its own handle alive
        Ok(_handle) => {}
        Err(e) => log::error!("Failed to start: {:?}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_SECONDS: f64 = 60.0;

#[cfg(not(target_arch = "wasm32"))]
fn load_config(path: &str) -> classic_pong::Configuration {
    use classic_pong::Configuration;

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Cannot read {path}: {e}; using defaults");
            return Configuration::default();
        }
    };
    match Configuration::from_json(&text) {
        Ok(config) => {
            log::info!("Loaded configuration from {path}");
            config
        }
        Err(e) => {
            log::warn!("{e}; using defaults");
            Configuration::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use classic_pong::platform::HeadlessLoop;
    use classic_pong::render::RecordingSurface;
    use classic_pong::{Configuration, Game};

    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("--dump-config") {
        match Configuration::default().to_json_pretty() {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("{e}"),
        }
        return;
    }

    let config = args
        .first()
        .map(|path| load_config(path))
        .unwrap_or_default();
    let seconds = args
        .get(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    log::info!("Classic Pong (native) starting...");
    let mut surface = RecordingSurface::new(config.arena.x, config.arena.y);
    let mut game = Game::new(config, seed);
    game.start();

    let mut runner = HeadlessLoop::default();
    let frames = runner.run(&mut game, &mut surface, (seconds * 60.0) as u64, |_, _| {});

    let score = game.state().score;
    log::info!(
        "Simulated {frames} frames ({} updates)",
        game.state().time_ticks
    );
    println!("Final score: {} - {}", score.left, score.right);
}
