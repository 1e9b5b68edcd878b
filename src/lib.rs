//! Road Rush core crate.
//!
//! A bike dodges oncoming cars and bikes on a scrolling road; every obstacle that
//! leaves through the bottom edge is a point. Game rules live in [`game`] and are
//! browser-free; [`render`] draws them on a 2D canvas and `web` wires the page
//! (canvas, keyboard, buttons, music) and the animation-frame loop.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod game;
pub mod logging;
pub mod render;
mod web;

pub use config::GameConfig;
pub use game::{GameHost, GameState, Key, Phase};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(logging::default_level());
}

// -----------------------------------------------------------------------------
// Page API (buttons call these through the generated JS bindings)
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(GameConfig::default())
}

/// Start with JSON overrides on top of the default config.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config: GameConfig = serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("bad config: {e}")))?;
    web::start(config)
}

#[wasm_bindgen]
pub fn restart_game() {
    web::restart();
}

#[wasm_bindgen]
pub fn toggle_game() {
    web::toggle_pause();
}

#[wasm_bindgen]
pub fn toggle_music() {
    web::toggle_music();
}

/// Score of the running session, 0 before `start_game`.
#[wasm_bindgen]
pub fn current_score() -> u32 {
    web::score()
}

#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn game_snapshot() -> Result<String, JsValue> {
    web::snapshot_json()
}
