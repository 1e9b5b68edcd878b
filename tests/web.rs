// Browser tests, run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use road_rush::GameConfig;
use road_rush::game::GameState;
use road_rush::render::{Sprites, draw_frame};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn context(w: u32, h: u32) -> CanvasRenderingContext2d {
    let doc = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = doc.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_width(w);
    canvas.set_height(h);
    canvas.get_context("2d").unwrap().unwrap().dyn_into().unwrap()
}

#[wasm_bindgen_test]
fn frame_draws_with_unloaded_sprites() {
    let cfg = GameConfig::default();
    let ctx = context(800, 700);
    let sprites = Sprites::load(&cfg.assets).unwrap();
    let state = GameState::new(cfg);
    assert!(draw_frame(&ctx, &state, &sprites).is_ok());
}

#[wasm_bindgen_test]
fn start_game_creates_canvas_and_scores_zero() {
    road_rush::start_game().unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    assert!(doc.get_element_by_id("gameCanvas").is_some());
    assert_eq!(road_rush::current_score(), 0);
}
