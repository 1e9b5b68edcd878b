//! Canvas drawing. Reads the game state, never mutates it.

pub mod speedometer;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::config::AssetPaths;
use crate::game::{GameState, Obstacle, ObstacleKind, Player};
pub use speedometer::{Gauge, draw_speedometer};

/// Image handles for every sprite. Assumed loaded by the first frame.
pub struct Sprites {
    pub player: HtmlImageElement,
    pub car: HtmlImageElement,
    pub bike: HtmlImageElement,
    pub road: HtmlImageElement,
}

impl Sprites {
    pub fn load(paths: &AssetPaths) -> Result<Self, JsValue> {
        Ok(Self {
            player: image(&paths.player)?,
            car: image(&paths.car)?,
            bike: image(&paths.bike)?,
            road: image(&paths.road)?,
        })
    }

    fn for_obstacle(&self, kind: ObstacleKind) -> &HtmlImageElement {
        match kind {
            ObstacleKind::Car => &self.car,
            ObstacleKind::Bike => &self.bike,
        }
    }
}

fn image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    img.set_src(src);
    Ok(img)
}

/// Draw one full frame for the current state.
pub fn draw_frame(ctx: &CanvasRenderingContext2d, state: &GameState, sprites: &Sprites) -> Result<(), JsValue> {
    let cfg = state.config();
    ctx.clear_rect(0.0, 0.0, cfg.canvas_width, cfg.canvas_height);
    draw_road(ctx, &sprites.road, state.road_y, cfg.canvas_width, cfg.canvas_height)?;
    draw_player(ctx, &sprites.player, &state.player)?;
    draw_obstacles(ctx, sprites, &state.obstacles)?;
    draw_speedometer(ctx, &Gauge::from_config(cfg), state.player.speed)
}

/// Two stacked tiles so the scrolled road always covers the canvas.
pub fn draw_road(ctx: &CanvasRenderingContext2d, road: &HtmlImageElement, road_y: f64, w: f64, h: f64) -> Result<(), JsValue> {
    ctx.draw_image_with_html_image_element_and_dw_and_dh(road, 0.0, road_y, w, h)?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(road, 0.0, road_y - h, w, h)
}

pub fn draw_player(ctx: &CanvasRenderingContext2d, sprite: &HtmlImageElement, p: &Player) -> Result<(), JsValue> {
    ctx.draw_image_with_html_image_element_and_dw_and_dh(sprite, p.x, p.y, p.width, p.height)
}

pub fn draw_obstacles(ctx: &CanvasRenderingContext2d, sprites: &Sprites, obstacles: &[Obstacle]) -> Result<(), JsValue> {
    for o in obstacles {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(sprites.for_obstacle(o.kind), o.x, o.y, o.width, o.height)?;
    }
    Ok(())
}
