//! Speedometer gauge: a 270° dial from speed 0 to `max_speed`.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::GameConfig;

/// Total sweep of the dial, starting straight up and running clockwise.
const SWEEP: f64 = PI * 1.5;

pub type Segment = ((f64, f64), (f64, f64));

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gauge {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub max_speed: f64,
}

impl Gauge {
    pub fn from_config(cfg: &GameConfig) -> Self {
        Self {
            center_x: cfg.gauge_offset.0,
            center_y: cfg.canvas_height - cfg.gauge_offset.1,
            radius: cfg.gauge_radius,
            max_speed: cfg.gauge_max_speed,
        }
    }

    /// Linear map of `speed` onto the dial: 0 → −π/2, `max_speed` → π.
    pub fn angle_for(&self, speed: f64) -> f64 {
        (speed / self.max_speed) * SWEEP - FRAC_PI_2
    }

    fn point(&self, angle: f64, dist: f64) -> (f64, f64) {
        (self.center_x + angle.cos() * dist, self.center_y + angle.sin() * dist)
    }

    /// One mark per whole speed unit, drawn along the rim.
    pub fn tick_marks(&self) -> Vec<Segment> {
        let steps = self.max_speed.max(0.0) as u32;
        (0..=steps)
            .map(|i| {
                let a = self.angle_for(i as f64);
                (self.point(a, self.radius - 10.0), self.point(a, self.radius))
            })
            .collect()
    }

    pub fn needle(&self, speed: f64) -> Segment {
        let a = self.angle_for(speed);
        ((self.center_x, self.center_y), self.point(a, self.radius - 20.0))
    }
}

pub fn draw_speedometer(ctx: &CanvasRenderingContext2d, gauge: &Gauge, speed: f64) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(gauge.center_x, gauge.center_y, gauge.radius, 0.0, TAU)?;
    ctx.set_fill_style_str("#222");
    ctx.fill();
    ctx.set_stroke_style_str("#fff");
    ctx.set_line_width(3.0);
    ctx.stroke();

    ctx.set_line_width(2.0);
    for (from, to) in gauge.tick_marks() {
        segment(ctx, from, to);
    }

    let (from, to) = gauge.needle(speed);
    ctx.set_stroke_style_str("red");
    ctx.set_line_width(4.0);
    segment(ctx, from, to);
    Ok(())
}

fn segment(ctx: &CanvasRenderingContext2d, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}
