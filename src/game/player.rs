use super::collision::Rect;
use crate::config::GameConfig;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The rider. Exactly one lives in a [`super::GameState`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Always within `[min_speed, max_speed]`.
    pub speed: f64,
}

impl Player {
    pub fn new(cfg: &GameConfig) -> Self {
        let (x, y) = cfg.player_start();
        Self {
            x,
            y,
            width: cfg.player_width,
            height: cfg.player_height,
            speed: cfg.player_start_speed.min(cfg.max_speed).max(cfg.min_speed),
        }
    }

    pub fn reset(&mut self, cfg: &GameConfig) {
        *self = Self::new(cfg);
    }

    /// Shift horizontally, keeping `edge_margin` from both canvas edges.
    pub fn steer(&mut self, dx: f64, cfg: &GameConfig) {
        let (lo, hi) = cfg.player_x_bounds();
        self.x = (self.x + dx).min(hi).max(lo);
    }

    pub fn adjust_speed(&mut self, delta: f64, cfg: &GameConfig) {
        self.speed = (self.speed + delta).min(cfg.max_speed).max(cfg.min_speed);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
