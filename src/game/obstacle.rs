use rand::Rng;

use super::collision::Rect;
use crate::config::GameConfig;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Selects the sprite an obstacle is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ObstacleKind {
    Car,
    Bike,
}

/// Oncoming traffic. Moves down by its own speed plus the player's every tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub speed: f64,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// New obstacle above the visible canvas at a uniform-random lane position.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, cfg: &GameConfig) -> Self {
        let max_x = cfg.canvas_width - cfg.obstacle_width;
        let x = if max_x > 0.0 { rng.gen_range(0.0..max_x) } else { 0.0 };
        let kind = if rng.gen_bool(0.5) { ObstacleKind::Car } else { ObstacleKind::Bike };
        let jitter = if cfg.speed_jitter > 0.0 { rng.gen_range(0.0..cfg.speed_jitter) } else { 0.0 };
        Self {
            x,
            y: cfg.obstacle_spawn_y,
            width: cfg.obstacle_width,
            height: cfg.obstacle_height,
            speed: jitter + cfg.base_road_speed,
            kind,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Move every obstacle down and drop the ones that left through the bottom edge.
/// Returns how many were dropped (each one is a dodge).
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>, player_speed: f64, canvas_height: f64) -> u32 {
    let mut passed = 0;
    obstacles.retain_mut(|o| {
        o.y += o.speed + player_speed;
        if o.y > canvas_height {
            passed += 1;
            false
        } else {
            true
        }
    });
    passed
}

/// Number of obstacles overlapping `player`. Every obstacle is checked.
pub fn count_hits(player: &Rect, obstacles: &[Obstacle]) -> usize {
    obstacles.iter().filter(|o| player.overlaps(&o.rect())).count()
}
