//! Gameplay tunables.
//!
//! Every number the game loop uses lives here so the core can be driven with a
//! small canvas in tests and a viewport-sized one in the browser. Defaults match
//! the shipped game.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sprite locations handed to the browser as `<img src>` values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct AssetPaths {
    pub player: String,
    pub car: String,
    pub bike: String,
    pub road: String,
    pub music: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            player: "bike.png".into(),
            car: "car.png".into(),
            bike: "bikeobstacle.png".into(),
            road: "road.png".into(),
            music: "music.mp3".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct GameConfig {
    // --- Canvas ---
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Share of `innerWidth` / `innerHeight` the canvas takes at startup.
    pub viewport_fraction: (f64, f64),

    // --- Player ---
    pub player_width: f64,
    pub player_height: f64,
    pub player_start_speed: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    pub move_step: f64,
    pub speed_step: f64,
    /// Distance the player keeps from the left and right canvas edges.
    pub edge_margin: f64,
    /// Player starts this far above the bottom edge.
    pub player_bottom_offset: f64,

    // --- Obstacles ---
    pub obstacle_width: f64,
    pub obstacle_height: f64,
    pub obstacle_spawn_y: f64,
    pub base_road_speed: f64,
    /// Upper bound (exclusive) of the random speed added on spawn.
    pub speed_jitter: f64,
    /// Per-tick probability of spawning one obstacle.
    pub spawn_chance: f64,

    // --- Speedometer ---
    pub gauge_radius: f64,
    /// Gauge center measured from the bottom-left corner.
    pub gauge_offset: (f64, f64),
    pub gauge_max_speed: f64,

    pub assets: AssetPaths,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 700.0,
            viewport_fraction: (0.8, 0.9),
            player_width: 40.0,
            player_height: 80.0,
            player_start_speed: 5.0,
            min_speed: 3.0,
            max_speed: 10.0,
            move_step: 20.0,
            speed_step: 1.0,
            edge_margin: 10.0,
            player_bottom_offset: 100.0,
            obstacle_width: 50.0,
            obstacle_height: 100.0,
            obstacle_spawn_y: -100.0,
            base_road_speed: 5.0,
            speed_jitter: 2.0,
            spawn_chance: 0.02,
            gauge_radius: 60.0,
            gauge_offset: (100.0, 100.0),
            gauge_max_speed: 10.0,
            assets: AssetPaths::default(),
        }
    }
}

impl GameConfig {
    /// Copy of this config sized to an actual canvas.
    pub fn with_canvas(&self, width: f64, height: f64) -> Self {
        Self { canvas_width: width, canvas_height: height, ..self.clone() }
    }

    /// Player spawn point: horizontally centered, near the bottom edge.
    pub fn player_start(&self) -> (f64, f64) {
        (
            self.canvas_width / 2.0 - self.player_width / 2.0,
            self.canvas_height - self.player_bottom_offset,
        )
    }

    /// Leftmost and rightmost x the player may occupy.
    pub fn player_x_bounds(&self) -> (f64, f64) {
        let lo = self.edge_margin;
        let hi = self.canvas_width - self.player_width - self.edge_margin;
        (lo, hi.max(lo))
    }

    /// `spawn_chance` as a valid probability (hand-edited JSON may carry anything).
    pub fn spawn_probability(&self) -> f64 {
        if self.spawn_chance.is_finite() {
            self.spawn_chance.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
