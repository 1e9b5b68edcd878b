//! Game state and the Running / Paused / Ended state machine.
//!
//! Nothing in here touches the browser. Side effects that belong to the page
//! (music, game-over panel, button labels) go through [`GameHost`], and the
//! caller decides when to draw and when to schedule the next frame based on
//! the values these operations return.

pub mod collision;
pub mod input;
pub mod obstacle;
pub mod player;

use log::{debug, info};
use rand::Rng;

use crate::config::GameConfig;
pub use collision::Rect;
pub use input::Key;
pub use obstacle::{Obstacle, ObstacleKind, advance_obstacles, count_hits};
pub use player::Player;

#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Phase {
    Running,
    Paused,
    Ended,
}

/// Page-side collaborator receiving the game's side effects.
pub trait GameHost {
    fn play_music(&mut self);
    fn pause_music(&mut self);
    fn show_game_over(&mut self, final_score: u32);
    fn hide_game_over(&mut self);
    fn set_music_label(&mut self, on: bool);
    fn set_pause_label(&mut self, running: bool);
}

/// Single owner of everything that changes while playing.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    /// Vertical road offset, always in `[0, canvas_height)`.
    pub road_y: f64,
    score: u32,
    phase: Phase,
    music_playing: bool,
}

/// Serializable view of a [`GameState`] for debugging from JS.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Snapshot<'a> {
    pub phase: Phase,
    pub score: u32,
    pub music_playing: bool,
    pub road_y: f64,
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            player: Player::new(&config),
            obstacles: Vec::new(),
            road_y: 0.0,
            score: 0,
            phase: Phase::Running,
            music_playing: false,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            score: self.score,
            music_playing: self.music_playing,
            road_y: self.road_y,
            player: &self.player,
            obstacles: &self.obstacles,
        }
    }

    /// Kick off a fresh session: music on, play/pause button reads "Pause".
    pub fn begin<H: GameHost + ?Sized>(&mut self, host: &mut H) {
        self.start_music(host);
        host.set_pause_label(self.is_running());
    }

    /// One update step. Returns `true` while the loop should keep running.
    ///
    /// Order: road scroll, obstacle advance and sweep, collision check, then a
    /// chance to spawn. Drawing happens before this, on the pre-update state.
    pub fn tick<R, H>(&mut self, rng: &mut R, host: &mut H) -> bool
    where
        R: Rng + ?Sized,
        H: GameHost + ?Sized,
    {
        if !self.is_running() {
            return false;
        }
        self.advance_road();

        let passed = advance_obstacles(&mut self.obstacles, self.player.speed, self.config.canvas_height);
        self.score += passed;

        let hits = count_hits(&self.player.rect(), &self.obstacles);
        if hits > 0 {
            debug!("collision with {hits} obstacle(s)");
            self.end(host);
        }

        if rng.gen_bool(self.config.spawn_probability()) {
            let o = Obstacle::spawn(rng, &self.config);
            debug!("spawned {:?} at x={:.1} speed={:.2}", o.kind, o.x, o.speed);
            self.obstacles.push(o);
        }
        self.is_running()
    }

    pub fn advance_road(&mut self) {
        self.road_y += self.player.speed;
        if self.road_y >= self.config.canvas_height {
            self.road_y = 0.0;
        }
    }

    /// Transition to `Ended`. Side effects fire only on the first call.
    pub fn end<H: GameHost + ?Sized>(&mut self, host: &mut H) {
        if self.phase == Phase::Ended {
            return;
        }
        self.phase = Phase::Ended;
        info!("game over, score {}", self.score);
        host.show_game_over(self.score);
        self.stop_music(host);
    }

    /// Reset the session and resume. Returns `true`: the loop must be scheduled.
    pub fn restart<H: GameHost + ?Sized>(&mut self, host: &mut H) -> bool {
        host.hide_game_over();
        self.player.reset(&self.config);
        self.obstacles.clear();
        self.score = 0;
        self.phase = Phase::Running;
        info!("restart");
        self.start_music(host);
        host.set_pause_label(true);
        true
    }

    /// Flip between `Running` and `Paused`. Returns `true` when the loop has to
    /// be scheduled again. Ignored once the game has ended.
    pub fn toggle_pause<H: GameHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::Ended => return false,
        };
        debug!("toggle pause -> {:?}", self.phase);
        host.set_pause_label(self.is_running());
        self.is_running()
    }

    pub fn toggle_music<H: GameHost + ?Sized>(&mut self, host: &mut H) {
        if self.music_playing {
            self.stop_music(host);
        } else {
            self.start_music(host);
        }
    }

    /// Apply a direction key. Input is dropped unless the game is running.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.is_running() {
            return false;
        }
        let cfg = &self.config;
        match key {
            Key::Left => self.player.steer(-cfg.move_step, cfg),
            Key::Right => self.player.steer(cfg.move_step, cfg),
            Key::Up => self.player.adjust_speed(cfg.speed_step, cfg),
            Key::Down => self.player.adjust_speed(-cfg.speed_step, cfg),
        }
        true
    }

    fn start_music<H: GameHost + ?Sized>(&mut self, host: &mut H) {
        host.play_music();
        self.music_playing = true;
        host.set_music_label(true);
    }

    fn stop_music<H: GameHost + ?Sized>(&mut self, host: &mut H) {
        host.pause_music();
        self.music_playing = false;
        host.set_music_label(false);
    }
}
