// Integration tests (native) for the `road-rush` crate.
// These tests avoid wasm-specific functionality and drive the game core through
// its public API so they can run under `cargo test` on the host.

use rand::SeedableRng;
use rand::rngs::StdRng;
use road_rush::game::{Obstacle, ObstacleKind};
use road_rush::{GameConfig, GameHost, GameState, Key, Phase};

#[derive(Default)]
struct FakePage {
    music_on: bool,
    popup_visible: bool,
    final_score: Option<u32>,
    music_label: Option<&'static str>,
    pause_label: Option<&'static str>,
}

impl GameHost for FakePage {
    fn play_music(&mut self) {
        self.music_on = true;
    }
    fn pause_music(&mut self) {
        self.music_on = false;
    }
    fn show_game_over(&mut self, final_score: u32) {
        self.popup_visible = true;
        self.final_score = Some(final_score);
    }
    fn hide_game_over(&mut self) {
        self.popup_visible = false;
    }
    fn set_music_label(&mut self, on: bool) {
        self.music_label = Some(if on { "Music: On" } else { "Music: Off" });
    }
    fn set_pause_label(&mut self, running: bool) {
        self.pause_label = Some(if running { "Pause" } else { "Play" });
    }
}

fn no_spawn() -> GameConfig {
    GameConfig { spawn_chance: 0.0, ..GameConfig::default() }
}

// Canvas 800x700, player at (380, 620) speed 5, one obstacle at (200, -100)
// speed 6: it travels 11 per tick, leaves on tick 73 and is scored once.
#[test]
fn dodged_obstacle_scores_once_and_disappears() {
    let mut page = FakePage::default();
    let mut rng = StdRng::seed_from_u64(0);
    let mut state = GameState::new(no_spawn());
    state.player.y = 620.0;
    state.obstacles.push(Obstacle { x: 200.0, y: -100.0, width: 50.0, height: 100.0, speed: 6.0, kind: ObstacleKind::Car });

    for tick in 1..=117 {
        assert!(state.tick(&mut rng, &mut page));
        if tick < 73 {
            assert_eq!(state.obstacles.len(), 1, "tick {tick}");
            assert_eq!(state.obstacles[0].y, -100.0 + 11.0 * tick as f64);
            assert_eq!(state.score(), 0);
        } else {
            assert!(state.obstacles.is_empty(), "tick {tick}");
            assert_eq!(state.score(), 1);
        }
    }
    assert_eq!(state.phase(), Phase::Running);
}

#[test]
fn restart_after_collision_resets_session() {
    let mut page = FakePage::default();
    let mut rng = StdRng::seed_from_u64(9);
    let mut state = GameState::new(no_spawn());
    state.begin(&mut page);
    state.obstacles.push(Obstacle { x: 0.0, y: 690.0, width: 50.0, height: 100.0, speed: 6.0, kind: ObstacleKind::Car });
    state.obstacles.push(Obstacle { x: 60.0, y: 695.0, width: 50.0, height: 100.0, speed: 6.0, kind: ObstacleKind::Car });
    assert!(state.tick(&mut rng, &mut page));
    assert_eq!(state.score(), 2);

    state.handle_key(Key::Left);
    state.handle_key(Key::Up);
    let (px, py) = (state.player.x, state.player.y);
    state.obstacles.push(Obstacle { x: px, y: py - 50.0, width: 50.0, height: 100.0, speed: 0.0, kind: ObstacleKind::Bike });
    assert!(!state.tick(&mut rng, &mut page));

    assert_eq!(state.phase(), Phase::Ended);
    assert!(page.popup_visible);
    assert_eq!(page.final_score, Some(2));
    assert!(!page.music_on);
    assert!(!state.music_playing());
    assert_eq!(page.music_label, Some("Music: Off"));

    assert!(state.restart(&mut page));
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.score(), 0);
    assert!(state.obstacles.is_empty());
    assert_eq!((state.player.x, state.player.y), (800.0 / 2.0 - 20.0, 700.0 - 100.0));
    assert_eq!(state.player.speed, 5.0);
    assert!(!page.popup_visible);
    assert!(page.music_on);
    assert!(state.music_playing());
    assert_eq!(page.pause_label, Some("Pause"));
}

#[test]
fn music_toggle_flips_playback() {
    let mut page = FakePage::default();
    let mut state = GameState::new(no_spawn());
    state.begin(&mut page);
    assert!(state.music_playing());

    state.toggle_music(&mut page);
    assert!(!state.music_playing());
    assert!(!page.music_on);
    assert_eq!(page.music_label, Some("Music: Off"));

    state.toggle_music(&mut page);
    assert!(state.music_playing());
    assert!(page.music_on);
    assert_eq!(page.music_label, Some("Music: On"));
}

#[test]
fn play_pause_button_label_follows_phase() {
    let mut page = FakePage::default();
    let mut state = GameState::new(no_spawn());
    state.begin(&mut page);
    assert_eq!(page.pause_label, Some("Pause"));
    assert!(!state.toggle_pause(&mut page));
    assert_eq!(page.pause_label, Some("Play"));
    assert!(state.toggle_pause(&mut page));
    assert_eq!(page.pause_label, Some("Pause"));
}

// Exported page API is safe to call before a game exists.
#[test]
fn page_api_is_inert_before_start() {
    assert_eq!(road_rush::current_score(), 0);
    road_rush::toggle_music();
    road_rush::toggle_game();
    road_rush::restart_game();
    assert_eq!(road_rush::current_score(), 0);
}
