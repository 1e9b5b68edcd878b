//! Browser glue: canvas setup, DOM side effects, keyboard listener and the
//! animation-frame loop.
//!
//! The single [`GameState`] lives in a thread-local next to its page handles.
//! The frame callback, key handler and exported button functions borrow it in
//! turn; the browser never runs two of them at once.

use std::cell::{Cell, RefCell};

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlAudioElement, HtmlCanvasElement, KeyboardEvent, Window, window,
};

use crate::config::GameConfig;
use crate::game::{GameHost, GameState, Key};
use crate::render::{self, Sprites};

const CANVAS_ID: &str = "gameCanvas";
const POPUP_ID: &str = "game-over-popup";
const FINAL_SCORE_ID: &str = "final-score";
const MUSIC_BUTTON_ID: &str = "music-toggle-btn";
const PLAY_BUTTON_ID: &str = "play-pause-btn";
const MUSIC_ID: &str = "background-music";

/// DOM side of [`GameHost`]. Missing optional elements are skipped.
struct DomHost {
    audio: HtmlAudioElement,
    popup: Option<Element>,
    final_score: Option<Element>,
    music_button: Option<Element>,
    play_button: Option<Element>,
    on_play_rejected: Closure<dyn FnMut(JsValue)>,
}

impl DomHost {
    fn attach(doc: &Document, music_src: &str) -> Result<Self, JsValue> {
        let audio: HtmlAudioElement = match doc.get_element_by_id(MUSIC_ID) {
            Some(el) => el.dyn_into()?,
            None => {
                let a = HtmlAudioElement::new_with_src(music_src)?;
                a.set_loop(true);
                a
            }
        };
        let lookup = |id: &str| {
            let el = doc.get_element_by_id(id);
            if el.is_none() {
                warn!("#{id} not found, its updates are skipped");
            }
            el
        };
        Ok(Self {
            audio,
            popup: lookup(POPUP_ID),
            final_score: lookup(FINAL_SCORE_ID),
            music_button: lookup(MUSIC_BUTTON_ID),
            play_button: lookup(PLAY_BUTTON_ID),
            // Autoplay policies reject play() until the user interacts with the page.
            on_play_rejected: Closure::wrap(Box::new(|err: JsValue| {
                warn!("music playback rejected: {err:?}");
            }) as Box<dyn FnMut(JsValue)>),
        })
    }
}

impl GameHost for DomHost {
    fn play_music(&mut self) {
        match self.audio.play() {
            Ok(promise) => {
                let _ = promise.catch(&self.on_play_rejected);
            }
            Err(err) => warn!("music playback failed: {err:?}"),
        }
    }

    fn pause_music(&mut self) {
        if let Err(err) = self.audio.pause() {
            warn!("music pause failed: {err:?}");
        }
    }

    fn show_game_over(&mut self, final_score: u32) {
        if let Some(popup) = &self.popup {
            let _ = popup.class_list().remove_1("hidden");
        }
        if let Some(el) = &self.final_score {
            el.set_text_content(Some(&final_score.to_string()));
        }
    }

    fn hide_game_over(&mut self) {
        if let Some(popup) = &self.popup {
            let _ = popup.class_list().add_1("hidden");
        }
    }

    fn set_music_label(&mut self, on: bool) {
        if let Some(btn) = &self.music_button {
            btn.set_text_content(Some(if on { "Music: On" } else { "Music: Off" }));
        }
    }

    fn set_pause_label(&mut self, running: bool) {
        if let Some(btn) = &self.play_button {
            btn.set_text_content(Some(if running { "Pause" } else { "Play" }));
        }
    }
}

struct WebGame {
    state: GameState,
    host: DomHost,
    ctx: CanvasRenderingContext2d,
    sprites: Sprites,
    rng: StdRng,
}

impl WebGame {
    /// Draw, then update. Returns whether another frame is wanted.
    fn frame(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        if let Err(err) = render::draw_frame(&self.ctx, &self.state, &self.sprites) {
            warn!("frame draw failed: {err:?}");
        }
        self.state.tick(&mut self.rng, &mut self.host)
    }
}

/// Animation-frame callback plus a guard so resuming twice never runs two loops.
struct FrameLoop {
    callback: Closure<dyn FnMut(f64)>,
    pending: Cell<bool>,
}

impl FrameLoop {
    fn new() -> Self {
        Self {
            callback: Closure::wrap(Box::new(|_ts: f64| on_frame()) as Box<dyn FnMut(f64)>),
            pending: Cell::new(false),
        }
    }

    fn request(&self) {
        if self.pending.get() {
            return;
        }
        let Some(w) = window() else { return };
        match w.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
            Ok(_) => self.pending.set(true),
            Err(err) => warn!("requestAnimationFrame failed: {err:?}"),
        }
    }
}

thread_local! {
    static GAME: RefCell<Option<WebGame>> = const { RefCell::new(None) };
    static FRAME_LOOP: FrameLoop = FrameLoop::new();
    static KEYS_BOUND: Cell<bool> = const { Cell::new(false) };
}

fn with_game<T>(f: impl FnOnce(&mut WebGame) -> T) -> Option<T> {
    GAME.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn on_frame() {
    FRAME_LOOP.with(|l| l.pending.set(false));
    if with_game(WebGame::frame).unwrap_or(false) {
        schedule_frame();
    }
}

fn schedule_frame() {
    FRAME_LOOP.with(FrameLoop::request);
}

pub fn start(config: GameConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas = prepare_canvas(&win, &doc, &config)?;
    let config = config.with_canvas(canvas.width() as f64, canvas.height() as f64);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let sprites = Sprites::load(&config.assets)?;
    let mut host = DomHost::attach(&doc, &config.assets.music)?;
    info!("starting on a {}x{} canvas", config.canvas_width, config.canvas_height);
    let mut state = GameState::new(config);
    state.begin(&mut host);

    GAME.with(|cell| {
        cell.replace(Some(WebGame { state, host, ctx, sprites, rng: StdRng::from_entropy() }));
    });
    bind_keyboard(&doc)?;
    schedule_frame();
    Ok(())
}

/// Reuse `#gameCanvas` (or create it) and size it to the viewport once.
fn prepare_canvas(win: &Window, doc: &Document, config: &GameConfig) -> Result<HtmlCanvasElement, JsValue> {
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(CANVAS_ID) {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id(CANVAS_ID);
        doc.body().ok_or_else(|| JsValue::from_str("no body"))?.append_child(&c)?;
        c
    };
    let (fw, fh) = config.viewport_fraction;
    let width = win.inner_width()?.as_f64().map_or(config.canvas_width, |w| w * fw);
    let height = win.inner_height()?.as_f64().map_or(config.canvas_height, |h| h * fh);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Ok(canvas)
}

fn bind_keyboard(doc: &Document) -> Result<(), JsValue> {
    if KEYS_BOUND.with(|b| b.replace(true)) {
        return Ok(());
    }
    let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
        let Some(key) = Key::from_key_name(&evt.key()) else { return };
        if with_game(|g| g.state.handle_key(key)).unwrap_or(false) {
            evt.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn restart() {
    if with_game(|g| g.state.restart(&mut g.host)).unwrap_or(false) {
        schedule_frame();
    }
}

pub fn toggle_pause() {
    if with_game(|g| g.state.toggle_pause(&mut g.host)).unwrap_or(false) {
        schedule_frame();
    }
}

pub fn toggle_music() {
    with_game(|g| g.state.toggle_music(&mut g.host));
}

pub fn score() -> u32 {
    with_game(|g| g.state.score()).unwrap_or(0)
}

#[cfg(feature = "serde_json")]
pub fn snapshot_json() -> Result<String, JsValue> {
    with_game(|g| serde_json::to_string(&g.state.snapshot()))
        .unwrap_or_else(|| Ok("null".to_owned()))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
