//! JavaScript-facing game handle
//!
//! The page owns drawing, sound and DOM input. It forwards actions and
//! `requestAnimationFrame` timestamps here, then applies the JSON events
//! returned by `drain_events`.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::Game;
use crate::persistence::LocalStorageStore;
use crate::platform;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Flappy Gates starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorageStore>,
    last_frame_ms: Option<f64>,
}

#[wasm_bindgen]
impl WebGame {
    /// Build a game from the page's query string (`?debug`, `?easy`)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebGame, JsValue> {
        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let config =
            GameConfig::from_query(&query).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let seed = platform::entropy_seed();
        let game = Game::new(config, LocalStorageStore::new(), seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            game,
            last_frame_ms: None,
        })
    }

    /// Mouse down or touch start
    pub fn primary_action(&mut self) {
        self.game.primary_action();
    }

    /// Space bar
    pub fn space(&mut self) {
        self.game.space();
    }

    /// Replay button; false while the scoreboard is still animating in
    pub fn replay(&mut self) -> bool {
        self.game.replay()
    }

    /// Scoreboard animation finished
    pub fn score_presented(&mut self) {
        self.game.score_presented();
    }

    /// Advance to the given `requestAnimationFrame` timestamp
    pub fn frame(&mut self, timestamp_ms: f64) {
        let dt = match self.last_frame_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_frame_ms = Some(timestamp_ms);
        self.game.advance(dt);
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn high_score(&self) -> u32 {
        self.game.high_score()
    }

    /// Current screen name ("Splash", "Playing" or "ScoreDisplay")
    pub fn screen(&self) -> String {
        format!("{:?}", self.game.screen())
    }

    /// Pending events as a JSON array
    pub fn drain_events(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.drain_events())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
