//! Browser bindings
//!
//! Exposes a session to the hosting mini-app page. The page owns rendering
//! and input; it forwards frame deltas and thrust edges, reads snapshots as
//! JSON, and registers callbacks for score changes and game over.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::session::{Session, SessionListener};

/// Forwards session notifications to JS callbacks
#[derive(Default)]
struct JsListener {
    on_score_changed: Option<js_sys::Function>,
    on_game_over: Option<js_sys::Function>,
}

impl JsListener {
    fn call(callback: &Option<js_sys::Function>, value: u32) {
        if let Some(f) = callback {
            if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from(value)) {
                log::warn!("Session callback threw: {:?}", e);
            }
        }
    }
}

impl SessionListener for JsListener {
    fn on_score_changed(&mut self, score: u32) {
        Self::call(&self.on_score_changed, score);
    }

    fn on_game_over(&mut self, final_score: u32) {
        Self::call(&self.on_game_over, final_score);
    }
}

/// 64-bit seed from two 32-bit `Math.random` draws
fn random_seed() -> u64 {
    let draw = || (js_sys::Math::random() * 4_294_967_296.0) as u64;
    (draw() << 32) | draw()
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Candle Flap starting...");
}

/// A game session driven by the page's animation loop
#[wasm_bindgen]
pub struct WebSession {
    inner: Session<JsListener>,
}

#[wasm_bindgen]
impl WebSession {
    /// Create a session from an optional JSON config; seeded from `Math.random`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebSession, JsError> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json)?,
            None => GameConfig::default(),
        };
        let seed = random_seed();
        let inner = Session::new(config, seed, JsListener::default())?;
        Ok(WebSession { inner })
    }

    #[wasm_bindgen(js_name = submitThrust)]
    pub fn submit_thrust(&self) {
        self.inner.submit_thrust();
    }

    /// Advance by the raw time since the previous frame; returns the score
    pub fn tick(&mut self, raw_dt_ms: f32) -> u32 {
        self.inner.tick(raw_dt_ms);
        self.inner.score()
    }

    pub fn score(&self) -> u32 {
        self.inner.score()
    }

    /// "Idle", "Playing" or "GameOver"
    pub fn phase(&self) -> String {
        format!("{:?}", self.inner.phase())
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.inner.snapshot())?)
    }

    #[wasm_bindgen(js_name = onScoreChanged)]
    pub fn on_score_changed(&mut self, callback: Option<js_sys::Function>) {
        self.inner.listener_mut().on_score_changed = callback;
    }

    #[wasm_bindgen(js_name = onGameOver)]
    pub fn on_game_over(&mut self, callback: Option<js_sys::Function>) {
        self.inner.listener_mut().on_game_over = callback;
    }
}
