//! Browser bindings (WASM only)
//!
//! JavaScript owns the canvas and the `requestAnimationFrame` loop. It forwards
//! touches here and draws whatever JSON snapshot `frame` hands back.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::persistence::LocalStorageStore;
use crate::platform::LogAds;
use crate::renderer::JsonRenderer;
use crate::sim::Layout;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorageStore, LogAds>,
    renderer: JsonRenderer,
}

#[wasm_bindgen]
impl WebGame {
    /// `tuning_json` may be empty to use the shipped balance
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, seed: u32, tuning_json: &str) -> WebGame {
        let tuning = if tuning_json.trim().is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json).unwrap_or_else(|err| {
                log::warn!("Bad tuning, using defaults: {}", err);
                Tuning::default()
            })
        };
        WebGame {
            game: Game::new(
                Layout::new(width, height),
                tuning,
                LocalStorageStore,
                LogAds::default(),
                seed as u64,
            ),
            renderer: JsonRenderer::default(),
        }
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.game.touch_start(Vec2::new(x, y));
    }

    pub fn touch_end(&mut self, x: f32, y: f32) {
        self.game.touch_end(Vec2::new(x, y));
    }

    pub fn touch_cancel(&mut self) {
        self.game.touch_cancel();
    }

    /// Step one display frame and return the snapshot as JSON
    pub fn frame(&mut self, timestamp_ms: f64) -> String {
        self.game.frame(timestamp_ms, &mut self.renderer);
        self.renderer.last_frame().to_owned()
    }
}
