//! Dino Dash core crate.
//!
//! A canvas endless-runner ("dino" obstacle jumper) for a promotional page:
//! the frame loop, difficulty ramp, collision detection and the score-gated
//! reward/redirect state machine live in pure-Rust modules driven by injected
//! timestamps; `src/web.rs` wires them to the browser. Call `start_game()`
//! from JS once the page's canvas and progress-bar elements exist.

use wasm_bindgen::prelude::*;

pub mod collision;
pub mod config;
pub mod entity;
pub mod render;
pub mod reward;
pub mod session;
mod web;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Boots the game against the default configuration. Fails if the canvas or
/// the progress bar element is missing from the page.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::boot(config::GameConfig::default())
}
