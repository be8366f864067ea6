//! Whack-a-mole core crate.
//!
//! Moles pop up in one of a fixed set of holes for a difficulty-dependent
//! delay; clicking one scores a point. The platform-independent game lives in
//! [`game`] (round scheduling, session clock, scoring, difficulty). The
//! [`web`] module binds it to the page: `.hole` / `.mole` elements, HTML audio
//! clips and gloo timers.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod game;
pub mod web;

pub use config::{DelayTable, GameConfig, ScoringPolicy};
pub use error::{GameError, GameResult};
pub use game::{
    AudioDeck, Clip, Difficulty, Game, GameEvent, RoundOutcome, RoundState, SessionStatus, Slot,
    Stage, TimerId, Timers,
};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    console_log::init_with_level(log::Level::Debug).ok();
    // Pages without the game markup can still call `mount` later.
    match web::mount(GameConfig::default()) {
        Ok(()) => log::info!("whack-a-mole ready"),
        Err(err) => log::warn!("not mounted: {}", err),
    }
}

// -----------------------------------------------------------------------------
// JS-facing controls (the page buttons call the same paths)
// -----------------------------------------------------------------------------

/// Mount (or re-mount) the game on the current page with default settings.
#[wasm_bindgen]
pub fn mount_game() -> Result<(), JsValue> {
    Ok(web::mount(GameConfig::default())?)
}

#[wasm_bindgen]
pub fn start_game() -> Result<String, JsValue> {
    Ok(web::with_game(|game| game.start_game().to_string())?)
}

#[wasm_bindgen]
pub fn stop_game() -> Result<String, JsValue> {
    Ok(web::with_game(|game| game.stop_game().to_string())?)
}

#[wasm_bindgen]
pub fn whack(slot: usize) -> Result<u32, JsValue> {
    Ok(web::with_game(|game| game.whack(Slot::new(slot)))?)
}

#[wasm_bindgen]
pub fn cycle_difficulty() -> Result<String, JsValue> {
    Ok(web::with_game(|game| game.cycle_difficulty().to_string())?)
}

#[wasm_bindgen]
pub fn points() -> Result<u32, JsValue> {
    Ok(web::with_game(|game| game.points())?)
}

#[wasm_bindgen]
pub fn remaining_time() -> Result<u32, JsValue> {
    Ok(web::with_game(|game| game.remaining_time())?)
}

/// Replace the running configuration from a JSON document (fields optional).
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn apply_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    web::with_game(|game| game.reconfigure(config))??;
    Ok(())
}
