#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod effect;
mod effects;
mod events;
mod frame;
mod input;
mod render;
pub mod trail;

pub use effects::{CharacterCursor, FairyDustCursor, SnowflakeCursor};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cursor-trails loaded");
    Ok(())
}
