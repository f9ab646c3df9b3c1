use super::sprite_trail::{self, SpriteTrailSession};
use crate::effect::{self, Effect};
use crate::trail::{CharacterConfig, CharacterTrail, MotionPolicy};
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Colored characters thrown off the pointer, spinning as they shrink.
#[wasm_bindgen]
pub struct CharacterCursor {
    effect: Effect<SpriteTrailSession<CharacterTrail>>,
}

#[wasm_bindgen]
impl CharacterCursor {
    #[wasm_bindgen(constructor)]
    pub fn new(element: Option<web::HtmlElement>, options: JsValue) -> Result<CharacterCursor, JsError> {
        let config: CharacterConfig = effect::parse_options(&options)?;
        let model = CharacterTrail::new(config)?;
        let effect = Effect::new("character", MotionPolicy::RespectReducedMotion, move || {
            sprite_trail::mount(element.as_ref(), model.clone())
        });
        Ok(Self { effect })
    }

    pub fn start(&self) {
        self.effect.start();
    }

    pub fn stop(&self) {
        self.effect.stop();
    }
}
