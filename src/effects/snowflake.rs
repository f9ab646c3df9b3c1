use super::sprite_trail::{self, SpriteTrailSession};
use crate::effect::{self, Effect};
use crate::trail::{MotionPolicy, SnowflakeConfig, Snowfall};
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Snowflakes that fall from the pointer, sway and melt away.
#[wasm_bindgen]
pub struct SnowflakeCursor {
    effect: Effect<SpriteTrailSession<Snowfall>>,
}

#[wasm_bindgen]
impl SnowflakeCursor {
    #[wasm_bindgen(constructor)]
    pub fn new(element: Option<web::HtmlElement>, options: JsValue) -> Result<SnowflakeCursor, JsError> {
        let config: SnowflakeConfig = effect::parse_options(&options)?;
        let model = Snowfall::new(config)?;
        let effect = Effect::new("snowflake", MotionPolicy::RespectReducedMotion, move || {
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
