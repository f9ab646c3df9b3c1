use crate::constants::TICK_INTERVAL_MS;
use crate::dom;
use crate::effect::{self, Effect};
use crate::events::{self, EventSubscription};
use crate::frame::Ticker;
use crate::render::GlyphOverlay;
use crate::trail::{FairyDust, FairyDustConfig, MotionPolicy, ParticleField};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

struct FairyDustScene {
    field: ParticleField<FairyDust>,
    overlay: GlyphOverlay,
}

impl FairyDustScene {
    fn frame(&mut self) {
        self.field.tick();
        self.overlay.draw(&self.field);
    }
}

/// Everything attached while the trail is active. Fields drop in order:
/// the ticker stops first, then the listener, then the overlay goes with the scene.
struct FairyDustSession {
    _ticker: Ticker,
    _pointer: EventSubscription,
    _scene: Rc<RefCell<FairyDustScene>>,
}

fn mount(target: Option<&web::HtmlElement>, model: FairyDust) -> anyhow::Result<FairyDustSession> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let host = match target {
        Some(el) => el.clone(),
        None => dom::document_body(&document)?,
    };
    let overlay = GlyphOverlay::attach(&document, &host, target.is_none())?;
    let scene = Rc::new(RefCell::new(FairyDustScene {
        field: ParticleField::new(model),
        overlay,
    }));

    let scene_move = scene.clone();
    let pointer = events::wire_pointer_move(&host, target.cloned(), move |pos| {
        scene_move.borrow_mut().field.emit(pos);
    })?;

    let scene_tick = scene.clone();
    let ticker = Ticker::interval(TICK_INTERVAL_MS, move || {
        scene_tick.borrow_mut().frame();
    })?;

    Ok(FairyDustSession {
        _ticker: ticker,
        _pointer: pointer,
        _scene: scene,
    })
}

/// Sparkling glyphs that drift away from the pointer and fade out.
#[wasm_bindgen]
pub struct FairyDustCursor {
    effect: Effect<FairyDustSession>,
}

#[wasm_bindgen]
impl FairyDustCursor {
    #[wasm_bindgen(constructor)]
    pub fn new(element: Option<web::HtmlElement>, options: JsValue) -> Result<FairyDustCursor, JsError> {
        let config: FairyDustConfig = effect::parse_options(&options)?;
        let model = FairyDust::new(config)?;
        let effect = Effect::new("fairy-dust", MotionPolicy::Ignore, move || {
            mount(element.as_ref(), model.clone())
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
