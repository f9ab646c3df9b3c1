use crate::dom;
use crate::events::{self, EventSubscription, ResizeWatch};
use crate::frame::Ticker;
use crate::render::SpriteCanvas;
use crate::trail::{FramePacer, ParticleField, SpriteModel};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

struct SpriteScene<M: SpriteModel> {
    field: ParticleField<M>,
    canvas: SpriteCanvas,
    pacer: FramePacer,
}

impl<M: SpriteModel> SpriteScene<M> {
    fn frame(&mut self, dt: Duration) {
        if !self.pacer.on_frame(dt) {
            return;
        }
        self.field.tick();
        self.canvas.clear();
        let model = self.field.model();
        for p in self.field.particles() {
            self.canvas.draw(p.token, model.sprite_transform(p));
        }
    }
}

/// Handles held while a canvas trail is active; the ticker is released first.
pub struct SpriteTrailSession<M: SpriteModel + 'static> {
    _ticker: Ticker,
    _pointer: EventSubscription,
    _resize: EventSubscription,
    _target_resize: Option<ResizeWatch>,
    _scene: Rc<RefCell<SpriteScene<M>>>,
}

/// Attach a canvas trail for `model` to `target`, or to the whole page.
pub fn mount<M: SpriteModel + 'static>(
    target: Option<&web::HtmlElement>,
    model: M,
) -> anyhow::Result<SpriteTrailSession<M>> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let listen_on = match target {
        Some(el) => el.clone(),
        None => dom::document_body(&document)?,
    };
    let mut canvas = SpriteCanvas::attach(&document, target)?;
    canvas.load_sprites(&document, &model)?;
    let scene = Rc::new(RefCell::new(SpriteScene {
        field: ParticleField::new(model),
        canvas,
        pacer: FramePacer::new(),
    }));

    let scene_move = scene.clone();
    let pointer = events::wire_pointer_move(&listen_on, target.cloned(), move |pos| {
        scene_move.borrow_mut().field.emit(pos);
    })?;

    let scene_resize = scene.clone();
    let resize = events::wire_window_resize(move || {
        scene_resize.borrow().canvas.resize();
    })?;

    // Window resizes cover the viewport; an element target can also change size on its own
    let target_resize = match target {
        Some(el) => {
            let scene_resize = scene.clone();
            Some(events::watch_element_resize(el, move || {
                scene_resize.borrow().canvas.resize();
            })?)
        }
        None => None,
    };

    let scene_tick = scene.clone();
    let ticker = Ticker::animation_frames(move |dt| {
        scene_tick.borrow_mut().frame(dt);
    })?;

    Ok(SpriteTrailSession {
        _ticker: ticker,
        _pointer: pointer,
        _resize: resize,
        _target_resize: target_resize,
        _scene: scene,
    })
}
