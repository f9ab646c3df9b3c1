use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod motion;
pub mod pointer;
pub mod resize;

pub use motion::watch_reduced_motion;
pub use pointer::{wire_pointer_move, wire_window_resize};
pub use resize::{watch_element_resize, ResizeWatch};

/// A DOM listener that stays attached exactly as long as this handle lives.
pub struct EventSubscription {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl EventSubscription {
    /// Attach `handler` for `event`; events that are not an `E` are ignored.
    pub fn listen<E: JsCast + 'static>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("addEventListener({}) failed: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
