use crate::trail::TickGate;
use anyhow::anyhow;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug)]
enum TickSource {
    Interval,
    AnimationFrame,
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running tick loop. Dropping it closes the gate, cancels the pending
/// timer or frame and releases the callback.
pub struct Ticker {
    gate: TickGate,
    source: TickSource,
    handle: Rc<Cell<Option<i32>>>,
    callback: TickSlot,
}

impl Ticker {
    /// Fixed-period timer.
    pub fn interval(period_ms: i32, mut tick: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let gate = TickGate::open();
        let gate_cb = gate.clone();
        let callback = Closure::wrap(Box::new(move || {
            if gate_cb.is_open() {
                tick();
            }
        }) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms,
            )
            .map_err(|e| anyhow!("setInterval failed: {:?}", e))?;
        Ok(Self {
            gate,
            source: TickSource::Interval,
            handle: Rc::new(Cell::new(Some(id))),
            callback: Rc::new(RefCell::new(Some(callback))),
        })
    }

    /// Loop driven by `requestAnimationFrame`; `tick` receives the time since the previous frame.
    pub fn animation_frames(mut tick: impl FnMut(Duration) + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let gate = TickGate::open();
        let handle = Rc::new(Cell::new(None::<i32>));
        let slot: TickSlot = Rc::new(RefCell::new(None));

        let gate_cb = gate.clone();
        let handle_cb = handle.clone();
        // Weak so the loop does not keep itself alive after the ticker is dropped
        let slot_cb = Rc::downgrade(&slot);
        let mut last = Instant::now();
        let callback = Closure::wrap(Box::new(move || {
            if !gate_cb.is_open() {
                return;
            }
            let now = Instant::now();
            tick(now - last);
            last = now;
            let (Some(slot), Some(w)) = (slot_cb.upgrade(), web::window()) else {
                return;
            };
            let next = slot
                .borrow()
                .as_ref()
                .and_then(|cb| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            handle_cb.set(next);
        }) as Box<dyn FnMut()>);

        let id = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("requestAnimationFrame failed: {:?}", e))?;
        handle.set(Some(id));
        *slot.borrow_mut() = Some(callback);
        Ok(Self {
            gate,
            source: TickSource::AnimationFrame,
            handle,
            callback: slot,
        })
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.gate.close();
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            match self.source {
                TickSource::Interval => w.clear_interval_with_handle(id),
                TickSource::AnimationFrame => {
                    _ = w.cancel_animation_frame(id);
                }
            }
        }
        self.callback.borrow_mut().take();
    }
}
