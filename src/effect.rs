use crate::dom;
use crate::events::{self, EventSubscription};
use crate::trail::{ConfigError, Lifecycle, MotionPolicy};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsValue;

type Builder<R> = Rc<dyn Fn() -> anyhow::Result<R>>;

/// Binds a `Lifecycle` to the page: start/stop plus the reduced-motion watch.
pub struct Effect<R: 'static> {
    lifecycle: Rc<RefCell<Lifecycle<R>>>,
    build: Builder<R>,
    motion_watch: RefCell<Option<EventSubscription>>,
}

impl<R: 'static> Effect<R> {
    pub fn new(
        label: &'static str,
        policy: MotionPolicy,
        build: impl Fn() -> anyhow::Result<R> + 'static,
    ) -> Self {
        Self {
            lifecycle: Rc::new(RefCell::new(Lifecycle::new(label, policy))),
            build: Rc::new(build),
            motion_watch: RefCell::new(None),
        }
    }

    pub fn start(&self) {
        let respects_motion =
            self.lifecycle.borrow().policy() == MotionPolicy::RespectReducedMotion;
        let reduced = respects_motion && dom::prefers_reduced_motion();
        let build = self.build.clone();
        self.lifecycle.borrow_mut().mount(reduced, || (*build)());

        if respects_motion && self.motion_watch.borrow().is_none() {
            let lifecycle: Weak<RefCell<Lifecycle<R>>> = Rc::downgrade(&self.lifecycle);
            let build = self.build.clone();
            let watch = events::watch_reduced_motion(move |reduced| {
                if let Some(lifecycle) = lifecycle.upgrade() {
                    lifecycle
                        .borrow_mut()
                        .set_reduced_motion(reduced, || (*build)());
                }
            });
            *self.motion_watch.borrow_mut() = watch;
        }
    }

    pub fn stop(&self) {
        self.motion_watch.borrow_mut().take();
        self.lifecycle.borrow_mut().unmount();
    }
}

impl<R: 'static> Drop for Effect<R> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Read an options object; `undefined` and `null` select the defaults.
#[allow(deprecated)]
pub fn parse_options<T: DeserializeOwned + Default>(options: &JsValue) -> Result<T, ConfigError> {
    if options.is_undefined() || options.is_null() {
        return Ok(T::default());
    }
    options
        .into_serde::<T>()
        .map_err(|e| ConfigError::Options(e.to_string()))
}
