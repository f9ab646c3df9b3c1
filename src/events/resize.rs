use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Watches one element's box size; disconnects when dropped.
pub struct ResizeWatch {
    observer: web::ResizeObserver,
    _callback: Closure<dyn FnMut()>,
}

/// Call `on_resize` whenever `target` changes size, including once right after attaching.
pub fn watch_element_resize(
    target: &web::Element,
    mut on_resize: impl FnMut() + 'static,
) -> anyhow::Result<ResizeWatch> {
    let callback = Closure::wrap(Box::new(move || on_resize()) as Box<dyn FnMut()>);
    let observer = web::ResizeObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("ResizeObserver unavailable: {:?}", e))?;
    observer.observe(target);
    Ok(ResizeWatch {
        observer,
        _callback: callback,
    })
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
