use crate::constants::{OVERLAY_Z_INDEX, REDUCED_MOTION_QUERY};
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn document_body(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document.body().ok_or_else(|| anyhow!("document has no body"))
}

pub fn create_element<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}> failed: {:?}", tag, e))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("<{}> has unexpected type: {:?}", tag, e))
}

/// Stack an effect layer above page content and keep it out of hit-testing.
///
/// Page-wide layers are fixed to the viewport; layers inside a target element
/// are positioned absolutely within it.
pub fn style_passive_layer(el: &web::HtmlElement, page_wide: bool) {
    let style = el.style();
    _ = style.set_property("position", if page_wide { "fixed" } else { "absolute" });
    _ = style.set_property("top", "0");
    _ = style.set_property("left", "0");
    _ = style.set_property("pointer-events", "none");
    _ = style.set_property("z-index", OVERLAY_Z_INDEX);
}

/// Drawing-surface size in CSS pixels: the target's client box, else the viewport.
pub fn surface_size(target: Option<&web::HtmlElement>) -> (u32, u32) {
    match target {
        Some(el) => (el.client_width().max(0) as u32, el.client_height().max(0) as u32),
        None => web::window()
            .map(|w| {
                let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                (width.max(0.0) as u32, height.max(0.0) as u32)
            })
            .unwrap_or((0, 0)),
    }
}

pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, target: Option<&web::HtmlElement>) {
    let (w, h) = surface_size(target);
    canvas.set_width(w);
    canvas.set_height(h);
}

/// The reduced-motion media query, when the host supports `matchMedia`.
pub fn reduced_motion_query() -> Option<web::MediaQueryList> {
    web::window()?.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

#[inline]
pub fn prefers_reduced_motion() -> bool {
    reduced_motion_query().map(|q| q.matches()).unwrap_or(false)
}
