use super::EventSubscription;
use crate::input;
use anyhow::anyhow;
use glam::Vec2;
use web_sys as web;

/// Deliver pointer moves over `listen_on` as surface-space points.
///
/// `surface_target` is the element the drawing surface lives in; `None`
/// means a viewport-fixed surface.
pub fn wire_pointer_move(
    listen_on: &web::HtmlElement,
    surface_target: Option<web::HtmlElement>,
    mut on_move: impl FnMut(Vec2) + 'static,
) -> anyhow::Result<EventSubscription> {
    EventSubscription::listen(listen_on, "pointermove", move |ev: web::PointerEvent| {
        let pos = input::pointer_surface_point(&ev, surface_target.as_ref());
        if pos.is_finite() {
            on_move(pos);
        }
    })
}

pub fn wire_window_resize(
    mut on_resize: impl FnMut() + 'static,
) -> anyhow::Result<EventSubscription> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    EventSubscription::listen(&window, "resize", move |_: web::Event| on_resize())
}
