use glam::Vec2;
use web_sys as web;

/// Translate a client-space point into surface space.
///
/// `origin` is the surface's top-left corner in client space; `None` means a
/// viewport-fixed surface whose space is client space.
#[inline]
pub fn relative_point(client: Vec2, origin: Option<Vec2>) -> Vec2 {
    match origin {
        Some(o) => client - o,
        None => client,
    }
}

#[inline]
pub fn element_origin(el: &web::HtmlElement) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(rect.left() as f32, rect.top() as f32)
}

/// Pointer position in the coordinate space of the effect surface.
#[inline]
pub fn pointer_surface_point(ev: &web::MouseEvent, target: Option<&web::HtmlElement>) -> Vec2 {
    let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    relative_point(client, target.map(element_origin))
}
