use super::EventSubscription;
use crate::dom;
use web_sys as web;

/// Report reduced-motion preference changes; `None` when `matchMedia` is unavailable.
pub fn watch_reduced_motion(
    mut on_change: impl FnMut(bool) + 'static,
) -> Option<EventSubscription> {
    let query = dom::reduced_motion_query()?;
    let list = query.clone();
    match EventSubscription::listen(&query, "change", move |_: web::Event| {
        on_change(list.matches())
    }) {
        Ok(sub) => Some(sub),
        Err(e) => {
            log::warn!("[motion] cannot watch reduced-motion preference: {:?}", e);
            None
        }
    }
}
