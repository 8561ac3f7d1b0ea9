/// Call `on_press` for every `mousedown` in the document with whether it
/// landed inside the element with id `region_id`.
///
/// The document listener is installed once when the calling component mounts
/// and removed when it unmounts. Server-side rendering installs nothing.
#[cfg(target_arch = "wasm32")]
pub fn use_outside_pointer_down(region_id: &'static str, mut on_press: impl FnMut(bool) + 'static) {
    use crate::shared::listener::{event_within, DocumentHost, ScopedListener};
    use crate::shared::logging;
    use dioxus::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const EVENT: &str = "mousedown";

    let listener = use_hook(move || {
        let installed = DocumentHost::current().and_then(|host| {
            ScopedListener::install(host, EVENT, move |event: web_sys::Event| {
                on_press(event_within(&event, region_id));
            })
            .map_err(|e| logging::log_listener_error(EVENT, &e.to_string()))
            .ok()
        });
        Rc::new(RefCell::new(installed))
    });

    use_drop(move || {
        // Dropping the guard detaches the listener
        listener.borrow_mut().take();
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_outside_pointer_down(_region_id: &'static str, _on_press: impl FnMut(bool) + 'static) {}
