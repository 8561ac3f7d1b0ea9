use crate::shared::logging;
use dioxus::prelude::*;
use std::rc::Rc;

/// Scroll the document back to the top-left corner
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Nothing to scroll when rendering on the server
#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_top() {}

/// What a route change does to the scroll position, called with the new path.
///
/// Looked up as context; without one the window is scrolled to the top.
#[derive(Clone)]
pub struct ScrollReset(Rc<dyn Fn(&str)>);

impl ScrollReset {
    pub fn new(reset: impl Fn(&str) + 'static) -> Self {
        Self(Rc::new(reset))
    }

    pub fn window() -> Self {
        Self::new(|_| scroll_to_top())
    }

    fn reset(&self, path: &str) {
        (self.0)(path)
    }
}

/// Reset scroll whenever `path` changes (and on first mount)
pub fn use_scroll_reset(path: String) {
    let scroll = use_hook(|| try_consume_context::<ScrollReset>().unwrap_or_else(ScrollReset::window));

    use_effect(use_reactive((&path,), move |(path,)| {
        scroll.reset(&path);
        logging::log_route_change(&path);
    }));
}
