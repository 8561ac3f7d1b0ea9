use crate::domain::models::NavMenuState;
use crate::shared::logging;
use dioxus::prelude::*;

/// Header menu state, shared by the desktop and mobile navigation
#[derive(Clone, Copy, PartialEq)]
pub struct NavState {
    pub menu: Signal<NavMenuState>,
}

impl NavState {
    pub fn menu_open(&self) -> bool {
        self.menu.read().menu_open
    }

    pub fn dropdown_open(&self) -> bool {
        self.menu.read().dropdown_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu.write().toggle_menu();
    }

    pub fn open_dropdown(&mut self) {
        self.menu.write().open_dropdown();
    }

    pub fn close_dropdown(&mut self) {
        self.menu.write().close_dropdown();
    }

    /// Document press; `inside` tells whether it landed in the dropdown region.
    /// Writes only when it closes an open dropdown.
    pub fn pointer_down(&mut self, inside: bool) {
        if inside || !self.menu.peek().dropdown_open {
            return;
        }
        logging::log_dropdown_dismissed();
        self.menu.write().pointer_down(inside);
    }

    /// Close everything ahead of a navigation
    pub fn close_all(&mut self) {
        self.menu.write().close_all();
    }
}

/// Hook to manage header menu state
pub fn use_nav_state() -> NavState {
    let menu = use_signal(NavMenuState::default);
    NavState { menu }
}
