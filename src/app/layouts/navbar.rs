use crate::app::components::Icon;
use crate::app::pages::routes::{use_site_navigator, Route};
use crate::config::site;
use crate::domain::models::{Glyph, NavItem, Page, NAV_ITEMS};
use crate::shared::hooks::{use_outside_pointer_down, NavState};
use dioxus::prelude::*;

/// Element id of the training dropdown region, used for outside-press detection
pub const DROPDOWN_REGION_ID: &str = "nav-training-dropdown";

fn link_class(active: bool) -> &'static str {
    if active {
        "c-navbar__link is-active"
    } else {
        "c-navbar__link"
    }
}

/// Fixed site header: logo, desktop links with the training dropdown, and the
/// collapsible mobile menu
#[component]
pub fn Navbar() -> Element {
    let mut nav = use_context::<NavState>();
    let site_nav = use_site_navigator();
    let current_path = use_route::<Route>().to_string();

    use_outside_pointer_down(DROPDOWN_REGION_ID, move |inside| nav.pointer_down(inside));

    let menu_open = nav.menu_open();
    let config = site();

    rsx! {
        header { class: "c-navbar",
            div { class: "c-navbar__inner",
                div {
                    class: "c-navbar__brand",
                    onclick: move |_| site_nav.go(Page::Home),
                    div { class: "c-logo",
                        "LAM"
                        br {}
                        span { class: "c-logo__sub", "OBSERVERS" }
                    }
                    span { class: "c-navbar__title", "{config.short_name}" }
                }

                nav { class: "c-navbar__links",
                    for item in NAV_ITEMS.iter() {
                        if item.has_dropdown() {
                            DesktopDropdown {
                                key: "{item.id}",
                                item: *item,
                                active: item.is_active(&current_path),
                            }
                        } else {
                            DesktopLink {
                                key: "{item.id}",
                                item: *item,
                                active: item.is_active(&current_path),
                            }
                        }
                    }
                    button {
                        class: "c-navbar__search",
                        r#type: "button",
                        "aria-label": "Search",
                        Icon { glyph: Glyph::Search, size: 18 }
                    }
                }

                div { class: "c-navbar__mobile-toggle",
                    button {
                        r#type: "button",
                        "aria-label": "Toggle menu",
                        "aria-expanded": menu_open,
                        onclick: move |_| nav.toggle_menu(),
                        Icon {
                            glyph: if menu_open { Glyph::Close } else { Glyph::Menu },
                            size: 24,
                        }
                    }
                }
            }

            MobileMenu { open: menu_open }
        }
    }
}

#[component]
fn DesktopLink(item: NavItem, active: bool) -> Element {
    let site_nav = use_site_navigator();

    rsx! {
        div { class: "c-navbar__item",
            button {
                class: link_class(active),
                r#type: "button",
                onclick: move |_| site_nav.go(item.page),
                "{item.name}"
            }
        }
    }
}

/// Parent entry with a hover dropdown. Clicking the parent itself does not navigate.
#[component]
fn DesktopDropdown(item: NavItem, active: bool) -> Element {
    let mut nav = use_context::<NavState>();
    let site_nav = use_site_navigator();
    let open = nav.dropdown_open();

    rsx! {
        div {
            id: DROPDOWN_REGION_ID,
            class: "c-navbar__item",
            onmouseenter: move |_| nav.open_dropdown(),
            onmouseleave: move |_| nav.close_dropdown(),
            button {
                class: link_class(active),
                r#type: "button",
                "aria-haspopup": "true",
                "aria-expanded": open,
                "{item.name}"
                Icon {
                    glyph: Glyph::ChevronDown,
                    size: 14,
                    class: if open { "c-navbar__chevron is-flipped" } else { "c-navbar__chevron" },
                }
            }

            if open {
                div { class: "c-navbar__dropdown",
                    for option in item.dropdown.iter() {
                        button {
                            key: "{option.id}",
                            class: "c-navbar__dropdown-item",
                            r#type: "button",
                            onclick: move |_| site_nav.go(option.page),
                            "{option.name}"
                        }
                    }
                }
            }
        }
    }
}

/// Stacked menu for small screens. Every entry navigates and closes the menu.
#[component]
fn MobileMenu(open: bool) -> Element {
    let site_nav = use_site_navigator();

    rsx! {
        div {
            class: if open { "c-mobile-menu is-open" } else { "c-mobile-menu" },
            "aria-hidden": !open,
            for item in NAV_ITEMS.iter() {
                div { key: "{item.id}",
                    button {
                        class: "c-mobile-menu__item",
                        r#type: "button",
                        onclick: move |_| site_nav.go(item.page),
                        "{item.name}"
                    }
                    if item.has_dropdown() {
                        div { class: "c-mobile-menu__sub",
                            for option in item.dropdown.iter() {
                                button {
                                    key: "{option.id}",
                                    class: "c-mobile-menu__sub-item",
                                    r#type: "button",
                                    onclick: move |_| site_nav.go(option.page),
                                    "{option.name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
