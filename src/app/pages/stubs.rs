//! Pages that have a route but no content yet, plus the not-found view.

use super::routes::use_site_navigator;
use crate::app::components::{Button, ButtonVariant};
use crate::domain::models::{Glyph, Page};
use crate::shared::logging;
use dioxus::prelude::*;

#[component]
fn PageStub(title: String, lead: String) -> Element {
    let site_nav = use_site_navigator();

    rsx! {
        section { class: "c-hero c-hero--compact",
            div { class: "c-hero__overlay" }
            h1 { class: "c-hero__title", "{title}" }
        }
        main { class: "c-page",
            section { class: "c-section c-section--narrow",
                p { class: "c-prose", "{lead}" }
                div { class: "c-cta-row",
                    Button {
                        variant: ButtonVariant::Outline,
                        trailing: Glyph::ArrowRight,
                        onclick: move |_| site_nav.go(Page::Home),
                        "Back to the home page"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Centres() -> Element {
    rsx! {
        PageStub {
            title: "Drive Centres",
            lead: "Details of our drive centres across London are coming soon.",
        }
    }
}

#[component]
pub fn Events() -> Element {
    rsx! {
        PageStub {
            title: "Events",
            lead: "Our calendar of group events and social evenings is coming soon.",
        }
    }
}

#[component]
pub fn Resources() -> Element {
    rsx! {
        PageStub {
            title: "Resources",
            lead: "Member resources and downloads are coming soon.",
        }
    }
}

/// Catch-all for paths with no registered page
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    use_hook(|| logging::log_unknown_route(&path));

    rsx! {
        PageStub {
            title: "Page not found",
            lead: "There is nothing at {path}. It may have moved, or the link may be out of date.",
        }
    }
}
