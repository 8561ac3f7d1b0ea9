use super::icon::Icon;
use crate::domain::models::Feature;
use dioxus::prelude::*;

/// Light panel with an optional heading
#[component]
pub fn Card(title: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "c-card",
            if let Some(title) = title {
                h3 { class: "c-card__title", "{title}" }
            }
            div {
                class: "c-card__body",
                {children}
            }
        }
    }
}

#[component]
pub fn FeatureItem(feature: Feature) -> Element {
    rsx! {
        div { class: "c-feature",
            div { class: "c-feature__icon",
                Icon { glyph: feature.glyph, size: 20 }
            }
            div {
                h4 { class: "c-feature__title", "{feature.title}" }
                p { class: "c-feature__text", "{feature.description}" }
            }
        }
    }
}

/// Bulleted list of plain strings
#[component]
pub fn BulletList(items: Vec<&'static str>) -> Element {
    rsx! {
        ul { class: "c-bullets",
            for (i, item) in items.into_iter().enumerate() {
                li { key: "{i}", class: "c-bullets__item",
                    span { class: "c-bullets__dot" }
                    span { "{item}" }
                }
            }
        }
    }
}
