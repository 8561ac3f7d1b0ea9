use super::icon::Icon;
use crate::domain::models::{Glyph, DRIVE_TOPICS};
use crate::shared::hooks::TrainingState;
use dioxus::prelude::*;

/// Collapsible list of what each observed drive covers.
/// The whole list is gated by one flag; closed means not rendered at all.
#[component]
pub fn DriveTopics(state: TrainingState) -> Element {
    let mut state = state;
    let open = state.drive_topics.read().is_open();

    rsx! {
        div { class: "c-accordion",
            button {
                class: "c-accordion__toggle",
                r#type: "button",
                "aria-expanded": open,
                onclick: move |_| state.toggle_drive_topics(),
                h3 { class: "c-accordion__title", "Drive Topics" }
                Icon {
                    glyph: Glyph::ChevronUp,
                    size: 24,
                    class: if open { "c-accordion__chevron" } else { "c-accordion__chevron is-flipped" },
                }
            }

            if open {
                div { class: "c-accordion__body",
                    for (idx, topic) in DRIVE_TOPICS.iter().enumerate() {
                        div { key: "{idx}", class: "c-topic",
                            h4 { class: "c-topic__title", "{topic.title}" }
                            ul { class: "c-topic__items",
                                for (i, item) in topic.items.iter().enumerate() {
                                    li { key: "{i}", class: "c-topic__item",
                                        span { class: "c-topic__bullet" }
                                        span { "{item}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
