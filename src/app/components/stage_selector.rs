use crate::domain::models::{stage_marker_offset, IPSGA_STAGES};
use crate::shared::hooks::TrainingState;
use dioxus::prelude::*;

/// IPSGA tab row with a single joined detail panel below it
#[component]
pub fn StageSelector(state: TrainingState) -> Element {
    let mut state = state;
    let selection = *state.stage.read();
    let active = selection.active();
    let marker_left = stage_marker_offset(selection.index());

    rsx! {
        div { class: "c-stages",
            div { class: "c-stages__tabs", role: "tablist",
                for (idx, stage) in IPSGA_STAGES.iter().enumerate() {
                    button {
                        key: "{idx}",
                        class: if selection.is_active(idx) { "c-stages__tab is-active" } else { "c-stages__tab" },
                        role: "tab",
                        "aria-selected": selection.is_active(idx),
                        onclick: move |_| state.select_stage(idx),
                        span { class: "c-stages__letter", "{stage.letter}" }
                        span { class: "c-stages__name", "{stage.name}" }
                    }
                }
            }

            div { class: "c-stages__panel-wrap",
                div {
                    class: "c-stages__marker",
                    style: "left: calc({marker_left}% - 8px);",
                }
                div { class: "c-stages__panel", role: "tabpanel",
                    div { class: "c-stages__panel-head",
                        div { class: "c-stages__badge", "{active.letter}" }
                        h3 { class: "c-stages__title", "{active.name}" }
                    }
                    p { class: "c-stages__content", "{active.content}" }
                }
            }
        }
    }
}
