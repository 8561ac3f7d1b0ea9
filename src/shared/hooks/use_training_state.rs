use crate::domain::models::{Disclosure, StageSelection};
use crate::shared::logging;
use dioxus::prelude::*;

/// Training page state. Fresh on every mount, so leaving the page resets it.
#[derive(Clone, Copy, PartialEq)]
pub struct TrainingState {
    pub stage: Signal<StageSelection>,
    pub drive_topics: Signal<Disclosure>,
}

impl TrainingState {
    pub fn select_stage(&mut self, index: usize) {
        if self.stage.write().select(index) {
            logging::log_stage_selected(index, self.stage.read().active().name);
        }
    }

    pub fn toggle_drive_topics(&mut self) {
        let open = self.drive_topics.write().toggle();
        logging::log_disclosure_toggled("drive_topics", open);
    }
}

/// Hook to manage training page state
pub fn use_training_state() -> TrainingState {
    let stage = use_signal(StageSelection::default);
    let drive_topics = use_signal(Disclosure::default);

    TrainingState {
        stage,
        drive_topics,
    }
}
