// Custom Dioxus hooks
pub mod use_nav_state;
pub mod use_training_state;
pub mod use_outside_click;
pub mod use_scroll_reset;

pub use use_nav_state::{use_nav_state, NavState};
pub use use_training_state::{use_training_state, TrainingState};
pub use use_outside_click::use_outside_pointer_down;
pub use use_scroll_reset::{scroll_to_top, use_scroll_reset, ScrollReset};
