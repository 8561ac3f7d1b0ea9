// Domain models
// Pure Rust, no framework dependencies

pub mod navigation;
pub mod content;
pub mod ui_state;

pub use navigation::{active_items, NavItem, NavOption, Page, NAV_ITEMS, TRAINING_PREFIX};
pub use content::{
    stage_marker_offset, DriveTopic, Feature, FooterLink, Glyph, IpsgaStage, COURSE_AIMS,
    DRIVE_TOPICS, FOOTER_LINKS, HOME_FEATURES, IPSGA_STAGES, STAGE_COUNT,
};
pub use ui_state::{Disclosure, NavMenuState, StageSelection};
