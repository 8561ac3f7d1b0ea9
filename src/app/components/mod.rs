pub mod button;
pub mod card;
pub mod icon;
pub mod stage_selector;
pub mod drive_topics;

pub use button::{Button, ButtonVariant};
pub use card::{BulletList, Card, FeatureItem};
pub use icon::Icon;
pub use stage_selector::StageSelector;
pub use drive_topics::DriveTopics;
