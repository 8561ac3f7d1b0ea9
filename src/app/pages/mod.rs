pub mod routes;
pub mod home;
pub mod training;
pub mod stubs;

pub use routes::{use_site_navigator, App, Route, SiteNavigator};
