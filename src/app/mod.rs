pub mod components;
pub mod layouts;
pub mod pages;

// Re-export the site root component
pub use pages::routes::App;
