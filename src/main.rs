//! London Advanced Motorists website - main entry point
//!
//! Uses the dioxus::serve() pattern for dx serve compatibility when built with
//! the `server` feature, and dioxus::launch() in the browser.

use lam_observers_web::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = lam_observers_web::config::site();
    tracing::info!(
        site = %config.full_name,
        charity_number = %config.charity_number,
        "Starting LAM Observers site..."
    );

    // The site is static: the Dioxus router serves every page, no API routes
    dioxus::serve(|| async move {
        let router = dioxus::server::router(App);
        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] LAM Observers - WASM initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
