//! # fadewall-client
//!
//! Client-side support library for the Fadewall collaborative sketch app:
//! shared data shapes, the reactive connection-state cell, and typed
//! `localStorage` persistence helpers.
//!
//! Browser-only functionality (storage, the wall clock, console logging) is
//! gated behind the `hydrate` feature. Native builds compile with graceful
//! fallbacks so the crate stays testable off-browser.

pub mod state;
pub mod types;
pub mod util;

/// Install the browser panic hook and console logger.
///
/// Call once during app startup, before providing state contexts.
#[cfg(feature = "hydrate")]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
