//! # portfolio-page
//!
//! WASM controller for a static portfolio page: theme toggle with a
//! persisted preference, scroll-spy navigation, fade-in reveal, mobile menu,
//! a local-only contact form, and decorative particles.
//!
//! Decision logic lives in `state` and `util` and builds natively for tests.
//! The `hydrate` feature adds the browser wiring in `controllers` and the
//! `start` entry point.

pub mod config;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod boot;
#[cfg(feature = "hydrate")]
pub mod controllers;

/// WASM entry point: install the panic hook and console logger, then boot.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        // The host page already installed a logger; it receives this line.
        log::debug!("console logger not installed: {e}");
    }
    boot::start();
}
