//! # expert-gallery
//!
//! Leptos + WASM tile gallery of subject matter experts. Fetches rows from a
//! configurable list, resolves a profile photo per person (with a fixed
//! fallback asset), and renders a responsive paginated tile grid with a
//! per-tile detail dialog.
//!
//! The crate is a pure client-side presentation/aggregation layer: the record
//! store and the profile service are external collaborators reached over
//! REST. Everything browser-specific is gated behind the `hydrate` feature so
//! the aggregation pipeline, layout engine, and state modules compile and
//! test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Entry point for the host page. Initializes logging and mounts the gallery.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(app::App);
}
