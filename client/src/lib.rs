//! # rental-client
//!
//! Leptos pages for the room-rental marketing site: About, Information,
//! Support/FAQ, the room detail page and an unlinked SEO landing page.
//!
//! Built with `ssr` for server rendering inside `rental-server`, and with
//! `hydrate` for the WASM bundle that makes the carousel and FAQ search
//! interactive in the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod seo;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
