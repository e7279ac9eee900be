//! # portfolio-web
//!
//! WASM page script for the static portfolio site: navigation, scroll
//! effects, theme persistence, project filtering, the hero typing effect,
//! and the attribute-driven project detail dialog.
//!
//! Domain logic (`modal`, `util`, `config`) compiles and tests natively.
//! DOM wiring (`components`, `modal::dom`, `util::dom`) needs the `browser`
//! feature, e.g. `wasm-pack build --target web -- --features browser`.

#[cfg(feature = "browser")]
pub mod components;
pub mod config;
pub mod error;
pub mod modal;
pub mod util;

/// WASM entry point: install logging, read config, mount every component.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    let document = match util::dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::warn!("page script inactive: {err}");
            return;
        }
    };
    let config = config::SiteConfig::load(&document);
    components::mount_all(&document, &config);
}
