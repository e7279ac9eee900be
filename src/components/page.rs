//! Page fade-in: injects the `body` / `body.loaded` opacity rule and adds
//! `loaded` to `<body>` once the window has loaded.

use web_sys::Document;

use crate::error::MountError;
use crate::util::dom::{listen, window};

const LOADED_CLASS: &str = "loaded";
const LOADED_STYLE_ID: &str = "page-loaded-style";
const LOADED_STYLE: &str = "body { opacity: 0; transition: opacity 0.5s ease-in-out; } body.loaded { opacity: 1; }";

fn inject_loaded_style(document: &Document) -> Result<(), MountError> {
    if document.get_element_by_id(LOADED_STYLE_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or_else(|| MountError::MissingSelector("head".to_owned()))?;
    let style = document.create_element("style")?;
    style.set_id(LOADED_STYLE_ID);
    style.set_text_content(Some(LOADED_STYLE));
    head.append_child(&style)?;
    Ok(())
}

fn mark_loaded(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1(LOADED_CLASS);
    }
}

pub fn mount(document: &Document) -> Result<(), MountError> {
    // Without the rule the body stays visible; `loaded` is still applied.
    if let Err(err) = inject_loaded_style(document) {
        log::debug!("fade-in style not injected: {err}");
    }
    // The module may start after `load` has already fired.
    if document.ready_state() == "complete" {
        mark_loaded(document);
        return Ok(());
    }
    let doc = document.clone();
    let win = window()?;
    listen(&win, "load", move |_| mark_loaded(&doc))
}
