//! Small web-sys helpers shared by the page components.
//!
//! Browser-only; callers are compiled with the `browser` feature.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::error::MountError;

pub fn window() -> Result<Window, MountError> {
    web_sys::window().ok_or(MountError::NoDocument)
}

pub fn document() -> Result<Document, MountError> {
    window()?.document().ok_or(MountError::NoDocument)
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, MountError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement(id.to_owned()))
}

pub fn html_element_by_id(document: &Document, id: &str) -> Result<HtmlElement, MountError> {
    element_by_id(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::MissingElement(id.to_owned()))
}

pub fn query(document: &Document, selector: &str) -> Result<HtmlElement, MountError> {
    document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| MountError::MissingSelector(selector.to_owned()))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, MountError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Element the event was dispatched to, or the parent element for text
/// node targets.
pub fn event_element(event: &Event) -> Option<Element> {
    let target = event.target()?;
    match target.dyn_into::<Element>() {
        Ok(element) => Some(element),
        Err(other) => other.dyn_into::<web_sys::Node>().ok()?.parent_element(),
    }
}

/// `""` clears the inline value so the stylesheet decides.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let style = element.style();
    let result = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };
    if let Err(err) = result {
        log::warn!("failed to set {property}: {err:?}");
    }
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), MountError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Observe `targets`; `on_visible` runs each time one starts intersecting.
/// The observer lives for the rest of the page.
pub fn observe_intersections<F>(
    targets: &[HtmlElement],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_visible: F,
) -> Result<IntersectionObserver, MountError>
where
    F: FnMut(Element, &IntersectionObserver) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(entry.target(), &observer);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}
