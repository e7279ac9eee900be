//! Mobile navigation toggle.

use web_sys::Document;

use crate::error::MountError;
use crate::util::dom::{html_element_by_id, listen, query_all};

pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
const NAV_LINK_SELECTOR: &str = ".nav-link";
const ACTIVE_CLASS: &str = "active";

pub fn mount(document: &Document) -> Result<(), MountError> {
    let toggle = html_element_by_id(document, NAV_TOGGLE_ID)?;
    let menu = html_element_by_id(document, NAV_MENU_ID)?;

    {
        let (toggle_el, menu) = (toggle.clone(), menu.clone());
        listen(&toggle, "click", move |_| {
            let _ = menu.class_list().toggle(ACTIVE_CLASS);
            let _ = toggle_el.class_list().toggle(ACTIVE_CLASS);
        })?;
    }

    // Picking a destination collapses the menu.
    for link in query_all(document, NAV_LINK_SELECTOR)? {
        let (toggle, menu) = (toggle.clone(), menu.clone());
        listen(&link, "click", move |_| {
            let _ = menu.class_list().remove_1(ACTIVE_CLASS);
            let _ = toggle.class_list().remove_1(ACTIVE_CLASS);
        })?;
    }
    Ok(())
}
