//! Trigger lookup for the document-level click listener.
//!
//! Delegation means the listener never needs re-binding when project cards
//! are injected after load; the cost is one ancestor walk per click.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

pub const TRIGGER_CLASSES: [&str; 2] = ["project-view-btn", "discord-view-btn"];

/// Minimal tree view needed for the ancestor walk.
pub trait DomNode: Sized {
    fn has_class(&self, class: &str) -> bool;
    fn parent(&self) -> Option<Self>;
}

#[cfg(feature = "browser")]
impl DomNode for web_sys::Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }
}

pub fn is_trigger(node: &impl DomNode) -> bool {
    TRIGGER_CLASSES.iter().any(|class| node.has_class(class))
}

/// Nearest trigger at or above `start`.
pub fn nearest_trigger<N: DomNode>(start: N) -> Option<N> {
    let mut current = Some(start);
    while let Some(node) = current {
        if is_trigger(&node) {
            return Some(node);
        }
        current = node.parent();
    }
    None
}
