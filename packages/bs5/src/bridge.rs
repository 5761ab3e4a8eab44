//! Host bridge to Bootstrap's imperative API.
//!
//! Bootstrap drives most behaviour off declarative `data-bs-*` attributes,
//! but a few actions (showing a toast, opening a modal from code) only exist
//! as JavaScript calls. This module binds those to the page's `bootstrap`
//! global; without that global every call is a no-op.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/src/js/bootstrap.js")]
extern "C" {
    #[wasm_bindgen(js_name = "showComponent")]
    fn show_component(kind: &str, id: &str) -> bool;

    #[wasm_bindgen(js_name = "hideComponent")]
    fn hide_component(kind: &str, id: &str) -> bool;
}

/// The Bootstrap controller classes reachable through the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Toast,
    Modal,
    Offcanvas,
}

impl ComponentKind {
    fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Toast => "Toast",
            ComponentKind::Modal => "Modal",
            ComponentKind::Offcanvas => "Offcanvas",
        }
    }
}

/// Show the component with the given element id, e.g.
/// `bridge::show(ComponentKind::Toast, "saved-toast")`.
pub fn show(kind: ComponentKind, element_id: &str) {
    if !show_component(kind.as_str(), element_id) {
        tracing::trace!(kind = kind.as_str(), element_id, "bootstrap global missing, show is a no-op");
    }
}

/// Hide the component with the given element id.
pub fn hide(kind: ComponentKind, element_id: &str) {
    if !hide_component(kind.as_str(), element_id) {
        tracing::trace!(kind = kind.as_str(), element_id, "bootstrap global missing, hide is a no-op");
    }
}
