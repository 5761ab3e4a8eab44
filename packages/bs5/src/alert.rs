//! Contextual alert boxes.

use web_sys::{Element, Node};

use crate::app::App;
use crate::dom;
use crate::variant::Color;

/// An `<div class="alert alert-{color}" role="alert">` fragment.
pub struct Alert {
    root: Element,
}

impl App {
    /// Build an alert of the given colour with `children` appended in order.
    pub fn alert(&self, color: Color, children: &[Node]) -> Alert {
        let root = self.element_with_class("div", &format!("alert alert-{color}"));
        dom::set_attr(&root, "role", "alert");
        for child in children {
            dom::append(&root, child);
        }
        Alert { root }
    }
}

impl Alert {
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Make the alert dismissible: fade/show classes plus a close button
    /// wired to Bootstrap's alert dismiss behaviour, appended last.
    ///
    /// Not idempotent: calling this twice appends a second close button.
    pub fn make_dismissible(&mut self) -> &mut Self {
        dom::add_class(&self.root, "alert-dismissible");
        dom::add_class(&self.root, "fade");
        dom::add_class(&self.root, "show");

        let close = dom::create_in(&self.root, "button");
        close.set_class_name("btn-close");
        dom::set_attr(&close, "type", "button");
        dom::set_attr(&close, "data-bs-dismiss", "alert");
        dom::set_attr(&close, "aria-label", "Close");
        dom::append(&self.root, &close);
        self
    }

    pub fn add_event_listener(
        &self,
        event: &str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> &Self {
        dom::listen(&self.root, event, callback);
        self
    }
}
