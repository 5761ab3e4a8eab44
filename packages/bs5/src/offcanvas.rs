//! Offcanvas side panels.

use web_sys::{Element, Node};

use crate::app::App;
use crate::dom;
use crate::variant::{Backdrop, OffcanvasPlacement};

/// A `<div class="offcanvas offcanvas-{placement}">`.
///
/// Placement is fixed at construction. Header (with title and close button)
/// and body are created eagerly; the behavioural knobs are attribute-backed
/// `data-bs-*` settings read by Bootstrap's offcanvas plugin.
pub struct Offcanvas {
    root: Element,
    header: Element,
    title: Element,
    body: Element,
}

impl App {
    pub fn offcanvas(&self, id: &str, placement: OffcanvasPlacement) -> Offcanvas {
        let root = self.element_with_class(
            "div",
            &format!("offcanvas offcanvas-{}", placement.as_str()),
        );
        dom::set_attr(&root, "id", id);
        dom::set_attr(&root, "tabindex", "-1");

        let title_id = format!("{id}Label");
        dom::set_attr(&root, "aria-labelledby", &title_id);

        let header = self.element_with_class("div", "offcanvas-header");
        let title = self.element_with_class("h5", "offcanvas-title");
        dom::set_attr(&title, "id", &title_id);
        dom::append(&header, &title);

        let close = self.element_with_class("button", "btn-close");
        dom::set_attr(&close, "type", "button");
        dom::set_attr(&close, "data-bs-dismiss", "offcanvas");
        dom::set_attr(&close, "aria-label", "Close");
        dom::append(&header, &close);
        dom::append(&root, &header);

        let body = self.element_with_class("div", "offcanvas-body");
        dom::append(&root, &body);

        Offcanvas {
            root,
            header,
            title,
            body,
        }
    }
}

impl Offcanvas {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn header(&self) -> &Element {
        &self.header
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn set_title(&mut self, text: &str) -> &mut Self {
        self.title.set_text_content(Some(text));
        self
    }

    pub fn add_body_child(&mut self, child: &Node) -> &mut Self {
        dom::append(&self.body, child);
        self
    }

    /// Keep the page scrollable while the panel is open.
    pub fn set_body_scroll(&mut self, scroll: bool) -> &mut Self {
        dom::set_attr(&self.root, "data-bs-scroll", bool_str(scroll));
        self
    }

    pub fn set_backdrop(&mut self, backdrop: Backdrop) -> &mut Self {
        dom::set_attr(&self.root, "data-bs-backdrop", backdrop.as_str());
        self
    }

    /// Whether the Escape key closes the panel.
    pub fn set_keyboard(&mut self, keyboard: bool) -> &mut Self {
        dom::set_attr(&self.root, "data-bs-keyboard", bool_str(keyboard));
        self
    }

    /// Dark theming: sets `data-bs-theme` and the `text-bg-dark` class, both
    /// reverted when called with `false`.
    pub fn set_dark(&mut self, dark: bool) -> &mut Self {
        dom::set_attr(&self.root, "data-bs-theme", if dark { "dark" } else { "light" });
        dom::toggle_class(&self.root, "text-bg-dark", dark);
        self
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
