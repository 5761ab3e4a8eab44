//! Modal dialogs.

use web_sys::{Element, Node};

use crate::app::App;
use crate::dom;
use crate::variant::ModalSize;

/// A `<div class="modal fade">` with its nested dialog and content.
///
/// Header, body and footer are lazily appended to the content in whatever
/// order they are first requested, each created at most once.
pub struct Modal {
    root: Element,
    dialog: Element,
    content: Element,
    header: Option<Element>,
    body: Option<Element>,
    footer: Option<Element>,
}

impl App {
    pub fn modal(&self, id: &str) -> Modal {
        let root = self.element_with_class("div", "modal fade");
        dom::set_attr(&root, "id", id);
        dom::set_attr(&root, "tabindex", "-1");
        dom::set_attr(&root, "aria-hidden", "true");

        let dialog = self.element_with_class("div", "modal-dialog");
        dom::append(&root, &dialog);

        let content = self.element_with_class("div", "modal-content");
        dom::append(&dialog, &content);

        Modal {
            root,
            dialog,
            content,
            header: None,
            body: None,
            footer: None,
        }
    }
}

impl Modal {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn dialog(&self) -> &Element {
        &self.dialog
    }

    pub fn content(&self) -> &Element {
        &self.content
    }

    /// Size the dialog. Clears the size family first, so any call overrides
    /// the previous one; `ModalSize::Default` leaves no size class.
    pub fn set_size(&mut self, size: ModalSize) -> &mut Self {
        dom::set_exclusive_class(
            &self.dialog,
            &["modal-sm", "modal-lg", "modal-xl"],
            size.class(),
        );
        self
    }

    pub fn set_centered(&mut self, centered: bool) -> &mut Self {
        dom::toggle_class(&self.dialog, "modal-dialog-centered", centered);
        self
    }

    pub fn set_scrollable(&mut self, scrollable: bool) -> &mut Self {
        dom::toggle_class(&self.dialog, "modal-dialog-scrollable", scrollable);
        self
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) -> &mut Self {
        dom::toggle_class(&self.dialog, "modal-fullscreen", fullscreen);
        self
    }

    /// Create-or-return the `modal-header`.
    pub fn header(&mut self) -> ModalHeader {
        if self.header.is_none() {
            let header = dom::create_in(&self.content, "div");
            header.set_class_name("modal-header");
            dom::append(&self.content, &header);
            self.header = Some(header);
        }
        ModalHeader {
            element: self.header.clone().unwrap(),
        }
    }

    /// Create-or-return the `modal-body`.
    pub fn body(&mut self) -> ModalBody {
        if self.body.is_none() {
            let body = dom::create_in(&self.content, "div");
            body.set_class_name("modal-body");
            dom::append(&self.content, &body);
            self.body = Some(body);
        }
        ModalBody {
            element: self.body.clone().unwrap(),
        }
    }

    /// Create-or-return the `modal-footer`.
    pub fn footer(&mut self) -> ModalFooter {
        if self.footer.is_none() {
            let footer = dom::create_in(&self.content, "div");
            footer.set_class_name("modal-footer");
            dom::append(&self.content, &footer);
            self.footer = Some(footer);
        }
        ModalFooter {
            element: self.footer.clone().unwrap(),
        }
    }
}

pub struct ModalHeader {
    element: Element,
}

impl ModalHeader {
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Prepend an `<h5 class="modal-title">`.
    pub fn add_title(&mut self, text: &str) -> &mut Self {
        let title = dom::create_in(&self.element, "h5");
        title.set_class_name("modal-title");
        title.set_text_content(Some(text));
        dom::prepend(&self.element, &title);
        self
    }

    /// Append a close button wired to `data-bs-dismiss="modal"`.
    pub fn add_close_button(&mut self) -> &mut Self {
        let close = dom::create_in(&self.element, "button");
        close.set_class_name("btn-close");
        dom::set_attr(&close, "type", "button");
        dom::set_attr(&close, "data-bs-dismiss", "modal");
        dom::set_attr(&close, "aria-label", "Close");
        dom::append(&self.element, &close);
        self
    }

    pub fn add_child(&mut self, child: &Node) -> &mut Self {
        dom::append(&self.element, child);
        self
    }
}

pub struct ModalBody {
    element: Element,
}

impl ModalBody {
    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn add_child(&mut self, child: &Node) -> &mut Self {
        dom::append(&self.element, child);
        self
    }

    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.element.set_text_content(Some(text));
        self
    }
}

pub struct ModalFooter {
    element: Element,
}

impl ModalFooter {
    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn add_child(&mut self, child: &Node) -> &mut Self {
        dom::append(&self.element, child);
        self
    }
}
