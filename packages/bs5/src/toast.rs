//! Toast notifications and their fixed-position containers.
//!
//! Building a toast only assembles markup; actually displaying one is an
//! imperative Bootstrap action and goes through [`crate::bridge::show`].

use web_sys::{Element, Node};

use crate::app::App;
use crate::dom;
use crate::variant::Color;

/// A `<div class="toast" role="alert" aria-live="assertive" aria-atomic="true">`.
pub struct Toast {
    root: Element,
    header: Option<Element>,
    body: Option<Element>,
}

impl App {
    pub fn toast(&self) -> Toast {
        let root = self.element_with_class("div", "toast");
        dom::set_attr(&root, "role", "alert");
        dom::set_attr(&root, "aria-live", "assertive");
        dom::set_attr(&root, "aria-atomic", "true");
        Toast {
            root,
            header: None,
            body: None,
        }
    }
}

impl Toast {
    pub fn root(&self) -> &Element {
        &self.root
    }

    // The header always precedes the body regardless of which accessor ran
    // first, so creation prepends.
    fn ensure_header(&mut self) -> Element {
        if self.header.is_none() {
            let header = dom::create_in(&self.root, "div");
            header.set_class_name("toast-header");
            dom::prepend(&self.root, &header);
            self.header = Some(header);
        }
        self.header.clone().unwrap()
    }

    /// Add the header title (`<strong class="me-auto">`) and an optional
    /// `<small>` timestamp, creating the header if needed.
    pub fn add_header(&mut self, title: &str, timestamp: Option<&str>) -> &mut Self {
        let header = self.ensure_header();

        let strong = dom::create_in(&header, "strong");
        strong.set_class_name("me-auto");
        strong.set_text_content(Some(title));
        dom::append(&header, &strong);

        if let Some(timestamp) = timestamp {
            let small = dom::create_in(&header, "small");
            small.set_text_content(Some(timestamp));
            dom::append(&header, &small);
        }
        self
    }

    /// Append a close button to the header, creating an empty header first
    /// if none exists.
    pub fn add_close_button(&mut self) -> &mut Self {
        let header = self.ensure_header();
        let close = dom::create_in(&header, "button");
        close.set_class_name("btn-close");
        dom::set_attr(&close, "type", "button");
        dom::set_attr(&close, "data-bs-dismiss", "toast");
        dom::set_attr(&close, "aria-label", "Close");
        dom::append(&header, &close);
        self
    }

    /// Set the body content. The body element is created on first call;
    /// later calls replace its children.
    pub fn set_body(&mut self, children: &[Node]) -> &mut Self {
        if self.body.is_none() {
            let body = dom::create_in(&self.root, "div");
            body.set_class_name("toast-body");
            dom::append(&self.root, &body);
            self.body = Some(body);
        }
        let body = self.body.as_ref().unwrap();
        dom::clear_children(body);
        for child in children {
            dom::append(body, child);
        }
        self
    }

    pub fn body(&self) -> Option<&Element> {
        self.body.as_ref()
    }

    /// Colour the whole toast (`text-bg-{color}` plus `border-0`).
    pub fn set_color(&mut self, color: Color) -> &mut Self {
        dom::set_exclusive_class(
            &self.root,
            &Color::family("text-bg"),
            Some(&format!("text-bg-{color}")),
        );
        dom::add_class(&self.root, "border-0");
        self
    }

    pub fn set_autohide(&mut self, autohide: bool) -> &mut Self {
        dom::set_attr(
            &self.root,
            "data-bs-autohide",
            if autohide { "true" } else { "false" },
        );
        self
    }

    /// Delay before autohide, in milliseconds.
    pub fn set_delay(&mut self, millis: u32) -> &mut Self {
        dom::set_attr(&self.root, "data-bs-delay", &millis.to_string());
        self
    }

    pub fn set_animation(&mut self, animation: bool) -> &mut Self {
        dom::set_attr(
            &self.root,
            "data-bs-animation",
            if animation { "true" } else { "false" },
        );
        self
    }
}

/// A `<div class="toast-container position-fixed">` stacking toasts.
pub struct ToastContainer {
    root: Element,
}

impl App {
    pub fn toast_container(&self) -> ToastContainer {
        ToastContainer {
            root: self.element_with_class("div", "toast-container position-fixed"),
        }
    }
}

impl ToastContainer {
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Position the container with Bootstrap placement utilities, e.g.
    /// `"top-0 end-0 p-3"`. Each whitespace-separated token becomes a class.
    pub fn set_position(&mut self, classes: &str) -> &mut Self {
        for class in classes.split_whitespace() {
            dom::add_class(&self.root, class);
        }
        self
    }

    pub fn add_toast(&mut self, toast: &Toast) -> &mut Self {
        dom::append(&self.root, toast.root());
        self
    }
}
