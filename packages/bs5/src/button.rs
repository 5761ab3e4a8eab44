//! Buttons and dropdown buttons.

use web_sys::{Element, Node};

use crate::app::App;
use crate::dom;
use crate::variant::{Color, Size};

/// A `<button type="button" class="btn btn-{color}">`.
///
/// The handle remembers its colour variant so outline toggling can swap the
/// right class pair even after other class mutations.
pub struct Button {
    root: Element,
    color: Color,
    outline: bool,
}

impl App {
    pub fn button(&self, color: Color, children: &[Node]) -> Button {
        let root = self.element_with_class("button", &format!("btn btn-{color}"));
        dom::set_attr(&root, "type", "button");
        for child in children {
            dom::append(&root, child);
        }
        Button {
            root,
            color,
            outline: false,
        }
    }
}

impl Button {
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Set the button size. `Size::Medium` clears both size classes.
    pub fn set_size(&mut self, size: Size) -> &mut Self {
        let chosen = size.suffix().map(|s| format!("btn-{s}"));
        dom::set_exclusive_class(&self.root, &["btn-sm", "btn-lg"], chosen.as_deref());
        self
    }

    /// Swap between filled (`btn-{color}`) and outline (`btn-outline-{color}`)
    /// rendering. The colour stored on the handle is authoritative.
    pub fn set_outline(&mut self, outline: bool) -> &mut Self {
        if outline == self.outline {
            return self;
        }
        let filled = format!("btn-{}", self.color);
        let outlined = format!("btn-outline-{}", self.color);
        if outline {
            dom::remove_class(&self.root, &filled);
            dom::add_class(&self.root, &outlined);
        } else {
            dom::remove_class(&self.root, &outlined);
            dom::add_class(&self.root, &filled);
        }
        self.outline = outline;
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        dom::toggle_attr(&self.root, "disabled", disabled);
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

/// A `<div class="dropdown">` wrapping a toggle button and its menu.
pub struct ButtonDropdown {
    root: Element,
    toggle: Element,
    menu: Element,
}

impl App {
    pub fn button_dropdown(&self, color: Color, label: &str) -> ButtonDropdown {
        let root = self.element_with_class("div", "dropdown");

        let toggle =
            self.element_with_class("button", &format!("btn btn-{color} dropdown-toggle"));
        dom::set_attr(&toggle, "type", "button");
        dom::set_attr(&toggle, "data-bs-toggle", "dropdown");
        dom::set_attr(&toggle, "aria-expanded", "false");
        toggle.set_text_content(Some(label));
        dom::append(&root, &toggle);

        let menu = self.element_with_class("ul", "dropdown-menu");
        dom::append(&root, &menu);

        ButtonDropdown { root, toggle, menu }
    }
}

impl ButtonDropdown {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn toggle(&self) -> &Element {
        &self.toggle
    }

    pub fn menu(&self) -> &Element {
        &self.menu
    }

    /// Append a `<li><a class="dropdown-item" href=…>text</a></li>` entry.
    pub fn add_item(&mut self, text: &str, href: &str) -> &mut Self {
        let item = dom::create_in(&self.menu, "li");
        let link = dom::create_in(&self.menu, "a");
        link.set_class_name("dropdown-item");
        dom::set_attr(&link, "href", if href.is_empty() { "#" } else { href });
        link.set_text_content(Some(text));
        dom::append(&item, &link);
        dom::append(&self.menu, &item);
        self
    }

    /// Append a `<li><hr class="dropdown-divider"></li>` separator.
    pub fn add_divider(&mut self) -> &mut Self {
        let item = dom::create_in(&self.menu, "li");
        let rule = dom::create_in(&self.menu, "hr");
        rule.set_class_name("dropdown-divider");
        dom::append(&item, &rule);
        dom::append(&self.menu, &item);
        self
    }

    /// Size the toggle button.
    pub fn set_size(&mut self, size: Size) -> &mut Self {
        let chosen = size.suffix().map(|s| format!("btn-{s}"));
        dom::set_exclusive_class(&self.toggle, &["btn-sm", "btn-lg"], chosen.as_deref());
        self
    }
}
