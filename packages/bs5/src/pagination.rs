//! Pagination lists.

use web_sys::{Element, Node};

use crate::app::App;
use crate::dom;
use crate::variant::{Alignment, Size};

/// A `<nav>` wrapping a `<ul class="pagination">`.
pub struct Pagination {
    root: Element,
    list: Element,
}

impl App {
    pub fn pagination(&self, label: &str) -> Pagination {
        let root = self.element("nav");
        dom::set_attr(&root, "aria-label", label);
        let list = self.element_with_class("ul", "pagination");
        dom::append(&root, &list);
        Pagination { root, list }
    }
}

impl Pagination {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn list(&self) -> &Element {
        &self.list
    }

    /// The primitive: append a `<li class="page-item">` wrapping an
    /// `<a class="page-link">` with the given text.
    pub fn add_item(&mut self, text: &str, href: &str) -> PageItem {
        let item = dom::create_in(&self.list, "li");
        item.set_class_name("page-item");
        let link = dom::create_in(&self.list, "a");
        link.set_class_name("page-link");
        dom::set_attr(&link, "href", if href.is_empty() { "#" } else { href });
        link.set_text_content(Some(text));
        dom::append(&item, &link);
        dom::append(&self.list, &item);
        PageItem { item, link }
    }

    /// Like [`Pagination::add_item`] but with arbitrary link content, for
    /// icon-carrying items.
    pub fn add_item_with_node(&mut self, child: &Node, href: &str) -> PageItem {
        let item = dom::create_in(&self.list, "li");
        item.set_class_name("page-item");
        let link = dom::create_in(&self.list, "a");
        link.set_class_name("page-link");
        dom::set_attr(&link, "href", if href.is_empty() { "#" } else { href });
        dom::append(&link, child);
        dom::append(&item, &link);
        dom::append(&self.list, &item);
        PageItem { item, link }
    }

    pub fn add_previous(&mut self, href: &str, disabled: bool) -> PageItem {
        let mut item = self.add_item("Previous", href);
        item.set_disabled(disabled);
        item
    }

    pub fn add_next(&mut self, href: &str, disabled: bool) -> PageItem {
        let mut item = self.add_item("Next", href);
        item.set_disabled(disabled);
        item
    }

    pub fn add_page(&mut self, number: u32, href: &str, active: bool) -> PageItem {
        let mut item = self.add_item(&number.to_string(), href);
        item.set_active(active);
        item
    }

    /// A disabled `...` gap item.
    pub fn add_ellipsis(&mut self) -> PageItem {
        let mut item = self.add_item("...", "#");
        item.set_disabled(true);
        item
    }

    pub fn set_size(&mut self, size: Size) -> &mut Self {
        let chosen = size.suffix().map(|s| format!("pagination-{s}"));
        dom::set_exclusive_class(
            &self.list,
            &["pagination-sm", "pagination-lg"],
            chosen.as_deref(),
        );
        self
    }

    /// Align the list. `Alignment::Start` is the Bootstrap default and maps
    /// to no class.
    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        dom::set_exclusive_class(&self.list, &Alignment::FAMILY, alignment.class());
        self
    }
}

/// One pagination entry with an orthogonal active/disabled two-bit state.
pub struct PageItem {
    item: Element,
    link: Element,
}

impl PageItem {
    pub fn element(&self) -> &Element {
        &self.item
    }

    pub fn link(&self) -> &Element {
        &self.link
    }

    pub fn set_active(&mut self, active: bool) -> &mut Self {
        if dom::has_class(&self.item, "active") == active {
            return self;
        }
        dom::toggle_class(&self.item, "active", active);
        if active {
            dom::set_attr(&self.item, "aria-current", "page");
        } else {
            self.item.remove_attribute("aria-current").unwrap();
        }
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        if dom::has_class(&self.item, "disabled") == disabled {
            return self;
        }
        dom::toggle_class(&self.item, "disabled", disabled);
        if disabled {
            dom::set_attr(&self.link, "tabindex", "-1");
            dom::set_attr(&self.link, "aria-disabled", "true");
        } else {
            self.link.remove_attribute("tabindex").unwrap();
            self.link.remove_attribute("aria-disabled").unwrap();
        }
        self
    }
}
