//! Responsive navbar.

use web_sys::{Element, Node};

use crate::app::App;
use crate::dom;

/// A `<nav class="navbar navbar-expand-lg bg-body-tertiary">`.
///
/// The fluid container holds, in document order: the toggler button, the
/// brand link, and the collapse wrapper enclosing the nav list. Items added
/// later land in the nav list. The collapse id is minted per navbar
/// (`{id}-collapse`), so several navbars can share a page.
pub struct Navbar {
    root: Element,
    container: Element,
    brand: Element,
    list: Element,
}

impl App {
    pub fn navbar(&self, id: &str, brand_text: &str, brand_href: &str) -> Navbar {
        let root = self.element_with_class("nav", "navbar navbar-expand-lg bg-body-tertiary");
        dom::set_attr(&root, "id", id);

        let container = self.element_with_class("div", "container-fluid");
        dom::append(&root, &container);

        let collapse_id = format!("{id}-collapse");

        let toggler = self.element_with_class("button", "navbar-toggler");
        dom::set_attr(&toggler, "type", "button");
        dom::set_attr(&toggler, "data-bs-toggle", "collapse");
        dom::set_attr(&toggler, "data-bs-target", &format!("#{collapse_id}"));
        dom::set_attr(&toggler, "aria-controls", &collapse_id);
        dom::set_attr(&toggler, "aria-expanded", "false");
        dom::set_attr(&toggler, "aria-label", "Toggle navigation");
        let icon = self.element_with_class("span", "navbar-toggler-icon");
        dom::append(&toggler, &icon);
        dom::append(&container, &toggler);

        let brand = self.element_with_class("a", "navbar-brand");
        dom::set_attr(&brand, "href", if brand_href.is_empty() { "#" } else { brand_href });
        brand.set_text_content(Some(brand_text));
        dom::append(&container, &brand);

        let collapse = self.element_with_class("div", "collapse navbar-collapse");
        dom::set_attr(&collapse, "id", &collapse_id);
        dom::append(&container, &collapse);

        let list = self.element_with_class("ul", "navbar-nav");
        dom::append(&collapse, &list);

        Navbar {
            root,
            container,
            brand,
            list,
        }
    }
}

impl Navbar {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    pub fn brand(&self) -> &Element {
        &self.brand
    }

    pub fn list(&self) -> &Element {
        &self.list
    }

    /// Append a `<li class="nav-item"><a class="nav-link">…</a></li>`.
    pub fn add_item(&mut self, text: &str, href: &str, active: bool) -> &mut Self {
        let item = dom::create_in(&self.list, "li");
        item.set_class_name("nav-item");
        let link = dom::create_in(&self.list, "a");
        link.set_class_name("nav-link");
        if active {
            dom::add_class(&link, "active");
            dom::set_attr(&link, "aria-current", "page");
        }
        dom::set_attr(&link, "href", if href.is_empty() { "#" } else { href });
        link.set_text_content(Some(text));
        dom::append(&item, &link);
        dom::append(&self.list, &item);
        self
    }

    /// Append arbitrary content wrapped in a `nav-item` list entry.
    pub fn add_item_with_node(&mut self, child: &Node) -> &mut Self {
        let item = dom::create_in(&self.list, "li");
        item.set_class_name("nav-item");
        dom::append(&item, child);
        dom::append(&self.list, &item);
        self
    }
}
