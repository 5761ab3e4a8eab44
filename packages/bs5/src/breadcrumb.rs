//! Breadcrumb trails.

use web_sys::Element;

use crate::app::App;
use crate::dom;

/// A `<nav aria-label="breadcrumb">` wrapping an `<ol class="breadcrumb">`.
pub struct Breadcrumb {
    root: Element,
    list: Element,
}

impl App {
    pub fn breadcrumb(&self) -> Breadcrumb {
        let root = self.element("nav");
        dom::set_attr(&root, "aria-label", "breadcrumb");
        let list = self.element_with_class("ol", "breadcrumb");
        dom::append(&root, &list);
        Breadcrumb { root, list }
    }
}

impl Breadcrumb {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn list(&self) -> &Element {
        &self.list
    }

    /// Append an item. The active item is text-only with `aria-current`;
    /// inactive items wrap the text in an anchor (`href` defaults to `#`).
    pub fn add_item(&mut self, text: &str, href: &str, active: bool) -> BreadcrumbItem {
        let item = dom::create_in(&self.list, "li");
        item.set_class_name("breadcrumb-item");
        let href = if href.is_empty() { "#" } else { href };
        let mut handle = BreadcrumbItem {
            item,
            text: text.to_string(),
            href: href.to_string(),
        };
        handle.render(active);
        dom::append(&self.list, &handle.item);
        handle
    }

    /// Override the divider glyph via Bootstrap's CSS custom property on the
    /// list element.
    pub fn set_divider(&mut self, divider: &str) -> &mut Self {
        dom::set_style(&self.list, "--bs-breadcrumb-divider", &format!("'{divider}'"));
        self
    }
}

/// One `<li class="breadcrumb-item">`.
///
/// The handle retains text and href so an item can be toggled active and
/// back; rebuilding the anchor does not lose the link target.
pub struct BreadcrumbItem {
    item: Element,
    text: String,
    href: String,
}

impl BreadcrumbItem {
    pub fn element(&self) -> &Element {
        &self.item
    }

    pub fn set_active(&mut self, active: bool) -> &mut Self {
        if dom::has_class(&self.item, "active") == active {
            return self;
        }
        self.render(active);
        self
    }

    fn render(&mut self, active: bool) {
        dom::clear_children(&self.item);
        if active {
            dom::add_class(&self.item, "active");
            dom::set_attr(&self.item, "aria-current", "page");
            self.item.set_text_content(Some(&self.text));
        } else {
            dom::remove_class(&self.item, "active");
            self.item.remove_attribute("aria-current").unwrap();
            let link = dom::create_in(&self.item, "a");
            dom::set_attr(&link, "href", &self.href);
            link.set_text_content(Some(&self.text));
            dom::append(&self.item, &link);
        }
    }
}
