//! Tabbed panes driven by Bootstrap's tab plugin.
//!
//! Ids are minted from a per-component counter that only increments:
//! `{tabs_id}-tab-{n}` for buttons, `{tabs_id}-pane-{n}` for panes, and the
//! fixed `{tabs_id}-content` for the pane container. The counter is 1-based.

use web_sys::{Element, Node};

use crate::app::App;
use crate::dom;
use crate::variant::TabStyle;

pub struct Tabs {
    root: Element,
    list: Element,
    content: Element,
    id: String,
    counter: u32,
}

impl App {
    pub fn tabs(&self, id: &str) -> Tabs {
        let root = self.element("div");
        dom::set_attr(&root, "id", id);

        let list = self.element_with_class("ul", "nav nav-tabs");
        dom::set_attr(&list, "role", "tablist");
        dom::append(&root, &list);

        let content = self.element_with_class("div", "tab-content");
        dom::set_attr(&content, "id", &format!("{id}-content"));
        dom::append(&root, &content);

        Tabs {
            root,
            list,
            content,
            id: id.to_string(),
            counter: 0,
        }
    }
}

impl Tabs {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn list(&self) -> &Element {
        &self.list
    }

    pub fn content(&self) -> &Element {
        &self.content
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Add a tab button and its pane, wired to each other through
    /// `data-bs-target` and `aria-labelledby`.
    pub fn add_tab(&mut self, title: &str, active: bool) -> Tab {
        self.counter += 1;
        let tab_id = format!("{}-tab-{}", self.id, self.counter);
        let pane_id = format!("{}-pane-{}", self.id, self.counter);

        let item = dom::create_in(&self.list, "li");
        item.set_class_name("nav-item");
        dom::set_attr(&item, "role", "presentation");

        let button = dom::create_in(&self.list, "button");
        button.set_class_name("nav-link");
        dom::set_attr(&button, "id", &tab_id);
        dom::set_attr(&button, "data-bs-toggle", "tab");
        dom::set_attr(&button, "data-bs-target", &format!("#{pane_id}"));
        dom::set_attr(&button, "type", "button");
        dom::set_attr(&button, "role", "tab");
        dom::set_attr(&button, "aria-controls", &pane_id);
        button.set_text_content(Some(title));

        let pane = dom::create_in(&self.content, "div");
        pane.set_class_name("tab-pane fade");
        dom::set_attr(&pane, "id", &pane_id);
        dom::set_attr(&pane, "role", "tabpanel");
        dom::set_attr(&pane, "aria-labelledby", &tab_id);
        dom::set_attr(&pane, "tabindex", "0");

        if active {
            dom::add_class(&button, "active");
            dom::set_attr(&button, "aria-selected", "true");
            dom::add_class(&pane, "show");
            dom::add_class(&pane, "active");
        } else {
            dom::set_attr(&button, "aria-selected", "false");
        }

        dom::append(&item, &button);
        dom::append(&self.list, &item);
        dom::append(&self.content, &pane);

        Tab { button, pane }
    }

    /// Switch the nav list look. The three styles are mutually exclusive.
    pub fn set_style(&mut self, style: TabStyle) -> &mut Self {
        dom::set_exclusive_class(&self.list, &TabStyle::FAMILY, Some(style.class()));
        self
    }
}

/// One tab: the nav button and its pane.
pub struct Tab {
    button: Element,
    pane: Element,
}

impl Tab {
    pub fn button(&self) -> &Element {
        &self.button
    }

    pub fn pane(&self) -> &Element {
        &self.pane
    }

    /// Append content to the pane.
    pub fn add_pane_child(&mut self, child: &Node) -> &mut Self {
        dom::append(&self.pane, child);
        self
    }
}
