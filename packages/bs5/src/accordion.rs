//! Accordions.
//!
//! Item and collapse ids are minted from a counter that only grows:
//! `{accordion_id}-item-{n}` and `{accordion_id}-collapse-{n}`. The
//! accordion-wide always-open flag decides whether collapses carry
//! `data-bs-parent` (mutually exclusive open items) or have it cleared;
//! flipping the flag rewrites the attribute on every existing item.

use web_sys::{Element, Node};

use crate::app::App;
use crate::dom;

pub struct Accordion {
    root: Element,
    id: String,
    counter: u32,
    always_open: bool,
    collapses: Vec<Element>,
}

impl App {
    pub fn accordion(&self, id: &str) -> Accordion {
        let root = self.element_with_class("div", "accordion");
        dom::set_attr(&root, "id", id);
        Accordion {
            root,
            id: id.to_string(),
            counter: 0,
            always_open: false,
            collapses: Vec::new(),
        }
    }
}

impl Accordion {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Append an item with the given header text, initially expanded or not.
    pub fn add_item(&mut self, title: &str, expanded: bool) -> AccordionItem {
        self.counter += 1;
        let item_id = format!("{}-item-{}", self.id, self.counter);
        let collapse_id = format!("{}-collapse-{}", self.id, self.counter);

        let item = dom::create_in(&self.root, "div");
        item.set_class_name("accordion-item");
        dom::set_attr(&item, "id", &item_id);

        let header = dom::create_in(&self.root, "h2");
        header.set_class_name("accordion-header");

        let button = dom::create_in(&self.root, "button");
        button.set_class_name("accordion-button");
        dom::set_attr(&button, "type", "button");
        dom::set_attr(&button, "data-bs-toggle", "collapse");
        dom::set_attr(&button, "data-bs-target", &format!("#{collapse_id}"));
        dom::set_attr(&button, "aria-controls", &collapse_id);
        dom::set_attr(&button, "aria-expanded", if expanded { "true" } else { "false" });
        if !expanded {
            dom::add_class(&button, "collapsed");
        }
        button.set_text_content(Some(title));
        dom::append(&header, &button);
        dom::append(&item, &header);

        let collapse = dom::create_in(&self.root, "div");
        collapse.set_class_name("accordion-collapse collapse");
        dom::set_attr(&collapse, "id", &collapse_id);
        if expanded {
            dom::add_class(&collapse, "show");
        }
        dom::set_attr(&collapse, "data-bs-parent", &self.parent_selector());
        dom::append(&item, &collapse);

        dom::append(&self.root, &item);
        self.collapses.push(collapse.clone());

        AccordionItem {
            item,
            button,
            collapse,
            body: None,
        }
    }

    /// In always-open mode items expand independently; otherwise opening one
    /// collapses its siblings. Rewrites `data-bs-parent` on every existing
    /// item's collapse element.
    pub fn set_always_open(&mut self, always_open: bool) -> &mut Self {
        self.always_open = always_open;
        let parent = self.parent_selector();
        for collapse in &self.collapses {
            dom::set_attr(collapse, "data-bs-parent", &parent);
        }
        self
    }

    fn parent_selector(&self) -> String {
        if self.always_open {
            String::new()
        } else {
            format!("#{}", self.id)
        }
    }
}

/// One accordion item: header button, collapse wrapper, lazy body.
pub struct AccordionItem {
    item: Element,
    button: Element,
    collapse: Element,
    body: Option<Element>,
}

impl AccordionItem {
    pub fn element(&self) -> &Element {
        &self.item
    }

    pub fn button(&self) -> &Element {
        &self.button
    }

    pub fn collapse(&self) -> &Element {
        &self.collapse
    }

    /// Create-or-return the `accordion-body` inside the collapse wrapper.
    pub fn body(&mut self) -> AccordionBody {
        if self.body.is_none() {
            let body = dom::create_in(&self.collapse, "div");
            body.set_class_name("accordion-body");
            dom::append(&self.collapse, &body);
            self.body = Some(body);
        }
        AccordionBody {
            element: self.body.clone().unwrap(),
        }
    }

    /// Drive the expansion state machine: collapse `show` class, header
    /// button `collapsed` class (inverted) and `aria-expanded` move together.
    pub fn set_expanded(&mut self, expanded: bool) -> &mut Self {
        dom::toggle_class(&self.collapse, "show", expanded);
        dom::toggle_class(&self.button, "collapsed", !expanded);
        dom::set_attr(
            &self.button,
            "aria-expanded",
            if expanded { "true" } else { "false" },
        );
        self
    }
}

pub struct AccordionBody {
    element: Element,
}

impl AccordionBody {
    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.element.set_text_content(Some(text));
        self
    }

    pub fn add_child(&mut self, child: &Node) -> &mut Self {
        dom::append(&self.element, child);
        self
    }
}
