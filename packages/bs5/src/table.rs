//! Tables with lazy head/body/foot sections.
//!
//! The colour algorithm (clear all eight `table-{variant}` classes, then set
//! the chosen one) is shared by the table, its sections, rows and cells.

use web_sys::{Element, Node};

use crate::app::App;
use crate::dom;
use crate::variant::Color;

fn set_table_color(el: &Element, color: Option<Color>) {
    let chosen = color.map(|c| format!("table-{c}"));
    dom::set_exclusive_class(el, &Color::family("table"), chosen.as_deref());
}

/// A `<table class="table">`.
pub struct Table {
    root: Element,
    head: Option<Element>,
    body: Option<Element>,
    foot: Option<Element>,
    wrapper: Option<Element>,
}

impl App {
    pub fn table(&self) -> Table {
        Table {
            root: self.element_with_class("table", "table"),
            head: None,
            body: None,
            foot: None,
            wrapper: None,
        }
    }
}

impl Table {
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The element the caller should insert into the page: the
    /// `table-responsive` wrapper when responsive mode is on, the table
    /// itself otherwise.
    pub fn mount(&self) -> &Element {
        self.wrapper.as_ref().unwrap_or(&self.root)
    }

    /// Create-or-return the `<thead>`. On first creation it is inserted
    /// before any existing section.
    pub fn head(&mut self) -> TableSection {
        if self.head.is_none() {
            let head = dom::create_in(&self.root, "thead");
            dom::prepend(&self.root, &head);
            self.head = Some(head);
        }
        TableSection {
            element: self.head.clone().unwrap(),
            header_cells: true,
        }
    }

    /// Create-or-return the `<tbody>`, appended.
    pub fn body(&mut self) -> TableSection {
        if self.body.is_none() {
            let body = dom::create_in(&self.root, "tbody");
            dom::append(&self.root, &body);
            self.body = Some(body);
        }
        TableSection {
            element: self.body.clone().unwrap(),
            header_cells: false,
        }
    }

    /// Create-or-return the `<tfoot>`, appended.
    pub fn foot(&mut self) -> TableSection {
        if self.foot.is_none() {
            let foot = dom::create_in(&self.root, "tfoot");
            dom::append(&self.root, &foot);
            self.foot = Some(foot);
        }
        TableSection {
            element: self.foot.clone().unwrap(),
            header_cells: false,
        }
    }

    pub fn set_striped(&mut self, striped: bool) -> &mut Self {
        dom::toggle_class(&self.root, "table-striped", striped);
        self
    }

    pub fn set_hoverable(&mut self, hoverable: bool) -> &mut Self {
        dom::toggle_class(&self.root, "table-hover", hoverable);
        self
    }

    pub fn set_bordered(&mut self, bordered: bool) -> &mut Self {
        dom::toggle_class(&self.root, "table-bordered", bordered);
        self
    }

    pub fn set_borderless(&mut self, borderless: bool) -> &mut Self {
        dom::toggle_class(&self.root, "table-borderless", borderless);
        self
    }

    pub fn set_small(&mut self, small: bool) -> &mut Self {
        dom::toggle_class(&self.root, "table-sm", small);
        self
    }

    /// Wrap the table in a `<div class="table-responsive">` (Bootstrap needs
    /// the wrapper, not a class on the table). The wrapper replaces the table
    /// in its parent if the table is already mounted; [`Table::mount`]
    /// returns the right element either way.
    pub fn set_responsive(&mut self, responsive: bool) -> &mut Self {
        match (responsive, &self.wrapper) {
            (true, None) => {
                let wrapper = dom::create_in(&self.root, "div");
                wrapper.set_class_name("table-responsive");
                if let Some(parent) = self.root.parent_node() {
                    parent.insert_before(&wrapper, Some(&self.root)).unwrap();
                }
                dom::append(&wrapper, &self.root);
                self.wrapper = Some(wrapper);
            }
            (false, Some(wrapper)) => {
                if let Some(parent) = wrapper.parent_node() {
                    parent.insert_before(&self.root, Some(wrapper)).unwrap();
                    parent.remove_child(wrapper).unwrap();
                } else {
                    wrapper.remove_child(&self.root).unwrap();
                }
                self.wrapper = None;
            }
            _ => {}
        }
        self
    }

    pub fn set_color(&mut self, color: Option<Color>) -> &mut Self {
        set_table_color(&self.root, color);
        self
    }
}

/// A `<thead>`, `<tbody>` or `<tfoot>`. Head sections produce `<th>` cells
/// by default.
pub struct TableSection {
    element: Element,
    header_cells: bool,
}

impl TableSection {
    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn add_row(&mut self) -> TableRow {
        let row = dom::create_in(&self.element, "tr");
        dom::append(&self.element, &row);
        TableRow {
            element: row,
            header_cells: self.header_cells,
        }
    }

    pub fn set_color(&mut self, color: Option<Color>) -> &mut Self {
        set_table_color(&self.element, color);
        self
    }
}

/// A `<tr>`.
pub struct TableRow {
    element: Element,
    header_cells: bool,
}

impl TableRow {
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Append a data cell (`<td>`, or `<th scope="col">` inside a head).
    pub fn add_cell(&mut self, text: &str) -> TableCell {
        let cell = self.make_cell();
        cell.element.set_text_content(Some(text));
        cell
    }

    /// Append a cell with arbitrary node content.
    pub fn add_cell_with_node(&mut self, child: &Node) -> TableCell {
        let cell = self.make_cell();
        dom::append(&cell.element, child);
        cell
    }

    /// Append a `<th scope="row">` header cell regardless of section.
    pub fn add_header_cell(&mut self, text: &str) -> TableCell {
        let cell = dom::create_in(&self.element, "th");
        dom::set_attr(&cell, "scope", "row");
        cell.set_text_content(Some(text));
        dom::append(&self.element, &cell);
        TableCell { element: cell }
    }

    fn make_cell(&mut self) -> TableCell {
        let tag = if self.header_cells { "th" } else { "td" };
        let cell = dom::create_in(&self.element, tag);
        if self.header_cells {
            dom::set_attr(&cell, "scope", "col");
        }
        dom::append(&self.element, &cell);
        TableCell { element: cell }
    }

    pub fn set_color(&mut self, color: Option<Color>) -> &mut Self {
        set_table_color(&self.element, color);
        self
    }
}

/// A `<td>` or `<th>`.
pub struct TableCell {
    element: Element,
}

impl TableCell {
    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn set_colspan(&mut self, span: u32) -> &mut Self {
        dom::set_attr(&self.element, "colspan", &span.to_string());
        self
    }

    pub fn set_rowspan(&mut self, span: u32) -> &mut Self {
        dom::set_attr(&self.element, "rowspan", &span.to_string());
        self
    }

    pub fn set_color(&mut self, color: Option<Color>) -> &mut Self {
        set_table_color(&self.element, color);
        self
    }
}
