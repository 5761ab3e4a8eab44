//! Layout: containers, grid rows and columns.

use web_sys::{Element, Node};

use crate::app::App;
use crate::dom;
use crate::variant::{Breakpoint, ColWidth};

/// A `container` or `container-fluid` wrapper.
pub struct Container {
    root: Element,
}

impl App {
    pub fn container(&self, fluid: bool) -> Container {
        let class = if fluid { "container-fluid" } else { "container" };
        Container {
            root: self.element_with_class("div", class),
        }
    }
}

impl Container {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn add_child(&mut self, child: &Node) -> &mut Self {
        dom::append(&self.root, child);
        self
    }
}

/// A `<div class="row">`.
pub struct Row {
    root: Element,
}

impl App {
    pub fn row(&self) -> Row {
        Row {
            root: self.element_with_class("div", "row"),
        }
    }
}

impl Row {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn add_col(&mut self, col: &Col) -> &mut Self {
        dom::append(&self.root, col.root());
        self
    }

    pub fn add_child(&mut self, child: &Node) -> &mut Self {
        dom::append(&self.root, child);
        self
    }

    /// Set both gutter axes (`g-{n}`). Values outside 0..=5 are ignored.
    pub fn set_gutters(&mut self, n: u8) -> &mut Self {
        set_gutter_class(&self.root, "g", n);
        self
    }

    /// Horizontal gutters only (`gx-{n}`).
    pub fn set_gutters_x(&mut self, n: u8) -> &mut Self {
        set_gutter_class(&self.root, "gx", n);
        self
    }

    /// Vertical gutters only (`gy-{n}`).
    pub fn set_gutters_y(&mut self, n: u8) -> &mut Self {
        set_gutter_class(&self.root, "gy", n);
        self
    }
}

fn set_gutter_class(el: &Element, prefix: &str, n: u8) {
    if n > 5 {
        tracing::warn!(prefix, n, "gutter size outside 0..=5, ignored");
        return;
    }
    let family: Vec<String> = (0..=5).map(|i| format!("{prefix}-{i}")).collect();
    dom::set_exclusive_class(el, &family, Some(&format!("{prefix}-{n}")));
}

/// A grid column (`<div class="col">` until sized).
pub struct Col {
    root: Element,
}

impl App {
    pub fn col(&self) -> Col {
        Col {
            root: self.element_with_class("div", "col"),
        }
    }
}

impl Col {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn add_child(&mut self, child: &Node) -> &mut Self {
        dom::append(&self.root, child);
        self
    }

    /// Set the base column width. Clears `col`, `col-1`..`col-12` and
    /// `col-auto` before applying; widths outside the domain are ignored.
    pub fn set_size(&mut self, width: impl Into<ColWidth>) -> &mut Self {
        let width = width.into();
        if !width.is_valid() {
            tracing::warn!(?width, "column width outside 1..=12/auto, ignored");
            return self;
        }
        let mut family: Vec<String> = (1..=12).map(|i| format!("col-{i}")).collect();
        family.push("col".to_string());
        family.push("col-auto".to_string());
        let chosen = match width {
            ColWidth::Auto => "col-auto".to_string(),
            ColWidth::Width(n) => format!("col-{n}"),
        };
        dom::set_exclusive_class(&self.root, &family, Some(&chosen));
        self
    }

    /// Per-breakpoint width override. `None` enables a fluid column at the
    /// breakpoint without fixing a width (`col-{bp}`).
    pub fn set_breakpoint(&mut self, bp: Breakpoint, width: Option<ColWidth>) -> &mut Self {
        if let Some(width) = width {
            if !width.is_valid() {
                tracing::warn!(?width, bp = bp.as_str(), "column width ignored");
                return self;
            }
        }
        let mut family: Vec<String> = (1..=12).map(|i| format!("col-{bp}-{i}")).collect();
        family.push(format!("col-{bp}"));
        family.push(format!("col-{bp}-auto"));
        let chosen = match width {
            None => format!("col-{bp}"),
            Some(ColWidth::Auto) => format!("col-{bp}-auto"),
            Some(ColWidth::Width(n)) => format!("col-{bp}-{n}"),
        };
        dom::set_exclusive_class(&self.root, &family, Some(&chosen));
        self
    }

    /// Add an `offset-{n}` class. Offsets accumulate on purpose; there is no
    /// clear step, so stacking conflicting offsets is on the caller.
    pub fn set_offset(&mut self, n: u8) -> &mut Self {
        if !(1..=11).contains(&n) {
            tracing::warn!(n, "offset outside 1..=11, ignored");
            return self;
        }
        dom::add_class(&self.root, &format!("offset-{n}"));
        self
    }

    /// Add an `offset-{bp}-{n}` class, same accumulation rule as
    /// [`Col::set_offset`].
    pub fn set_offset_breakpoint(&mut self, bp: Breakpoint, n: u8) -> &mut Self {
        if !(1..=11).contains(&n) {
            tracing::warn!(n, bp = bp.as_str(), "offset outside 1..=11, ignored");
            return self;
        }
        dom::add_class(&self.root, &format!("offset-{bp}-{n}"));
        self
    }
}
