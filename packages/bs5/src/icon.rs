//! Bootstrap Icons glyphs (`<i class="bi bi-{name}">`).

use web_sys::Element;

use crate::app::App;
use crate::dom;

pub struct Icon {
    root: Element,
}

impl App {
    /// An icon by its Bootstrap Icons name, e.g. `"alarm"` or `"chevron-right"`.
    /// Unknown names degrade to an empty glyph; no validation is attempted.
    pub fn icon(&self, name: &str) -> Icon {
        let root = self.element_with_class("i", &format!("bi bi-{name}"));
        Icon { root }
    }
}

impl Icon {
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Swap the glyph in place.
    pub fn set_name(&mut self, name: &str) -> &mut Self {
        self.root.set_class_name(&format!("bi bi-{name}"));
        self
    }

    /// Decorative icons should be hidden from assistive tech.
    pub fn set_decorative(&mut self, decorative: bool) -> &mut Self {
        if decorative {
            dom::set_attr(&self.root, "aria-hidden", "true");
        } else {
            self.root.remove_attribute("aria-hidden").unwrap();
        }
        self
    }
}
