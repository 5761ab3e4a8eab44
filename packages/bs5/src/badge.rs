//! Badges: small count-and-label spans.

use web_sys::Element;

use crate::app::App;
use crate::dom;
use crate::variant::Color;

/// A `<span class="badge text-bg-{color}">` fragment.
pub struct Badge {
    root: Element,
}

impl App {
    pub fn badge(&self, color: Color, text: &str) -> Badge {
        let root = self.element_with_class("span", &format!("badge text-bg-{color}"));
        root.set_text_content(Some(text));
        Badge { root }
    }
}

impl Badge {
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Round the badge into a pill.
    pub fn set_pill(&mut self, pill: bool) -> &mut Self {
        dom::toggle_class(&self.root, "rounded-pill", pill);
        self
    }

    /// Position the badge at the top-right corner of a `position-relative`
    /// parent, the notification-counter pattern.
    pub fn set_positioned(&mut self, positioned: bool) -> &mut Self {
        for class in ["position-absolute", "top-0", "start-100", "translate-middle"] {
            dom::toggle_class(&self.root, class, positioned);
        }
        self
    }

    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.root.set_text_content(Some(text));
        self
    }
}
