//! Headings `<h1>`..`<h6>`.

use web_sys::Element;

use crate::app::App;
use crate::dom;

pub struct Heading {
    root: Element,
}

impl App {
    /// Build an `<h{level}>` with the given text.
    ///
    /// # Panics
    ///
    /// Panics if `level` is outside `1..=6`. This is the one fatal argument
    /// check in the crate; HTML has no other heading levels.
    pub fn heading(&self, level: u8, text: &str) -> Heading {
        assert!(
            (1..=6).contains(&level),
            "heading level {level} out of range 1..=6"
        );
        let root = self.element(&format!("h{level}"));
        root.set_text_content(Some(text));
        Heading { root }
    }
}

impl Heading {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.root.set_text_content(Some(text));
        self
    }

    /// Render with display sizing (`display-1`..`display-6`), or clear it.
    pub fn set_display(&mut self, display: Option<u8>) -> &mut Self {
        let family: Vec<String> = (1..=6).map(|n| format!("display-{n}")).collect();
        let chosen = display.filter(|n| (1..=6).contains(n)).map(|n| format!("display-{n}"));
        dom::set_exclusive_class(&self.root, &family, chosen.as_deref());
        self
    }
}
