//! The [`App`] façade: one value bound to one document, from which every
//! component factory is reached.
//!
//! Factories are spread across the component modules as `impl App` blocks;
//! this module only owns the document binding and the generic element/text
//! helpers the factories build on.

use web_sys::{Document, Element, Node};

/// Binds the builder library to a single document.
///
/// Every element the library mints is allocated from this document, so
/// fragments built through one `App` can be freely inserted anywhere in that
/// document. There is no global state: two `App`s over two documents do not
/// observe each other.
pub struct App {
    document: Document,
}

impl App {
    /// Bind to the window's document and set the page title.
    ///
    /// Panics outside a browser context, like the rest of the crate.
    pub fn new(title: &str) -> Self {
        let document = web_sys::window()
            .expect("must run in a window context")
            .document()
            .expect("window must carry a document");
        Self::with_document(document, title)
    }

    /// Bind to an explicit document. Useful for tests and iframes.
    pub fn with_document(document: Document, title: &str) -> Self {
        document.set_title(title);
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mint a bare element. The escape hatch for markup this crate has no
    /// builder for.
    pub fn element(&self, tag: &str) -> Element {
        // createElement only fails on names with invalid characters; every
        // tag this crate passes is a static HTML tag name.
        self.document.create_element(tag).unwrap()
    }

    /// Mint a text node, ready to be passed as a child to any factory.
    pub fn text(&self, text: &str) -> Node {
        self.document.create_text_node(text).into()
    }

    pub(crate) fn element_with_class(&self, tag: &str, class: &str) -> Element {
        let el = self.element(tag);
        el.set_class_name(class);
        el
    }
}
