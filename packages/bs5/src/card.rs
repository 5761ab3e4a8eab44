//! Cards with lazily created header, body, footer and image regions.
//!
//! Insertion order is the delicate part: the header must land after a
//! top-positioned image but before everything else, while body and footer
//! always append. Each region is created at most once; repeated accessor
//! calls return a handle to the same element.

use web_sys::{Element, Node};

use crate::app::App;
use crate::dom;
use crate::variant::ImagePosition;

pub struct Card {
    root: Element,
    header: Option<Element>,
    body: Option<Element>,
    footer: Option<Element>,
    image: Option<Element>,
    image_position: ImagePosition,
}

impl App {
    pub fn card(&self) -> Card {
        Card {
            root: self.element_with_class("div", "card"),
            header: None,
            body: None,
            footer: None,
            image: None,
            image_position: ImagePosition::Top,
        }
    }
}

impl Card {
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Create-or-return the `card-header`.
    ///
    /// On first creation the header goes immediately after a top-positioned
    /// image if one exists, otherwise it becomes the first child.
    pub fn header(&mut self) -> CardHeader {
        if self.header.is_none() {
            let header = dom::create_in(&self.root, "div");
            header.set_class_name("card-header");
            match (&self.image, self.image_position) {
                (Some(image), ImagePosition::Top) => {
                    dom::insert_after(&self.root, &header, image);
                }
                _ => dom::prepend(&self.root, &header),
            }
            self.header = Some(header);
        }
        CardHeader {
            element: self.header.clone().unwrap(),
        }
    }

    /// Create-or-return the `card-body`, appended at the end.
    pub fn body(&mut self) -> CardBody {
        if self.body.is_none() {
            let body = dom::create_in(&self.root, "div");
            body.set_class_name("card-body");
            dom::append(&self.root, &body);
            self.body = Some(body);
        }
        CardBody {
            element: self.body.clone().unwrap(),
        }
    }

    /// Create-or-return the `card-footer`, appended at the end.
    pub fn footer(&mut self) -> CardFooter {
        if self.footer.is_none() {
            let footer = dom::create_in(&self.root, "div");
            footer.set_class_name("card-footer");
            dom::append(&self.root, &footer);
            self.footer = Some(footer);
        }
        CardFooter {
            element: self.footer.clone().unwrap(),
        }
    }

    /// Add the card image, created at most once. Top images are prepended
    /// with `card-img-top`; bottom images appended with `card-img-bottom`.
    pub fn set_image(&mut self, src: &str, alt: &str, position: ImagePosition) -> &mut Self {
        if self.image.is_some() {
            return self;
        }
        let image = dom::create_in(&self.root, "img");
        dom::set_attr(&image, "src", src);
        dom::set_attr(&image, "alt", alt);
        match position {
            ImagePosition::Top => {
                image.set_class_name("card-img-top");
                dom::prepend(&self.root, &image);
            }
            ImagePosition::Bottom => {
                image.set_class_name("card-img-bottom");
                dom::append(&self.root, &image);
            }
        }
        self.image = Some(image);
        self.image_position = position;
        self
    }

    pub fn image(&self) -> Option<&Element> {
        self.image.as_ref()
    }
}

pub struct CardHeader {
    element: Element,
}

impl CardHeader {
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

/// The card body, with conveniences for the standard typographic children.
pub struct CardBody {
    element: Element,
}

impl CardBody {
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Append an `<h5 class="card-title">`.
    pub fn add_title(&mut self, text: &str) -> &mut Self {
        let title = dom::create_in(&self.element, "h5");
        title.set_class_name("card-title");
        title.set_text_content(Some(text));
        dom::append(&self.element, &title);
        self
    }

    /// Append an `<h6 class="card-subtitle mb-2 text-muted">`.
    pub fn add_subtitle(&mut self, text: &str) -> &mut Self {
        let subtitle = dom::create_in(&self.element, "h6");
        subtitle.set_class_name("card-subtitle mb-2 text-muted");
        subtitle.set_text_content(Some(text));
        dom::append(&self.element, &subtitle);
        self
    }

    /// Append a `<p class="card-text">`.
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        let para = dom::create_in(&self.element, "p");
        para.set_class_name("card-text");
        para.set_text_content(Some(text));
        dom::append(&self.element, &para);
        self
    }

    /// Append an `<a class="card-link">`.
    pub fn add_link(&mut self, text: &str, href: &str) -> &mut Self {
        let link = dom::create_in(&self.element, "a");
        link.set_class_name("card-link");
        dom::set_attr(&link, "href", if href.is_empty() { "#" } else { href });
        link.set_text_content(Some(text));
        dom::append(&self.element, &link);
        self
    }

    pub fn add_child(&mut self, child: &Node) -> &mut Self {
        dom::append(&self.element, child);
        self
    }
}

pub struct CardFooter {
    element: Element,
}

impl CardFooter {
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
