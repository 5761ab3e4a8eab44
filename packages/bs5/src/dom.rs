//! Small free functions over `web-sys` shared by every component.
//!
//! Handles deliberately do not share a base type; the algorithms they have in
//! common (clearing a mutually exclusive class family, registering an event
//! listener, minting children from an element's own document) live here
//! instead.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, Node};

pub(crate) fn add_class(el: &Element, class: &str) {
    // DomTokenList::add only fails on empty or whitespace tokens, which no
    // caller in this crate produces.
    el.class_list().add_1(class).unwrap();
}

pub(crate) fn remove_class(el: &Element, class: &str) {
    el.class_list().remove_1(class).unwrap();
}

pub(crate) fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub(crate) fn toggle_class(el: &Element, class: &str, on: bool) {
    if on {
        add_class(el, class);
    } else {
        remove_class(el, class);
    }
}

/// Clear-then-set for a mutually exclusive class family.
///
/// Removes every member of `family` from the element, then adds `chosen` (if
/// any). Setters built on this are order independent: the last call wins and
/// no stale sibling class survives.
pub fn set_exclusive_class<S: AsRef<str>>(el: &Element, family: &[S], chosen: Option<&str>) {
    for class in family {
        remove_class(el, class.as_ref());
    }
    if let Some(class) = chosen {
        add_class(el, class);
    }
}

/// Register `callback` for `event` on the element.
///
/// The closure is handed to the browser for the lifetime of the page
/// (`Closure::forget`); components never unregister listeners.
pub fn listen(el: &Element, event: &str, callback: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(callback);
    el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .unwrap();
    closure.forget();
}

/// Mint a new element from the document that owns `el`.
pub(crate) fn create_in(el: &Element, tag: &str) -> Element {
    el.owner_document().unwrap().create_element(tag).unwrap()
}

/// Mint a text node from the document that owns `el`.
pub(crate) fn text_in(el: &Element, text: &str) -> Node {
    el.owner_document().unwrap().create_text_node(text).into()
}

pub(crate) fn append(parent: &Element, child: &Node) {
    parent.append_child(child).unwrap();
}

/// Insert `child` before the parent's current first child.
pub(crate) fn prepend(parent: &Element, child: &Node) {
    parent.insert_before(child, parent.first_child().as_ref()).unwrap();
}

/// Insert `child` immediately after `reference`.
pub(crate) fn insert_after(parent: &Element, child: &Node, reference: &Node) {
    parent
        .insert_before(child, reference.next_sibling().as_ref())
        .unwrap();
}

pub(crate) fn clear_children(el: &Element) {
    while let Some(child) = el.first_child() {
        el.remove_child(&child).unwrap();
    }
}

pub(crate) fn set_attr(el: &Element, name: &str, value: &str) {
    el.set_attribute(name, value).unwrap();
}

/// Set or remove a boolean HTML attribute (`disabled`, `checked`, ...).
pub(crate) fn toggle_attr(el: &Element, name: &str, on: bool) {
    if on {
        set_attr(el, name, "");
    } else {
        el.remove_attribute(name).unwrap();
    }
}

/// Write one inline style property through the CSSOM.
pub(crate) fn set_style(el: &Element, property: &str, value: &str) {
    el.unchecked_ref::<HtmlElement>()
        .style()
        .set_property(property, value)
        .unwrap();
}
