//! Form controls: inputs, textareas, labels, help text, selects, checks,
//! ranges and input groups.

use web_sys::{Element, Node};

use crate::app::App;
use crate::dom;
use crate::variant::Size;

/// An `<input class="form-control">`.
pub struct FormInput {
    root: Element,
}

impl App {
    pub fn form_input(&self, input_type: &str, id: &str) -> FormInput {
        let root = self.element_with_class("input", "form-control");
        dom::set_attr(&root, "type", input_type);
        dom::set_attr(&root, "id", id);
        FormInput { root }
    }
}

impl FormInput {
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Size the control; `Size::Medium` clears both size classes.
    pub fn set_size(&mut self, size: Size) -> &mut Self {
        let chosen = size.suffix().map(|s| format!("form-control-{s}"));
        dom::set_exclusive_class(
            &self.root,
            &["form-control-sm", "form-control-lg"],
            chosen.as_deref(),
        );
        self
    }

    /// Render as plain text: swaps `form-control` for
    /// `form-control-plaintext` and forces the control readonly.
    pub fn make_plaintext(&mut self) -> &mut Self {
        dom::remove_class(&self.root, "form-control");
        dom::add_class(&self.root, "form-control-plaintext");
        dom::toggle_attr(&self.root, "readonly", true);
        self
    }

    pub fn set_placeholder(&mut self, placeholder: &str) -> &mut Self {
        dom::set_attr(&self.root, "placeholder", placeholder);
        self
    }

    pub fn set_value(&mut self, value: &str) -> &mut Self {
        dom::set_attr(&self.root, "value", value);
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        dom::toggle_attr(&self.root, "disabled", disabled);
        self
    }

    pub fn set_readonly(&mut self, readonly: bool) -> &mut Self {
        dom::toggle_attr(&self.root, "readonly", readonly);
        self
    }

    pub fn set_required(&mut self, required: bool) -> &mut Self {
        dom::toggle_attr(&self.root, "required", required);
        self
    }

    /// Point the control at its help text for assistive tech.
    pub fn set_described_by(&mut self, id: &str) -> &mut Self {
        dom::set_attr(&self.root, "aria-describedby", id);
        self
    }

    pub fn add_event_listener(
        &self,
        event: &str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> &Self {
        dom::listen(&self.root, event, callback);
        self
    }
}

/// A `<textarea class="form-control">`.
pub struct FormTextarea {
    root: Element,
}

impl App {
    pub fn form_textarea(&self, id: &str) -> FormTextarea {
        let root = self.element_with_class("textarea", "form-control");
        dom::set_attr(&root, "id", id);
        FormTextarea { root }
    }
}

impl FormTextarea {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn set_rows(&mut self, rows: u32) -> &mut Self {
        dom::set_attr(&self.root, "rows", &rows.to_string());
        self
    }

    pub fn set_placeholder(&mut self, placeholder: &str) -> &mut Self {
        dom::set_attr(&self.root, "placeholder", placeholder);
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        dom::toggle_attr(&self.root, "disabled", disabled);
        self
    }

    pub fn add_event_listener(
        &self,
        event: &str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> &Self {
        dom::listen(&self.root, event, callback);
        self
    }
}

/// A `<label class="form-label" for=…>`.
pub struct FormLabel {
    root: Element,
}

impl App {
    pub fn form_label(&self, for_id: &str, text: &str) -> FormLabel {
        let root = self.element_with_class("label", "form-label");
        dom::set_attr(&root, "for", for_id);
        root.set_text_content(Some(text));
        FormLabel { root }
    }
}

impl FormLabel {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.root.set_text_content(Some(text));
        self
    }
}

/// A `<div class="form-text">` help line, addressable by id from
/// `aria-describedby`.
pub struct HelpText {
    root: Element,
}

impl App {
    pub fn help_text(&self, id: &str, text: &str) -> HelpText {
        let root = self.element_with_class("div", "form-text");
        dom::set_attr(&root, "id", id);
        root.set_text_content(Some(text));
        HelpText { root }
    }
}

impl HelpText {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.root.set_text_content(Some(text));
        self
    }
}

/// A `<select class="form-select">`.
pub struct FormSelect {
    root: Element,
}

impl App {
    pub fn form_select(&self, id: &str) -> FormSelect {
        let root = self.element_with_class("select", "form-select");
        dom::set_attr(&root, "id", id);
        FormSelect { root }
    }
}

impl FormSelect {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn add_option(&mut self, value: &str, text: &str, selected: bool) -> &mut Self {
        let option = dom::create_in(&self.root, "option");
        dom::set_attr(&option, "value", value);
        if selected {
            dom::toggle_attr(&option, "selected", true);
        }
        option.set_text_content(Some(text));
        dom::append(&self.root, &option);
        self
    }

    pub fn set_size(&mut self, size: Size) -> &mut Self {
        let chosen = size.suffix().map(|s| format!("form-select-{s}"));
        dom::set_exclusive_class(
            &self.root,
            &["form-select-sm", "form-select-lg"],
            chosen.as_deref(),
        );
        self
    }

    pub fn set_multiple(&mut self, multiple: bool) -> &mut Self {
        dom::toggle_attr(&self.root, "multiple", multiple);
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        dom::toggle_attr(&self.root, "disabled", disabled);
        self
    }

    pub fn add_event_listener(
        &self,
        event: &str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> &Self {
        dom::listen(&self.root, event, callback);
        self
    }
}

/// Checkbox vs radio rendering for [`FormCheck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Checkbox,
    Radio,
}

impl CheckKind {
    fn as_str(self) -> &'static str {
        match self {
            CheckKind::Checkbox => "checkbox",
            CheckKind::Radio => "radio",
        }
    }
}

/// A `<div class="form-check">` wrapping an input and an optional label.
///
/// The handle retains both; [`FormCheck::label`] is `None` when the check
/// was built without label text.
pub struct FormCheck {
    root: Element,
    input: Element,
    label: Option<Element>,
}

impl App {
    pub fn form_check(&self, id: &str, kind: CheckKind, label: Option<&str>) -> FormCheck {
        let root = self.element_with_class("div", "form-check");

        let input = self.element_with_class("input", "form-check-input");
        dom::set_attr(&input, "type", kind.as_str());
        dom::set_attr(&input, "id", id);
        dom::append(&root, &input);

        let label = label.map(|text| {
            let label = self.element_with_class("label", "form-check-label");
            dom::set_attr(&label, "for", id);
            label.set_text_content(Some(text));
            dom::append(&root, &label);
            label
        });

        FormCheck { root, input, label }
    }
}

impl FormCheck {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn input(&self) -> &Element {
        &self.input
    }

    pub fn label(&self) -> Option<&Element> {
        self.label.as_ref()
    }

    /// Render as a switch (`form-switch` on the wrapper, `role=switch` on
    /// the input).
    pub fn make_switch(&mut self) -> &mut Self {
        dom::add_class(&self.root, "form-switch");
        dom::set_attr(&self.input, "role", "switch");
        self
    }

    pub fn set_inline(&mut self, inline: bool) -> &mut Self {
        dom::toggle_class(&self.root, "form-check-inline", inline);
        self
    }

    pub fn set_checked(&mut self, checked: bool) -> &mut Self {
        dom::toggle_attr(&self.input, "checked", checked);
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        dom::toggle_attr(&self.input, "disabled", disabled);
        self
    }

    pub fn set_required(&mut self, required: bool) -> &mut Self {
        dom::toggle_attr(&self.input, "required", required);
        self
    }

    /// Radio grouping name; meaningless for checkboxes but harmless.
    pub fn set_name(&mut self, name: &str) -> &mut Self {
        dom::set_attr(&self.input, "name", name);
        self
    }

    pub fn add_event_listener(
        &self,
        event: &str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> &Self {
        dom::listen(&self.input, event, callback);
        self
    }
}

/// An `<input type="range" class="form-range">`.
pub struct FormRange {
    root: Element,
}

impl App {
    pub fn form_range(&self, id: &str) -> FormRange {
        let root = self.element_with_class("input", "form-range");
        dom::set_attr(&root, "type", "range");
        dom::set_attr(&root, "id", id);
        FormRange { root }
    }
}

impl FormRange {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn set_min(&mut self, min: i32) -> &mut Self {
        dom::set_attr(&self.root, "min", &min.to_string());
        self
    }

    pub fn set_max(&mut self, max: i32) -> &mut Self {
        dom::set_attr(&self.root, "max", &max.to_string());
        self
    }

    pub fn set_step(&mut self, step: u32) -> &mut Self {
        dom::set_attr(&self.root, "step", &step.to_string());
        self
    }

    pub fn set_value(&mut self, value: i32) -> &mut Self {
        dom::set_attr(&self.root, "value", &value.to_string());
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        dom::toggle_attr(&self.root, "disabled", disabled);
        self
    }

    pub fn add_event_listener(
        &self,
        event: &str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> &Self {
        dom::listen(&self.root, event, callback);
        self
    }
}

/// A `<div class="input-group">`.
pub struct InputGroup {
    root: Element,
}

impl App {
    pub fn input_group(&self) -> InputGroup {
        InputGroup {
            root: self.element_with_class("div", "input-group"),
        }
    }

    /// A `<span class="input-group-text">` addon for composing into groups.
    pub fn input_group_text(&self, text: &str) -> Element {
        let span = self.element_with_class("span", "input-group-text");
        span.set_text_content(Some(text));
        span
    }
}

impl InputGroup {
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Insert before the group's first child.
    pub fn prepend(&mut self, child: &Node) -> &mut Self {
        dom::prepend(&self.root, child);
        self
    }

    pub fn append(&mut self, child: &Node) -> &mut Self {
        dom::append(&self.root, child);
        self
    }

    pub fn set_size(&mut self, size: Size) -> &mut Self {
        let chosen = size.suffix().map(|s| format!("input-group-{s}"));
        dom::set_exclusive_class(
            &self.root,
            &["input-group-sm", "input-group-lg"],
            chosen.as_deref(),
        );
        self
    }
}
