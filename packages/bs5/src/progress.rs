//! Progress bars, plain and stacked.
//!
//! Plain bars keep the inline width on the `progress-bar` child. Stacked
//! segments move the width to the wrapper so the segment participates in the
//! flex layout of a `progress-stacked` parent; the internal flag only
//! matters inside [`Progress::set_value`].

use web_sys::Element;

use crate::app::App;
use crate::dom;
use crate::variant::Color;

/// A `progress` wrapper with its `progress-bar` child.
pub struct Progress {
    wrapper: Element,
    bar: Element,
    stacked: bool,
}

impl App {
    /// A plain progress bar at `value` percent with an accessible label.
    pub fn progress(&self, value: u32, label: &str) -> Progress {
        let progress = self.make_progress(value, label, false);
        dom::set_style(&progress.bar, "width", &format!("{value}%"));
        progress
    }

    /// A segment for composition inside [`ProgressStacked`]; the width lives
    /// on the wrapper.
    pub fn progress_stacked_segment(&self, value: u32, label: &str) -> Progress {
        let progress = self.make_progress(value, label, true);
        dom::set_style(&progress.wrapper, "width", &format!("{value}%"));
        progress
    }

    fn make_progress(&self, value: u32, label: &str, stacked: bool) -> Progress {
        let wrapper = self.element_with_class("div", "progress");
        dom::set_attr(&wrapper, "role", "progressbar");
        dom::set_attr(&wrapper, "aria-label", label);
        dom::set_attr(&wrapper, "aria-valuenow", &value.to_string());
        dom::set_attr(&wrapper, "aria-valuemin", "0");
        dom::set_attr(&wrapper, "aria-valuemax", "100");

        let bar = self.element_with_class("div", "progress-bar");
        dom::append(&wrapper, &bar);

        Progress {
            wrapper,
            bar,
            stacked,
        }
    }
}

impl Progress {
    pub fn root(&self) -> &Element {
        &self.wrapper
    }

    pub fn bar(&self) -> &Element {
        &self.bar
    }

    /// Update the value: `aria-valuenow` on the wrapper always; the inline
    /// width goes to the wrapper for stacked segments, to the bar otherwise.
    pub fn set_value(&mut self, value: u32) -> &mut Self {
        dom::set_attr(&self.wrapper, "aria-valuenow", &value.to_string());
        let width = format!("{value}%");
        if self.stacked {
            dom::set_style(&self.wrapper, "width", &width);
        } else {
            dom::set_style(&self.bar, "width", &width);
        }
        self
    }

    /// Colour the bar (`bg-{color}`), clearing the colour family first.
    pub fn set_color(&mut self, color: Color) -> &mut Self {
        dom::set_exclusive_class(
            &self.bar,
            &Color::family("bg"),
            Some(&format!("bg-{color}")),
        );
        self
    }

    /// Render the current value as `{value}%` text inside the bar.
    pub fn show_label(&mut self, show: bool) -> &mut Self {
        dom::clear_children(&self.bar);
        if show {
            let value = self
                .wrapper
                .get_attribute("aria-valuenow")
                .unwrap_or_default();
            dom::append(&self.bar, &dom::text_in(&self.bar, &format!("{value}%")));
        }
        self
    }

    pub fn set_striped(&mut self, striped: bool) -> &mut Self {
        dom::toggle_class(&self.bar, "progress-bar-striped", striped);
        self
    }

    /// Animate the stripes. Animation requires stripes, so enabling it also
    /// ensures `progress-bar-striped` is present.
    pub fn set_animated(&mut self, animated: bool) -> &mut Self {
        if animated {
            dom::add_class(&self.bar, "progress-bar-striped");
        }
        dom::toggle_class(&self.bar, "progress-bar-animated", animated);
        self
    }
}

/// A `<div class="progress-stacked">` composing segments side by side.
pub struct ProgressStacked {
    root: Element,
}

impl App {
    pub fn progress_stacked(&self) -> ProgressStacked {
        ProgressStacked {
            root: self.element_with_class("div", "progress-stacked"),
        }
    }
}

impl ProgressStacked {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn add_segment(&mut self, segment: &Progress) -> &mut Self {
        dom::append(&self.root, segment.root());
        self
    }
}
