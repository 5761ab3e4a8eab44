//! Shared Bootstrap vocabulary: colour variants, sizes, placements and the
//! other token families that appear in class names across components.

use std::fmt;

/// The eight contextual colour variants Bootstrap styles out of the box.
///
/// Unknown colours cannot be expressed; a caller who wants a custom theme
/// class can always add it through the raw element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Primary,
        Color::Secondary,
        Color::Success,
        Color::Danger,
        Color::Warning,
        Color::Info,
        Color::Light,
        Color::Dark,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Primary => "primary",
            Color::Secondary => "secondary",
            Color::Success => "success",
            Color::Danger => "danger",
            Color::Warning => "warning",
            Color::Info => "info",
            Color::Light => "light",
            Color::Dark => "dark",
        }
    }

    /// The full `{prefix}-{color}` family, used for clear-then-set on
    /// mutually exclusive colour classes (`bg-*`, `table-*`, `text-bg-*`...).
    pub(crate) fn family(prefix: &str) -> Vec<String> {
        Color::ALL
            .iter()
            .map(|c| format!("{prefix}-{}", c.as_str()))
            .collect()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size variants for buttons, inputs, input groups and pagination.
/// `Medium` is Bootstrap's default and maps to no class at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    /// The class suffix, or `None` for the default size.
    pub(crate) fn suffix(self) -> Option<&'static str> {
        match self {
            Size::Small => Some("sm"),
            Size::Medium => None,
            Size::Large => Some("lg"),
        }
    }
}

/// Modal dialogs additionally support extra-large.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Small,
    #[default]
    Default,
    Large,
    ExtraLarge,
}

impl ModalSize {
    pub(crate) fn class(self) -> Option<&'static str> {
        match self {
            ModalSize::Small => Some("modal-sm"),
            ModalSize::Default => None,
            ModalSize::Large => Some("modal-lg"),
            ModalSize::ExtraLarge => Some("modal-xl"),
        }
    }
}

/// Responsive breakpoints for grid columns and offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "xxl",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which edge an offcanvas panel slides in from. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffcanvasPlacement {
    Start,
    End,
    Top,
    Bottom,
}

impl OffcanvasPlacement {
    pub fn as_str(self) -> &'static str {
        match self {
            OffcanvasPlacement::Start => "start",
            OffcanvasPlacement::End => "end",
            OffcanvasPlacement::Top => "top",
            OffcanvasPlacement::Bottom => "bottom",
        }
    }
}

/// Where a card image sits, which also decides its insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePosition {
    Top,
    Bottom,
}

/// The three mutually exclusive nav-list looks for tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabStyle {
    Tabs,
    Pills,
    Underline,
}

impl TabStyle {
    pub(crate) fn class(self) -> &'static str {
        match self {
            TabStyle::Tabs => "nav-tabs",
            TabStyle::Pills => "nav-pills",
            TabStyle::Underline => "nav-underline",
        }
    }

    pub(crate) const FAMILY: [&'static str; 3] = ["nav-tabs", "nav-pills", "nav-underline"];
}

/// Offcanvas backdrop behaviour, written to `data-bs-backdrop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    On,
    Off,
    Static,
}

impl Backdrop {
    pub fn as_str(self) -> &'static str {
        match self {
            Backdrop::On => "true",
            Backdrop::Off => "false",
            Backdrop::Static => "static",
        }
    }
}

/// Horizontal alignment for pagination lists.
/// `Start` is Bootstrap's default and maps to no class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

impl Alignment {
    pub(crate) fn class(self) -> Option<&'static str> {
        match self {
            Alignment::Start => None,
            Alignment::Center => Some("justify-content-center"),
            Alignment::End => Some("justify-content-end"),
        }
    }

    pub(crate) const FAMILY: [&'static str; 3] = [
        "justify-content-start",
        "justify-content-center",
        "justify-content-end",
    ];
}

/// A grid column width: a fixed 1..=12 share or content-sized `auto`.
///
/// The numeric `0` sentinel some callers use for "auto" is normalised at the
/// API boundary via [`ColWidth::from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColWidth {
    Auto,
    Width(u8),
}

impl ColWidth {
    /// Whether the width is inside the domain Bootstrap styles.
    pub(crate) fn is_valid(self) -> bool {
        match self {
            ColWidth::Auto => true,
            ColWidth::Width(n) => (1..=12).contains(&n),
        }
    }
}

impl From<u8> for ColWidth {
    fn from(n: u8) -> Self {
        match n {
            0 => ColWidth::Auto,
            n => ColWidth::Width(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_tokens() {
        assert_eq!(Color::Primary.as_str(), "primary");
        assert_eq!(Color::Dark.to_string(), "dark");
        assert_eq!(Color::ALL.len(), 8);
        let family = Color::family("table");
        assert!(family.contains(&"table-danger".to_string()));
        assert_eq!(family.len(), 8);
    }

    #[test]
    fn size_suffixes() {
        assert_eq!(Size::Small.suffix(), Some("sm"));
        assert_eq!(Size::Medium.suffix(), None);
        assert_eq!(Size::Large.suffix(), Some("lg"));
        assert_eq!(ModalSize::ExtraLarge.class(), Some("modal-xl"));
        assert_eq!(ModalSize::Default.class(), None);
    }

    #[test]
    fn col_width_zero_is_auto() {
        assert_eq!(ColWidth::from(0), ColWidth::Auto);
        assert_eq!(ColWidth::from(7), ColWidth::Width(7));
        assert!(ColWidth::Auto.is_valid());
        assert!(!ColWidth::Width(13).is_valid());
    }

    #[test]
    fn alignment_start_has_no_class() {
        assert_eq!(Alignment::Start.class(), None);
        assert_eq!(Alignment::End.class(), Some("justify-content-end"));
    }
}
