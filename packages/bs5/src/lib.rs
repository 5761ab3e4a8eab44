//! Bs5: typed builders for Bootstrap 5 on the browser DOM
//!
//! ## Overview
//! ------------
//! This crate builds Bootstrap 5 user-interface fragments as live `web-sys`
//! DOM trees, without ever rendering markup strings. Every component factory
//! hangs off an [`App`] bound to one document, returns a handle wrapping the
//! component's root element, and keeps typed references to the structurally
//! significant inner elements (a modal's dialog, an accordion item's collapse,
//! a card's lazily-created header) so later mutations land on the right node.
//!
//! Handles are fluent: mutators take `&mut self`, apply their class/attribute
//! changes synchronously, and return `&mut Self`. Nothing is inserted into the
//! document body by the library - the caller decides where a fragment mounts.
//!
//! The crate does not reimplement any of Bootstrap's JavaScript behaviour.
//! Interactive components are wired up declaratively through `data-bs-*`
//! attributes that the host page's Bootstrap bundle picks up; the handful of
//! actions Bootstrap only exposes imperatively (showing a toast) go through
//! the tiny [`bridge`] module.
//!
//! ```rust,ignore
//! let app = bs5::App::new("demo");
//! let mut alert = app.alert(Color::Success, &[app.text("Saved!")]);
//! alert.make_dismissible();
//! body.append_child(alert.root()).unwrap();
//! ```

pub mod accordion;
pub mod alert;
pub mod app;
pub mod badge;
pub mod breadcrumb;
pub mod bridge;
pub mod button;
pub mod card;
pub mod dom;
pub mod forms;
pub mod grid;
pub mod heading;
pub mod icon;
pub mod modal;
pub mod nav;
pub mod offcanvas;
pub mod pagination;
pub mod progress;
pub mod table;
pub mod tabs;
pub mod toast;
pub mod variant;

pub use app::App;
pub use variant::{
    Alignment, Backdrop, Breakpoint, ColWidth, Color, ImagePosition, ModalSize,
    OffcanvasPlacement, Size, TabStyle,
};

pub mod prelude {
    //! Everything needed to build fragments, in one import.
    pub use crate::accordion::{Accordion, AccordionItem};
    pub use crate::alert::Alert;
    pub use crate::app::App;
    pub use crate::badge::Badge;
    pub use crate::breadcrumb::{Breadcrumb, BreadcrumbItem};
    pub use crate::button::{Button, ButtonDropdown};
    pub use crate::card::{Card, CardBody};
    pub use crate::forms::{
        CheckKind, FormCheck, FormInput, FormLabel, FormRange, FormSelect, FormTextarea,
        HelpText, InputGroup,
    };
    pub use crate::grid::{Col, Container, Row};
    pub use crate::heading::Heading;
    pub use crate::icon::Icon;
    pub use crate::modal::Modal;
    pub use crate::nav::Navbar;
    pub use crate::offcanvas::Offcanvas;
    pub use crate::pagination::{PageItem, Pagination};
    pub use crate::progress::{Progress, ProgressStacked};
    pub use crate::table::{Table, TableCell, TableRow, TableSection};
    pub use crate::tabs::{Tab, Tabs};
    pub use crate::toast::{Toast, ToastContainer};
    pub use crate::variant::*;
}
