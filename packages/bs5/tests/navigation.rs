//! Navbar, breadcrumb, pagination and tabs.

use bs5::prelude::*;
use wasm_bindgen_test::wasm_bindgen_test;
use web_sys::Element;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn app() -> App {
    App::new("bs5 tests")
}

fn has(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

#[wasm_bindgen_test]
fn navbar_document_order_and_collapse_id() {
    let app = app();
    let mut navbar = app.navbar("main-nav", "Acme", "/");
    navbar.add_item("Home", "/", true).add_item("About", "/about", false);

    assert!(has(navbar.root(), "navbar"));
    assert!(has(navbar.root(), "navbar-expand-lg"));
    assert!(has(navbar.root(), "bg-body-tertiary"));

    // container holds toggler, brand, collapse in that order
    let toggler = navbar.container().first_element_child().unwrap();
    assert!(has(&toggler, "navbar-toggler"));
    let brand = toggler.next_element_sibling().unwrap();
    assert!(has(&brand, "navbar-brand"));
    let collapse = brand.next_element_sibling().unwrap();
    assert!(has(&collapse, "navbar-collapse"));

    // collapse id is minted per navbar, and the toggler targets it
    assert_eq!(collapse.get_attribute("id").unwrap(), "main-nav-collapse");
    assert_eq!(
        toggler.get_attribute("data-bs-target").unwrap(),
        "#main-nav-collapse"
    );

    assert_eq!(navbar.list().child_element_count(), 2);
    let active = navbar.list().query_selector("a.active").unwrap().unwrap();
    assert_eq!(active.get_attribute("aria-current").unwrap(), "page");
    assert_eq!(active.text_content().unwrap(), "Home");
}

#[wasm_bindgen_test]
fn breadcrumb_items_and_divider() {
    let app = app();
    let mut breadcrumb = app.breadcrumb();
    breadcrumb.add_item("Home", "/", false);
    let current = breadcrumb.add_item("Library", "", true);
    breadcrumb.set_divider(">");

    let first = breadcrumb.list().first_element_child().unwrap();
    let link = first.first_element_child().unwrap();
    assert_eq!(link.tag_name().to_lowercase(), "a");
    assert_eq!(link.get_attribute("href").unwrap(), "/");

    assert!(has(current.element(), "active"));
    assert_eq!(current.element().get_attribute("aria-current").unwrap(), "page");
    assert!(current.element().first_element_child().is_none());
    assert_eq!(current.element().text_content().unwrap(), "Library");

    let style = breadcrumb.list().get_attribute("style").unwrap();
    assert!(style.contains("--bs-breadcrumb-divider"));
}

#[wasm_bindgen_test]
fn breadcrumb_active_toggle_keeps_href() {
    let app = app();
    let mut breadcrumb = app.breadcrumb();
    let mut item = breadcrumb.add_item("Docs", "/docs", true);

    item.set_active(false);
    let link = item.element().first_element_child().unwrap();
    assert_eq!(link.get_attribute("href").unwrap(), "/docs");
    assert!(!has(item.element(), "active"));
    assert!(!item.element().has_attribute("aria-current"));

    item.set_active(true);
    assert!(has(item.element(), "active"));
    assert_eq!(item.element().text_content().unwrap(), "Docs");
}

#[wasm_bindgen_test]
fn pagination_scenario() {
    let app = app();
    let mut pagination = app.pagination("Search results");
    pagination.add_previous("#", false);
    pagination.add_page(1, "#p1", false);
    pagination.add_page(2, "#p2", true);
    pagination.add_ellipsis();
    pagination.add_next("#", false);

    assert_eq!(pagination.list().child_element_count(), 5);

    let third = pagination
        .list()
        .query_selector("li:nth-child(3)")
        .unwrap()
        .unwrap();
    assert!(has(&third, "active"));
    assert_eq!(third.get_attribute("aria-current").unwrap(), "page");

    let fourth = pagination
        .list()
        .query_selector("li:nth-child(4)")
        .unwrap()
        .unwrap();
    assert!(has(&fourth, "disabled"));
    let gap = fourth.first_element_child().unwrap();
    assert_eq!(gap.text_content().unwrap(), "...");
}

#[wasm_bindgen_test]
fn page_item_state_machine() {
    let app = app();
    let mut pagination = app.pagination("pages");
    let mut item = pagination.add_item("1", "#");

    item.set_active(true);
    assert!(has(item.element(), "active"));
    assert_eq!(item.element().get_attribute("aria-current").unwrap(), "page");

    item.set_disabled(true);
    assert!(has(item.element(), "disabled"));
    assert_eq!(item.link().get_attribute("tabindex").unwrap(), "-1");
    assert_eq!(item.link().get_attribute("aria-disabled").unwrap(), "true");

    item.set_disabled(false);
    assert!(!item.link().has_attribute("tabindex"));
    assert!(!item.link().has_attribute("aria-disabled"));

    item.set_active(false);
    assert!(!has(item.element(), "active"));
    assert!(!item.element().has_attribute("aria-current"));
}

#[wasm_bindgen_test]
fn pagination_size_and_alignment() {
    let app = app();
    let mut pagination = app.pagination("pages");
    pagination.set_size(Size::Large).set_size(Size::Medium);
    assert!(!has(pagination.list(), "pagination-lg"));
    assert!(!has(pagination.list(), "pagination-sm"));

    pagination.set_alignment(Alignment::Center);
    assert!(has(pagination.list(), "justify-content-center"));
    pagination.set_alignment(Alignment::Start);
    assert!(!has(pagination.list(), "justify-content-center"));
    assert!(!has(pagination.list(), "justify-content-start"));
}

#[wasm_bindgen_test]
fn tabs_scenario() {
    let app = app();
    let mut tabs = app.tabs("t");
    let first = tabs.add_tab("A", true);
    let second = tabs.add_tab("B", false);

    assert_eq!(first.button().get_attribute("id").unwrap(), "t-tab-1");
    assert_eq!(
        first.button().get_attribute("data-bs-target").unwrap(),
        "#t-pane-1"
    );
    assert!(has(first.button(), "active"));
    assert_eq!(first.button().get_attribute("aria-selected").unwrap(), "true");

    assert_eq!(second.button().get_attribute("id").unwrap(), "t-tab-2");
    assert_eq!(second.button().get_attribute("aria-selected").unwrap(), "false");

    assert_eq!(first.pane().get_attribute("id").unwrap(), "t-pane-1");
    assert!(has(first.pane(), "tab-pane"));
    assert!(has(first.pane(), "fade"));
    assert!(has(first.pane(), "show"));
    assert!(has(first.pane(), "active"));
    assert_eq!(
        first.pane().get_attribute("aria-labelledby").unwrap(),
        "t-tab-1"
    );

    assert!(!has(second.pane(), "show"));
    assert!(!has(second.pane(), "active"));

    assert_eq!(tabs.content().get_attribute("id").unwrap(), "t-content");
}

#[wasm_bindgen_test]
fn tab_styles_are_exclusive() {
    let app = app();
    let mut tabs = app.tabs("styled");
    assert!(has(tabs.list(), "nav-tabs"));
    tabs.set_style(TabStyle::Pills);
    assert!(!has(tabs.list(), "nav-tabs"));
    assert!(has(tabs.list(), "nav-pills"));
    tabs.set_style(TabStyle::Underline);
    assert!(!has(tabs.list(), "nav-pills"));
    assert!(has(tabs.list(), "nav-underline"));
}
