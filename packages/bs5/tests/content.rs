//! Cards, tables, grid, buttons and the small leaf components.

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
fn button_outline_round_trip() {
    let app = app();
    for color in Color::ALL {
        let mut button = app.button(color, &[app.text("go")]);
        button.set_outline(true).set_outline(false);
        assert!(has(button.root(), &format!("btn-{color}")));
        assert!(!has(button.root(), &format!("btn-outline-{color}")));

        button.set_outline(false).set_outline(true);
        assert!(has(button.root(), &format!("btn-outline-{color}")));
        assert!(!has(button.root(), &format!("btn-{color}")));
    }
}

#[wasm_bindgen_test]
fn button_size_resets_to_medium() {
    let app = app();
    for size in [Size::Small, Size::Large] {
        let mut button = app.button(Color::Primary, &[]);
        button.set_size(size).set_size(Size::Medium);
        assert!(!has(button.root(), "btn-sm"));
        assert!(!has(button.root(), "btn-lg"));
    }
}

#[wasm_bindgen_test]
fn button_disabled_attribute_is_removed() {
    let app = app();
    let mut button = app.button(Color::Secondary, &[]);
    button.set_disabled(true);
    assert!(button.root().has_attribute("disabled"));
    button.set_disabled(false);
    assert!(!button.root().has_attribute("disabled"));
}

#[wasm_bindgen_test]
fn button_dropdown_structure() {
    let app = app();
    let mut dropdown = app.button_dropdown(Color::Primary, "Menu");
    dropdown.add_item("First", "#a").add_divider().add_item("Second", "");

    assert!(has(dropdown.root(), "dropdown"));
    assert_eq!(dropdown.toggle().get_attribute("data-bs-toggle").unwrap(), "dropdown");
    assert_eq!(dropdown.toggle().get_attribute("aria-expanded").unwrap(), "false");
    assert!(has(dropdown.toggle(), "dropdown-toggle"));

    assert_eq!(dropdown.menu().child_element_count(), 3);
    let divider = dropdown.menu().query_selector("hr").unwrap().unwrap();
    assert!(has(&divider, "dropdown-divider"));
    let second = dropdown.menu().query_selector("a[href='#']").unwrap().unwrap();
    assert_eq!(second.text_content().unwrap(), "Second");
}

#[wasm_bindgen_test]
fn card_lazy_regions_are_idempotent() {
    let app = app();
    let mut card = app.card();
    let header = card.header().element().clone();
    let body = card.body().element().clone();
    let footer = card.footer().element().clone();

    assert!(header.is_same_node(Some(card.header().element())));
    assert!(body.is_same_node(Some(card.body().element())));
    assert!(footer.is_same_node(Some(card.footer().element())));
    assert_eq!(card.root().child_element_count(), 3);
}

#[wasm_bindgen_test]
fn card_header_lands_after_top_image() {
    let app = app();
    let mut card = app.card();
    card.set_image("x.png", "x", ImagePosition::Top);
    card.body();
    card.header();

    let first = card.root().first_element_child().unwrap();
    assert!(has(&first, "card-img-top"));
    let second = first.next_element_sibling().unwrap();
    assert!(has(&second, "card-header"));
}

#[wasm_bindgen_test]
fn card_header_prepended_without_image() {
    let app = app();
    let mut card = app.card();
    card.body();
    card.header();
    let first = card.root().first_element_child().unwrap();
    assert!(has(&first, "card-header"));
}

#[wasm_bindgen_test]
fn card_bottom_image_appends() {
    let app = app();
    let mut card = app.card();
    card.body();
    card.set_image("x.png", "x", ImagePosition::Bottom);
    // second call must not create another image
    card.set_image("y.png", "y", ImagePosition::Top);

    let last = card.root().last_element_child().unwrap();
    assert!(has(&last, "card-img-bottom"));
    assert_eq!(last.get_attribute("src").unwrap(), "x.png");
}

#[wasm_bindgen_test]
fn card_body_conveniences() {
    let app = app();
    let mut card = app.card();
    card.body()
        .add_title("Title")
        .add_subtitle("Sub")
        .add_text("Body text")
        .add_link("More", "");

    let body = card.body();
    let title = body.element().query_selector("h5.card-title").unwrap().unwrap();
    assert_eq!(title.text_content().unwrap(), "Title");
    let subtitle = body.element().query_selector("h6.card-subtitle").unwrap().unwrap();
    assert!(has(&subtitle, "text-muted"));
    let link = body.element().query_selector("a.card-link").unwrap().unwrap();
    assert_eq!(link.get_attribute("href").unwrap(), "#");
}

#[wasm_bindgen_test]
fn table_sections_are_lazy_and_ordered() {
    let app = app();
    let mut table = app.table();
    table.body().add_row().add_cell("b");
    table.foot();
    // head created last still lands first
    table.head().add_row().add_cell("h");

    let first = table.root().first_element_child().unwrap();
    assert_eq!(first.tag_name().to_lowercase(), "thead");

    let head = table.head().element().clone();
    assert!(head.is_same_node(Some(table.head().element())));
    let body = table.body().element().clone();
    assert!(body.is_same_node(Some(table.body().element())));
    let foot = table.foot().element().clone();
    assert!(foot.is_same_node(Some(table.foot().element())));

    // head rows mint <th scope="col">, body rows mint <td>
    let th = table.root().query_selector("thead th").unwrap().unwrap();
    assert_eq!(th.get_attribute("scope").unwrap(), "col");
    assert!(table.root().query_selector("tbody td").unwrap().is_some());
}

#[wasm_bindgen_test]
fn table_color_clears_previous_variant() {
    let app = app();
    let mut table = app.table();
    table.set_color(Some(Color::Danger));
    table.set_color(Some(Color::Info));
    assert!(!has(table.root(), "table-danger"));
    assert!(has(table.root(), "table-info"));
    table.set_color(None);
    for color in Color::ALL {
        assert!(!has(table.root(), &format!("table-{color}")));
    }

    let mut row = table.body().add_row();
    row.set_color(Some(Color::Warning));
    assert!(has(row.element(), "table-warning"));
}

#[wasm_bindgen_test]
fn table_responsive_wraps_and_unwraps() {
    let app = app();
    let mut table = app.table();
    assert!(table.mount().is_same_node(Some(table.root())));

    table.set_responsive(true);
    let mount = table.mount().clone();
    assert!(has(&mount, "table-responsive"));
    assert!(table.root().parent_node().unwrap().is_same_node(Some(&mount)));

    table.set_responsive(false);
    assert!(table.mount().is_same_node(Some(table.root())));
}

#[wasm_bindgen_test]
fn table_cell_spans_are_decimal() {
    let app = app();
    let mut table = app.table();
    let mut row = table.body().add_row();
    let mut cell = row.add_cell("wide");
    cell.set_colspan(200).set_rowspan(3);
    assert_eq!(cell.element().get_attribute("colspan").unwrap(), "200");
    assert_eq!(cell.element().get_attribute("rowspan").unwrap(), "3");
}

#[wasm_bindgen_test]
fn col_size_clears_family() {
    let app = app();
    let mut col = app.col();
    col.set_size(ColWidth::Width(4));
    assert!(!has(col.root(), "col"));
    assert!(has(col.root(), "col-4"));

    col.set_size(ColWidth::Auto);
    assert!(!has(col.root(), "col-4"));
    assert!(has(col.root(), "col-auto"));

    // the 0 sentinel means auto
    col.set_size(7u8).set_size(0u8);
    assert!(has(col.root(), "col-auto"));
    assert!(!has(col.root(), "col-7"));

    // out of range is ignored
    col.set_size(13u8);
    assert!(has(col.root(), "col-auto"));
}

#[wasm_bindgen_test]
fn col_breakpoints_and_offsets() {
    let app = app();
    let mut col = app.col();
    col.set_breakpoint(Breakpoint::Md, Some(ColWidth::Width(6)));
    col.set_breakpoint(Breakpoint::Md, None);
    assert!(!has(col.root(), "col-md-6"));
    assert!(has(col.root(), "col-md"));

    // offsets accumulate, no clearing
    col.set_offset(2).set_offset_breakpoint(Breakpoint::Lg, 3);
    assert!(has(col.root(), "offset-2"));
    assert!(has(col.root(), "offset-lg-3"));
    col.set_offset(12); // ignored
    assert!(!has(col.root(), "offset-12"));
}

#[wasm_bindgen_test]
fn row_gutters() {
    let app = app();
    let mut row = app.row();
    row.set_gutters(3).set_gutters(1);
    assert!(!has(row.root(), "g-3"));
    assert!(has(row.root(), "g-1"));
    row.set_gutters(9); // ignored
    assert!(has(row.root(), "g-1"));
    row.set_gutters_x(0).set_gutters_y(5);
    assert!(has(row.root(), "gx-0"));
    assert!(has(row.root(), "gy-5"));
}

#[wasm_bindgen_test]
fn heading_renders_level_and_text() {
    let app = app();
    let heading = app.heading(3, "Hi");
    assert_eq!(heading.root().tag_name().to_lowercase(), "h3");
    assert_eq!(heading.root().text_content().unwrap(), "Hi");
}

#[wasm_bindgen_test]
#[should_panic]
fn heading_level_out_of_range_is_fatal() {
    let app = app();
    let _ = app.heading(7, "nope");
}

#[wasm_bindgen_test]
fn badge_and_icon() {
    let app = app();
    let mut badge = app.badge(Color::Danger, "9+");
    badge.set_pill(true);
    assert!(has(badge.root(), "badge"));
    assert!(has(badge.root(), "text-bg-danger"));
    assert!(has(badge.root(), "rounded-pill"));
    badge.set_pill(false);
    assert!(!has(badge.root(), "rounded-pill"));

    let mut icon = app.icon("alarm");
    assert!(has(icon.root(), "bi-alarm"));
    icon.set_name("bell");
    assert!(has(icon.root(), "bi-bell"));
    assert!(!has(icon.root(), "bi-alarm"));
}

#[wasm_bindgen_test]
fn click_listener_fires() {
    use std::cell::Cell;
    use std::rc::Rc;

    let app = app();
    let button = app.button(Color::Primary, &[app.text("go")]);

    let clicked = Rc::new(Cell::new(0u32));
    let seen = clicked.clone();
    button.add_event_listener("click", move |_| seen.set(seen.get() + 1));

    let event = web_sys::Event::new("click").unwrap();
    button.root().dispatch_event(&event).unwrap();
    button.root().dispatch_event(&event).unwrap();
    assert_eq!(clicked.get(), 2);
}

#[wasm_bindgen_test]
fn container_variants() {
    let app = app();
    assert!(has(app.container(false).root(), "container"));
    assert!(has(app.container(true).root(), "container-fluid"));
}
