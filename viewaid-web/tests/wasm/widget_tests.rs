use viewaid_web::dom;
use viewaid_web::surface::STYLE_ELEMENT_ID;
use viewaid_web::widget::{self, WIDGET_ELEMENT_ID};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

/// Mount a fresh widget, clearing anything a previous test left behind, and
/// let Yew finish the initial render.
async fn mount_fresh() {
    let document = dom::document();
    if let Some(stale) = document.get_element_by_id(WIDGET_ELEMENT_ID) {
        stale.remove();
    }
    if let Some(stale) = document.get_element_by_id(STYLE_ELEMENT_ID) {
        stale.remove();
    }
    let _ = dom::body().style().remove_property("font-size");

    widget::mount().expect("widget mounts");
    dom::sleep_ms(0).await.expect("tick");
}

fn click_button(label: &str) {
    let list = dom::document()
        .query_selector_all("#viewaid-widget button")
        .expect("selector parses");
    for index in 0..list.length() {
        if let Some(el) = list
            .get(index)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        {
            if el.text_content().unwrap_or_default() == label {
                el.click();
                return;
            }
        }
    }
    panic!("button {label:?} not found");
}

fn click_toggle_affordance() {
    dom::document()
        .query_selector("button[aria-label='Toggle accessibility options']")
        .expect("selector parses")
        .expect("toggle affordance present")
        .dyn_into::<web_sys::HtmlElement>()
        .expect("toggle is an html element")
        .click();
}

fn stylesheet_text() -> String {
    dom::document()
        .get_element_by_id(STYLE_ELEMENT_ID)
        .expect("owned stylesheet present")
        .text_content()
        .unwrap_or_default()
}

fn body_font_size() -> String {
    dom::body()
        .style()
        .get_property_value("font-size")
        .unwrap_or_default()
}

fn container_style() -> String {
    dom::document()
        .get_element_by_id("viewaid-container")
        .expect("slide container present")
        .get_attribute("style")
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn mount_inserts_one_stylesheet_and_one_container() {
    mount_fresh().await;
    let document = dom::document();
    assert!(document.get_element_by_id(STYLE_ELEMENT_ID).is_some());

    // The element mount appends to <body> carries the widget id.
    let host = document
        .get_element_by_id(WIDGET_ELEMENT_ID)
        .expect("widget container present");
    let parent = host.parent_element().expect("container has a parent");
    assert_eq!(parent.tag_name(), "BODY");

    // Eight action buttons plus the toggle affordance.
    let buttons = document
        .query_selector_all("#viewaid-widget button")
        .expect("selector parses");
    assert_eq!(buttons.length(), 9);

    // Mounting alone must not touch the page's presentation.
    assert_eq!(stylesheet_text(), "");
    assert_eq!(body_font_size(), "");
}

#[wasm_bindgen_test]
async fn panel_toggle_flips_the_container_offset() {
    mount_fresh().await;
    assert!(container_style().contains("translateX(222px)"));

    click_toggle_affordance();
    dom::sleep_ms(0).await.expect("tick");
    assert!(container_style().contains("translateX(0px)"));

    click_toggle_affordance();
    dom::sleep_ms(0).await.expect("tick");
    assert!(container_style().contains("translateX(222px)"));
}

#[wasm_bindgen_test]
async fn toggling_settings_projects_rules_through_the_owned_stylesheet() {
    mount_fresh().await;

    click_button("Greyscale");
    assert_eq!(stylesheet_text(), "html { filter: grayscale(100%); }");

    click_button("Underline Links");
    assert_eq!(
        stylesheet_text(),
        "html { filter: grayscale(100%); }a { text-decoration: underline !important; }"
    );

    click_button("Greyscale");
    assert_eq!(
        stylesheet_text(),
        "a { text-decoration: underline !important; }"
    );

    click_button("Underline Links");
    assert_eq!(stylesheet_text(), "");
}

#[wasm_bindgen_test]
async fn font_size_steps_clamp_and_reset() {
    mount_fresh().await;

    for _ in 0..4 {
        click_button("Decrease Text Size");
    }
    assert_eq!(body_font_size(), "8px");

    // Already at the floor; further decreases are no-ops.
    click_button("Decrease Text Size");
    assert_eq!(body_font_size(), "8px");

    click_button("Increase Text Size");
    assert_eq!(body_font_size(), "10px");

    click_button("Reset text size");
    assert_eq!(body_font_size(), "16px");
}

#[wasm_bindgen_test]
async fn panel_open_state_does_not_touch_accessibility_state() {
    mount_fresh().await;

    click_toggle_affordance();
    dom::sleep_ms(0).await.expect("tick");
    click_toggle_affordance();
    dom::sleep_ms(0).await.expect("tick");

    assert_eq!(stylesheet_text(), "");
    assert_eq!(body_font_size(), "");
}
