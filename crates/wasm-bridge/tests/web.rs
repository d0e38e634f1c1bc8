//! Browser tests for the WASM bridge, run with `wasm-pack test --headless`

#![cfg(target_arch = "wasm32")]

use dashchart_wasm::{has_required_role, TooltipEngine};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn json(value: &str) -> JsValue {
    js_sys::JSON::parse(value).unwrap()
}

#[wasm_bindgen_test]
fn test_format_axis_group() {
    let engine = TooltipEngine::new(json(r#"{"isGroupedByDate": true, "utc": true}"#)).unwrap();
    let html = engine
        .format(json(
            r#"[{"seriesName": "errors", "axisValue": 1625097600000, "data": [1625097600000, 1200]}]"#,
        ))
        .unwrap();

    assert!(html.contains("<strong>errors</strong></span> 1,200"));
    assert!(html.contains("Jul 1, 2021"));
}

#[wasm_bindgen_test]
fn test_format_tolerates_odd_entries() {
    let engine = TooltipEngine::new(JsValue::UNDEFINED).unwrap();
    let html = engine
        .format(json(
            r#"[{"seriesName": "a", "data": ["Mon", 3]}, {"seriesName": "b", "data": ["Mon", {"meta": 1}]}]"#,
        ))
        .unwrap();

    assert!(html.contains("<strong>a</strong></span> 3"));
    assert!(html.contains("<strong>b</strong></span> —"));
}

#[wasm_bindgen_test]
fn test_js_filter() {
    let mut engine = TooltipEngine::new(JsValue::UNDEFINED).unwrap();
    engine.set_filter(js_sys::Function::new_with_args(
        "value, params",
        "return params.seriesName !== 'b';",
    ));

    let html = engine
        .format(json(
            r#"[{"seriesName": "a", "data": [1, 1]}, {"seriesName": "b", "data": [1, 2]}]"#,
        ))
        .unwrap();
    assert!(html.contains("<strong>a</strong>"));
    assert!(!html.contains("<strong>b</strong>"));
}

#[wasm_bindgen_test]
fn test_invalid_settings_rejected() {
    assert!(TooltipEngine::new(json(r#"{"hideDelay": 999999}"#)).is_err());
    assert!(TooltipEngine::from_preset("nope").is_err());
}

#[wasm_bindgen_test]
fn test_position_moves_arrow() {
    let document = web_sys::window().unwrap().document().unwrap();
    let tooltip: web_sys::HtmlElement = document.create_element("div").unwrap().unchecked_into();
    tooltip.set_inner_html(r#"<div class="tooltip-arrow"></div>"#);
    document.body().unwrap().append_child(&tooltip).unwrap();

    let engine = TooltipEngine::new(JsValue::UNDEFINED).unwrap();
    engine.position(5.0, 100.0, &tooltip).unwrap();

    let arrow: web_sys::HtmlElement = tooltip
        .query_selector(".tooltip-arrow")
        .unwrap()
        .unwrap()
        .unchecked_into();
    assert!(arrow.style().get_property_value("left").unwrap().ends_with("px"));
}

#[wasm_bindgen_test]
fn test_role_check() {
    let roles = json(r#"[{"id": "member"}, {"id": "admin"}, {"id": "owner"}]"#);

    assert!(has_required_role(roles.clone(), "admin", json(r#"{"currentRole": "owner"}"#)));
    assert!(!has_required_role(roles, "admin", json(r#"{"currentRole": "member"}"#)));
    assert!(!has_required_role(JsValue::NULL, "admin", JsValue::NULL));
}
