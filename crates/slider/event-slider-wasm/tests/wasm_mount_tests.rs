#![cfg(target_arch = "wasm32")]
use event_slider_wasm::{abi_version, EventSlider};
use js_sys::{Object, Reflect, JSON};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn body() -> HtmlElement {
    document().body().unwrap()
}

/// Replace the page body with `html`.
fn page(html: &str) {
    body().set_inner_html(html);
}

fn by_id(id: &str) -> Element {
    document().get_element_by_id(id).unwrap()
}

fn active_count(selector: &str) -> u32 {
    document()
        .query_selector_all(&format!("{selector}.active"))
        .unwrap()
        .length()
}

fn fire(target: &Element, kind: &str) {
    target.dispatch_event(&Event::new(kind).unwrap()).unwrap();
}

fn press(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

fn dot(i: u32) -> Element {
    document()
        .query_selector_all(".dot")
        .unwrap()
        .get(i)
        .unwrap()
        .dyn_into()
        .unwrap()
}

/// Shadow `document.hidden` with an own property; `None` restores the getter.
fn force_hidden(hidden: Option<bool>) {
    let doc: JsValue = document().into();
    match hidden {
        Some(v) => {
            let desc = JSON::parse(&format!(r#"{{ "value": {v}, "configurable": true }}"#)).unwrap();
            Object::define_property(doc.unchecked_ref(), &"hidden".into(), desc.unchecked_ref());
        }
        None => {
            Reflect::delete_property(doc.unchecked_ref(), &"hidden".into()).unwrap();
        }
    }
}

fn no_auto() -> JsValue {
    // long interval so ticks never land during a test
    JSON::parse(r#"{ "auto_slide_interval_ms": 600000 }"#).unwrap()
}

const FULL_PAGE: &str = r#"
<div id="eventSlider">
  <div class="slide"></div><div class="slide"></div><div class="slide"></div>
</div>
<div id="sliderDots"></div>
<h2 id="captionTitle"></h2><p id="captionText"></p>
"#;

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn mount_renders_first_slide() {
    page(FULL_PAGE);
    let slider = EventSlider::mount(no_auto(), JsValue::UNDEFINED)
        .unwrap()
        .unwrap();
    assert_eq!(slider.slide_count(), 3);
    assert_eq!(slider.current_index(), 0);
    assert_eq!(active_count(".slide"), 1);
    assert_eq!(active_count(".dot"), 1);
    assert_eq!(
        by_id("captionTitle").text_content().unwrap(),
        "Valentine Chocolate Festival"
    );
    let first = document().query_selector(".slide").unwrap().unwrap();
    assert_eq!(first.get_attribute("aria-label").unwrap(), "Slide 1 of 3");
}

#[wasm_bindgen_test]
fn dot_click_moves_and_keeps_one_active() {
    page(FULL_PAGE);
    let slider = EventSlider::mount(no_auto(), JsValue::UNDEFINED)
        .unwrap()
        .unwrap();
    let dots = document().query_selector_all(".dot").unwrap();
    assert_eq!(dots.length(), 3);
    let third: Element = dots.get(2).unwrap().dyn_into().unwrap();
    third
        .dispatch_event(&Event::new("click").unwrap())
        .unwrap();
    assert_eq!(slider.current_index(), 2);
    assert!(third.class_list().contains("active"));
    assert_eq!(active_count(".dot"), 1);
    assert!(slider.is_auto_advancing());
}

#[wasm_bindgen_test]
fn focused_dot_click_keeps_auto_advance_alive() {
    page(FULL_PAGE);
    let slider = EventSlider::mount(no_auto(), JsValue::UNDEFINED)
        .unwrap()
        .unwrap();
    let third = dot(2);
    fire(&third, "focus");
    assert!(slider.is_paused());
    assert!(!slider.is_auto_advancing());
    fire(&third, "click");
    assert_eq!(slider.current_index(), 2);
    assert!(!slider.is_paused());
    assert!(slider.is_advancing());
    fire(&third, "blur");
    assert!(slider.is_advancing());
}

#[wasm_bindgen_test]
fn arrow_keys_navigate_from_window() {
    page(FULL_PAGE);
    let slider = EventSlider::mount(no_auto(), JsValue::UNDEFINED)
        .unwrap()
        .unwrap();
    press("ArrowRight");
    assert_eq!(slider.current_index(), 1);
    assert_eq!(active_count(".slide"), 1);
    press("ArrowLeft");
    press("ArrowLeft");
    assert_eq!(slider.current_index(), 2);
    press("Enter");
    assert_eq!(slider.current_index(), 2);
}

#[wasm_bindgen_test]
fn arrow_key_with_focused_dot_resumes() {
    page(FULL_PAGE);
    let slider = EventSlider::mount(no_auto(), JsValue::UNDEFINED)
        .unwrap()
        .unwrap();
    fire(&dot(0), "focus");
    assert!(slider.is_paused());
    press("ArrowRight");
    assert_eq!(slider.current_index(), 1);
    assert!(!slider.is_paused());
    assert!(slider.is_advancing());
}

#[wasm_bindgen_test]
fn visibility_change_gates_advancing() {
    page(FULL_PAGE);
    let slider = EventSlider::mount(no_auto(), JsValue::UNDEFINED)
        .unwrap()
        .unwrap();
    force_hidden(Some(true));
    document()
        .dispatch_event(&Event::new("visibilitychange").unwrap())
        .unwrap();
    assert!(!slider.is_visible());
    assert!(!slider.is_advancing());
    // the interval itself keeps running while hidden
    assert!(slider.is_auto_advancing());

    force_hidden(None);
    document()
        .dispatch_event(&Event::new("visibilitychange").unwrap())
        .unwrap();
    assert!(slider.is_visible());
    assert!(slider.is_advancing());
}

#[wasm_bindgen_test]
fn hover_pauses_and_leave_resumes() {
    page(FULL_PAGE);
    let slider = EventSlider::mount(no_auto(), JsValue::UNDEFINED)
        .unwrap()
        .unwrap();
    let root = by_id("eventSlider");
    root.dispatch_event(&Event::new("mouseenter").unwrap())
        .unwrap();
    assert!(slider.is_paused());
    assert!(!slider.is_auto_advancing());
    root.dispatch_event(&Event::new("mouseleave").unwrap())
        .unwrap();
    assert!(!slider.is_paused());
    assert!(slider.is_auto_advancing());
}

#[wasm_bindgen_test]
fn missing_anchors_get_fallbacks() {
    page(r#"<div class="event-slider"><div class="slide"></div><div class="slide"></div></div>"#);
    let captions = JSON::parse(r#"[{ "title": "Only", "text": "one" }]"#).unwrap();
    let slider = EventSlider::mount(no_auto(), captions).unwrap().unwrap();
    slider.next();
    assert_eq!(by_id("captionTitle_fallback").text_content().unwrap(), "Only");
    let local = document().query_selector(".slider-dots-local").unwrap().unwrap();
    assert_eq!(local.child_element_count(), 2);
    assert!(document()
        .query_selector(".fallback-caption")
        .unwrap()
        .is_some());
}

#[wasm_bindgen_test]
fn no_slides_means_no_mount_and_no_mutation() {
    let html = r#"<div id="eventSlider"></div>"#;
    page(html);
    let before = body().inner_html();
    let mounted = EventSlider::mount(JsValue::UNDEFINED, JsValue::UNDEFINED).unwrap();
    assert!(mounted.is_none());
    assert_eq!(body().inner_html(), before);
}

#[wasm_bindgen_test]
fn failed_mount_registers_no_listeners() {
    let html = r#"<div id="eventSlider"></div><div id="sliderDots"></div>"#;
    page(html);
    let before = body().inner_html();
    assert!(EventSlider::mount(JsValue::UNDEFINED, JsValue::UNDEFINED)
        .unwrap()
        .is_none());
    press("ArrowRight");
    fire(&by_id("eventSlider"), "mouseenter");
    document()
        .dispatch_event(&Event::new("visibilitychange").unwrap())
        .unwrap();
    assert_eq!(body().inner_html(), before);
}

#[wasm_bindgen_test]
fn no_root_means_no_mount() {
    page("<main></main>");
    assert!(EventSlider::mount(JsValue::UNDEFINED, JsValue::UNDEFINED)
        .unwrap()
        .is_none());
}

#[wasm_bindgen_test]
fn zero_interval_is_rejected() {
    page(FULL_PAGE);
    let before = body().inner_html();
    let cfg = JSON::parse(r#"{ "auto_slide_interval_ms": 0 }"#).unwrap();
    assert!(EventSlider::mount(cfg, JsValue::UNDEFINED).is_err());
    // rejected before any dot or aria attribute is written
    assert_eq!(body().inner_html(), before);
    assert_eq!(document().query_selector_all(".dot").unwrap().length(), 0);
}
