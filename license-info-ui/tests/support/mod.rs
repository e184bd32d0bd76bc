// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for license-info-ui component tests.
//
// Provides mount/cleanup helpers, record construction, and runtime config
// injection so that individual test files stay focused on assertions.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::rc::Rc;

use license_info_types::AppRecord;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Text content of the first element matching `selector`, panicking if absent.
pub fn text_of(mount: &web_sys::Element, selector: &str) -> String {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("expected an element matching {selector}"))
        .text_content()
        .unwrap_or_default()
}

/// Whether any element matches `selector`.
pub fn exists(mount: &web_sys::Element, selector: &str) -> bool {
    mount.query_selector(selector).unwrap().is_some()
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Decode an application record the way the data provider would hand it over.
pub fn app(json: &str) -> Rc<AppRecord> {
    Rc::new(AppRecord::from_json(json).expect("test record should decode"))
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` object with the given locale and, when
/// `app_json` is `Some`, an `app` record parsed from it.
pub fn inject_app_config(locale: &str, app_json: Option<&str>) {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"locale".into(), &locale.into()).unwrap();
    if let Some(app_json) = app_json {
        let app = js_sys::JSON::parse(app_json).unwrap();
        js_sys::Reflect::set(&config, &"app".into(), &app).unwrap();
    }

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
