// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for LicenseInfo.
//
// Verifies the three-way selection on `licenseRequired`, the split layout
// modifier, and that headings come from the provided translator.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::rc::Rc;
use std::time::Duration;

use license_info_types::AppRecord;
use support::{app, cleanup, create_mount_point, exists, text_of};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use license_info_ui::components::license_info::LicenseInfo;
use license_info_ui::i18n::{Translator, TranslatorCtx};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct Props {
    app: Rc<AppRecord>,
    split: Option<bool>,
    show_links: bool,
}

#[function_component(Wrapper)]
fn wrapper(props: &Props) -> Html {
    let app = props.app.clone();
    let show_links = props.show_links;
    match props.split {
        Some(split) => html! { <LicenseInfo {app} {split} {show_links} /> },
        None => html! { <LicenseInfo {app} {show_links} /> },
    }
}

async fn render(app: Rc<AppRecord>, split: Option<bool>) -> web_sys::Element {
    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root_and_props(
        mount.clone(),
        Props {
            app,
            split,
            show_links: false,
        },
    )
    .render();
    sleep(Duration::ZERO).await;
    mount
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn required_renders_heading_and_english_details() {
    let mount = render(
        app(r#"{"licenseRequired": true, "licenseDetails": {"en": "Foo", "nl": "Bar"}}"#),
        None,
    )
    .await;

    assert!(exists(&mount, ".license.yes"), "required block should render");
    assert!(!exists(&mount, ".license.no-needed"), "only one block renders");
    assert!(exists(&mount, ".license.yes > i.fa.fa-file-text-o"), "icon marker");
    assert_eq!(text_of(&mount, ".license.yes > h2"), "License required");
    assert_eq!(text_of(&mount, ".license.yes > p"), "Foo");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn required_without_english_details_renders_empty_paragraph() {
    let mount = render(
        app(r#"{"licenseRequired": true, "licenseDetails": {"nl": "Bar"}}"#),
        None,
    )
    .await;

    assert_eq!(text_of(&mount, ".license.yes > h2"), "License required");
    assert_eq!(text_of(&mount, ".license.yes > p"), "");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn not_required_renders_heading_without_details() {
    let mount = render(
        app(r#"{"licenseRequired": false, "licenseDetails": {"en": "Foo"}}"#),
        None,
    )
    .await;

    assert!(exists(&mount, ".license.no-needed"), "not-required block should render");
    assert!(!exists(&mount, ".license.yes"), "only one block renders");
    assert_eq!(text_of(&mount, ".license.no-needed > h2"), "No license required");
    assert!(!exists(&mount, "p"), "no detail paragraph when no license is needed");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn unknown_requirement_renders_nothing() {
    for record in [
        "{}",
        r#"{"licenseRequired": null}"#,
        r#"{"licenseRequired": "yes", "licenseDetails": {"en": "Foo"}}"#,
    ] {
        let mount = render(app(record), None).await;
        assert_eq!(
            mount.child_element_count(),
            0,
            "{record} should render no markup"
        );
        cleanup(&mount);
    }
}

#[wasm_bindgen_test]
async fn split_is_the_default_layout() {
    let mount = render(app(r#"{"licenseRequired": true}"#), None).await;

    let block = mount.first_element_child().expect("a license block");
    assert_eq!(block.class_name(), "license yes split");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn split_false_leaves_base_class_untouched() {
    let mount = render(app(r#"{"licenseRequired": false}"#), Some(false)).await;

    let block = mount.first_element_child().expect("a license block");
    assert_eq!(block.class_name(), "license no-needed");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn show_links_does_not_change_markup() {
    let record = app(r#"{"licenseRequired": true, "licenseDetails": {"en": "Foo"}}"#);

    let plain = render(record.clone(), Some(true)).await;

    let with_links = create_mount_point();
    yew::Renderer::<Wrapper>::with_root_and_props(
        with_links.clone(),
        Props {
            app: record,
            split: Some(true),
            show_links: true,
        },
    )
    .render();
    sleep(Duration::ZERO).await;

    assert_eq!(plain.inner_html(), with_links.inner_html());
    assert!(!exists(&with_links, "a"), "no links are rendered yet");

    cleanup(&plain);
    cleanup(&with_links);
}

#[wasm_bindgen_test]
async fn headings_follow_the_provided_translator() {
    #[function_component(DutchWrapper)]
    fn dutch_wrapper() -> Html {
        let app = app(r#"{"licenseRequired": false}"#);
        html! {
            <ContextProvider<TranslatorCtx> context={Translator::for_locale("nl")}>
                <LicenseInfo {app} />
            </ContextProvider<TranslatorCtx>>
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<DutchWrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert_eq!(text_of(&mount, ".license.no-needed > h2"), "Geen licentie nodig");

    cleanup(&mount);
}
