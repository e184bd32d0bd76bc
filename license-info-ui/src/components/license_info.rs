/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Block telling the viewer whether an application needs a license.
//!
//! Renders one of two fixed-shape blocks depending on
//! [`AppRecord::license_required`], or nothing when the requirement is
//! unknown. External stylesheets key off the `license yes` /
//! `license no-needed` class names and the optional ` split` suffix.

use std::rc::Rc;

use license_info_types::{AppRecord, LicenseRequirement};
use yew::prelude::*;

use crate::i18n::{keys, use_translator, Translator};

pub const REQUIRED_CLASS: &str = "license yes";
pub const NOT_REQUIRED_CLASS: &str = "license no-needed";
const ICON_CLASS: &str = "fa fa-file-text-o";

#[derive(Properties, Debug, PartialEq)]
pub struct LicenseInfoProps {
    pub app: Rc<AppRecord>,
    /// Appends the ` split` layout modifier to the container class.
    #[prop_or(true)]
    pub split: bool,
    /// Reserved for linking out to license documents; currently ignored.
    #[prop_or_default]
    pub show_links: bool,
}

/// Container class for `base`, with ` split` appended when `split` is set.
pub fn split_class_name(base: &str, split: bool) -> String {
    if split {
        format!("{base} split")
    } else {
        base.to_owned()
    }
}

#[function_component(LicenseInfo)]
pub fn license_info(props: &LicenseInfoProps) -> Html {
    let t = use_translator();

    match props.app.license_required {
        LicenseRequirement::Required => license_required(&props.app, props.split, &t),
        LicenseRequirement::NotRequired => no_license_required(props.split, &t),
        LicenseRequirement::Unknown => {
            log::debug!("License requirement unknown, nothing to render");
            html! {}
        }
    }
}

fn license_required(app: &AppRecord, split: bool, t: &Translator) -> Html {
    // A record without English details still renders, with an empty paragraph.
    let details = app.license_details.en().unwrap_or_default().to_owned();

    html! {
        <div class={split_class_name(REQUIRED_CLASS, split)}>
            <i class={ICON_CLASS}></i>
            <h2>{ t.t(keys::LICENSE_NEEDED) }</h2>
            <p>{ details }</p>
        </div>
    }
}

fn no_license_required(split: bool, t: &Translator) -> Html {
    html! {
        <div class={split_class_name(NOT_REQUIRED_CLASS, split)}>
            <i class={ICON_CLASS}></i>
            <h2>{ t.t(keys::NO_LICENSE_NEEDED) }</h2>
        </div>
    }
}
