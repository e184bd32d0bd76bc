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

//! Full-width license panel for an application detail page.
//!
//! Shows a title, a compact [`LicenseInfo`] block and a status block driven
//! by [`AppRecord::license_status`].

use std::rc::Rc;

use license_info_types::{AppRecord, LicenseStatus};
use yew::prelude::*;

use crate::components::license_info::LicenseInfo;
use crate::i18n::{keys, use_translator, Translator};
use crate::trusted_html::TrustedHtml;

#[derive(Properties, Debug, PartialEq)]
pub struct LicenseInfoPanelProps {
    pub app: Rc<AppRecord>,
}

#[function_component(LicenseInfoPanel)]
pub fn license_info_panel(props: &LicenseInfoPanelProps) -> Html {
    let t = use_translator();

    html! {
        <div class="l-middle">
            <div class="mod-title">
                <h1>{ t.t(keys::PANEL_TITLE) }</h1>
            </div>

            <div class="mod-connection">
                <LicenseInfo app={props.app.clone()} split={false} />
            </div>
            { license_status_block(props.app.license_status) }
        </div>
    }
}

/// Status block below the license information.
///
/// Every status renders nothing for now. Which of [`has_license`],
/// [`no_license`], [`no_license_needed`] and [`unknown_license`] belongs to
/// which status is still an open product question.
pub fn license_status_block(status: LicenseStatus) -> Html {
    match status {
        LicenseStatus::HasLicense | LicenseStatus::NoLicense | LicenseStatus::Unknown => {
            log::debug!("No status block wired for {status:?}");
            html! {}
        }
    }
}

/// `message` is injected unescaped.
pub fn has_license(message: &TrustedHtml) -> Html {
    html! {
        <div class="mod-title">
            <h3>{ message.to_html() }</h3>
        </div>
    }
}

pub fn no_license(t: &Translator) -> Html {
    html! {
        <div class="mod-title">
            <h3>{ t.t_html(keys::NO_LICENSE_HTML).to_html() }</h3>
            <br />
            <div class="mod-description">
                { t.t_html(keys::NO_LICENSE_DESCRIPTION_HTML).to_html() }
            </div>
        </div>
    }
}

pub fn no_license_needed(t: &Translator) -> Html {
    html! {
        <div class="mod-title">
            <h3>{ t.t_html(keys::NOT_NEEDED_HTML).to_html() }</h3>
        </div>
    }
}

pub fn unknown_license(t: &Translator) -> Html {
    html! {
        <div class="mod-title">
            <h3>{ t.t(keys::UNKNOWN_LICENSE) }</h3>
        </div>
    }
}
