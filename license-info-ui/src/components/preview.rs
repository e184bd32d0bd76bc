// SPDX-License-Identifier: MIT OR Apache-2.0

//! Root component of the preview binary.
//!
//! Mounts a [`LicenseInfoPanel`] for the record in `window.__APP_CONFIG.app`,
//! translated into `window.__APP_CONFIG.locale`.

use std::rc::Rc;

use license_info_types::AppRecord;
use yew::prelude::*;

use crate::components::config_error::ConfigError;
use crate::components::license_info_panel::LicenseInfoPanel;
use crate::constants::{app_config, RuntimeConfig, RuntimeConfigError};
use crate::i18n::{Translator, TranslatorCtx};

fn load() -> Result<(Translator, Rc<AppRecord>), RuntimeConfigError> {
    let config: RuntimeConfig = app_config()?;
    let app = Rc::new(config.app()?.clone());
    Ok((Translator::for_locale(config.locale()), app))
}

#[function_component(Preview)]
pub fn preview() -> Html {
    let (translator, app) = match load() {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("{e}");
            return html! { <ConfigError message={e.to_string()} /> };
        }
    };
    log::info!("Previewing license panel in locale {}", translator.locale());

    html! {
        <ContextProvider<TranslatorCtx> context={translator}>
            <LicenseInfoPanel {app} />
        </ContextProvider<TranslatorCtx>>
    }
}
