// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration injected by the host page as `window.__APP_CONFIG`.

use license_info_types::AppRecord;
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::i18n::DEFAULT_LOCALE;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    /// UI locale, e.g. `"en"` or `"nl-NL"`.
    #[serde(default)]
    pub locale: Option<String>,
    /// Application record to preview.
    #[serde(default)]
    pub app: Option<AppRecord>,
}

impl RuntimeConfig {
    pub fn locale(&self) -> &str {
        self.locale
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LOCALE)
    }

    pub fn app(&self) -> Result<&AppRecord, RuntimeConfigError> {
        self.app.as_ref().ok_or(RuntimeConfigError::MissingApp)
    }
}

#[derive(Debug, Error)]
pub enum RuntimeConfigError {
    #[error("Runtime configuration not found (window.__APP_CONFIG missing)")]
    Missing,
    #[error("Failed to parse __APP_CONFIG: {0}")]
    Invalid(String),
    #[error("Runtime configuration has no application record (__APP_CONFIG.app missing)")]
    MissingApp,
}

pub fn app_config() -> Result<RuntimeConfig, RuntimeConfigError> {
    let win = window().ok_or(RuntimeConfigError::Missing)?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err(RuntimeConfigError::Missing);
    }
    from_js_value::<RuntimeConfig>(config).map_err(|e| RuntimeConfigError::Invalid(e.to_string()))
}
