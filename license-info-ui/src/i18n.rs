// SPDX-License-Identifier: MIT OR Apache-2.0

//! Localization lookups for the license views.
//!
//! Catalogs use the nested i18n JSON layout (`{"license_info": {"title": ..}}`)
//! and are flattened into dotted keys on load. The active [`Translator`] is
//! shared through Yew's `ContextProvider`; components read it with
//! [`use_translator`], which falls back to English when no provider is mounted.

use std::collections::HashMap;
use std::rc::Rc;

use serde_json::{Map, Value};
use thiserror::Error;
use yew::prelude::*;

use crate::trusted_html::TrustedHtml;

pub const DEFAULT_LOCALE: &str = "en";

/// Locales with an embedded catalog.
pub const SUPPORTED_LOCALES: &[&str] = &["en", "nl"];

/// Translation keys used by the license views.
pub mod keys {
    pub const LICENSE_NEEDED: &str = "license_info.license_needed";
    pub const NO_LICENSE_NEEDED: &str = "license_info.no_license_needed";

    pub const PANEL_TITLE: &str = "license_info_panel.title";
    pub const NO_LICENSE_HTML: &str = "license_info_panel.no_license_html";
    pub const NO_LICENSE_DESCRIPTION_HTML: &str = "license_info_panel.no_license_description_html";
    pub const NOT_NEEDED_HTML: &str = "license_info_panel.not_needed_html";
    pub const UNKNOWN_LICENSE: &str = "license_info_panel.unknown_license";

    pub const ALL: &[&str] = &[
        LICENSE_NEEDED,
        NO_LICENSE_NEEDED,
        PANEL_TITLE,
        NO_LICENSE_HTML,
        NO_LICENSE_DESCRIPTION_HTML,
        NOT_NEEDED_HTML,
        UNKNOWN_LICENSE,
    ];
}

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("translation catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("translation catalog root must be a JSON object")]
    NotAnObject,
    #[error("translation entry `{key}` is not a string")]
    InvalidEntry { key: String },
}

/// Flattened key → text table for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn from_json(source: &str) -> Result<Self, I18nError> {
        let Value::Object(root) = serde_json::from_str::<Value>(source)? else {
            return Err(I18nError::NotAnObject);
        };
        let mut entries = HashMap::new();
        flatten("", &root, &mut entries)?;
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(
    prefix: &str,
    node: &Map<String, Value>,
    out: &mut HashMap<String, String>,
) -> Result<(), I18nError> {
    for (name, value) in node {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            Value::String(text) => {
                out.insert(key, text.clone());
            }
            Value::Object(nested) => flatten(&key, nested, out)?,
            _ => return Err(I18nError::InvalidEntry { key }),
        }
    }
    Ok(())
}

// Parsed once per thread and shared by every translator on it.
thread_local! {
    static EN: Rc<Catalog> = Rc::new(
        Catalog::from_json(include_str!("../locales/en.json")).expect("embedded en catalog"),
    );
    static NL: Rc<Catalog> = Rc::new(
        Catalog::from_json(include_str!("../locales/nl.json")).expect("embedded nl catalog"),
    );
}

fn builtin_catalog(locale: &str) -> Option<Rc<Catalog>> {
    match locale {
        "en" => Some(EN.with(Rc::clone)),
        "nl" => Some(NL.with(Rc::clone)),
        _ => None,
    }
}

/// Reduce a locale tag to its language subtag: `nl-NL` and `nl_nl` become `nl`.
/// A blank tag becomes [`DEFAULT_LOCALE`].
pub fn normalize_locale(locale: &str) -> String {
    let code = locale
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    if code.is_empty() {
        DEFAULT_LOCALE.to_owned()
    } else {
        code
    }
}

/// Looks up display strings for one locale, falling back to English.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: AttrValue,
    catalog: Rc<Catalog>,
    fallback: Rc<Catalog>,
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
            && Rc::ptr_eq(&self.catalog, &other.catalog)
            && Rc::ptr_eq(&self.fallback, &other.fallback)
    }
}

impl Translator {
    /// Translator backed by an embedded catalog. Unsupported locales get English.
    pub fn for_locale(locale: &str) -> Self {
        let code = normalize_locale(locale);
        match builtin_catalog(&code) {
            Some(catalog) => Self {
                locale: AttrValue::from(code),
                catalog,
                fallback: EN.with(Rc::clone),
            },
            None => {
                log::warn!("Unsupported locale {locale:?}, falling back to {DEFAULT_LOCALE}");
                Self::for_locale(DEFAULT_LOCALE)
            }
        }
    }

    /// Translator backed by a host-supplied catalog.
    pub fn with_catalog(locale: &str, catalog: Catalog) -> Self {
        Self {
            locale: AttrValue::from(normalize_locale(locale)),
            catalog: Rc::new(catalog),
            fallback: EN.with(Rc::clone),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Plain-text lookup. A key missing from both the active and the English
    /// catalog yields a visible `[missing "<locale>.<key>" translation]` marker.
    pub fn t(&self, key: &str) -> String {
        match self.catalog.get(key).or_else(|| self.fallback.get(key)) {
            Some(text) => text.to_owned(),
            None => {
                log::warn!("Missing translation for {key} in locale {}", self.locale);
                format!("[missing \"{}.{key}\" translation]", self.locale)
            }
        }
    }

    /// Lookup for entries that carry inline markup.
    pub fn t_html(&self, key: &str) -> TrustedHtml {
        TrustedHtml::from(self.t(key))
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::for_locale(DEFAULT_LOCALE)
    }
}

/// Context type carrying the active translator.
pub type TranslatorCtx = Translator;

/// The translator provided by the nearest `ContextProvider<TranslatorCtx>`,
/// or the English one if there is none.
#[hook]
pub fn use_translator() -> Translator {
    use_context::<TranslatorCtx>().unwrap_or_default()
}
