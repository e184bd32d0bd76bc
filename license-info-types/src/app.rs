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
 */

//! The application record consumed by the license views.
//!
//! The record is owned by the application-data provider and handed to the
//! views fully loaded. Only the license-related fields are modelled here;
//! every other field of the host record is ignored when decoding.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RecordError;
use crate::license::{LicenseRequirement, LicenseStatus};

/// Locale code to free-text mapping (`{"en": "...", "nl": "..."}`).
///
/// A `null` mapping decodes as empty and `null` entries are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Option::<BTreeMap<String, Option<String>>>::deserialize(deserializer)?
            .unwrap_or_default();
        Ok(entries
            .into_iter()
            .filter_map(|(locale, text)| Some((locale, text?)))
            .collect())
    }
}

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// The English entry, which is the only one the views display.
    pub fn en(&self) -> Option<&str> {
        self.get("en")
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    pub fn insert(&mut self, locale: impl Into<String>, text: impl Into<String>) {
        self.0.insert(locale.into(), text.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>, T: Into<String>> FromIterator<(L, T)> for LocalizedText {
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(locale, text)| (locale.into(), text.into()))
                .collect(),
        )
    }
}

/// License-related view of an application record.
///
/// # Example payload
///
/// ```json
/// { "licenseRequired": true, "licenseStatus": null, "licenseDetails": { "en": "Contact sales." } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppRecord {
    pub license_required: LicenseRequirement,
    pub license_status: LicenseStatus,
    pub license_details: LocalizedText,
}

impl AppRecord {
    pub fn from_json(payload: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, RecordError> {
        Ok(serde_json::from_value(value)?)
    }
}
