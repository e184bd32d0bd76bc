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

//! Tri-state license flags.
//!
//! On the wire both flags are loosely-typed booleans: `true`, `false`, or
//! anything else (absent, `null`, a stray string). Here each one is an
//! explicit three-variant enum so the "unknown" branch is a checked case.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Whether an application mandates holding a license to operate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LicenseRequirement {
    /// `licenseRequired: true`
    Required,
    /// `licenseRequired: false`
    NotRequired,
    /// Absent, `null`, or any non-boolean value.
    #[default]
    Unknown,
}

/// Whether a required license is currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LicenseStatus {
    /// `licenseStatus: true`
    HasLicense,
    /// `licenseStatus: false`
    NoLicense,
    /// Absent, `null`, or any non-boolean value.
    #[default]
    Unknown,
}

impl From<Option<bool>> for LicenseRequirement {
    fn from(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Self::Required,
            Some(false) => Self::NotRequired,
            None => Self::Unknown,
        }
    }
}

impl From<LicenseRequirement> for Option<bool> {
    fn from(requirement: LicenseRequirement) -> Self {
        match requirement {
            LicenseRequirement::Required => Some(true),
            LicenseRequirement::NotRequired => Some(false),
            LicenseRequirement::Unknown => None,
        }
    }
}

impl From<Option<bool>> for LicenseStatus {
    fn from(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Self::HasLicense,
            Some(false) => Self::NoLicense,
            None => Self::Unknown,
        }
    }
}

impl From<LicenseStatus> for Option<bool> {
    fn from(status: LicenseStatus) -> Self {
        match status {
            LicenseStatus::HasLicense => Some(true),
            LicenseStatus::NoLicense => Some(false),
            LicenseStatus::Unknown => None,
        }
    }
}

/// Accept any JSON value and keep it only if it is a boolean.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(serde_json::Value::deserialize(deserializer)?.as_bool())
}

impl<'de> Deserialize<'de> for LicenseRequirement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_flag(deserializer).map(Self::from)
    }
}

impl Serialize for LicenseRequirement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Option::<bool>::from(*self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LicenseStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_flag(deserializer).map(Self::from)
    }
}

impl Serialize for LicenseStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Option::<bool>::from(*self).serialize(serializer)
    }
}
