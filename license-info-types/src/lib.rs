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

//! Shared application-record types for the license information panels.
//!
//! This crate defines the data contract between the application-data
//! provider and the views that render license information.
//! It is intentionally framework-agnostic. It depends on no Yew or DOM types.

pub mod app;
pub mod error;
pub mod license;

pub use app::{AppRecord, LocalizedText};
pub use error::RecordError;
pub use license::{LicenseRequirement, LicenseStatus};
