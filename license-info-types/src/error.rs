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

//! Record decoding errors.

use thiserror::Error;

/// Raised when an application record payload cannot be decoded.
///
/// Only structural problems end up here. Missing or odd-valued license
/// flags decode to their `Unknown` variant instead of failing.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid application record: {0}")]
    Json(#[from] serde_json::Error),
}
