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

//! license-info-ui library root.
//!
//! Re-exports public modules so that integration tests (under `tests/`) can
//! import components. The preview binary entry-point lives in `main.rs`.

pub mod components;
pub mod constants;
pub mod i18n;
pub mod trusted_html;
