// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tolerant field decoders for stored device records.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Decodes an integer attribute that may have been stored as a float.
///
/// Slider-driven front-ends write values such as `40.0`; those are rounded
/// to the nearest integer.
// Safe: `as` saturates and stored attribute values are small
#[allow(clippy::cast_possible_truncation)]
pub(super) fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
    }

    match Number::deserialize(deserializer)? {
        Number::Int(value) => Ok(value),
        Number::Float(value) if value.is_finite() => Ok(value.round() as i64),
        Number::Float(value) => Err(D::Error::custom(format!(
            "expected a finite number, got {value}"
        ))),
    }
}
