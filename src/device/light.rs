// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light attributes.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ValueError;
use crate::types::{Brightness, HexColor};

use super::lenient;

/// Attributes specific to a light.
///
/// # Examples
///
/// ```
/// use smarthome_lib::device::Light;
///
/// let mut light = Light::default();
/// assert_eq!(light.brightness(), 100);
/// assert_eq!(light.color(), "#FFFFFF");
///
/// // Plain setters are permissive
/// light.set_brightness(250);
/// assert_eq!(light.brightness(), 250);
///
/// // Checked setters enforce the documented range
/// assert!(light.set_brightness_checked(250).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Light {
    #[serde(deserialize_with = "lenient::int")]
    brightness: i64,
    color: String,
}

impl Light {
    /// Brightness of a new light.
    pub const DEFAULT_BRIGHTNESS: i64 = 100;

    /// Color of a new light.
    pub const DEFAULT_COLOR: &'static str = "#FFFFFF";

    /// Returns the brightness percentage.
    #[must_use]
    pub const fn brightness(&self) -> i64 {
        self.brightness
    }

    /// Returns the color string.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Sets the brightness without range checks.
    pub fn set_brightness(&mut self, brightness: i64) {
        self.brightness = brightness;
    }

    /// Sets the color without format checks.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Sets the brightness, rejecting values outside 0-100.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is out of range.
    pub fn set_brightness_checked(&mut self, brightness: i64) -> Result<(), ValueError> {
        self.brightness = Brightness::new(brightness)?.into();
        Ok(())
    }

    /// Sets the color from a hex string, storing it as `#RRGGBB`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the string is not a hex color.
    pub fn set_color_checked(&mut self, color: &str) -> Result<(), ValueError> {
        self.color = HexColor::from_hex(color)?.to_hex_with_hash();
        Ok(())
    }

    pub(super) fn write_fields(&self, fields: &mut Map<String, Value>) {
        fields.insert("brightness".into(), self.brightness.into());
        fields.insert("color".into(), self.color.clone().into());
    }

    pub(super) fn describe_into(&self, lines: &mut Vec<String>) {
        lines.push(format!("Brightness: {}%", self.brightness));
        lines.push(format!("Color: {}", self.color));
    }
}

impl Default for Light {
    fn default() -> Self {
        Self {
            brightness: Self::DEFAULT_BRIGHTNESS,
            color: Self::DEFAULT_COLOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let light: Light = serde_json::from_value(json!({})).unwrap();
        assert_eq!(light, Light::default());
    }

    #[test]
    fn checked_color_is_canonicalized() {
        let mut light = Light::default();
        light.set_color_checked("ff8000").unwrap();
        assert_eq!(light.color(), "#FF8000");
        assert!(light.set_color_checked("orange").is_err());
        assert_eq!(light.color(), "#FF8000");
    }

    #[test]
    fn checked_brightness_keeps_value_on_error() {
        let mut light = Light::default();
        light.set_brightness_checked(40).unwrap();
        assert!(light.set_brightness_checked(-1).is_err());
        assert_eq!(light.brightness(), 40);
    }
}
