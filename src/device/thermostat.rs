// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat attributes.

use std::ops::RangeInclusive;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ValueError;
use crate::types::ThermostatMode;

use super::lenient;

/// Attributes specific to a thermostat.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Thermostat {
    #[serde(deserialize_with = "lenient::int")]
    temperature: i64,
    mode: String,
}

impl Thermostat {
    /// Target temperature of a new thermostat, in °F.
    pub const DEFAULT_TEMPERATURE: i64 = 72;

    /// Range offered by control surfaces, in °F.
    ///
    /// Not enforced by the model.
    pub const UI_RANGE: RangeInclusive<i64> = 60..=90;

    /// Returns the target temperature in °F.
    #[must_use]
    pub const fn temperature(&self) -> i64 {
        self.temperature
    }

    /// Returns the mode string.
    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Sets the target temperature in °F.
    pub fn set_temperature(&mut self, temperature: i64) {
        self.temperature = temperature;
    }

    /// Sets the mode without checking it is a known mode.
    pub fn set_mode(&mut self, mode: impl Into<String>) {
        self.mode = mode.into();
    }

    /// Sets the mode, rejecting unknown modes.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidMode` if `mode` is not auto/heat/cool/off.
    pub fn set_mode_checked(&mut self, mode: &str) -> Result<(), ValueError> {
        self.mode = mode.parse::<ThermostatMode>()?.as_str().to_string();
        Ok(())
    }

    pub(super) fn write_fields(&self, fields: &mut Map<String, Value>) {
        fields.insert("temperature".into(), self.temperature.into());
        fields.insert("mode".into(), self.mode.clone().into());
    }

    pub(super) fn describe_into(&self, lines: &mut Vec<String>) {
        lines.push(format!("Temperature: {}°F", self.temperature));
        lines.push(format!("Mode: {}", self.mode));
    }
}

impl Default for Thermostat {
    fn default() -> Self {
        Self {
            temperature: Self::DEFAULT_TEMPERATURE,
            mode: ThermostatMode::default().as_str().to_string(),
        }
    }
}
