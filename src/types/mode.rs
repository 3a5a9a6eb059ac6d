// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat operating mode.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Operating mode of a thermostat.
///
/// # Examples
///
/// ```
/// use smarthome_lib::types::ThermostatMode;
///
/// let mode: ThermostatMode = "heat".parse().unwrap();
/// assert_eq!(mode, ThermostatMode::Heat);
/// assert_eq!(ThermostatMode::default().as_str(), "auto");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThermostatMode {
    /// Heat or cool as needed.
    #[default]
    Auto,
    /// Heating only.
    Heat,
    /// Cooling only.
    Cool,
    /// Thermostat disabled.
    Off,
}

impl ThermostatMode {
    /// Every mode, in the order a picker presents them.
    pub const ALL: [Self; 4] = [Self::Auto, Self::Heat, Self::Cool, Self::Off];

    /// Returns the stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Heat => "heat",
            Self::Cool => "cool",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for ThermostatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThermostatMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValueError::InvalidMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_str() {
        for mode in ThermostatMode::ALL {
            assert_eq!(mode.as_str().parse::<ThermostatMode>().unwrap(), mode);
        }
    }

    #[test]
    fn mode_parse_is_case_insensitive() {
        assert_eq!("COOL".parse::<ThermostatMode>().unwrap(), ThermostatMode::Cool);
    }

    #[test]
    fn mode_parse_invalid() {
        assert_eq!(
            "eco".parse::<ThermostatMode>(),
            Err(ValueError::InvalidMode("eco".to_string()))
        );
    }
}
