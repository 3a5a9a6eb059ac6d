// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power status of a device.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Represents the power status of a device.
///
/// Stored as the lowercase strings `"on"` and `"off"`. New devices start
/// [`Off`](Self::Off).
///
/// # Examples
///
/// ```
/// use smarthome_lib::types::PowerStatus;
///
/// assert_eq!(PowerStatus::On.as_str(), "on");
/// assert_eq!(PowerStatus::default(), PowerStatus::Off);
/// assert_eq!(PowerStatus::from(true), PowerStatus::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerStatus {
    /// Power is off.
    #[default]
    Off,
    /// Power is on.
    On,
}

impl PowerStatus {
    /// Returns the stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }

    /// Returns `true` if the device is powered on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for PowerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PowerStatus {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "0" | "false" => Ok(Self::Off),
            "on" | "1" | "true" => Ok(Self::On),
            _ => Err(ValueError::InvalidPowerStatus(s.to_string())),
        }
    }
}

impl From<bool> for PowerStatus {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_status_as_str() {
        assert_eq!(PowerStatus::Off.as_str(), "off");
        assert_eq!(PowerStatus::On.as_str(), "on");
    }

    #[test]
    fn power_status_from_str() {
        assert_eq!("ON".parse::<PowerStatus>().unwrap(), PowerStatus::On);
        assert_eq!("off".parse::<PowerStatus>().unwrap(), PowerStatus::Off);
        assert_eq!("1".parse::<PowerStatus>().unwrap(), PowerStatus::On);
        assert_eq!("false".parse::<PowerStatus>().unwrap(), PowerStatus::Off);
    }

    #[test]
    fn power_status_from_str_invalid() {
        let result = "standby".parse::<PowerStatus>();
        assert!(matches!(
            result.unwrap_err(),
            ValueError::InvalidPowerStatus(_)
        ));
    }

    #[test]
    fn power_status_serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_value(PowerStatus::On).unwrap(),
            serde_json::json!("on")
        );
        let parsed: PowerStatus = serde_json::from_value(serde_json::json!("off")).unwrap();
        assert_eq!(parsed, PowerStatus::Off);
    }
}
