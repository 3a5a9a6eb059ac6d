// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan attributes.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ValueError;
use crate::types::FanSpeed;

use super::lenient;

/// Attributes specific to a fan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Fan {
    #[serde(deserialize_with = "lenient::int")]
    speed: i64,
}

impl Fan {
    /// Returns the speed step.
    #[must_use]
    pub const fn speed(&self) -> i64 {
        self.speed
    }

    /// Sets the speed without range checks.
    pub fn set_speed(&mut self, speed: i64) {
        self.speed = speed;
    }

    /// Sets the speed, rejecting values outside 0-5.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is out of range.
    pub fn set_speed_checked(&mut self, speed: i64) -> Result<(), ValueError> {
        self.speed = FanSpeed::new(speed)?.into();
        Ok(())
    }

    pub(super) fn write_fields(&self, fields: &mut Map<String, Value>) {
        fields.insert("speed".into(), self.speed.into());
    }

    pub(super) fn describe_into(&self, lines: &mut Vec<String>) {
        lines.push(format!("Speed: {}", self.speed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fan_is_idle() {
        assert_eq!(Fan::default().speed(), 0);
    }

    #[test]
    fn checked_speed() {
        let mut fan = Fan::default();
        fan.set_speed_checked(5).unwrap();
        assert_eq!(fan.speed(), 5);
        assert!(fan.set_speed_checked(6).is_err());
        assert_eq!(fan.speed(), 5);
    }
}
