// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed type.

use std::fmt;

use crate::error::ValueError;

/// Fan speed step (0-5).
///
/// 0 means the fan is idle, 5 is the fastest step.
///
/// # Examples
///
/// ```
/// use smarthome_lib::types::FanSpeed;
///
/// let speed = FanSpeed::new(3).unwrap();
/// assert_eq!(speed.value(), 3);
/// assert!(FanSpeed::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FanSpeed(u8);

impl FanSpeed {
    /// Minimum speed step.
    pub const MIN: u8 = 0;

    /// Maximum speed step.
    pub const MAX: u8 = 5;

    /// Creates a new fan speed.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [0, 5].
    pub fn new(value: i64) -> Result<Self, ValueError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX)
            .map(Self)
            .ok_or(ValueError::OutOfRange {
                min: i64::from(Self::MIN),
                max: i64::from(Self::MAX),
                actual: value,
            })
    }

    /// Creates a fan speed, clamping to the valid range.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        // Safe: clamped to 0..=5 before the cast
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    /// Returns the speed step.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns whether the fan is idle.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FanSpeed> for i64 {
    fn from(value: FanSpeed) -> Self {
        i64::from(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_speed_valid_values() {
        for v in 0..=5 {
            assert_eq!(i64::from(FanSpeed::new(v).unwrap()), v);
        }
    }

    #[test]
    fn fan_speed_invalid_values() {
        assert!(FanSpeed::new(6).is_err());
        assert!(FanSpeed::new(-1).is_err());
    }

    #[test]
    fn fan_speed_clamped() {
        assert_eq!(FanSpeed::clamped(9).value(), 5);
        assert_eq!(FanSpeed::clamped(-3).value(), 0);
        assert!(FanSpeed::clamped(0).is_idle());
    }
}
