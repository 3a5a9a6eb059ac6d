// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute updates.
//!
//! A [`DeviceUpdate`] describes one attribute change. Updates are applied with
//! [`Device::apply`](super::Device::apply), or through
//! [`DeviceManager::update_device`](crate::manager::DeviceManager::update_device)
//! which also persists the category.
//!
//! # Examples
//!
//! ```
//! use smarthome_lib::{Category, Device, DeviceUpdate};
//!
//! let mut lamp = Device::new(Category::Lights, "Lamp1", "Living Room", "alice");
//!
//! let changed = lamp
//!     .apply(&DeviceUpdate::batch(vec![
//!         DeviceUpdate::power_on(),
//!         DeviceUpdate::Brightness(40),
//!     ]))
//!     .unwrap();
//! assert!(changed);
//!
//! // Applying the same change again reports no change
//! assert!(!lamp.apply(&DeviceUpdate::power_on()).unwrap());
//! ```

use crate::error::ValueError;
use crate::types::{Brightness, FanSpeed, HexColor, Resolution, ThermostatMode};

use super::Category;

/// A change to one device attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceUpdate {
    /// Power on (`true`) or off (`false`). Valid for every category.
    Power(bool),

    /// Light brightness.
    Brightness(i64),

    /// Light color.
    Color(String),

    /// Thermostat target temperature in °F.
    Temperature(i64),

    /// Thermostat mode.
    Mode(String),

    /// Camera recording on/off.
    Recording(bool),

    /// Camera resolution.
    Resolution(String),

    /// Fan speed step.
    Speed(i64),

    /// Multiple changes applied together.
    ///
    /// Either every change is applied or, if one targets an attribute the
    /// device does not have, none is.
    Batch(Vec<DeviceUpdate>),
}

impl DeviceUpdate {
    /// Creates a power-on change.
    #[must_use]
    pub fn power_on() -> Self {
        Self::Power(true)
    }

    /// Creates a power-off change.
    #[must_use]
    pub fn power_off() -> Self {
        Self::Power(false)
    }

    /// Creates a color change.
    #[must_use]
    pub fn color(color: impl Into<String>) -> Self {
        Self::Color(color.into())
    }

    /// Creates a thermostat mode change.
    #[must_use]
    pub fn mode(mode: impl Into<String>) -> Self {
        Self::Mode(mode.into())
    }

    /// Creates a camera resolution change.
    #[must_use]
    pub fn resolution(resolution: impl Into<String>) -> Self {
        Self::Resolution(resolution.into())
    }

    /// Creates a batch of changes.
    #[must_use]
    pub fn batch(updates: Vec<DeviceUpdate>) -> Self {
        Self::Batch(updates)
    }

    /// Returns the name of the attribute this update targets.
    ///
    /// Batches report `"batch"`.
    #[must_use]
    pub const fn attribute(&self) -> &'static str {
        match self {
            Self::Power(_) => "status",
            Self::Brightness(_) => "brightness",
            Self::Color(_) => "color",
            Self::Temperature(_) => "temperature",
            Self::Mode(_) => "mode",
            Self::Recording(_) => "recording",
            Self::Resolution(_) => "resolution",
            Self::Speed(_) => "speed",
            Self::Batch(_) => "batch",
        }
    }

    /// Returns `true` if a device of `category` has the targeted attribute.
    ///
    /// A batch is supported when every change in it is.
    #[must_use]
    pub fn is_supported_by(&self, category: Category) -> bool {
        match self {
            Self::Power(_) => true,
            Self::Brightness(_) | Self::Color(_) => category == Category::Lights,
            Self::Temperature(_) | Self::Mode(_) => category == Category::Thermostat,
            Self::Recording(_) | Self::Resolution(_) => category == Category::SecurityCamera,
            Self::Speed(_) => category == Category::Fan,
            Self::Batch(updates) => updates.iter().all(|u| u.is_supported_by(category)),
        }
    }

    /// Returns the first leaf change a device of `category` cannot take.
    pub(crate) fn first_unsupported(&self, category: Category) -> Option<&Self> {
        match self {
            Self::Batch(updates) => updates
                .iter()
                .find_map(|update| update.first_unsupported(category)),
            leaf if leaf.is_supported_by(category) => None,
            leaf => Some(leaf),
        }
    }

    /// Checks the value against the documented range or enumeration.
    ///
    /// Temperature has no documented range and always passes.
    ///
    /// # Errors
    ///
    /// Returns the `ValueError` of the first invalid value.
    pub fn validate(&self) -> Result<(), ValueError> {
        match self {
            Self::Power(_) | Self::Recording(_) | Self::Temperature(_) => Ok(()),
            Self::Brightness(value) => Brightness::new(*value).map(drop),
            Self::Color(color) => HexColor::from_hex(color).map(drop),
            Self::Mode(mode) => mode.parse::<ThermostatMode>().map(drop),
            Self::Resolution(res) => res.parse::<Resolution>().map(drop),
            Self::Speed(value) => FanSpeed::new(*value).map(drop),
            Self::Batch(updates) => updates.iter().try_for_each(Self::validate),
        }
    }

    /// Returns the number of individual changes.
    ///
    /// For batches, returns the total count of nested changes.
    #[must_use]
    pub fn change_count(&self) -> usize {
        match self {
            Self::Batch(updates) => updates.iter().map(Self::change_count).sum(),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_is_supported_everywhere() {
        for category in Category::ALL {
            assert!(DeviceUpdate::power_on().is_supported_by(category));
        }
    }

    #[test]
    fn variant_updates_target_one_category() {
        assert!(DeviceUpdate::Brightness(40).is_supported_by(Category::Lights));
        assert!(!DeviceUpdate::Brightness(40).is_supported_by(Category::Fan));
        assert!(DeviceUpdate::Speed(2).is_supported_by(Category::Fan));
        assert!(!DeviceUpdate::mode("heat").is_supported_by(Category::SecurityCamera));
    }

    #[test]
    fn first_unsupported_finds_nested_leaf() {
        let update = DeviceUpdate::batch(vec![
            DeviceUpdate::power_on(),
            DeviceUpdate::batch(vec![DeviceUpdate::Speed(3)]),
        ]);
        assert_eq!(
            update.first_unsupported(Category::Lights),
            Some(&DeviceUpdate::Speed(3))
        );
        assert_eq!(update.first_unsupported(Category::Fan), None);
    }

    #[test]
    fn validate_checks_documented_ranges() {
        assert!(DeviceUpdate::Brightness(100).validate().is_ok());
        assert!(DeviceUpdate::Brightness(101).validate().is_err());
        assert!(DeviceUpdate::color("#12AB").validate().is_err());
        assert!(DeviceUpdate::mode("dry").validate().is_err());
        assert!(DeviceUpdate::resolution("720p").validate().is_ok());
        assert!(DeviceUpdate::Temperature(-40).validate().is_ok());
        assert!(
            DeviceUpdate::batch(vec![DeviceUpdate::Speed(2), DeviceUpdate::Speed(7)])
                .validate()
                .is_err()
        );
    }

    #[test]
    fn change_count() {
        assert_eq!(DeviceUpdate::power_on().change_count(), 1);

        let batch = DeviceUpdate::batch(vec![
            DeviceUpdate::power_on(),
            DeviceUpdate::Brightness(40),
        ]);
        assert_eq!(batch.change_count(), 2);

        let nested = DeviceUpdate::batch(vec![batch, DeviceUpdate::power_off()]);
        assert_eq!(nested.change_count(), 3);
    }
}
