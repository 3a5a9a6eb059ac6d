// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device entity model.
//!
//! A [`Device`] is a base record (name, location, owner, power status) plus a
//! [`DeviceKind`] payload holding the attributes of one of the four fixed
//! kinds. Each capability (serialize, deserialize, describe, apply) is a
//! single `match` over the kind.
//!
//! # Stored form
//!
//! [`Device::serialize`] produces a flat JSON object with the base fields
//! `location`, `status` and `owner` followed by the kind's own fields. The
//! name is not part of the record: it is the key the record is stored under.
//!
//! ```
//! use serde_json::json;
//! use smarthome_lib::{Category, Device};
//!
//! let fan = Device::new(Category::Fan, "Ceiling", "Bedroom", "bob");
//! assert_eq!(
//!     serde_json::Value::Object(fan.serialize()),
//!     json!({ "location": "Bedroom", "status": "off", "owner": "bob", "speed": 0 })
//! );
//!
//! let restored = Device::deserialize(
//!     Category::Fan,
//!     "Ceiling",
//!     &json!({ "location": "Bedroom", "owner": "bob", "speed": 3 }),
//! )
//! .unwrap();
//! assert_eq!(restored.as_fan().map(|f| f.speed()), Some(3));
//! ```

mod camera;
mod category;
mod fan;
mod lenient;
mod light;
mod thermostat;
mod update;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Error;
use crate::types::PowerStatus;

pub use camera::SecurityCamera;
pub use category::Category;
pub use fan::Fan;
pub use light::Light;
pub use thermostat::Thermostat;
pub use update::DeviceUpdate;

/// Location stored for records that do not carry one.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Kind-specific attributes of a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceKind {
    /// A light.
    Light(Light),
    /// A thermostat.
    Thermostat(Thermostat),
    /// A security camera.
    SecurityCamera(SecurityCamera),
    /// A fan.
    Fan(Fan),
}

impl DeviceKind {
    /// Returns the default attributes for a new device of `category`.
    #[must_use]
    pub fn default_for(category: Category) -> Self {
        match category {
            Category::Lights => Self::Light(Light::default()),
            Category::Thermostat => Self::Thermostat(Thermostat::default()),
            Category::SecurityCamera => Self::SecurityCamera(SecurityCamera::default()),
            Category::Fan => Self::Fan(Fan::default()),
        }
    }

    /// Returns the category this kind belongs to.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Light(_) => Category::Lights,
            Self::Thermostat(_) => Category::Thermostat,
            Self::SecurityCamera(_) => Category::SecurityCamera,
            Self::Fan(_) => Category::Fan,
        }
    }

    fn decode(category: Category, record: &Value) -> Result<Self, serde_json::Error> {
        Ok(match category {
            Category::Lights => Self::Light(Light::deserialize(record)?),
            Category::Thermostat => Self::Thermostat(Thermostat::deserialize(record)?),
            Category::SecurityCamera => Self::SecurityCamera(SecurityCamera::deserialize(record)?),
            Category::Fan => Self::Fan(Fan::deserialize(record)?),
        })
    }

    fn write_fields(&self, fields: &mut Map<String, Value>) {
        match self {
            Self::Light(light) => light.write_fields(fields),
            Self::Thermostat(thermostat) => thermostat.write_fields(fields),
            Self::SecurityCamera(camera) => camera.write_fields(fields),
            Self::Fan(fan) => fan.write_fields(fields),
        }
    }

    fn describe_into(&self, lines: &mut Vec<String>) {
        match self {
            Self::Light(light) => light.describe_into(lines),
            Self::Thermostat(thermostat) => thermostat.describe_into(lines),
            Self::SecurityCamera(camera) => camera.describe_into(lines),
            Self::Fan(fan) => fan.describe_into(lines),
        }
    }
}

/// Base fields of a stored record.
#[derive(Deserialize)]
struct BaseRecord {
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    status: PowerStatus,
}

/// A home-automation device.
///
/// `name`, `owner` and the kind are fixed at creation; `name` is the
/// registry key. Kind attributes are modified through the `as_*_mut`
/// accessors or [`Device::apply`].
/// A device read from a legacy record may have no owner, in which case no
/// user can see it through owner-scoped operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    name: String,
    location: String,
    owner: Option<String>,
    status: PowerStatus,
    kind: DeviceKind,
}

impl Device {
    /// Creates a powered-off device of `category` with default attributes.
    #[must_use]
    pub fn new(
        category: Category,
        name: impl Into<String>,
        location: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            owner: Some(owner.into()),
            status: PowerStatus::Off,
            kind: DeviceKind::default_for(category),
        }
    }

    /// Rebuilds a device from a stored record.
    ///
    /// `name` is the key the record was stored under. Missing attributes
    /// take the kind's defaults, a missing location becomes
    /// [`UNKNOWN_LOCATION`], and a missing owner is kept as `None`. Unknown
    /// fields, including a redundant `name`, are ignored.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the record is not an object or a
    /// present field has the wrong type.
    pub fn deserialize(
        category: Category,
        name: impl Into<String>,
        record: &Value,
    ) -> Result<Self, serde_json::Error> {
        let base = BaseRecord::deserialize(record)?;
        let kind = DeviceKind::decode(category, record)?;

        Ok(Self {
            name: name.into(),
            location: base
                .location
                .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
            owner: base.owner,
            status: base.status,
            kind,
        })
    }

    /// Produces the stored record: base fields plus kind-specific fields.
    #[must_use]
    pub fn serialize(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("location".into(), self.location.clone().into());
        fields.insert("status".into(), self.status.as_str().into());
        fields.insert(
            "owner".into(),
            self.owner.clone().map_or(Value::Null, Value::String),
        );
        self.kind.write_fields(&mut fields);
        fields
    }

    /// Returns a human-readable description, one attribute per line.
    ///
    /// ```
    /// use smarthome_lib::{Category, Device};
    ///
    /// let lamp = Device::new(Category::Lights, "Lamp1", "Living Room", "alice");
    /// assert_eq!(
    ///     lamp.describe(),
    ///     [
    ///         "Device: Lamp1",
    ///         "Location: Living Room",
    ///         "Status: off",
    ///         "Brightness: 100%",
    ///         "Color: #FFFFFF",
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Device: {}", self.name),
            format!("Location: {}", self.location),
            format!("Status: {}", self.status),
        ];
        self.kind.describe_into(&mut lines);
        lines
    }

    /// Returns the device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the owning username, if known.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Returns `true` if `user` owns this device.
    #[must_use]
    pub fn is_owned_by(&self, user: &str) -> bool {
        self.owner.as_deref() == Some(user)
    }

    /// Returns the power status.
    #[must_use]
    pub const fn status(&self) -> PowerStatus {
        self.status
    }

    /// Returns the category of this device.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }

    /// Returns the kind-specific attributes.
    #[must_use]
    pub const fn kind(&self) -> &DeviceKind {
        &self.kind
    }

    /// Turns the device on or off.
    pub fn toggle_power(&mut self, on: bool) {
        self.status = PowerStatus::from(on);
    }

    /// Returns the light attributes if this is a light.
    #[must_use]
    pub const fn as_light(&self) -> Option<&Light> {
        match &self.kind {
            DeviceKind::Light(light) => Some(light),
            _ => None,
        }
    }

    /// Returns the thermostat attributes if this is a thermostat.
    #[must_use]
    pub const fn as_thermostat(&self) -> Option<&Thermostat> {
        match &self.kind {
            DeviceKind::Thermostat(thermostat) => Some(thermostat),
            _ => None,
        }
    }

    /// Returns the camera attributes if this is a security camera.
    #[must_use]
    pub const fn as_security_camera(&self) -> Option<&SecurityCamera> {
        match &self.kind {
            DeviceKind::SecurityCamera(camera) => Some(camera),
            _ => None,
        }
    }

    /// Returns the fan attributes if this is a fan.
    #[must_use]
    pub const fn as_fan(&self) -> Option<&Fan> {
        match &self.kind {
            DeviceKind::Fan(fan) => Some(fan),
            _ => None,
        }
    }

    /// Returns the light attributes for modification if this is a light.
    pub fn as_light_mut(&mut self) -> Option<&mut Light> {
        match &mut self.kind {
            DeviceKind::Light(light) => Some(light),
            _ => None,
        }
    }

    /// Returns the thermostat attributes for modification if this is a
    /// thermostat.
    pub fn as_thermostat_mut(&mut self) -> Option<&mut Thermostat> {
        match &mut self.kind {
            DeviceKind::Thermostat(thermostat) => Some(thermostat),
            _ => None,
        }
    }

    /// Returns the camera attributes for modification if this is a security
    /// camera.
    pub fn as_security_camera_mut(&mut self) -> Option<&mut SecurityCamera> {
        match &mut self.kind {
            DeviceKind::SecurityCamera(camera) => Some(camera),
            _ => None,
        }
    }

    /// Returns the fan attributes for modification if this is a fan.
    pub fn as_fan_mut(&mut self) -> Option<&mut Fan> {
        match &mut self.kind {
            DeviceKind::Fan(fan) => Some(fan),
            _ => None,
        }
    }

    /// Applies an attribute update.
    ///
    /// Values are stored as given, without range checks; see
    /// [`DeviceUpdate::validate`] for the strict variant.
    ///
    /// Returns `true` if the device changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedAttribute`] if the update (or any change in
    /// a batch) targets an attribute this kind does not have. Nothing is
    /// applied in that case.
    pub fn apply(&mut self, update: &DeviceUpdate) -> Result<bool, Error> {
        if let Some(unsupported) = update.first_unsupported(self.category()) {
            return Err(Error::UnsupportedAttribute {
                category: self.category(),
                attribute: unsupported.attribute(),
            });
        }

        let before = self.clone();
        self.apply_supported(update);
        Ok(*self != before)
    }

    fn apply_supported(&mut self, update: &DeviceUpdate) {
        match update {
            DeviceUpdate::Power(on) => self.toggle_power(*on),
            DeviceUpdate::Batch(updates) => {
                for update in updates {
                    self.apply_supported(update);
                }
            }
            leaf => match (leaf, &mut self.kind) {
                (DeviceUpdate::Brightness(value), DeviceKind::Light(light)) => {
                    light.set_brightness(*value);
                }
                (DeviceUpdate::Color(color), DeviceKind::Light(light)) => {
                    light.set_color(color.clone());
                }
                (DeviceUpdate::Temperature(value), DeviceKind::Thermostat(thermostat)) => {
                    thermostat.set_temperature(*value);
                }
                (DeviceUpdate::Mode(mode), DeviceKind::Thermostat(thermostat)) => {
                    thermostat.set_mode(mode.clone());
                }
                (DeviceUpdate::Recording(on), DeviceKind::SecurityCamera(camera)) => {
                    camera.toggle_recording(*on);
                }
                (DeviceUpdate::Resolution(res), DeviceKind::SecurityCamera(camera)) => {
                    camera.set_resolution(res.clone());
                }
                (DeviceUpdate::Speed(value), DeviceKind::Fan(fan)) => fan.set_speed(*value),
                // Ruled out by `first_unsupported`
                _ => {}
            },
        }
    }
}
