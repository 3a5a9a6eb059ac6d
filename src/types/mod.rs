// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for device attributes.
//!
//! The device model itself is permissive: setters accept any value of the
//! right primitive type. The types in this module carry the documented
//! ranges and enumerations, and back the `*_checked` setters on each device
//! kind for callers that want strict validation.
//!
//! # Types
//!
//! - [`PowerStatus`] - On/Off status shared by every device
//! - [`Brightness`] - Light brightness (0-100%)
//! - [`HexColor`] - Light color as `#RRGGBB`
//! - [`ThermostatMode`] - auto/heat/cool/off
//! - [`Resolution`] - Camera resolution (720p, 1080p, 4K)
//! - [`FanSpeed`] - Fan speed step (0-5)

mod brightness;
mod fan_speed;
mod hex_color;
mod mode;
mod power;
mod resolution;

pub use brightness::Brightness;
pub use fan_speed::FanSpeed;
pub use hex_color::HexColor;
pub use mode::ThermostatMode;
pub use power::PowerStatus;
pub use resolution::Resolution;
