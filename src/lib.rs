// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart-home device management with per-user ownership and JSON storage.
//!
//! This library keeps an inventory of home-automation devices (lights,
//! thermostats, security cameras, fans), scopes every lookup and update to
//! the owning user, and persists each device category as a JSON document.
//!
//! # Supported Devices
//!
//! - **Lights**: power, brightness, color
//! - **Thermostats**: power, target temperature, mode
//! - **Security cameras**: power, recording, resolution
//! - **Fans**: power, speed
//!
//! # Quick Start
//!
//! ## Managing Devices
//!
//! ```no_run
//! use smarthome_lib::{Category, DeviceUpdate};
//! use smarthome_lib::manager::{DeviceManager, StoreConfig};
//!
//! fn main() -> smarthome_lib::Result<()> {
//!     // Creates data/ and its four store files if needed
//!     let (manager, load_errors) = DeviceManager::open(StoreConfig::new("data"))?;
//!     for error in &load_errors {
//!         eprintln!("{error}");
//!     }
//!
//!     manager.add_device(Category::Thermostat, "Hallway", "Hall", "bob")?;
//!     manager.update_device(Category::Thermostat, "Hallway", "bob", &DeviceUpdate::Temperature(68))?;
//!
//!     // Another user cannot see bob's thermostat
//!     assert!(manager.get_device(Category::Thermostat, "Hallway", "alice").is_err());
//!     Ok(())
//! }
//! ```
//!
//! ## Sessions and Reports
//!
//! ```no_run
//! use smarthome_lib::{ActivityLog, Session, StatusReport};
//! use smarthome_lib::manager::{DeviceManager, StoreConfig};
//!
//! fn main() -> smarthome_lib::Result<()> {
//!     let config = StoreConfig::default();
//!     let (manager, _) = DeviceManager::open(config.clone())?;
//!
//!     let users = |user: &str, password: &str| user == "alice" && password == "secret";
//!     let session = Session::login(&users, "alice", "secret")?;
//!
//!     let log = ActivityLog::new(config.activity_log_path());
//!     log.record(session.user(), "Generated status report")?;
//!
//!     let report = StatusReport::generate(&manager, session.user());
//!     report.save(config.root())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Working with Store Documents
//!
//! ```
//! use smarthome_lib::{Category, Device, Registry, store};
//!
//! let mut registry = Registry::new(Category::Lights);
//! registry.insert(Device::new(Category::Lights, "Lamp1", "Living Room", "alice"));
//!
//! let document = store::encode(&registry);
//! assert_eq!(document["Lamp1"]["brightness"], 100);
//! ```

mod activity;
mod auth;
pub mod device;
pub mod error;
pub mod manager;
mod registry;
mod report;
pub mod store;
pub mod types;

pub use activity::ActivityLog;
pub use auth::{Authenticator, Session};
pub use device::{
    Category, Device, DeviceKind, DeviceUpdate, Fan, Light, SecurityCamera, Thermostat,
};
pub use error::{
    Error, LoadError, LoadErrorKind, PersistError, PersistErrorKind, Result, ValueError,
};
pub use manager::{DeviceManager, StoreConfig};
pub use registry::Registry;
pub use report::StatusReport;
pub use types::{Brightness, FanSpeed, HexColor, PowerStatus, Resolution, ThermostatMode};
