// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device manager and its storage configuration.
//!
//! # Overview
//!
//! The [`DeviceManager`] is the single entry point for applications that keep
//! a home's devices on disk. It provides:
//!
//! - **Owner-scoped access**: lookups and updates only see the caller's devices
//! - **One store per category**: `lights.json`, `thermostat.json`,
//!   `security_camera.json` and `fan.json` under the storage root
//! - **Write-through persistence**: every mutation rewrites its category's
//!   store before returning
//! - **Isolated loading**: a malformed store only empties its own category
//!
//! # Examples
//!
//! ## Startup
//!
//! ```no_run
//! use smarthome_lib::manager::{DeviceManager, StoreConfig};
//!
//! # fn example() -> smarthome_lib::Result<()> {
//! let (manager, load_errors) = DeviceManager::open(StoreConfig::default())?;
//! for error in load_errors {
//!     eprintln!("starting without {}: {error}", error.category);
//! }
//! # let _ = manager;
//! # Ok(())
//! # }
//! ```
//!
//! ## Per-user listing
//!
//! ```no_run
//! use smarthome_lib::Category;
//! use smarthome_lib::manager::DeviceManager;
//!
//! # fn example(manager: &DeviceManager) {
//! for category in Category::ALL {
//!     for (name, device) in manager.get_user_devices(category, "alice") {
//!         println!("{}: {name} ({})", category.display_name(), device.status());
//!     }
//! }
//! # }
//! ```

mod device_manager;
mod store_config;

pub use device_manager::DeviceManager;
pub use store_config::{ACTIVITY_LOG_FILE, DEFAULT_STORAGE_ROOT, StoreConfig};
