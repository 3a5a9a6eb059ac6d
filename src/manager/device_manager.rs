// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device manager coordinating the four category registries.

use std::collections::BTreeMap;
use std::fs;

use parking_lot::{Mutex, MutexGuard};

use crate::device::{Category, Device, DeviceUpdate};
use crate::error::{Error, LoadError, Result};
use crate::registry::Registry;
use crate::store;

use super::store_config::StoreConfig;

/// Owner of the category registries and their store documents.
///
/// Every mutation (add, remove, attribute update) updates the registry and
/// then rewrites that category's full store document before returning.
/// Each category is guarded by its own lock, held across the mutation and the
/// rewrite, so categories can be used concurrently from several threads while
/// operations on one category are serialized.
///
/// # Examples
///
/// ```no_run
/// use smarthome_lib::{Category, DeviceUpdate};
/// use smarthome_lib::manager::{DeviceManager, StoreConfig};
///
/// fn main() -> smarthome_lib::Result<()> {
///     let (manager, load_errors) = DeviceManager::open(StoreConfig::new("data"))?;
///     for error in &load_errors {
///         eprintln!("{error}");
///     }
///
///     manager.add_device(Category::Lights, "Lamp1", "Living Room", "alice")?;
///     manager.update_device(
///         Category::Lights,
///         "Lamp1",
///         "alice",
///         &DeviceUpdate::batch(vec![DeviceUpdate::power_on(), DeviceUpdate::Brightness(40)]),
///     )?;
///
///     let lamp = manager.get_device(Category::Lights, "Lamp1", "alice")?;
///     assert!(lamp.status().is_on());
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct DeviceManager {
    config: StoreConfig,
    /// One registry per category, indexed by `Category::index`.
    registries: [Mutex<Registry>; 4],
}

impl DeviceManager {
    /// Creates a manager with empty registries.
    ///
    /// Nothing is read from storage until [`load_all`](Self::load_all) runs.
    /// Use [`open`](Self::open) for the usual startup sequence.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            registries: Category::ALL.map(|category| Mutex::new(Registry::new(category))),
        }
    }

    /// Prepares the storage root and loads every category.
    ///
    /// Creates the storage root if needed, writes an empty document for each
    /// category that has none, then runs [`load_all`](Self::load_all).
    ///
    /// Returns the manager together with the categories that failed to load;
    /// those start empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the storage root cannot be created, or
    /// [`Error::Persist`] if an empty document cannot be written.
    pub fn open(config: StoreConfig) -> Result<(Self, Vec<LoadError>)> {
        fs::create_dir_all(config.root())?;
        tracing::info!(root = %config.root().display(), "Opening device store");

        let manager = Self::new(config);
        for category in Category::ALL {
            let path = manager.config.path_for(category);
            if !path.exists() {
                store::write(&path, &Registry::new(category), manager.config.pretty)?;
            }
        }

        let load_errors = manager.load_all();
        Ok((manager, load_errors))
    }

    /// Returns the storage configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Loading and persistence
    // =========================================================================

    /// Reloads every category from its store document.
    ///
    /// Each registry is replaced wholesale. A missing document loads as an
    /// empty category. A malformed document leaves its category empty and is
    /// reported in the returned list; the other categories load regardless.
    pub fn load_all(&self) -> Vec<LoadError> {
        Category::ALL
            .into_iter()
            .filter_map(|category| self.load_category(category).err())
            .collect()
    }

    /// Reloads one category from its store document.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the document cannot be read or decoded; the
    /// category's registry is emptied in that case.
    pub fn load_category(&self, category: Category) -> std::result::Result<(), LoadError> {
        let mut registry = self.lock(category);
        match store::read(&self.config.path_for(category), category) {
            Ok(loaded) => {
                *registry = loaded;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%category, error = %e, "Store is malformed, starting category empty");
                *registry = Registry::new(category);
                Err(e)
            }
        }
    }

    /// Rewrites the store document of `category` from its registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persist`] if the document cannot be written. The
    /// registry is left as it was.
    pub fn save_category(&self, category: Category) -> Result<()> {
        let registry = self.lock(category);
        self.persist(&registry)
    }

    fn persist(&self, registry: &Registry) -> Result<()> {
        let path = self.config.path_for(registry.category());
        store::write(&path, registry, self.config.pretty)?;
        Ok(())
    }

    fn lock(&self, category: Category) -> MutexGuard<'_, Registry> {
        self.registries[category.index()].lock()
    }

    // =========================================================================
    // Device management
    // =========================================================================

    /// Adds a new powered-off device with the category's default attributes.
    ///
    /// Returns a copy of the new device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if the category already has a device
    /// named `name`, or [`Error::Persist`] if the store could not be
    /// rewritten (the device stays registered in memory).
    pub fn add_device(
        &self,
        category: Category,
        name: impl Into<String>,
        location: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Device> {
        let device = Device::new(category, name, location, owner);

        let mut registry = self.lock(category);
        if !registry.insert(device.clone()) {
            return Err(Error::DuplicateName {
                category,
                name: device.name().to_string(),
            });
        }
        tracing::debug!(%category, name = %device.name(), "Device added");

        self.persist(&registry)?;
        Ok(device)
    }

    /// Removes the device named `name`, whoever owns it.
    ///
    /// Returns `true` if a device was removed. Nothing is written when the
    /// device does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persist`] if the store could not be rewritten after a
    /// removal (the device stays removed in memory).
    pub fn remove_device(&self, category: Category, name: &str) -> Result<bool> {
        let mut registry = self.lock(category);
        if registry.remove(name).is_none() {
            tracing::warn!(%category, name, "Cannot remove unknown device");
            return Ok(false);
        }
        tracing::debug!(%category, name, "Device removed");

        self.persist(&registry)?;
        Ok(true)
    }

    /// Returns a copy of the device named `name` if `owner` owns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the device does not exist or belongs to
    /// someone else.
    pub fn get_device(&self, category: Category, name: &str, owner: &str) -> Result<Device> {
        self.lock(category)
            .get_owned(name, owner)
            .cloned()
            .ok_or_else(|| not_found(category, name))
    }

    /// Returns copies of every device of `category` owned by `owner`.
    ///
    /// Never modifies any state.
    #[must_use]
    pub fn get_user_devices(&self, category: Category, owner: &str) -> BTreeMap<String, Device> {
        self.lock(category).owned_by(owner)
    }

    /// Returns the number of devices in `category`, across all owners.
    #[must_use]
    pub fn device_count(&self, category: Category) -> usize {
        self.lock(category).len()
    }

    // =========================================================================
    // Attribute updates
    // =========================================================================

    /// Applies `update` to a device owned by `owner` and persists the category.
    ///
    /// Values are not range-checked; see
    /// [`update_device_checked`](Self::update_device_checked). The store is
    /// only rewritten when the device actually changed.
    ///
    /// Returns a copy of the updated device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the device does not exist or belongs to
    /// someone else, [`Error::UnsupportedAttribute`] if the update does not
    /// fit the category, or [`Error::Persist`] if the store could not be
    /// rewritten (the change stays applied in memory).
    pub fn update_device(
        &self,
        category: Category,
        name: &str,
        owner: &str,
        update: &DeviceUpdate,
    ) -> Result<Device> {
        let mut registry = self.lock(category);
        let device = registry
            .get_owned_mut(name, owner)
            .ok_or_else(|| not_found(category, name))?;

        let changed = device.apply(update)?;
        let updated = device.clone();

        if changed {
            tracing::debug!(
                %category,
                name,
                attribute = update.attribute(),
                changes = update.change_count(),
                "Device updated"
            );
            self.persist(&registry)?;
        }
        Ok(updated)
    }

    /// Like [`update_device`](Self::update_device), but rejects values
    /// outside the documented ranges and enumerations first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] for an invalid value, otherwise the errors of
    /// [`update_device`](Self::update_device).
    pub fn update_device_checked(
        &self,
        category: Category,
        name: &str,
        owner: &str,
        update: &DeviceUpdate,
    ) -> Result<Device> {
        update.validate()?;
        self.update_device(category, name, owner, update)
    }

    /// Turns a device owned by `owner` on or off.
    ///
    /// # Errors
    ///
    /// Same as [`update_device`](Self::update_device).
    pub fn toggle_power(
        &self,
        category: Category,
        name: &str,
        owner: &str,
        on: bool,
    ) -> Result<Device> {
        self.update_device(category, name, owner, &DeviceUpdate::Power(on))
    }
}

impl Default for DeviceManager {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

fn not_found(category: Category, name: &str) -> Error {
    Error::NotFound {
        category,
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::types::PowerStatus;

    fn open_in(dir: &TempDir) -> DeviceManager {
        let (manager, errors) = DeviceManager::open(StoreConfig::new(dir.path())).unwrap();
        assert!(errors.is_empty());
        manager
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = DeviceManager::default();
        for category in Category::ALL {
            assert_eq!(manager.device_count(category), 0);
        }
    }

    #[test]
    fn open_initializes_every_store() {
        let dir = TempDir::new().unwrap();
        let manager = open_in(&dir);
        for category in Category::ALL {
            let contents = fs::read_to_string(manager.config().path_for(category)).unwrap();
            assert_eq!(contents.trim(), "{}");
        }
    }

    #[test]
    fn add_then_get_by_owner() {
        let dir = TempDir::new().unwrap();
        let manager = open_in(&dir);

        manager
            .add_device(Category::Fan, "Ceiling", "Bedroom", "bob")
            .unwrap();
        let fan = manager.get_device(Category::Fan, "Ceiling", "bob").unwrap();

        assert_eq!(fan.name(), "Ceiling");
        assert_eq!(fan.location(), "Bedroom");
        assert_eq!(fan.owner(), Some("bob"));
        assert_eq!(fan.status(), PowerStatus::Off);
    }

    #[test]
    fn add_duplicate_fails_and_keeps_original() {
        let dir = TempDir::new().unwrap();
        let manager = open_in(&dir);

        manager
            .add_device(Category::Lights, "Lamp1", "Living Room", "alice")
            .unwrap();
        let err = manager
            .add_device(Category::Lights, "Lamp1", "Garage", "bob")
            .unwrap_err();

        assert!(matches!(err, Error::DuplicateName { category: Category::Lights, .. }));
        let lamp = manager
            .get_device(Category::Lights, "Lamp1", "alice")
            .unwrap();
        assert_eq!(lamp.location(), "Living Room");
    }

    #[test]
    fn same_name_in_different_categories() {
        let dir = TempDir::new().unwrap();
        let manager = open_in(&dir);

        manager.add_device(Category::Lights, "Hall", "Hall", "alice").unwrap();
        manager.add_device(Category::Fan, "Hall", "Hall", "alice").unwrap();
        assert_eq!(manager.device_count(Category::Lights), 1);
        assert_eq!(manager.device_count(Category::Fan), 1);
    }

    #[test]
    fn get_by_other_owner_is_not_found() {
        let dir = TempDir::new().unwrap();
        let manager = open_in(&dir);
        manager
            .add_device(Category::Thermostat, "T1", "Hall", "bob")
            .unwrap();

        let hidden = manager
            .get_device(Category::Thermostat, "T1", "alice")
            .unwrap_err();
        let missing = manager
            .get_device(Category::Thermostat, "T2", "alice")
            .unwrap_err();
        assert_eq!(hidden.to_string(), "thermostat device \"T1\" not found");
        assert!(matches!(missing, Error::NotFound { .. }));
    }

    #[test]
    fn update_checks_owner() {
        let dir = TempDir::new().unwrap();
        let manager = open_in(&dir);
        manager.add_device(Category::Fan, "F1", "Attic", "bob").unwrap();

        let err = manager
            .toggle_power(Category::Fan, "F1", "alice", true)
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        let fan = manager.get_device(Category::Fan, "F1", "bob").unwrap();
        assert_eq!(fan.status(), PowerStatus::Off);
    }

    #[test]
    fn update_with_foreign_attribute_is_rejected() {
        let dir = TempDir::new().unwrap();
        let manager = open_in(&dir);
        manager.add_device(Category::Fan, "F1", "Attic", "bob").unwrap();

        let err = manager
            .update_device(Category::Fan, "F1", "bob", &DeviceUpdate::Brightness(10))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedAttribute {
                category: Category::Fan,
                attribute: "brightness"
            }
        ));
    }

    #[test]
    fn checked_update_rejects_out_of_range() {
        let dir = TempDir::new().unwrap();
        let manager = open_in(&dir);
        manager.add_device(Category::Fan, "F1", "Attic", "bob").unwrap();

        let err = manager
            .update_device_checked(Category::Fan, "F1", "bob", &DeviceUpdate::Speed(9))
            .unwrap_err();
        assert!(matches!(err, Error::Value(_)));

        let fan = manager
            .update_device(Category::Fan, "F1", "bob", &DeviceUpdate::Speed(9))
            .unwrap();
        assert_eq!(fan.as_fan().map(crate::device::Fan::speed), Some(9));
    }

    #[test]
    fn unchanged_update_does_not_write() {
        let dir = TempDir::new().unwrap();
        let manager = open_in(&dir);
        manager.add_device(Category::Fan, "F1", "Attic", "bob").unwrap();

        let path = manager.config().path_for(Category::Fan);
        fs::remove_file(&path).unwrap();
        manager
            .update_device(Category::Fan, "F1", "bob", &DeviceUpdate::Speed(0))
            .unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn malformed_category_starts_empty() {
        let dir = TempDir::new().unwrap();
        let manager = open_in(&dir);
        manager.add_device(Category::Fan, "F1", "Attic", "bob").unwrap();

        fs::write(manager.config().path_for(Category::Fan), "[]").unwrap();
        let err = manager.load_category(Category::Fan).unwrap_err();

        assert_eq!(err.category, Category::Fan);
        assert_eq!(manager.device_count(Category::Fan), 0);
    }

    #[test]
    fn persist_failure_keeps_change_in_memory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("store");
        let (manager, _) = DeviceManager::open(StoreConfig::new(&root)).unwrap();

        fs::remove_dir_all(&root).unwrap();
        let err = manager
            .add_device(Category::Lights, "Lamp1", "Den", "alice")
            .unwrap_err();

        assert!(matches!(err, Error::Persist(_)));
        assert!(manager.get_device(Category::Lights, "Lamp1", "alice").is_ok());

        fs::create_dir_all(&root).unwrap();
        manager.save_category(Category::Lights).unwrap();
        assert!(manager.config().path_for(Category::Lights).exists());
    }

    #[test]
    fn categories_can_be_used_from_several_threads() {
        let dir = TempDir::new().unwrap();
        let manager = open_in(&dir);

        std::thread::scope(|scope| {
            for category in Category::ALL {
                let manager = &manager;
                scope.spawn(move || {
                    for i in 0..10 {
                        manager
                            .add_device(category, format!("dev{i}"), "Hall", "alice")
                            .unwrap();
                    }
                });
            }
        });

        for category in Category::ALL {
            assert_eq!(manager.get_user_devices(category, "alice").len(), 10);
        }
        assert!(manager.load_all().is_empty());
        assert_eq!(manager.device_count(Category::Fan), 10);
    }
}
