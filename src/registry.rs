// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory registry of the devices of one category.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::device::{Category, Device};

/// Devices of one category, keyed by name.
///
/// Every device in a registry has the registry's category. Iteration is in
/// name order, which keeps encoded store documents stable.
///
/// # Examples
///
/// ```
/// use smarthome_lib::{Category, Device, Registry};
///
/// let mut registry = Registry::new(Category::Fan);
/// assert!(registry.insert(Device::new(Category::Fan, "Ceiling", "Bedroom", "bob")));
/// assert_eq!(registry.owned_by("bob").len(), 1);
/// assert!(registry.owned_by("alice").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    category: Category,
    devices: BTreeMap<String, Device>,
}

impl Registry {
    /// Creates an empty registry for `category`.
    #[must_use]
    pub fn new(category: Category) -> Self {
        Self {
            category,
            devices: BTreeMap::new(),
        }
    }

    /// Returns the category of this registry.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the number of devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns `true` if the registry holds no devices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Returns `true` if a device with `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.devices.contains_key(name)
    }

    /// Inserts `device` unless its name is already taken.
    ///
    /// Returns `false`, leaving the registry untouched, if the name exists or
    /// the device belongs to another category.
    pub fn insert(&mut self, device: Device) -> bool {
        if device.category() != self.category {
            return false;
        }
        match self.devices.entry(device.name().to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(device);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Removes and returns the device named `name`.
    pub fn remove(&mut self, name: &str) -> Option<Device> {
        self.devices.remove(name)
    }

    /// Returns the device named `name`, whoever owns it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Device> {
        self.devices.get(name)
    }

    /// Returns the device named `name` if `owner` owns it.
    #[must_use]
    pub fn get_owned(&self, name: &str, owner: &str) -> Option<&Device> {
        self.devices.get(name).filter(|device| device.is_owned_by(owner))
    }

    /// Returns the device named `name` for modification if `owner` owns it.
    pub fn get_owned_mut(&mut self, name: &str, owner: &str) -> Option<&mut Device> {
        self.devices
            .get_mut(name)
            .filter(|device| device.is_owned_by(owner))
    }

    /// Returns a copy of every device owned by `owner`, keyed by name.
    #[must_use]
    pub fn owned_by(&self, owner: &str) -> BTreeMap<String, Device> {
        self.devices
            .iter()
            .filter(|(_, device)| device.is_owned_by(owner))
            .map(|(name, device)| (name.clone(), device.clone()))
            .collect()
    }

    /// Iterates over `(name, device)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Device)> {
        self.devices.iter().map(|(name, device)| (name.as_str(), device))
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = (&'a String, &'a Device);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}
