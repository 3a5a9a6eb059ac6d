// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Storage configuration for the device manager.

use std::path::{Path, PathBuf};

use crate::device::Category;

/// Storage root used by [`StoreConfig::default`].
pub const DEFAULT_STORAGE_ROOT: &str = "data";

/// File name of the activity log inside the storage root.
pub const ACTIVITY_LOG_FILE: &str = "status_report.txt";

/// Where and how category stores are written.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use smarthome_lib::Category;
/// use smarthome_lib::manager::StoreConfig;
///
/// let config = StoreConfig::new("/var/lib/home").with_pretty(false);
/// assert_eq!(
///     config.path_for(Category::SecurityCamera),
///     Path::new("/var/lib/home/security_camera.json")
/// );
/// assert!(!config.pretty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one store document per category.
    pub root: PathBuf,
    /// Whether store documents are pretty-printed.
    pub pretty: bool,
}

impl StoreConfig {
    /// Creates a configuration rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pretty: true,
        }
    }

    /// Sets whether store documents are pretty-printed.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Returns the storage root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the store document path of `category`.
    #[must_use]
    pub fn path_for(&self, category: Category) -> PathBuf {
        self.root.join(format!("{}.json", category.tag()))
    }

    /// Returns the path of the activity log.
    #[must_use]
    pub fn activity_log_path(&self) -> PathBuf {
        self.root.join(ACTIVITY_LOG_FILE)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.root(), Path::new("data"));
        assert!(config.pretty);
    }

    #[test]
    fn one_file_per_category() {
        let config = StoreConfig::new("store");
        let paths: Vec<_> = Category::ALL.iter().map(|c| config.path_for(*c)).collect();
        assert_eq!(
            paths,
            [
                Path::new("store/lights.json"),
                Path::new("store/thermostat.json"),
                Path::new("store/security_camera.json"),
                Path::new("store/fan.json"),
            ]
        );
    }

    #[test]
    fn activity_log_lives_in_root() {
        let config = StoreConfig::new("store");
        assert_eq!(
            config.activity_log_path(),
            Path::new("store/status_report.txt")
        );
    }
}
