// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plain-text status report of one user's devices.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::device::Category;
use crate::error::Result;
use crate::manager::DeviceManager;

/// Timestamp format of the report header.
const HEADER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format of saved report file names.
const FILE_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// A snapshot of every device owned by one user, grouped by category.
///
/// The report is built from owner-scoped listings only, so it never shows
/// another user's devices.
///
/// # Examples
///
/// ```no_run
/// use smarthome_lib::StatusReport;
/// use smarthome_lib::manager::{DeviceManager, StoreConfig};
///
/// # fn example() -> smarthome_lib::Result<()> {
/// let (manager, _) = DeviceManager::open(StoreConfig::default())?;
/// let report = StatusReport::generate(&manager, "alice");
/// println!("{report}");
/// let path = report.save("data")?;
/// println!("saved to {}", path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    generated_at: NaiveDateTime,
    user: String,
    lines: Vec<String>,
}

impl StatusReport {
    /// Builds a report for `user`, stamped with the current local time.
    #[must_use]
    pub fn generate(manager: &DeviceManager, user: &str) -> Self {
        Self::generate_at(manager, user, Local::now().naive_local())
    }

    /// Builds a report for `user` stamped with `generated_at`.
    #[must_use]
    pub fn generate_at(manager: &DeviceManager, user: &str, generated_at: NaiveDateTime) -> Self {
        let mut lines = vec![
            "=== Smart Home Status Report ===".to_string(),
            format!("Generated on: {}", generated_at.format(HEADER_TIME_FORMAT)),
            format!("Generated by: {user}"),
            String::new(),
        ];

        for category in Category::ALL {
            lines.push(String::new());
            lines.push(format!("=== {} ===", category.display_name()));

            let devices = manager.get_user_devices(category, user);
            if devices.is_empty() {
                lines.push("No devices found".to_string());
                continue;
            }
            for device in devices.values() {
                lines.push(String::new());
                lines.extend(device.describe());
            }
        }

        Self {
            generated_at,
            user: user.to_string(),
            lines,
        }
    }

    /// Returns the generation timestamp.
    #[must_use]
    pub const fn generated_at(&self) -> NaiveDateTime {
        self.generated_at
    }

    /// Returns the user the report was generated for.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the report lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the file name the report is saved under.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "smart_home_report_{}.txt",
            self.generated_at.format(FILE_TIME_FORMAT)
        )
    }

    /// Writes the report into `dir` and returns the written path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be written.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(self.file_name());
        fs::write(&path, self.to_string())?;
        tracing::info!(user = %self.user, path = %path.display(), "Saved status report");
        Ok(path)
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::device::DeviceUpdate;
    use crate::manager::StoreConfig;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|date| date.and_hms_opt(14, 5, 7))
            .unwrap()
    }

    fn manager_in(dir: &TempDir) -> DeviceManager {
        let (manager, _) = DeviceManager::open(StoreConfig::new(dir.path())).unwrap();
        manager
    }

    #[test]
    fn empty_report_lists_every_category() {
        let dir = TempDir::new().unwrap();
        let report = StatusReport::generate_at(&manager_in(&dir), "alice", timestamp());

        assert_eq!(
            report.to_string(),
            "=== Smart Home Status Report ===\n\
             Generated on: 2024-03-09 14:05:07\n\
             Generated by: alice\n\
             \n\
             \n\
             === Lights ===\n\
             No devices found\n\
             \n\
             === Thermostat ===\n\
             No devices found\n\
             \n\
             === Security Camera ===\n\
             No devices found\n\
             \n\
             === Fan ===\n\
             No devices found"
        );
    }

    #[test]
    fn report_shows_only_own_devices() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);
        manager
            .add_device(Category::SecurityCamera, "Door", "Porch", "alice")
            .unwrap();
        manager
            .update_device(
                Category::SecurityCamera,
                "Door",
                "alice",
                &DeviceUpdate::Recording(true),
            )
            .unwrap();
        manager
            .add_device(Category::SecurityCamera, "Garage", "Garage", "bob")
            .unwrap();

        let report = StatusReport::generate_at(&manager, "alice", timestamp());
        let text = report.to_string();

        assert!(text.contains(
            "=== Security Camera ===\n\nDevice: Door\nLocation: Porch\nStatus: off\nRecording: Yes\nResolution: 1080p"
        ));
        assert!(!text.contains("Garage"));
    }

    #[test]
    fn save_uses_timestamped_name() {
        let dir = TempDir::new().unwrap();
        let report = StatusReport::generate_at(&manager_in(&dir), "bob", timestamp());

        let path = report.save(dir.path()).unwrap();
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("smart_home_report_20240309_140507.txt")
        );
        assert_eq!(fs::read_to_string(path).unwrap(), report.to_string());
    }
}
