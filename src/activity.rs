// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Append-only log of user actions.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::Result;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text file recording one line per user action.
///
/// Lines have the form `2024-03-09 14:05:07 - alice: Turned on Lamp1`.
///
/// # Examples
///
/// ```no_run
/// use smarthome_lib::ActivityLog;
/// use smarthome_lib::manager::StoreConfig;
///
/// # fn example() -> smarthome_lib::Result<()> {
/// let log = ActivityLog::new(StoreConfig::default().activity_log_path());
/// log.record("alice", "Added lights device Lamp1")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    /// Creates a log appending to `path`. The file is created on first use.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the log file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `message` for `user`, stamped with the current local time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the log cannot be opened or
    /// written.
    pub fn record(&self, user: &str, message: &str) -> Result<()> {
        self.record_at(user, message, Local::now().naive_local())
    }

    /// Appends `message` for `user` stamped with `at`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the log cannot be opened or
    /// written.
    pub fn record_at(&self, user: &str, message: &str, at: NaiveDateTime) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{} - {user}: {message}", at.format(TIME_FORMAT))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;

    fn at(second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|date| date.and_hms_opt(8, 0, second))
            .unwrap()
    }

    #[test]
    fn record_appends_lines() {
        let dir = TempDir::new().unwrap();
        let log = ActivityLog::new(dir.path().join("status_report.txt"));

        log.record_at("alice", "Turned on Lamp1", at(1)).unwrap();
        log.record_at("bob", "Removed fan device F1", at(2)).unwrap();

        assert_eq!(
            fs::read_to_string(log.path()).unwrap(),
            "2024-03-09 08:00:01 - alice: Turned on Lamp1\n\
             2024-03-09 08:00:02 - bob: Removed fan device F1\n"
        );
    }

    #[test]
    fn record_fails_in_missing_directory() {
        let dir = TempDir::new().unwrap();
        let log = ActivityLog::new(dir.path().join("missing").join("log.txt"));
        assert!(log.record("alice", "hello").is_err());
    }
}
