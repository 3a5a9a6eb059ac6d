// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Security camera attributes.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ValueError;
use crate::types::Resolution;

/// Attributes specific to a security camera.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SecurityCamera {
    recording: bool,
    resolution: String,
}

impl SecurityCamera {
    /// Returns whether the camera is recording.
    #[must_use]
    pub const fn is_recording(&self) -> bool {
        self.recording
    }

    /// Returns the resolution string.
    #[must_use]
    pub fn resolution(&self) -> &str {
        &self.resolution
    }

    /// Starts or stops recording.
    pub fn toggle_recording(&mut self, recording: bool) {
        self.recording = recording;
    }

    /// Sets the resolution without checking it is a known resolution.
    pub fn set_resolution(&mut self, resolution: impl Into<String>) {
        self.resolution = resolution.into();
    }

    /// Sets the resolution, rejecting unknown resolutions.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidResolution` if `resolution` is not one of
    /// 720p, 1080p, 4K.
    pub fn set_resolution_checked(&mut self, resolution: &str) -> Result<(), ValueError> {
        self.resolution = resolution.parse::<Resolution>()?.as_str().to_string();
        Ok(())
    }

    pub(super) fn write_fields(&self, fields: &mut Map<String, Value>) {
        fields.insert("recording".into(), self.recording.into());
        fields.insert("resolution".into(), self.resolution.clone().into());
    }

    pub(super) fn describe_into(&self, lines: &mut Vec<String>) {
        let recording = if self.recording { "Yes" } else { "No" };
        lines.push(format!("Recording: {recording}"));
        lines.push(format!("Resolution: {}", self.resolution));
    }
}

impl Default for SecurityCamera {
    fn default() -> Self {
        Self {
            recording: false,
            resolution: Resolution::default().as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let camera = SecurityCamera::default();
        assert!(!camera.is_recording());
        assert_eq!(camera.resolution(), "1080p");
    }

    #[test]
    fn checked_resolution() {
        let mut camera = SecurityCamera::default();
        camera.set_resolution_checked("4k").unwrap();
        assert_eq!(camera.resolution(), "4K");
        assert!(camera.set_resolution_checked("8K").is_err());
    }

    #[test]
    fn describe_reports_recording_as_yes_no() {
        let mut camera = SecurityCamera::default();
        camera.toggle_recording(true);
        let mut lines = Vec::new();
        camera.describe_into(&mut lines);
        assert_eq!(lines, ["Recording: Yes", "Resolution: 1080p"]);
    }
}
