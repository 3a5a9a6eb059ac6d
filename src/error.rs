// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the smart-home library.
//!
//! This module provides the error hierarchy used across the crate: value
//! validation, registry lookups, store loading, and store persistence.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::device::Category;

/// The main error type for this library.
///
/// Every failure surfaced by the [`DeviceManager`](crate::manager::DeviceManager)
/// is one of these variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A device with the same name already exists in the category.
    #[error("{category} device {name:?} already exists")]
    DuplicateName {
        /// The category that was targeted.
        category: Category,
        /// The conflicting device name.
        name: String,
    },

    /// The device does not exist or is not owned by the requester.
    ///
    /// A device owned by someone else is reported the same way as a missing
    /// one.
    #[error("{category} device {name:?} not found")]
    NotFound {
        /// The category that was searched.
        category: Category,
        /// The requested device name.
        name: String,
    },

    /// The update targets an attribute the device kind does not have.
    #[error("{category} devices have no {attribute} attribute")]
    UnsupportedAttribute {
        /// The category of the targeted device.
        category: Category,
        /// Name of the attribute.
        attribute: &'static str,
    },

    /// A category store document could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A category store document could not be written.
    ///
    /// The in-memory registry keeps the change; callers may retry the save.
    #[error(transparent)]
    Persist(#[from] PersistError),

    /// The authentication collaborator rejected the credentials.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// I/O failure outside the category stores (reports, activity log).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },

    /// An invalid power status string was provided.
    #[error("invalid power status: {0}")]
    InvalidPowerStatus(String),

    /// A string is not a valid hex RGB color.
    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),

    /// An unknown thermostat mode was provided.
    #[error("invalid thermostat mode: {0}")]
    InvalidMode(String),

    /// An unknown camera resolution was provided.
    #[error("invalid camera resolution: {0}")]
    InvalidResolution(String),

    /// An unknown category tag was provided.
    #[error("unknown device category: {0}")]
    UnknownCategory(String),
}

/// A category store document could not be turned into a registry.
///
/// The affected category falls back to an empty registry; the other
/// categories are unaffected.
#[derive(Debug, Error)]
#[error("failed to load {category} store {}: {kind}", path.display())]
pub struct LoadError {
    /// The category whose store failed to load.
    pub category: Category,
    /// The store file that was read.
    pub path: PathBuf,
    /// What went wrong.
    #[source]
    pub kind: LoadErrorKind,
}

/// The reason a store document failed to load.
#[derive(Debug, Error)]
pub enum LoadErrorKind {
    /// The file exists but could not be read.
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    /// The file is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level document is not a JSON object.
    #[error("document is not an object")]
    NotAnObject,

    /// One entry could not be decoded as a device of the category.
    #[error("invalid entry {name:?}: {source}")]
    InvalidEntry {
        /// The device name (top-level key) of the bad entry.
        name: String,
        /// The decoding failure.
        #[source]
        source: serde_json::Error,
    },
}

/// A category store document could not be written.
#[derive(Debug, Error)]
#[error("failed to persist {category} store {}: {kind}", path.display())]
pub struct PersistError {
    /// The category being persisted.
    pub category: Category,
    /// The store file being written.
    pub path: PathBuf,
    /// What went wrong.
    #[source]
    pub kind: PersistErrorKind,
}

/// The reason a store write failed.
#[derive(Debug, Error)]
pub enum PersistErrorKind {
    /// Writing or renaming the file failed.
    #[error("write failed: {0}")]
    Io(#[from] io::Error),

    /// The document could not be rendered as JSON.
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
