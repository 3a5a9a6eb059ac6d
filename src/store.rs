// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Store codec: registries to and from JSON store documents.
//!
//! A store document is a JSON object whose keys are device names and whose
//! values are the records produced by [`Device::serialize`]:
//!
//! ```json
//! {
//!     "Lamp1": {
//!         "location": "Living Room",
//!         "status": "off",
//!         "owner": "alice",
//!         "brightness": 100,
//!         "color": "#FFFFFF"
//!     }
//! }
//! ```
//!
//! Encoding is deterministic: keys are emitted in sorted order. Decoding
//! ignores fields it does not know.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::{Map, Value};

use crate::device::{Category, Device};
use crate::error::{LoadError, LoadErrorKind, PersistError, PersistErrorKind};
use crate::registry::Registry;

/// Encodes every device of `registry` into a store document.
///
/// # Examples
///
/// ```
/// use smarthome_lib::{Category, Device, Registry, store};
///
/// let mut registry = Registry::new(Category::Fan);
/// registry.insert(Device::new(Category::Fan, "Ceiling", "Bedroom", "bob"));
///
/// let document = store::encode(&registry);
/// assert_eq!(document["Ceiling"]["speed"], 0);
/// assert_eq!(store::decode(&document, Category::Fan).unwrap(), registry);
/// ```
#[must_use]
pub fn encode(registry: &Registry) -> Value {
    let document: Map<String, Value> = registry
        .iter()
        .map(|(name, device)| (name.to_string(), Value::Object(device.serialize())))
        .collect();
    Value::Object(document)
}

/// Decodes a store document into a registry of `category`.
///
/// # Errors
///
/// Returns [`LoadErrorKind::NotAnObject`] if the document is not an object,
/// or [`LoadErrorKind::InvalidEntry`] for the first entry that does not decode
/// as a device of `category`.
pub fn decode(document: &Value, category: Category) -> Result<Registry, LoadErrorKind> {
    let entries = document.as_object().ok_or(LoadErrorKind::NotAnObject)?;

    let mut registry = Registry::new(category);
    for (name, record) in entries {
        let device = Device::deserialize(category, name.as_str(), record).map_err(|source| {
            LoadErrorKind::InvalidEntry {
                name: name.clone(),
                source,
            }
        })?;
        registry.insert(device);
    }
    Ok(registry)
}

/// Reads the store file of `category` at `path`.
///
/// A missing file yields an empty registry.
pub(crate) fn read(path: &Path, category: Category) -> Result<Registry, LoadError> {
    let wrap = |kind: LoadErrorKind| LoadError {
        category,
        path: path.to_path_buf(),
        kind,
    };

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(%category, path = %path.display(), "No store file, starting empty");
            return Ok(Registry::new(category));
        }
        Err(e) => return Err(wrap(e.into())),
    };

    let document: Value = serde_json::from_str(&contents).map_err(|e| wrap(e.into()))?;
    let registry = decode(&document, category).map_err(wrap)?;

    tracing::debug!(
        %category,
        path = %path.display(),
        devices = registry.len(),
        "Loaded store"
    );
    Ok(registry)
}

/// Rewrites the store file at `path` with the full contents of `registry`.
///
/// The document is written to a sibling temporary file which then replaces
/// the store, so readers never see a truncated document.
pub(crate) fn write(path: &Path, registry: &Registry, pretty: bool) -> Result<(), PersistError> {
    let category = registry.category();
    let wrap = |kind: PersistErrorKind| PersistError {
        category,
        path: path.to_path_buf(),
        kind,
    };

    let document = encode(registry);
    let bytes = if pretty {
        serde_json::to_vec_pretty(&document)
    } else {
        serde_json::to_vec(&document)
    }
    .map_err(|e| wrap(e.into()))?;

    let staging = path.with_extension("json.tmp");
    if let Err(e) = fs::write(&staging, bytes).and_then(|()| fs::rename(&staging, path)) {
        // Best effort: the staging file may never have been created
        let _ = fs::remove_file(&staging);
        return Err(wrap(e.into()));
    }

    tracing::debug!(
        %category,
        path = %path.display(),
        devices = registry.len(),
        "Persisted store"
    );
    Ok(())
}
