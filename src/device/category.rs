// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device categories.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// One of the four fixed device kinds.
///
/// A category is both the device variant and the storage partition: each
/// category owns one registry and one store document named after its
/// [`tag`](Self::tag).
///
/// # Examples
///
/// ```
/// use smarthome_lib::Category;
///
/// let category: Category = "security_camera".parse().unwrap();
/// assert_eq!(category, Category::SecurityCamera);
/// assert_eq!(category.display_name(), "Security Camera");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Dimmable colored lights.
    Lights,
    /// Thermostats.
    Thermostat,
    /// Security cameras.
    SecurityCamera,
    /// Fans.
    Fan,
}

impl Category {
    /// Every category, in storage and report order.
    pub const ALL: [Self; 4] = [Self::Lights, Self::Thermostat, Self::SecurityCamera, Self::Fan];

    /// Returns the storage tag, used as the store file stem.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Lights => "lights",
            Self::Thermostat => "thermostat",
            Self::SecurityCamera => "security_camera",
            Self::Fan => "fan",
        }
    }

    /// Returns the human-readable name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Lights => "Lights",
            Self::Thermostat => "Thermostat",
            Self::SecurityCamera => "Security Camera",
            Self::Fan => "Fan",
        }
    }

    /// Returns the position of this category in [`ALL`](Self::ALL).
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Lights => 0,
            Self::Thermostat => 1,
            Self::SecurityCamera => 2,
            Self::Fan => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Category {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.tag() == s)
            .ok_or_else(|| ValueError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_store_names() {
        let tags: Vec<_> = Category::ALL.iter().map(Category::tag).collect();
        assert_eq!(tags, ["lights", "thermostat", "security_camera", "fan"]);
    }

    #[test]
    fn index_matches_position_in_all() {
        for (position, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), position);
        }
    }

    #[test]
    fn parse_unknown_tag() {
        assert_eq!(
            "light".parse::<Category>(),
            Err(ValueError::UnknownCategory("light".to_string()))
        );
    }

    #[test]
    fn display_uses_tag() {
        assert_eq!(Category::SecurityCamera.to_string(), "security_camera");
    }
}
