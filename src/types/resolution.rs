// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Security camera recording resolution.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Recording resolution of a security camera.
///
/// # Examples
///
/// ```
/// use smarthome_lib::types::Resolution;
///
/// assert_eq!(Resolution::default().as_str(), "1080p");
/// assert_eq!("4k".parse::<Resolution>().unwrap(), Resolution::Uhd4k);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Resolution {
    /// 1280x720.
    Hd720,
    /// 1920x1080.
    #[default]
    Hd1080,
    /// 3840x2160.
    Uhd4k,
}

impl Resolution {
    /// Every resolution, lowest first.
    pub const ALL: [Self; 3] = [Self::Hd720, Self::Hd1080, Self::Uhd4k];

    /// Returns the stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hd720 => "720p",
            Self::Hd1080 => "1080p",
            Self::Uhd4k => "4K",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|res| res.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValueError::InvalidResolution(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_round_trips_through_str() {
        for res in Resolution::ALL {
            assert_eq!(res.as_str().parse::<Resolution>().unwrap(), res);
        }
    }

    #[test]
    fn resolution_parse_invalid() {
        assert!(matches!(
            "480p".parse::<Resolution>(),
            Err(ValueError::InvalidResolution(_))
        ));
    }
}
