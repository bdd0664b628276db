//! The display convention for latitude and longitude strings

use std::{fmt, str::FromStr};

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ParseFormatError;

/// How a single coordinate is rendered for the user.
///
/// Host applications usually keep it in their settings,
/// so it can be parsed from a short name and (with the `serde` feature)
/// deserialized directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CoordinateFormat {
    /// `N 045° 30.000′`
    #[default]
    DegreesMinutes,
    /// `45.50000°`
    DecimalDegrees,
    /// `N 45° 30′ 00.0″`
    DegreesMinutesSeconds,
}

impl CoordinateFormat {
    /// The short name which [`FromStr`] understands
    pub fn short_name(self) -> &'static str {
        match self {
            Self::DegreesMinutes => "dm",
            Self::DecimalDegrees => "dd",
            Self::DegreesMinutesSeconds => "dms",
        }
    }
}

impl FromStr for CoordinateFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dm" | "degrees-minutes" => Ok(Self::DegreesMinutes),
            "dd" | "decimal" | "decimal-degrees" => Ok(Self::DecimalDegrees),
            "dms" | "degrees-minutes-seconds" => Ok(Self::DegreesMinutesSeconds),
            _ => {
                debug!("unknown coordinate format {:?}", s);
                Err(ParseFormatError {
                    failed: s.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
