//! Degrees and decimal minutes prepared for display

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{ARC_MINUTE_SIGN, DEGREE_SIGN, MINUTES_IN_DEGREE},
    errors::ParseDegreeMinutesError,
};

/// The angle split into a sign, whole degrees and decimal arc minutes.
///
/// Both parts are kept as the fixed-width strings they are shown with:
/// degrees are 3 characters wide (`"045"`),
/// minutes are 6 characters wide with 3 decimals (`"30.000"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DegreeMinutes {
    sign: i8,
    degrees: String,
    minutes: String,
}

impl DegreeMinutes {
    /// Wrap already formatted parts
    pub fn new(sign: i8, degrees: impl Into<String>, minutes: impl Into<String>) -> Self {
        Self {
            sign,
            degrees: degrees.into(),
            minutes: minutes.into(),
        }
    }

    /// `1` for the positive angles, `-1` otherwise
    pub fn sign(&self) -> i8 {
        self.sign
    }

    /// Zero-padded whole degrees
    pub fn degrees(&self) -> &str {
        &self.degrees
    }

    /// Zero-padded arc minutes with 3 decimals
    pub fn minutes(&self) -> &str {
        &self.minutes
    }

    /// The parts in their display order
    pub fn as_triple(&self) -> (i8, &str, &str) {
        (self.sign, &self.degrees, &self.minutes)
    }

    /// Is the angle on the positive side (north or east)?
    pub fn is_positive(&self) -> bool {
        self.sign > 0
    }

    /// Combine the parts into the decimal degrees: `sign * (deg + min / 60)`.
    ///
    /// No check is done on the sign, any multiplier is accepted.
    pub fn compose(sign: f64, degrees: f64, minutes: f64) -> f64 {
        sign * (degrees + (minutes / f64::from(MINUTES_IN_DEGREE)))
    }

    /// Read the display strings back into the decimal degrees.
    ///
    /// # Errors
    /// - the sign is not one of `1` or `-1`;
    /// - some part is not a number, which is the case for non-finite input angles.
    pub fn to_decimal(&self) -> Result<f64, ParseDegreeMinutesError> {
        if self.sign != 1 && self.sign != -1 {
            return Err(ParseDegreeMinutesError::Sign(self.sign));
        }

        let degrees: f64 = self.degrees.parse()?;
        let minutes: f64 = self.minutes.parse()?;
        Ok(Self::compose(f64::from(self.sign), degrees, minutes))
    }
}

impl fmt::Display for DegreeMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_positive() {
            write!(f, "-")?;
        }
        write!(
            f,
            "{}{} {}{}",
            self.degrees, DEGREE_SIGN, self.minutes, ARC_MINUTE_SIGN
        )
    }
}
