use std::{error::Error, fmt, num::ParseFloatError};

use crate::enum_trivial_from_impl;

/// Failed to turn the display strings of [`DegreeMinutes`](crate::DegreeMinutes)
/// back into a number
#[derive(Debug)]
pub enum ParseDegreeMinutesError {
    /// Degrees or minutes string is not a number (e.g. `"NaN"`)
    Float(ParseFloatError),
    /// Only `+1` and `-1` are meaningful signs
    Sign(i8),
}

enum_trivial_from_impl!(ParseFloatError => ParseDegreeMinutesError:Float);

impl fmt::Display for ParseDegreeMinutesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot read degrees and minutes: ")?;
        match self {
            Self::Float(inner) => write!(f, "{inner}"),
            Self::Sign(sign) => write!(f, "sign should be 1 or -1, got {sign}"),
        }
    }
}

impl Error for ParseDegreeMinutesError {}

/// The name does not denote any known coordinate display convention
#[derive(Debug)]
pub struct ParseFormatError {
    pub(crate) failed: String,
}

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown coordinate format {:?}", self.failed)
    }
}

impl Error for ParseFormatError {}
