use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consts::DEGREE_SIGN;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The point on the surface of a sphere, represented as the pair (latitude, longitude)
/// in decimal degrees.
///
/// The values are not validated: anything outside of `[-90, 90]` and `[-180, 180]`
/// goes straight into the trigonometry and produces a meaningless (but defined) result.
pub struct Point {
    /// Degrees north of the equator (negative for the south)
    pub latitude: f64,
    /// Degrees east of the prime meridian (negative for the west)
    pub longitude: f64,
}

impl Point {
    /// Construct a point from the given latitude and longitude
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The intersection of the equator and the prime meridian
    pub fn origin() -> Self {
        Self::default()
    }

    /// Are both coordinates finite numbers?
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "Lat: {}{}, Long: {}{}",
                self.latitude, DEGREE_SIGN, self.longitude, DEGREE_SIGN
            )
        } else {
            write!(
                f,
                "({}{},{}{})",
                self.latitude, DEGREE_SIGN, self.longitude, DEGREE_SIGN
            )
        }
    }
}
