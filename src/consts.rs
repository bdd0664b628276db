/// Mean radius of the spherical Earth model, in meters
pub(crate) const EARTH_RADIUS_M: f64 = 6_371_000.0;

pub(crate) const METERS_IN_KILOMETER: f64 = 1000.0;
// below this distance the meters are shown with a decimal fraction
pub(crate) const WHOLE_METERS_FROM: f64 = 100.0;

pub(crate) const FULL_TURN_DEG: f64 = 360.0;

pub(crate) const SECONDS_IN_MINUTE: u8 = 60;

pub(crate) const BYTES_IN_KILOBYTE: f64 = 1024.0;
