//! Great-circle distances and their human-readable form

use geoformat_types::Point;
use log::trace;

use crate::{
    bearing::p2p_bearing,
    consts::{EARTH_RADIUS_M, METERS_IN_KILOMETER, WHOLE_METERS_FROM},
    utils::{js_number, js_round, to_fixed},
};

/// Show the distance in meters or kilometers.
///
/// The `distance` is divided by the `scale` first, the result is expected to be in meters:
/// - zero (or not a number) is shown as plain `"0"`;
/// - from 1000 m the whole kilometers are shown;
/// - from 100 m the whole meters are shown;
/// - otherwise the meters with a single decimal.
///
/// Negative values are not rejected. They never reach the first two thresholds,
/// so they are always shown with a decimal: `"-5.0 m"`.
///
/// ```
/// use geoformat::format_distance;
///
/// assert_eq!(format_distance(1500.0, 1.0), "2 km");
/// assert_eq!(format_distance(42.37, 1.0), "42.4 m");
/// ```
pub fn format_distance(distance: f64, scale: f64) -> String {
    let distance = distance / scale;
    if distance == 0.0 || distance.is_nan() {
        trace!("distance collapsed to zero: {}", distance);
        return String::from("0");
    }

    // TODO: imperial units, the host settings have no unit system switch yet
    if distance >= METERS_IN_KILOMETER {
        format!("{} km", js_number(js_round(distance / METERS_IN_KILOMETER)))
    } else if distance >= WHOLE_METERS_FROM {
        format!("{} m", js_number(js_round(distance)))
    } else {
        format!("{} m", to_fixed(distance, 1))
    }
}

/// Distance in meters between two points on the sphere by the haversine formula.
///
/// ```
/// use geoformat::get_distance_to;
///
/// let one_degree = get_distance_to(0.0, 0.0, 0.0, 1.0);
/// assert!((one_degree - 111_194.9).abs() < 1.0);
/// ```
pub fn get_distance_to(lat: f64, lon: f64, target_lat: f64, target_lon: f64) -> f64 {
    let d_lat = ((target_lat - lat).to_radians() / 2.0).sin().powi(2);
    let d_lon = ((target_lon - lon).to_radians() / 2.0).sin().powi(2);
    let a = d_lat + lat.to_radians().cos() * target_lat.to_radians().cos() * d_lon;
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// Distance in meters between two points
pub fn p2p_distance(from: &Point, to: &Point) -> f64 {
    get_distance_to(from.latitude, from.longitude, to.latitude, to.longitude)
}

/// Human-readable distance between two points
pub fn p2p_distance_string(from: &Point, to: &Point) -> String {
    format_distance(p2p_distance(from, to), 1.0)
}

/// Distances and bearings as methods of the [`Point`]
///
/// ```
/// use geoformat::{Point, PointExt};
///
/// let origin = Point::origin();
/// let east = Point::new(0.0, 90.0);
/// assert!((origin.bearing_to(&east) - 90.0).abs() < 1e-9);
/// assert_eq!(origin.distance_string_to(&origin), "0");
/// ```
pub trait PointExt {
    /// See [`p2p_distance`]
    fn distance_to(&self, other: &Point) -> f64;

    /// See [`p2p_distance_string`]
    fn distance_string_to(&self, other: &Point) -> String;

    /// See [`p2p_bearing`](crate::p2p_bearing)
    fn bearing_to(&self, other: &Point) -> f64;
}

impl PointExt for Point {
    fn distance_to(&self, other: &Point) -> f64 {
        p2p_distance(self, other)
    }

    fn distance_string_to(&self, other: &Point) -> String {
        p2p_distance_string(self, other)
    }

    fn bearing_to(&self, other: &Point) -> f64 {
        p2p_bearing(self, other)
    }
}
