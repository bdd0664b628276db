//! Initial great-circle bearing

use geoformat_types::{Point, DEGREE_SIGN};

use crate::{
    consts::FULL_TURN_DEG,
    utils::{js_number, js_round},
};

/// The whole degrees with the degree sign.
///
/// The value is shown as is, no wrapping into `[0, 360)` is done:
/// `format_bearing(359.6) == "360°"`.
pub fn format_bearing(bearing: f64) -> String {
    format!("{}{}", js_number(js_round(bearing)), DEGREE_SIGN)
}

/// The initial bearing (forward azimuth) in degrees clockwise from the true north
/// to follow the great circle from the first point to the second.
///
/// The result is normalized into `[0, 360)`.
///
/// ```
/// use geoformat::get_bearing_to;
///
/// let due_east = get_bearing_to(0.0, 0.0, 0.0, 90.0);
/// assert!((due_east - 90.0).abs() < 1e-9);
/// ```
pub fn get_bearing_to(lat: f64, lon: f64, target_lat: f64, target_lon: f64) -> f64 {
    let lat1 = lat.to_radians();
    let lat2 = target_lat.to_radians();

    let d_lon = (target_lon - lon).to_radians();
    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    (FULL_TURN_DEG + y.atan2(x).to_degrees()) % FULL_TURN_DEG
}

/// The initial bearing from one point to another
pub fn p2p_bearing(from: &Point, to: &Point) -> f64 {
    get_bearing_to(from.latitude, from.longitude, to.latitude, to.longitude)
}
