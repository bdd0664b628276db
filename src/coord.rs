//! Conversion of the decimal degrees into display strings

use geoformat_types::{
    CoordinateFormat, DegreeMinutes, Pole, RotationalDirection, ARC_MINUTE_SIGN,
    ARC_SECOND_SIGN, DEGREE_SIGN, MINUTES_IN_DEGREE,
};
use log::trace;

use crate::{
    consts::SECONDS_IN_MINUTE,
    utils::{div_mod, js_number, js_round, keep_last, to_fixed},
};

const DEGREES_WIDTH: usize = 3;
const MINUTES_WIDTH: usize = 6;
const MINUTES_FD: usize = 3;

const DECIMAL_DEGREES_FD: usize = 5;

// precision of the arc seconds in the DMS notation
const TENTHS_IN_SECOND: u64 = 10;

/// Split the decimal degrees into the sign, whole degrees and decimal minutes.
///
/// The sign is `1` only for the strictly positive values, so both zero and `NaN` are negative.
/// The degrees are padded with zeros to 3 characters and the minutes to 6 characters
/// (3 decimals). Longer values keep only their rightmost characters,
/// e.g. 1234 degrees are shown as `"234"`.
///
/// ```
/// use geoformat::get_dm;
///
/// assert_eq!(get_dm(45.5).as_triple(), (1, "045", "30.000"));
/// ```
pub fn get_dm(value: f64) -> DegreeMinutes {
    let sign: i8 = if value > 0.0 { 1 } else { -1 };
    let value = f64::from(sign) * value;

    let whole = value.floor();
    let minutes = (value - whole) * f64::from(MINUTES_IN_DEGREE);

    let degrees = keep_last(&format!("00{}", js_number(whole)), DEGREES_WIDTH);
    let minutes = keep_last(
        &format!("00{}", to_fixed(minutes, MINUTES_FD)),
        MINUTES_WIDTH,
    );
    DegreeMinutes::new(sign, degrees, minutes)
}

/// Combine the sign, degrees and minutes back into the decimal degrees.
///
/// No check is done on the sign, any multiplier is accepted.
pub fn get_value_from_dm(sign: f64, degrees: f64, minutes: f64) -> f64 {
    DegreeMinutes::compose(sign, degrees, minutes)
}

/// The latitude in the given display convention, e.g. `N 045° 30.000′`
pub fn get_lat(lat: f64, format: CoordinateFormat) -> String {
    format_with_hemisphere(lat, format, |positive| Pole::from(positive).letter())
}

/// The longitude in the given display convention, e.g. `E 014° 25.200′`
pub fn get_lon(lon: f64, format: CoordinateFormat) -> String {
    format_with_hemisphere(lon, format, |positive| {
        RotationalDirection::from(positive).letter()
    })
}

/// Latitude and longitude separated by a space
///
/// ```
/// use geoformat::{format_coordinate, CoordinateFormat};
///
/// assert_eq!(
///     format_coordinate(45.5, 14.42, CoordinateFormat::DegreesMinutes),
///     "N 045° 30.000′ E 014° 25.200′"
/// );
/// ```
pub fn format_coordinate(lat: f64, lon: f64, format: CoordinateFormat) -> String {
    format!("{} {}", get_lat(lat, format), get_lon(lon, format))
}

fn format_with_hemisphere<F>(value: f64, format: CoordinateFormat, letter: F) -> String
where
    F: Fn(bool) -> char,
{
    match format {
        CoordinateFormat::DecimalDegrees => {
            format!("{}{}", to_fixed(value, DECIMAL_DEGREES_FD), DEGREE_SIGN)
        }
        CoordinateFormat::DegreesMinutes => {
            let dm = get_dm(value);
            format!(
                "{} {}{} {}{}",
                letter(dm.is_positive()),
                dm.degrees(),
                DEGREE_SIGN,
                dm.minutes(),
                ARC_MINUTE_SIGN
            )
        }
        CoordinateFormat::DegreesMinutesSeconds => {
            let positive = value > 0.0;
            let hemisphere = letter(positive);
            let value = value.abs();
            if !value.is_finite() {
                trace!("cannot split {} into DMS", value);
                return format!("{} {}{}", hemisphere, js_number(value), DEGREE_SIGN);
            }

            let (degrees, minutes, tenths) = split_dms(value);
            let seconds = tenths as f64 / TENTHS_IN_SECOND as f64;
            format!(
                "{} {}{} {:02}{} {:0>4}{}",
                hemisphere,
                degrees,
                DEGREE_SIGN,
                minutes,
                ARC_MINUTE_SIGN,
                to_fixed(seconds, 1),
                ARC_SECOND_SIGN
            )
        }
    }
}

/// Whole degrees, arc minutes and tenths of the arc second.
/// The rounding is done once on the smallest unit, so no `60″` can appear.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn split_dms(value: f64) -> (u64, u64, u64) {
    let tenths_in_minute = u64::from(SECONDS_IN_MINUTE) * TENTHS_IN_SECOND;
    let tenths_in_degree = u64::from(MINUTES_IN_DEGREE) * tenths_in_minute;

    let total_tenths = js_round(value * tenths_in_degree as f64) as u64;
    let (degrees, tenths_of_degree) = div_mod(total_tenths, tenths_in_degree);
    let (minutes, tenths) = div_mod(tenths_of_degree, tenths_in_minute);
    (degrees, minutes, tenths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dm_simple() {
        assert_eq!(get_dm(45.5).as_triple(), (1, "045", "30.000"));
        assert_eq!(get_dm(14.42).as_triple(), (1, "014", "25.200"));
    }

    #[test]
    fn dm_negative() {
        assert_eq!(get_dm(-33.45).as_triple(), (-1, "033", "27.000"));
        assert_eq!(get_dm(-70.5).as_triple(), (-1, "070", "30.000"));
    }

    #[test]
    fn dm_zero_is_negative() {
        assert_eq!(get_dm(0.0).as_triple(), (-1, "000", "00.000"));
        assert_eq!(get_dm(-0.0).as_triple(), (-1, "000", "00.000"));
    }

    #[test]
    fn dm_three_digit_degrees() {
        assert_eq!(get_dm(179.75).as_triple(), (1, "179", "45.000"));
    }

    #[test]
    fn dm_big_degrees_are_cut_from_the_left() {
        assert_eq!(get_dm(1234.5).as_triple(), (1, "234", "30.000"));
    }

    #[test]
    fn dm_minutes_rounding_does_not_carry() {
        // 59.99999 minutes are shown as 60 of them
        assert_eq!(get_dm(10.999_999_9).as_triple(), (1, "010", "60.000"));
    }

    #[test]
    fn dm_not_a_number() {
        let dm = get_dm(f64::NAN);
        assert_eq!(dm.as_triple(), (-1, "NaN", "00NaN"));
        assert!(dm.to_decimal().is_err());
    }

    #[test]
    fn value_from_dm() {
        assert_eq!(get_value_from_dm(1.0, 45.0, 30.0), 45.5);
        assert_eq!(get_value_from_dm(-1.0, 70.0, 30.0), -70.5);
        assert_eq!(get_value_from_dm(1.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn split_and_compose_share_the_minutes_scale() {
        let whole_degree_of_minutes = f64::from(MINUTES_IN_DEGREE);
        assert_eq!(get_value_from_dm(1.0, 0.0, whole_degree_of_minutes), 1.0);
        assert_eq!(get_dm(0.5).minutes(), "30.000");
        assert_eq!(
            get_dm(0.5).to_decimal().unwrap(),
            get_value_from_dm(1.0, 0.0, whole_degree_of_minutes / 2.0)
        );
    }

    #[test]
    fn round_trip_within_minutes_precision() {
        // 0.0005 of an arc minute
        let tolerance = 0.0005 / 60.0 + 1e-12;
        for value in [45.5, -33.45, 59.9375, 30.308_611, -70.666_667, 0.123_456, 179.999] {
            let dm = get_dm(value);
            let restored = dm.to_decimal().unwrap();
            assert!(
                (restored - value).abs() <= tolerance,
                "{} restored as {}",
                value,
                restored
            );

            let (sign, deg, min) = dm.as_triple();
            let restored = get_value_from_dm(
                f64::from(sign),
                deg.parse().unwrap(),
                min.parse().unwrap(),
            );
            assert!((restored - value).abs() <= tolerance);
        }
    }

    #[test]
    fn lat_degrees_minutes() {
        assert_eq!(get_lat(45.5, CoordinateFormat::DegreesMinutes), "N 045° 30.000′");
        assert_eq!(get_lat(-33.45, CoordinateFormat::DegreesMinutes), "S 033° 27.000′");
        assert_eq!(get_lat(0.0, CoordinateFormat::DegreesMinutes), "S 000° 00.000′");
    }

    #[test]
    fn lon_degrees_minutes() {
        assert_eq!(get_lon(14.42, CoordinateFormat::DegreesMinutes), "E 014° 25.200′");
        assert_eq!(get_lon(-70.5, CoordinateFormat::DegreesMinutes), "W 070° 30.000′");
    }

    #[test]
    fn decimal_degrees() {
        assert_eq!(get_lat(-33.45, CoordinateFormat::DecimalDegrees), "-33.45000°");
        assert_eq!(get_lon(14.42, CoordinateFormat::DecimalDegrees), "14.42000°");
        assert_eq!(get_lon(0.0, CoordinateFormat::DecimalDegrees), "0.00000°");
    }

    #[test]
    fn degrees_minutes_seconds() {
        assert_eq!(
            get_lat(59.9375, CoordinateFormat::DegreesMinutesSeconds),
            "N 59° 56′ 15.0″"
        );
        assert_eq!(
            get_lon(30.308_611, CoordinateFormat::DegreesMinutesSeconds),
            "E 30° 18′ 31.0″"
        );
        assert_eq!(
            get_lon(-70.5, CoordinateFormat::DegreesMinutesSeconds),
            "W 70° 30′ 00.0″"
        );
    }

    #[test]
    fn degrees_minutes_seconds_carry() {
        // 10° 59′ 59.99″ rounds to the next degree
        assert_eq!(
            get_lat(10.999_997_2, CoordinateFormat::DegreesMinutesSeconds),
            "N 11° 00′ 00.0″"
        );
    }

    #[test]
    fn degrees_minutes_seconds_not_finite() {
        assert_eq!(
            get_lat(f64::NAN, CoordinateFormat::DegreesMinutesSeconds),
            "S NaN°"
        );
        assert_eq!(
            get_lon(f64::INFINITY, CoordinateFormat::DegreesMinutesSeconds),
            "E Infinity°"
        );
    }

    #[test]
    fn coordinate() {
        assert_eq!(
            format_coordinate(45.5, 14.42, CoordinateFormat::DegreesMinutes),
            "N 045° 30.000′ E 014° 25.200′"
        );
        assert_eq!(
            format_coordinate(-33.45, -70.5, CoordinateFormat::DecimalDegrees),
            "-33.45000° -70.50000°"
        );
        assert_eq!(
            format_coordinate(
                59.9375,
                30.308_611,
                CoordinateFormat::DegreesMinutesSeconds
            ),
            "N 59° 56′ 15.0″ E 30° 18′ 31.0″"
        );
    }
}
