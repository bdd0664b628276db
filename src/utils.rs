//! Number rendering helpers which are not linked to the domain.
//!
//! The display strings have to look exactly as the user interface used to show them,
//! so the rounding and printing rules follow the ECMAScript `Number` behaviour
//! instead of the Rust formatting defaults (e.g. ties in `{:.1}` are rounded to even).

use std::ops::{Div, Rem};

// enough fraction digits to print the smallest subnormal `f64` exactly
const EXACT_FRACTION_DIGITS: usize = 1_100;

// the ECMAScript switches to the exponential notation starting from this magnitude
const EXPONENTIAL_THRESHOLD: f64 = 1e21;

/// Division and remainder in one step
pub fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}

/// Round to the nearest integer, the halves are rounded towards positive infinity
/// (`-2.5` becomes `-2`, `2.5` becomes `3`).
///
/// The negative zero is never produced.
pub fn js_round(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };

    // -0 + 0 == +0
    rounded + 0.0
}

/// Print the number the way a string concatenation does it:
/// - no trailing `.0` for integers;
/// - `0` for the negative zero;
/// - `NaN`, `Infinity` and `-Infinity` for the special values;
/// - exponential notation for the huge and tiny magnitudes.
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }

    if value.is_infinite() {
        return if value > 0.0 {
            String::from("Infinity")
        } else {
            String::from("-Infinity")
        };
    }

    if value == 0.0 {
        return String::from("0");
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENTIAL_THRESHOLD {
        format!("{value:e}").replace('e', "e+")
    } else if magnitude < 1e-6 {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

/// Fixed-point notation with exactly `digits` fraction digits.
///
/// Unlike `format!("{:.*}")` the exact ties go away from zero:
/// `to_fixed(0.25, 1) == "0.3"`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= EXPONENTIAL_THRESHOLD {
        return js_number(value);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, fract_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(fract_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    let round_up = fract_part
        .as_bytes()
        .get(digits)
        .map_or(false, |&next| next >= b'5');

    if round_up && increment_digits(&mut kept) {
        kept.insert(0, b'1');
    }

    let int_len = kept.len() - digits;
    let mut fixed = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        fixed.push('-');
    }
    fixed.extend(kept[..int_len].iter().map(|&b| char::from(b)));
    if digits > 0 {
        fixed.push('.');
        fixed.extend(kept[int_len..].iter().map(|&b| char::from(b)));
    }
    fixed
}

/// Add one to the decimal number stored as ASCII digits.
/// Returns whether the carry went out of the most significant digit.
fn increment_digits(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

/// The rightmost `width` characters of the string (the whole string if it is shorter).
pub fn keep_last(s: &str, width: usize) -> String {
    let len = s.chars().count();
    s.chars().skip(len.saturating_sub(width)).collect()
}
