//! Sizes of the downloaded files and timings

use std::time::{Duration, Instant};

use log::trace;
use num_traits::ToPrimitive;

use crate::consts::BYTES_IN_KILOBYTE;

const SIZE_UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// The size with two decimals in the biggest binary unit (up to terabytes)
/// which keeps the value not less than one.
///
/// ```
/// use geoformat::format_byte_size;
///
/// assert_eq!(format_byte_size(1536_u32), "1.50KB");
/// assert_eq!(format_byte_size(512), "512.00b");
/// ```
pub fn format_byte_size<T: ToPrimitive>(bytes: T) -> String {
    let Some(bytes) = bytes.to_f64() else {
        trace!("the size is not representable as a float");
        return String::from("0.00b");
    };

    let mut unit = None;
    let mut scaled = bytes;
    let mut step = BYTES_IN_KILOBYTE;
    for name in SIZE_UNITS {
        if bytes >= step {
            unit = Some(name);
            scaled = bytes / step;
        }
        step *= BYTES_IN_KILOBYTE;
    }

    format!("{:.2}{}", scaled, unit.unwrap_or("b"))
}

/// The duration in milliseconds with two decimals, e.g. `"12.35 ms"`
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2} ms", elapsed.as_secs_f64() * 1000.0)
}

/// The time passed since the `start` in milliseconds
pub fn format_elapsed_since(start: Instant) -> String {
    format_elapsed(start.elapsed())
}
