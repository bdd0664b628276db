//! Distance, bearing, coordinate and text formatting helpers for map user interfaces.
//!
//! Every function here is a pure transformation of its arguments:
//! no state is kept between the calls and nothing is validated,
//! so the out-of-range input produces a defined but meaningless output
//! (e.g. `NaN` goes through the math and shows up as `"NaN"` in the strings).

// The list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
// recommendations
#![forbid(unsafe_code)]
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use bearing::{format_bearing, get_bearing_to, p2p_bearing};
pub use coord::{format_coordinate, get_dm, get_lat, get_lon, get_value_from_dm};
pub use distance::{
    format_distance, get_distance_to, p2p_distance, p2p_distance_string, PointExt,
};
pub use geoformat_types::{
    CoordinateFormat, DegreeMinutes, ParseDegreeMinutesError, ParseDirectionError,
    ParseFormatError, ParsePoleError, Point, Pole, RotationalDirection, ARC_MINUTE_SIGN,
    ARC_SECOND_SIGN, DEGREE_SIGN, MINUTES_IN_DEGREE,
};
pub use markup::{make_text_clickable, make_usernames_clickable};
pub use media::is_image_data;
pub use text::{trunc, Truncate};
pub use units::{format_byte_size, format_elapsed, format_elapsed_since};

mod bearing;
mod consts;
mod coord;
mod distance;
mod markup;
mod media;
mod text;
mod units;
mod utils;
