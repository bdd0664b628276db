//! Typographic signs of the angle parts

/// Follows the whole degrees
pub const DEGREE_SIGN: char = '°';
/// Follows the arc minutes
pub const ARC_MINUTE_SIGN: char = '′';
/// Follows the arc seconds
pub const ARC_SECOND_SIGN: char = '″';

/// Arc minutes in a single degree
pub const MINUTES_IN_DEGREE: u8 = 60;
