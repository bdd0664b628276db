//! The direction letters printed in front of a coordinate

use std::{convert::TryFrom, error::Error, fmt, ops::Neg};

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bool_enum;

bool_enum!(
    /// The half of the globe divided by the equator
    Pole: North and South; parse from 'N':'S' with ParsePoleError
);

bool_enum!(
    /// The half of the globe divided by the prime meridian
    RotationalDirection: East and West; parse from 'E':'W' with ParseDirectionError
);
