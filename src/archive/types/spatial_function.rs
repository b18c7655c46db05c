// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The spatial-model type of a source. Anything that isn't one of the three
/// named models passes through untouched.
#[derive(Debug, Clone, PartialEq, Eq, strum_macros::EnumString)]
pub enum SpatialFunction {
    #[strum(serialize = "RadialDisk")]
    RadialDisk,

    /// Older tables label this model "RadialGauss"; both spellings parse and
    /// the canonical one is always written out.
    #[strum(serialize = "RadialGaussian", serialize = "RadialGauss")]
    RadialGaussian,

    #[strum(serialize = "SpatialMap")]
    SpatialMap,

    #[strum(default)]
    Other(String),
}

impl fmt::Display for SpatialFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SpatialFunction::RadialDisk => write!(f, "RadialDisk"),
            SpatialFunction::RadialGaussian => write!(f, "RadialGaussian"),
            SpatialFunction::SpatialMap => write!(f, "SpatialMap"),
            SpatialFunction::Other(s) => write!(f, "{s}"),
        }
    }
}

// Serialised as its plain string form, not a serde enum tag.
impl Serialize for SpatialFunction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SpatialFunction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        // The `Other` default variant makes parsing infallible.
        Ok(SpatialFunction::from_str(&s).unwrap_or(SpatialFunction::Other(s)))
    }
}
