// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// One fit parameter of a spectral or spatial model: a value/error/scale
/// tuple with optional bounds. Serialised field names match the keys used in
/// the master YAML file and the XML model files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub value: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<f64>,

    pub scale: f64,

    /// 0 = fixed, 1 = free in the fit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl ParameterRecord {
    /// A fixed parameter with unit scale and the given value and bounds.
    pub(crate) fn fixed(name: &str, value: f64, min: f64, max: f64) -> ParameterRecord {
        ParameterRecord {
            name: Some(name.to_string()),
            value,
            error: None,
            scale: 1.0,
            free: Some(0),
            min: Some(min),
            max: Some(max),
        }
    }
}
