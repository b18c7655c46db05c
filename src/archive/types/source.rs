// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{ParameterRecord, SpatialFunction};
use crate::{archive::WriteArchiveError, coords::icrs_to_galactic};

/// One extended source of the archive. Field names are serialised exactly as
/// they appear in the master YAML file and the FITS table columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(rename = "Source_Name")]
    pub source_name: String,

    /// \[degrees\]
    #[serde(rename = "RAJ2000", default, skip_serializing_if = "Option::is_none")]
    pub raj2000: Option<f64>,

    /// \[degrees\]
    #[serde(rename = "DEJ2000", default, skip_serializing_if = "Option::is_none")]
    pub dej2000: Option<f64>,

    /// \[degrees\]
    #[serde(rename = "GLON", default, skip_serializing_if = "Option::is_none")]
    pub glon: Option<f64>,

    /// \[degrees\]
    #[serde(rename = "GLAT", default, skip_serializing_if = "Option::is_none")]
    pub glat: Option<f64>,

    /// \[ph / (cm2 s)\]
    #[serde(rename = "Photon_Flux", default, skip_serializing_if = "Option::is_none")]
    pub photon_flux: Option<f64>,

    /// \[erg / (cm2 s)\]
    #[serde(rename = "Energy_Flux", default, skip_serializing_if = "Option::is_none")]
    pub energy_flux: Option<f64>,

    #[serde(rename = "Model_Form", default, skip_serializing_if = "Option::is_none")]
    pub model_form: Option<String>,

    /// \[degrees\]
    #[serde(rename = "Model_SemiMajor", default, skip_serializing_if = "Option::is_none")]
    pub model_semimajor: Option<f64>,

    /// \[degrees\]
    #[serde(rename = "Model_SemiMinor", default, skip_serializing_if = "Option::is_none")]
    pub model_semiminor: Option<f64>,

    /// \[degrees\]
    #[serde(rename = "Model_PosAng", default, skip_serializing_if = "Option::is_none")]
    pub model_posang: Option<f64>,

    #[serde(rename = "Spatial_Function")]
    pub spatial_function: SpatialFunction,

    #[serde(rename = "Spectral_Function")]
    pub spectral_function: String,

    /// Path to the XML file holding this source's spectral parameters; may
    /// contain a `$LATEXTDIR`-style token.
    #[serde(rename = "Spectral_Filename", default, skip_serializing_if = "Option::is_none")]
    pub spectral_filename: Option<String>,

    #[serde(rename = "Name_1FGL", default, skip_serializing_if = "Option::is_none")]
    pub name_1fgl: Option<String>,

    #[serde(rename = "Name_2FGL", default, skip_serializing_if = "Option::is_none")]
    pub name_2fgl: Option<String>,

    #[serde(rename = "Name_3FGL", default, skip_serializing_if = "Option::is_none")]
    pub name_3fgl: Option<String>,

    /// Only meaningful when `Spatial_Function` is SpatialMap.
    #[serde(rename = "Spatial_Filename", default, skip_serializing_if = "Option::is_none")]
    pub spatial_filename: Option<String>,

    /// Spectral parameters in their insertion order. `None` means the key
    /// was absent from the input, which is an error for the forward
    /// conversion.
    #[serde(rename = "Spectral_Parameters", default, skip_serializing_if = "Option::is_none")]
    pub spectral_parameters: Option<IndexMap<String, ParameterRecord>>,
}

impl SourceRecord {
    /// Ensure both coordinate pairs are present, deriving Galactic from
    /// celestial when needed. Records without celestial coordinates are
    /// rejected: RA/DEC feed the spatial models directly and the reverse
    /// derivation is deliberately unsupported.
    pub fn set_coordinates(&mut self) -> Result<(), WriteArchiveError> {
        let (ra, dec) = match (self.raj2000, self.dej2000) {
            (Some(ra), Some(dec)) => (ra, dec),
            _ => {
                return Err(WriteArchiveError::MissingCoordinates {
                    source_name: self.source_name.clone(),
                })
            }
        };

        if self.glon.is_none() || self.glat.is_none() {
            let g = icrs_to_galactic(ra, dec);
            self.glon = Some(g.glon);
            self.glat = Some(g.glat);
        }

        Ok(())
    }

    /// The spectral parameters, or the error that the key was absent.
    pub(crate) fn spectral_parameters(
        &self,
    ) -> Result<&IndexMap<String, ParameterRecord>, WriteArchiveError> {
        self.spectral_parameters.as_ref().ok_or_else(|| {
            WriteArchiveError::MissingSpectralParameters {
                source_name: self.source_name.clone(),
            }
        })
    }

    /// The XML file name for this source: the source name with spaces
    /// removed, plus the extension.
    pub(crate) fn xml_file_name(&self) -> String {
        format!("{}.xml", self.source_name.replace(' ', ""))
    }
}
