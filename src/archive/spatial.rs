// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Derivation of spatial-model parameters from a source's shape columns.

use indexmap::IndexMap;

use super::{
    error::WriteArchiveError,
    types::{ParameterRecord, SourceRecord, SpatialFunction},
};
use crate::constants::DISK_TO_GAUSS_SIGMA;

/// Build the spatial parameter set for a source. The record must already
/// have celestial coordinates (see [`SourceRecord::set_coordinates`]).
///
/// All derived parameters are fixed (`free=0`). Radial models get RA/DEC
/// copied from the record and an extent parameter computed from the
/// geometric mean of the semi-axes; everything else gets a placeholder
/// Prefactor pinned to 1.
pub(crate) fn derive_spatial_parameters(
    record: &SourceRecord,
) -> Result<IndexMap<String, ParameterRecord>, WriteArchiveError> {
    let mut params = IndexMap::new();

    match &record.spatial_function {
        SpatialFunction::RadialDisk => {
            let radius = semi_axis_geometric_mean(record, "RadialDisk")?;
            params.insert("RA".to_string(), ra_parameter(record));
            params.insert("DEC".to_string(), dec_parameter(record));
            params.insert(
                "Radius".to_string(),
                ParameterRecord::fixed("Radius", radius, 0.0, 10.0),
            );
        }

        SpatialFunction::RadialGaussian => {
            let sigma = semi_axis_geometric_mean(record, "RadialGaussian")? / DISK_TO_GAUSS_SIGMA;
            params.insert("RA".to_string(), ra_parameter(record));
            params.insert("DEC".to_string(), dec_parameter(record));
            params.insert(
                "Sigma".to_string(),
                ParameterRecord::fixed("Sigma", sigma, 0.0, 10.0),
            );
        }

        // Map-based and unrecognised models carry no meaningful spatial
        // parameters; the science tools still expect a parameter element.
        SpatialFunction::SpatialMap | SpatialFunction::Other(_) => {
            params.insert(
                "Prefactor".to_string(),
                ParameterRecord::fixed("Prefactor", 1.0, 1.0, 1.0),
            );
        }
    }

    Ok(params)
}

fn ra_parameter(record: &SourceRecord) -> ParameterRecord {
    // set_coordinates guarantees these are present for radial models.
    ParameterRecord::fixed("RA", record.raj2000.unwrap_or(f64::NAN), 0.0, 360.0)
}

fn dec_parameter(record: &SourceRecord) -> ParameterRecord {
    ParameterRecord::fixed("DEC", record.dej2000.unwrap_or(f64::NAN), -90.0, 90.0)
}

fn semi_axis_geometric_mean(
    record: &SourceRecord,
    spatial_function: &'static str,
) -> Result<f64, WriteArchiveError> {
    let major = record
        .model_semimajor
        .ok_or(WriteArchiveError::MissingShapeField {
            source_name: record.source_name.clone(),
            spatial_function,
            field: "Model_SemiMajor",
        })?;
    let minor = record
        .model_semiminor
        .ok_or(WriteArchiveError::MissingShapeField {
            source_name: record.source_name.clone(),
            spatial_function,
            field: "Model_SemiMinor",
        })?;
    Ok((major * minor).sqrt())
}
