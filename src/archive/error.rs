// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

use crate::{constants::NPAR_MAX, io::fits::FitsError};

/// Errors associated with reading any part of an archive (the master YAML
/// file, the FITS table, or a per-source XML file).
#[derive(Error, Debug)]
pub enum ReadArchiveError {
    #[error("{path}: Failed to find a source element in the XML document")]
    MissingSource { path: PathBuf },

    #[error("{path}: parameter element {index} of the spectrum has no name attribute")]
    MissingParameterName { path: PathBuf, index: usize },

    #[error("{path}: parameter {name} has no {attribute} attribute")]
    MissingParameterAttribute {
        path: PathBuf,
        name: String,
        attribute: &'static str,
    },

    #[error("{path}: Couldn't parse {attribute}=\"{string}\" of parameter {name} as a number")]
    ParseParameterAttribute {
        path: PathBuf,
        name: String,
        attribute: String,
        string: String,
    },

    #[error("Source {source_name}: Spectral_Filename {path} does not exist")]
    SpectralFileNotFound { source_name: String, path: PathBuf },

    #[error("Source {source_name}: No Spectral_Filename in the table")]
    MissingSpectralFilename { source_name: String },

    #[error("{path}: {err}")]
    Xml { path: PathBuf, err: quick_xml::Error },

    #[error(transparent)]
    Fits(#[from] FitsError),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

/// Errors associated with writing out an archive.
#[derive(Error, Debug)]
pub enum WriteArchiveError {
    #[error("Source {source_name}: Neither celestial (RAJ2000/DEJ2000) nor galactic (GLON/GLAT) coordinates are present, and celestial coordinates are required")]
    MissingCoordinates { source_name: String },

    #[error("Source {source_name}: No Spectral_Parameters key")]
    MissingSpectralParameters { source_name: String },

    #[error("Source {source_name}: {got} spectral parameters, but the table can hold at most {NPAR_MAX}")]
    TooManyParameters { source_name: String, got: usize },

    #[error("Source {source_name}: The {spatial_function} spatial function needs the {field} field")]
    MissingShapeField {
        source_name: String,
        spatial_function: &'static str,
        field: &'static str,
    },

    #[error("Source {source_name}: Spatial_Function is SpatialMap but there is no Spatial_Filename")]
    MissingSpatialFilename { source_name: String },

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    Fitsio(#[from] fitsio::errors::Error),

    #[error(transparent)]
    Fits(#[from] FitsError),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
