// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to handle the consolidated FITS table of an extended archive.

mod read;
mod write;

pub(crate) use read::read_extended_table;
pub(crate) use write::write_extended_table;

#[cfg(test)]
mod tests;

/// EXTNAME of the binary table HDU.
pub(crate) const EXT_NAME: &str = "EXTENDED_SOURCES";

/// The fixed column schema of the table. Order matters: these are written
/// (and expected) exactly as listed.
pub(crate) const COL_NAMES: [&str; 22] = [
    "Source_Name",
    "RAJ2000",
    "DEJ2000",
    "GLON",
    "GLAT",
    "Photon_Flux",
    "Energy_Flux",
    "Model_Form",
    "Model_SemiMajor",
    "Model_SemiMinor",
    "Model_PosAng",
    "Spatial_Function",
    "Spectral_Function",
    "Spectral_Filename",
    "Name_1FGL",
    "Name_2FGL",
    "Name_3FGL",
    "Spatial_Filename",
    "Spectral_Param_Name",
    "Spectral_Param_Value",
    "Spectral_Param_Error",
    "Spectral_Param_Scale",
];

pub(crate) const COL_FORMATS: [&str; 22] = [
    "40A", "D", "D", "D", "D", "D", "D", "40A", "D", "D", "D", "40A", "40A", "40A", "18A", "18A",
    "18A", "50A", "400A40", "10D", "10D", "10D",
];

pub(crate) const COL_UNITS: [&str; 22] = [
    "",
    "deg",
    "deg",
    "deg",
    "deg",
    "ph / (cm2 s)",
    "erg / (cm2 s)",
    "",
    "deg",
    "deg",
    "deg",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
];
