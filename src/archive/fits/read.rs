// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reading the consolidated binary table back into source records.

use std::{path::Path, str::FromStr};

use itertools::izip;

use crate::{
    archive::{
        error::ReadArchiveError,
        types::{SourceRecord, SpatialFunction},
    },
    io::fits::{fits_get_col, fits_get_num_rows, fits_open, fits_open_hdu},
};

/// Read every row of the binary table at `file` into source records, in row
/// order. The `Spectral_Param_*` columns are not read: the per-source XML
/// files are the authority on spectral parameters.
pub(crate) fn read_extended_table(file: &Path) -> Result<Vec<SourceRecord>, ReadArchiveError> {
    let mut fptr = fits_open(file)?;
    let hdu = fits_open_hdu(&mut fptr, 1)?;
    let num_rows = fits_get_num_rows(&fptr, &hdu)?;

    let source_names: Vec<String> = fits_get_col(&mut fptr, &hdu, "Source_Name")?;
    let raj2000: Vec<f64> = fits_get_col(&mut fptr, &hdu, "RAJ2000")?;
    let dej2000: Vec<f64> = fits_get_col(&mut fptr, &hdu, "DEJ2000")?;
    let glon: Vec<f64> = fits_get_col(&mut fptr, &hdu, "GLON")?;
    let glat: Vec<f64> = fits_get_col(&mut fptr, &hdu, "GLAT")?;
    let photon_flux: Vec<f64> = fits_get_col(&mut fptr, &hdu, "Photon_Flux")?;
    let energy_flux: Vec<f64> = fits_get_col(&mut fptr, &hdu, "Energy_Flux")?;
    let model_forms: Vec<String> = fits_get_col(&mut fptr, &hdu, "Model_Form")?;
    let semi_major: Vec<f64> = fits_get_col(&mut fptr, &hdu, "Model_SemiMajor")?;
    let semi_minor: Vec<f64> = fits_get_col(&mut fptr, &hdu, "Model_SemiMinor")?;
    let pos_ang: Vec<f64> = fits_get_col(&mut fptr, &hdu, "Model_PosAng")?;
    let spatial_functions: Vec<String> = fits_get_col(&mut fptr, &hdu, "Spatial_Function")?;
    let spectral_functions: Vec<String> = fits_get_col(&mut fptr, &hdu, "Spectral_Function")?;
    let spectral_filenames: Vec<String> = fits_get_col(&mut fptr, &hdu, "Spectral_Filename")?;
    let names_1fgl: Vec<String> = fits_get_col(&mut fptr, &hdu, "Name_1FGL")?;
    let names_2fgl: Vec<String> = fits_get_col(&mut fptr, &hdu, "Name_2FGL")?;
    let names_3fgl: Vec<String> = fits_get_col(&mut fptr, &hdu, "Name_3FGL")?;
    let spatial_filenames: Vec<String> = fits_get_col(&mut fptr, &hdu, "Spatial_Filename")?;

    let mut records = Vec::with_capacity(num_rows);
    for (
        source_name,
        ra,
        dec,
        glon,
        glat,
        photon_flux,
        energy_flux,
        model_form,
        semi_major,
        semi_minor,
        pos_ang,
        spatial_function,
        spectral_function,
        spectral_filename,
        name_1fgl,
        name_2fgl,
        name_3fgl,
        spatial_filename,
    ) in izip!(
        source_names,
        raj2000,
        dej2000,
        glon,
        glat,
        photon_flux,
        energy_flux,
        model_forms,
        semi_major,
        semi_minor,
        pos_ang,
        spatial_functions,
        spectral_functions,
        spectral_filenames,
        names_1fgl,
        names_2fgl,
        names_3fgl,
        spatial_filenames,
    ) {
        let spatial_function = {
            let s = spatial_function.trim();
            // The `Other` default variant makes parsing infallible.
            SpatialFunction::from_str(s).unwrap_or(SpatialFunction::Other(s.to_string()))
        };
        records.push(SourceRecord {
            source_name: source_name.trim().to_string(),
            raj2000: finite(ra),
            dej2000: finite(dec),
            glon: finite(glon),
            glat: finite(glat),
            photon_flux: finite(photon_flux),
            energy_flux: finite(energy_flux),
            model_form: non_empty(&model_form),
            model_semimajor: finite(semi_major),
            model_semiminor: finite(semi_minor),
            model_posang: finite(pos_ang),
            spatial_function,
            spectral_function: spectral_function.trim().to_string(),
            spectral_filename: non_empty(&spectral_filename),
            name_1fgl: non_empty(&name_1fgl),
            name_2fgl: non_empty(&name_2fgl),
            name_3fgl: non_empty(&name_3fgl),
            spatial_filename: non_empty(&spatial_filename),
            spectral_parameters: None,
        });
    }
    Ok(records)
}

/// Empty cells mean the field was absent when the table was written.
fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// NaN cells mean the field was absent when the table was written.
fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}
