// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writing the consolidated binary table.

use std::path::Path;

use fitsio::FitsFile;

use super::{COL_FORMATS, COL_NAMES, COL_UNITS, EXT_NAME};
use crate::{
    archive::{error::WriteArchiveError, types::SourceArchive},
    constants::NPAR_MAX,
    io::fits::{fits_create_table, fits_write_col_f64, fits_write_col_str},
};

/// Write all sources of `archive` into a single binary table at `file`,
/// one row per source, in archive order.
///
/// Every source must carry its spectral parameters; parameter slots beyond
/// the per-source count are padded with empty names and NaNs up to
/// [`NPAR_MAX`].
pub(crate) fn write_extended_table(
    file: &Path,
    archive: &SourceArchive,
) -> Result<(), WriteArchiveError> {
    if file.exists() {
        std::fs::remove_file(file)?;
    }
    let mut fptr = FitsFile::create(file).open()?;
    fits_create_table(&mut fptr, EXT_NAME, &COL_NAMES, &COL_FORMATS, &COL_UNITS)?;

    let num_rows = archive.len();
    let mut source_names = Vec::with_capacity(num_rows);
    let mut raj2000 = Vec::with_capacity(num_rows);
    let mut dej2000 = Vec::with_capacity(num_rows);
    let mut glon = Vec::with_capacity(num_rows);
    let mut glat = Vec::with_capacity(num_rows);
    let mut photon_flux = Vec::with_capacity(num_rows);
    let mut energy_flux = Vec::with_capacity(num_rows);
    let mut model_forms = Vec::with_capacity(num_rows);
    let mut semi_major = Vec::with_capacity(num_rows);
    let mut semi_minor = Vec::with_capacity(num_rows);
    let mut pos_ang = Vec::with_capacity(num_rows);
    let mut spatial_functions = Vec::with_capacity(num_rows);
    let mut spectral_functions = Vec::with_capacity(num_rows);
    let mut spectral_filenames = Vec::with_capacity(num_rows);
    let mut names_1fgl = Vec::with_capacity(num_rows);
    let mut names_2fgl = Vec::with_capacity(num_rows);
    let mut names_3fgl = Vec::with_capacity(num_rows);
    let mut spatial_filenames = Vec::with_capacity(num_rows);
    let mut param_names = Vec::with_capacity(num_rows * NPAR_MAX);
    let mut param_values = Vec::with_capacity(num_rows * NPAR_MAX);
    let mut param_errors = Vec::with_capacity(num_rows * NPAR_MAX);
    let mut param_scales = Vec::with_capacity(num_rows * NPAR_MAX);

    for (source_name, record) in archive.iter() {
        source_names.push(source_name.clone());
        raj2000.push(record.raj2000.unwrap_or(f64::NAN));
        dej2000.push(record.dej2000.unwrap_or(f64::NAN));
        glon.push(record.glon.unwrap_or(f64::NAN));
        glat.push(record.glat.unwrap_or(f64::NAN));
        photon_flux.push(record.photon_flux.unwrap_or(f64::NAN));
        energy_flux.push(record.energy_flux.unwrap_or(f64::NAN));
        model_forms.push(record.model_form.clone().unwrap_or_default());
        semi_major.push(record.model_semimajor.unwrap_or(f64::NAN));
        semi_minor.push(record.model_semiminor.unwrap_or(f64::NAN));
        pos_ang.push(record.model_posang.unwrap_or(f64::NAN));
        spatial_functions.push(record.spatial_function.to_string());
        spectral_functions.push(record.spectral_function.clone());
        spectral_filenames.push(record.spectral_filename.clone().unwrap_or_default());
        names_1fgl.push(record.name_1fgl.clone().unwrap_or_default());
        names_2fgl.push(record.name_2fgl.clone().unwrap_or_default());
        names_3fgl.push(record.name_3fgl.clone().unwrap_or_default());
        spatial_filenames.push(record.spatial_filename.clone().unwrap_or_default());

        let params = record.spectral_parameters()?;
        if params.len() > NPAR_MAX {
            return Err(WriteArchiveError::TooManyParameters {
                source_name: source_name.clone(),
                got: params.len(),
            });
        }
        for (param_name, param) in params.iter() {
            param_names.push(param_name.clone());
            param_values.push(param.value);
            param_errors.push(param.error.unwrap_or(f64::NAN));
            param_scales.push(param.scale);
        }
        for _ in params.len()..NPAR_MAX {
            param_names.push(String::new());
            param_values.push(f64::NAN);
            param_errors.push(f64::NAN);
            param_scales.push(f64::NAN);
        }
    }

    fits_write_col_str(&mut fptr, 1, &source_names)?;
    fits_write_col_f64(&mut fptr, 2, &raj2000)?;
    fits_write_col_f64(&mut fptr, 3, &dej2000)?;
    fits_write_col_f64(&mut fptr, 4, &glon)?;
    fits_write_col_f64(&mut fptr, 5, &glat)?;
    fits_write_col_f64(&mut fptr, 6, &photon_flux)?;
    fits_write_col_f64(&mut fptr, 7, &energy_flux)?;
    fits_write_col_str(&mut fptr, 8, &model_forms)?;
    fits_write_col_f64(&mut fptr, 9, &semi_major)?;
    fits_write_col_f64(&mut fptr, 10, &semi_minor)?;
    fits_write_col_f64(&mut fptr, 11, &pos_ang)?;
    fits_write_col_str(&mut fptr, 12, &spatial_functions)?;
    fits_write_col_str(&mut fptr, 13, &spectral_functions)?;
    fits_write_col_str(&mut fptr, 14, &spectral_filenames)?;
    fits_write_col_str(&mut fptr, 15, &names_1fgl)?;
    fits_write_col_str(&mut fptr, 16, &names_2fgl)?;
    fits_write_col_str(&mut fptr, 17, &names_3fgl)?;
    fits_write_col_str(&mut fptr, 18, &spatial_filenames)?;
    fits_write_col_str(&mut fptr, 19, &param_names)?;
    fits_write_col_f64(&mut fptr, 20, &param_values)?;
    fits_write_col_f64(&mut fptr, 21, &param_errors)?;
    fits_write_col_f64(&mut fptr, 22, &param_scales)?;

    Ok(())
}
