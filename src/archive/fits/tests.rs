// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use indexmap::IndexMap;
use tempfile::TempDir;

use super::{read::read_extended_table, write::write_extended_table};
use crate::{
    archive::{
        error::WriteArchiveError,
        types::{ParameterRecord, SourceArchive, SourceRecord, SpatialFunction},
    },
    constants::NPAR_MAX,
    io::fits::{
        fits_get_num_rows, fits_open, fits_open_hdu, fits_read_col_f64_array,
        fits_read_col_str_array,
    },
};

fn power_law_parameters() -> IndexMap<String, ParameterRecord> {
    IndexMap::from([
        (
            "Prefactor".to_string(),
            ParameterRecord {
                name: Some("Prefactor".to_string()),
                value: 5.6,
                error: Some(0.2),
                scale: 1e-12,
                free: Some(1),
                min: Some(1e-5),
                max: Some(1e5),
            },
        ),
        (
            "Index".to_string(),
            ParameterRecord {
                name: Some("Index".to_string()),
                value: -2.1,
                error: Some(0.05),
                scale: 1.0,
                free: Some(1),
                min: Some(-5.0),
                max: Some(-0.5),
            },
        ),
        (
            "Scale".to_string(),
            ParameterRecord::fixed("Scale", 1000.0, 30.0, 500000.0),
        ),
    ])
}

fn disk_record() -> SourceRecord {
    SourceRecord {
        source_name: "IC 443".to_string(),
        raj2000: Some(94.31),
        dej2000: Some(22.58),
        glon: Some(189.065),
        glat: Some(3.235),
        photon_flux: Some(4.8e-8),
        energy_flux: Some(1.1e-10),
        model_form: Some("Disk".to_string()),
        model_semimajor: Some(0.27),
        model_semiminor: Some(0.27),
        model_posang: Some(0.0),
        spatial_function: SpatialFunction::RadialDisk,
        spectral_function: "PowerLaw".to_string(),
        spectral_filename: Some("$LATEXTDIR/XML/IC443.xml".to_string()),
        name_1fgl: Some("1FGL J0617.4+2234".to_string()),
        name_2fgl: None,
        name_3fgl: Some("3FGL J0617.2+2234e".to_string()),
        spatial_filename: None,
        spectral_parameters: Some(power_law_parameters()),
    }
}

#[test]
fn table_round_trips_scalar_columns() {
    let tmp_dir = TempDir::new().expect("couldn't make a temp dir");
    let fits_path = tmp_dir.path().join("table.fits");

    let record = disk_record();
    let archive: SourceArchive = [(record.source_name.clone(), record.clone())]
        .into_iter()
        .collect();
    write_extended_table(&fits_path, &archive).unwrap();

    let records = read_extended_table(&fits_path).unwrap();
    assert_eq!(records.len(), 1);
    let read_back = &records[0];
    assert_eq!(read_back.source_name, "IC 443");
    assert_abs_diff_eq!(read_back.raj2000.unwrap(), 94.31);
    assert_abs_diff_eq!(read_back.glat.unwrap(), 3.235);
    assert_abs_diff_eq!(read_back.photon_flux.unwrap(), 4.8e-8);
    assert_eq!(read_back.model_form.as_deref(), Some("Disk"));
    assert_eq!(read_back.spatial_function, SpatialFunction::RadialDisk);
    assert_eq!(read_back.spectral_function, "PowerLaw");
    assert_eq!(
        read_back.spectral_filename.as_deref(),
        Some("$LATEXTDIR/XML/IC443.xml")
    );
    assert_eq!(read_back.name_2fgl, None);
    assert_eq!(read_back.spatial_filename, None);
    // Parameters come from the XML files, never the table.
    assert_eq!(read_back.spectral_parameters, None);
}

#[test]
fn parameter_columns_are_padded_to_the_slot_count() {
    let tmp_dir = TempDir::new().expect("couldn't make a temp dir");
    let fits_path = tmp_dir.path().join("table.fits");

    let record = disk_record();
    let archive: SourceArchive = [(record.source_name.clone(), record)]
        .into_iter()
        .collect();
    write_extended_table(&fits_path, &archive).unwrap();

    let mut fptr = fits_open(&fits_path).unwrap();
    let hdu = fits_open_hdu(&mut fptr, 1).unwrap();
    let num_rows = fits_get_num_rows(&fptr, &hdu).unwrap();
    assert_eq!(num_rows, 1);

    let names = fits_read_col_str_array(&mut fptr, "Spectral_Param_Name", num_rows).unwrap();
    assert_eq!(names.len(), NPAR_MAX);
    assert_eq!(&names[0..3], &["Prefactor", "Index", "Scale"]);
    assert!(names[3..].iter().all(|n| n.is_empty()));

    let values = fits_read_col_f64_array(&mut fptr, "Spectral_Param_Value", num_rows, NPAR_MAX)
        .unwrap();
    assert_eq!(values.len(), NPAR_MAX);
    assert_abs_diff_eq!(values[0], 5.6);
    assert_abs_diff_eq!(values[1], -2.1);
    assert_abs_diff_eq!(values[2], 1000.0);
    assert!(values[3..].iter().all(|v| v.is_nan()));

    let scales = fits_read_col_f64_array(&mut fptr, "Spectral_Param_Scale", num_rows, NPAR_MAX)
        .unwrap();
    assert_abs_diff_eq!(scales[0], 1e-12);
    assert_abs_diff_eq!(scales[2], 1.0);
}

#[test]
fn legacy_gaussian_label_is_remapped_on_read() {
    let tmp_dir = TempDir::new().expect("couldn't make a temp dir");
    let fits_path = tmp_dir.path().join("table.fits");

    let mut record = disk_record();
    // Older tables spell the model "RadialGauss"; passes through the write
    // untouched, remapped on read.
    record.spatial_function = SpatialFunction::Other("RadialGauss".to_string());
    let archive: SourceArchive = [(record.source_name.clone(), record)]
        .into_iter()
        .collect();
    write_extended_table(&fits_path, &archive).unwrap();

    let records = read_extended_table(&fits_path).unwrap();
    assert_eq!(records[0].spatial_function, SpatialFunction::RadialGaussian);
}

#[test]
fn too_many_parameters_is_an_error() {
    let tmp_dir = TempDir::new().expect("couldn't make a temp dir");
    let fits_path = tmp_dir.path().join("table.fits");

    let mut record = disk_record();
    let params: IndexMap<String, ParameterRecord> = (0..NPAR_MAX + 1)
        .map(|i| {
            (
                format!("p{i}"),
                ParameterRecord::fixed(&format!("p{i}"), 1.0, 0.0, 2.0),
            )
        })
        .collect();
    record.spectral_parameters = Some(params);
    let archive: SourceArchive = [(record.source_name.clone(), record)]
        .into_iter()
        .collect();

    let result = write_extended_table(&fits_path, &archive);
    assert!(matches!(
        result,
        Err(WriteArchiveError::TooManyParameters { got: 11, .. })
    ));
}

#[test]
fn missing_parameters_is_an_error() {
    let tmp_dir = TempDir::new().expect("couldn't make a temp dir");
    let fits_path = tmp_dir.path().join("table.fits");

    let mut record = disk_record();
    record.spectral_parameters = None;
    let archive: SourceArchive = [(record.source_name.clone(), record)]
        .into_iter()
        .collect();

    let result = write_extended_table(&fits_path, &archive);
    assert!(matches!(
        result,
        Err(WriteArchiveError::MissingSpectralParameters { .. })
    ));
}
