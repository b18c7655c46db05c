// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! End-to-end tests of the forward and reverse conversions.

use std::io::Cursor;

use indoc::indoc;
use tempfile::TempDir;

use super::*;
use crate::constants::FITS_TABLE_NAME;

const MASTER_YAML: &str = indoc! {r#"
    IC 443:
      Source_Name: IC 443
      RAJ2000: 94.31
      DEJ2000: 22.58
      Photon_Flux: 4.8e-8
      Energy_Flux: 1.1e-10
      Model_Form: Disk
      Model_SemiMajor: 0.27
      Model_SemiMinor: 0.27
      Model_PosAng: 0.0
      Spatial_Function: RadialDisk
      Spectral_Function: PowerLaw
      Spectral_Filename: $LATEXTDIR/XML/IC443.xml
      Name_1FGL: 1FGL J0617.4+2234
      Name_3FGL: 3FGL J0617.2+2234e
      Spectral_Parameters:
        Prefactor:
          name: Prefactor
          value: 5.6
          error: 0.2
          scale: 1.0e-12
          free: 1
          min: 1.0e-5
          max: 100000.0
        Index:
          name: Index
          value: -2.1
          error: 0.05
          scale: 1.0
          free: 1
          min: -5.0
          max: -0.5
        Scale:
          name: Scale
          value: 1000.0
          scale: 1.0
          free: 0
          min: 30.0
          max: 500000.0
    Cygnus Loop:
      Source_Name: Cygnus Loop
      RAJ2000: 312.75
      DEJ2000: 30.85
      GLON: 74.0
      GLAT: -8.5
      Photon_Flux: 8.7e-8
      Energy_Flux: 5.2e-11
      Model_Form: Map
      Spatial_Function: SpatialMap
      Spectral_Function: PowerLaw
      Spectral_Filename: $LATEXTDIR/XML/CygnusLoop.xml
      Spatial_Filename: $LATEXTDIR/Templates/CygnusLoop.fits
      Spectral_Parameters:
        Prefactor:
          name: Prefactor
          value: 1.44
          error: 0.12
          scale: 1.0e-11
          free: 1
          min: 1.0e-5
          max: 1000.0
        Index:
          name: Index
          value: -2.4
          error: 0.1
          scale: 1.0
          free: 1
          min: -5.0
          max: -0.5
    "#};

fn test_archive() -> SourceArchive {
    master::source_archive_from_yaml(Cursor::new(MASTER_YAML))
        .expect("test yaml parses")
}

#[test]
fn forward_then_reverse_round_trips() {
    let tmp_dir = TempDir::new().expect("couldn't make a temp dir");
    let outdir = tmp_dir.path();

    let mut archive = test_archive();
    build_extended_archive(&mut archive, outdir).unwrap();

    // One XML file per source, named after the source with spaces removed.
    assert!(outdir.join("XML/IC443.xml").exists());
    assert!(outdir.join("XML/CygnusLoop.xml").exists());
    let fits_path = outdir.join(FITS_TABLE_NAME);
    assert!(fits_path.exists());
    // The temporary table was renamed away.
    assert!(!outdir.join(format!("{FITS_TABLE_NAME}.tmp")).exists());

    let round_trip = build_master_archive(&fits_path).unwrap();
    assert_eq!(
        round_trip.keys().collect::<Vec<_>>(),
        ["IC 443", "Cygnus Loop"]
    );
    // `archive` had its galactic coordinates filled in by the forward
    // conversion, after which every field survives both directions.
    assert_eq!(*round_trip, *archive);
}

#[test]
fn forward_derives_missing_galactic_coordinates() {
    let tmp_dir = TempDir::new().expect("couldn't make a temp dir");

    let mut archive = test_archive();
    assert_eq!(archive["IC 443"].glon, None);
    build_extended_archive(&mut archive, tmp_dir.path()).unwrap();

    let glon = archive["IC 443"].glon.unwrap();
    let glat = archive["IC 443"].glat.unwrap();
    assert!((glon - 189.0).abs() < 0.2, "glon was {glon}");
    assert!((glat - 3.2).abs() < 0.2, "glat was {glat}");

    // Explicit coordinates are left untouched.
    assert_eq!(archive["Cygnus Loop"].glon, Some(74.0));
    assert_eq!(archive["Cygnus Loop"].glat, Some(-8.5));
}

#[test]
fn forward_rejects_sources_without_celestial_coordinates() {
    let tmp_dir = TempDir::new().expect("couldn't make a temp dir");

    let mut archive = test_archive();
    archive["IC 443"].raj2000 = None;
    let result = build_extended_archive(&mut archive, tmp_dir.path());
    assert!(matches!(
        result,
        Err(WriteArchiveError::MissingCoordinates { .. })
    ));
    // No table is written for a partially-converted archive.
    assert!(!tmp_dir.path().join(FITS_TABLE_NAME).exists());
}

#[test]
fn a_failed_table_write_leaves_no_files_behind() {
    let tmp_dir = TempDir::new().expect("couldn't make a temp dir");
    let outdir = tmp_dir.path();

    let mut archive = test_archive();
    // Over-filling the parameter slots makes the table write fail after the
    // temporary file has been created.
    let params = (0..crate::constants::NPAR_MAX + 1)
        .map(|i| {
            (
                format!("p{i}"),
                ParameterRecord::fixed(&format!("p{i}"), 1.0, 0.0, 2.0),
            )
        })
        .collect();
    archive["IC 443"].spectral_parameters = Some(params);

    let result = build_extended_archive(&mut archive, outdir);
    assert!(matches!(
        result,
        Err(WriteArchiveError::TooManyParameters { .. })
    ));
    assert!(!outdir.join(FITS_TABLE_NAME).exists());
    assert!(!outdir.join(format!("{FITS_TABLE_NAME}.tmp")).exists());
}

#[test]
fn reverse_requires_the_xml_files_to_exist() {
    let tmp_dir = TempDir::new().expect("couldn't make a temp dir");
    let outdir = tmp_dir.path();

    let mut archive = test_archive();
    build_extended_archive(&mut archive, outdir).unwrap();
    std::fs::remove_file(outdir.join("XML/CygnusLoop.xml")).unwrap();

    let result = build_master_archive(&outdir.join(FITS_TABLE_NAME));
    match result {
        Err(ReadArchiveError::SpectralFileNotFound { source_name, .. }) => {
            assert_eq!(source_name, "Cygnus Loop");
        }
        other => panic!("expected SpectralFileNotFound, got {other:?}"),
    }
}

#[test]
fn reverse_requires_a_spectral_filename() {
    let tmp_dir = TempDir::new().expect("couldn't make a temp dir");
    let outdir = tmp_dir.path();

    let mut archive = test_archive();
    archive["IC 443"].spectral_filename = None;
    build_extended_archive(&mut archive, outdir).unwrap();

    let result = build_master_archive(&outdir.join(FITS_TABLE_NAME));
    assert!(matches!(
        result,
        Err(ReadArchiveError::MissingSpectralFilename { .. })
    ));
}

#[test]
fn master_file_io_round_trips() {
    let tmp_dir = TempDir::new().expect("couldn't make a temp dir");
    let master_path = tmp_dir.path().join("archive.yaml");

    let archive = test_archive();
    write_master_file(&master_path, &archive).unwrap();
    let read_back = read_master_file(&master_path).unwrap();
    assert_eq!(*read_back, *archive);
}
