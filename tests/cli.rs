// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests of the two archive binaries.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    process::Output,
    str::from_utf8,
};

use assert_cmd::{output::OutputError, Command};
use tempfile::TempDir;

fn build_extended_archive() -> Command {
    Command::cargo_bin("build_extended_archive").unwrap()
}

fn build_master_archive() -> Command {
    Command::cargo_bin("build_master_archive").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

fn write_master_yaml<P: AsRef<Path>>(dir: P) -> PathBuf {
    let path = dir.as_ref().join("master.yaml");
    let mut f = File::create(&path).expect("couldn't make file");
    f.write_all(MASTER_YAML.as_bytes()).expect("write failed");
    path
}

const MASTER_YAML: &str = r#"IC 443:
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
"#;

#[test]
fn help_is_correct() {
    for mut cmd in [build_extended_archive(), build_master_archive()] {
        let result = cmd.arg("--help").ok();
        assert!(result.is_ok());
        let (stdout, stderr) = get_cmd_output(result);
        assert!(stderr.is_empty());
        assert!(stdout.contains("USAGE:"));
        assert!(stdout.contains("-v, --verbosity"));
    }
}

#[test]
fn forward_writes_xml_and_table() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let master = write_master_yaml(tmp_dir.path());
    let outdir = tmp_dir.path().join("Extended_archive");

    let result = build_extended_archive()
        .arg(&master)
        .arg("--outdir")
        .arg(&outdir)
        .ok();
    assert!(result.is_ok(), "{:?}", get_cmd_output(result));

    assert!(outdir.join("XML/IC443.xml").exists());
    assert!(outdir.join("LAT_extended_sources.fits").exists());
}

#[test]
fn forward_then_reverse_recovers_the_master_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let master = write_master_yaml(tmp_dir.path());
    let outdir = tmp_dir.path().join("Extended_archive");

    let result = build_extended_archive()
        .arg(&master)
        .arg("--outdir")
        .arg(&outdir)
        .ok();
    assert!(result.is_ok(), "{:?}", get_cmd_output(result));

    let output = tmp_dir.path().join("rebuilt.yaml");
    let result = build_master_archive()
        .arg(outdir.join("LAT_extended_sources.fits"))
        .arg("--output")
        .arg(&output)
        .ok();
    assert!(result.is_ok(), "{:?}", get_cmd_output(result));

    let rebuilt = std::fs::read_to_string(&output).unwrap();
    assert!(rebuilt.starts_with("IC 443:"));
    assert!(rebuilt.contains("Spatial_Function: RadialDisk"));
    assert!(rebuilt.contains("Prefactor:"));
    // Galactic coordinates were derived by the forward conversion.
    assert!(rebuilt.contains("GLON:"));
    assert!(rebuilt.contains("GLAT:"));
}

#[test]
fn a_missing_master_file_is_reported() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let result = build_extended_archive()
        .arg(tmp_dir.path().join("nonexistent.yaml"))
        .arg("--outdir")
        .arg(tmp_dir.path().join("out"))
        .ok();
    assert!(result.is_err());
    let (_, stderr) = get_cmd_output(result);
    assert!(stderr.contains("Error:"), "stderr was: {stderr}");
}

#[test]
fn a_missing_xml_file_fails_the_reverse_conversion() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let master = write_master_yaml(tmp_dir.path());
    let outdir = tmp_dir.path().join("Extended_archive");

    let result = build_extended_archive()
        .arg(&master)
        .arg("--outdir")
        .arg(&outdir)
        .ok();
    assert!(result.is_ok(), "{:?}", get_cmd_output(result));
    std::fs::remove_file(outdir.join("XML/IC443.xml")).unwrap();

    let result = build_master_archive()
        .arg(outdir.join("LAT_extended_sources.fits"))
        .arg("--output")
        .arg(tmp_dir.path().join("rebuilt.yaml"))
        .ok();
    assert!(result.is_err());
    let (_, stderr) = get_cmd_output(result);
    assert!(stderr.contains("does not exist"), "stderr was: {stderr}");
}
