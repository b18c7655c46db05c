// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to turn a master YAML file into an extended-source archive and back.
//!
//! The forward conversion writes one XML model file per source plus a
//! consolidated FITS binary table; the reverse conversion reassembles the
//! master YAML file from the table and the XML files.

pub mod error;
mod fits;
mod master;
mod paths;
mod spatial;
pub mod types;
mod xml;

#[cfg(test)]
mod general_tests;

use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

use log::{debug, info};

pub use error::{ReadArchiveError, WriteArchiveError};
pub use types::{ParameterRecord, SourceArchive, SourceRecord, SpatialFunction};

use crate::constants::{FITS_TABLE_NAME, XML_DIR_NAME};
use master::{source_archive_from_yaml, source_archive_to_yaml};
use paths::resolve_archive_path;
use xml::{read_spectral_parameters, write_source_xml};

/// Read a master YAML file into a [`SourceArchive`], preserving document
/// order.
pub fn read_master_file(master_file: &Path) -> Result<SourceArchive, ReadArchiveError> {
    debug!("Reading master file {}", master_file.display());
    let f = BufReader::new(File::open(master_file)?);
    source_archive_from_yaml(f)
}

/// Write a [`SourceArchive`] out as a master YAML file.
pub fn write_master_file(
    master_file: &Path,
    archive: &SourceArchive,
) -> Result<(), WriteArchiveError> {
    let f = File::create(master_file)?;
    source_archive_to_yaml(f, archive)?;
    info!(
        "Wrote {} sources to {}",
        archive.len(),
        master_file.display()
    );
    Ok(())
}

/// The forward conversion: materialise `archive` under `outdir` as one XML
/// model file per source plus the consolidated FITS table.
///
/// Galactic coordinates are filled in from the celestial ones where absent,
/// which is why the archive is taken mutably. The FITS table is written last,
/// through a temporary sibling, so a partially-converted archive never has a
/// well-formed table.
pub fn build_extended_archive(
    archive: &mut SourceArchive,
    outdir: &Path,
) -> Result<(), WriteArchiveError> {
    let xml_dir = outdir.join(XML_DIR_NAME);
    std::fs::create_dir_all(&xml_dir)?;

    for (name, record) in archive.iter_mut() {
        record.set_coordinates()?;
        let xml_path = xml_dir.join(record.xml_file_name());
        write_source_xml(&xml_path, name, record)?;
        debug!("{name}: wrote {}", xml_path.display());
    }

    let fits_path = outdir.join(FITS_TABLE_NAME);
    let tmp_path = outdir.join(format!("{FITS_TABLE_NAME}.tmp"));
    if let Err(e) = fits::write_extended_table(&tmp_path, archive) {
        // Don't leave a half-written table behind.
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e);
    }
    std::fs::rename(&tmp_path, &fits_path)?;
    info!(
        "Wrote {} sources to {}",
        archive.len(),
        fits_path.display()
    );
    Ok(())
}

/// The reverse conversion: read the FITS table at `fitsfile` and the XML
/// model files it points at into a [`SourceArchive`], in table-row order.
///
/// `Spectral_Filename` paths are resolved against the table's own directory;
/// the XML files are the authority on spectral parameters, so the table's
/// parameter columns are ignored.
pub fn build_master_archive(fitsfile: &Path) -> Result<SourceArchive, ReadArchiveError> {
    let root = fitsfile.parent().unwrap_or_else(|| Path::new("."));
    let records = fits::read_extended_table(fitsfile)?;
    info!(
        "Read {} sources from {}",
        records.len(),
        fitsfile.display()
    );

    let mut archive = SourceArchive::new();
    for mut record in records {
        let raw = record.spectral_filename.as_deref().ok_or_else(|| {
            ReadArchiveError::MissingSpectralFilename {
                source_name: record.source_name.clone(),
            }
        })?;
        let xml_path = resolve_archive_path(root, raw);
        if !xml_path.exists() {
            return Err(ReadArchiveError::SpectralFileNotFound {
                source_name: record.source_name.clone(),
                path: xml_path,
            });
        }
        debug!("{}: reading {}", record.source_name, xml_path.display());
        record.spectral_parameters = Some(read_spectral_parameters(&xml_path)?);
        archive.insert(record.source_name.clone(), record);
    }
    Ok(archive)
}
