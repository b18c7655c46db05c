// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Rebuild the master YAML file from an extended-source archive.

use std::path::PathBuf;

use clap::Parser;

use super::{error::ArchiveError, setup_logging};
use crate::archive::{build_master_archive, write_master_file};

/// Rebuild the master YAML file from an extended-source archive's FITS table
/// and the per-source XML model files it points at.
#[derive(Parser, Debug)]
#[clap(name = "build_master_archive", version)]
pub struct BuildMasterArgs {
    /// Path to the archive's FITS table. XML file paths in the table are
    /// resolved against the table's own directory.
    #[clap(name = "FITSFILE", parse(from_os_str))]
    fitsfile: PathBuf,

    /// Path to write the master YAML file to.
    #[clap(short, long, default_value = "archive.yaml", parse(from_os_str))]
    output: PathBuf,

    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only high-level information.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,
}

impl BuildMasterArgs {
    pub fn run(&self) -> Result<(), ArchiveError> {
        setup_logging(self.verbosity).expect("Failed to initialise logging.");

        let archive = build_master_archive(&self.fitsfile)?;
        write_master_file(&self.output, &archive)?;
        Ok(())
    }
}
