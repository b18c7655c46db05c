// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Build an extended-source archive from a master YAML file.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use super::{error::ArchiveError, setup_logging};
use crate::archive::{build_extended_archive, read_master_file};

/// Build an extended-source archive (per-source XML model files plus a
/// consolidated FITS table) from a master YAML file.
#[derive(Parser, Debug)]
#[clap(name = "build_extended_archive", version)]
pub struct BuildExtendedArgs {
    /// Path to the master YAML file describing every source of the archive.
    #[clap(name = "MASTERFILE", parse(from_os_str))]
    masterfile: PathBuf,

    /// The directory to write the archive into. It is created if it doesn't
    /// exist.
    #[clap(short, long, parse(from_os_str))]
    outdir: PathBuf,

    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only high-level information.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,
}

impl BuildExtendedArgs {
    pub fn run(&self) -> Result<(), ArchiveError> {
        setup_logging(self.verbosity).expect("Failed to initialise logging.");

        let mut archive = read_master_file(&self.masterfile)?;
        info!(
            "Read {} sources from {}",
            archive.len(),
            self.masterfile.display()
        );
        build_extended_archive(&mut archive, &self.outdir)?;
        Ok(())
    }
}
