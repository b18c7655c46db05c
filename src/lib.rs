// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Conversion tools for the Fermi-LAT extended source archive.

An archive is described by a single master YAML file; the forward conversion
materialises it as one XML model file per source plus a consolidated FITS
binary table, and the reverse conversion reassembles the master file from
those products.
 */

pub mod archive;
pub mod cli;
pub mod constants;
pub(crate) mod coords;
pub mod io;

// Re-exports.
pub use archive::{
    build_extended_archive, build_master_archive, read_master_file, write_master_file,
    ParameterRecord, SourceArchive, SourceRecord, SpatialFunction,
};
