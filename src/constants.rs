// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Constants shared across the archive converters.

/// The number of spectral-parameter slots in each of the fixed-width
/// `Spectral_Param_*` columns of the FITS table.
pub const NPAR_MAX: usize = 10;

/// Ratio between the radius of a uniform disk and the sigma of a 2D Gaussian
/// with the same effective width. Used to convert the geometric-mean
/// semi-axis of a disk model into the sigma of the equivalent RadialGaussian
/// model. This is the value baked into the LAT extended-source modelling
/// convention; do not "simplify" it.
pub const DISK_TO_GAUSS_SIGMA: f64 = 1.5095921854516636;

/// File name of the consolidated FITS table inside an extended archive
/// directory.
pub const FITS_TABLE_NAME: &str = "LAT_extended_sources.fits";

/// Name of the per-source XML subdirectory inside an extended archive
/// directory.
pub const XML_DIR_NAME: &str = "XML";

/// The environment-style token that extended archives use for paths relative
/// to the archive root.
pub const ARCHIVE_ROOT_TOKEN: &str = "LATEXTDIR";

// The ICRS coordinates of the north Galactic pole and the Galactic longitude
// of the north celestial pole. These are the defining angles of the
// ICRS <-> Galactic rotation (the same values astropy uses).
pub(crate) const NGP_RA_DEG: f64 = 192.859_481_206_534_8;
pub(crate) const NGP_DEC_DEG: f64 = 27.128_251_180_856_22;
pub(crate) const NCP_GLON_DEG: f64 = 122.931_918_568_002_6;
