// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Celestial-to-Galactic coordinate conversion.

use crate::constants::{NCP_GLON_DEG, NGP_DEC_DEG, NGP_RA_DEG};

/// Galactic coordinates \[degrees\]. `glon` is in \[0, 360), `glat` in
/// \[-90, 90\].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalacticCoords {
    pub glon: f64,
    pub glat: f64,
}

/// Convert an ICRS position \[degrees\] to Galactic coordinates.
///
/// This is the standard spherical rotation defined by the north Galactic
/// pole at ICRS (192.8594812065348°, 27.12825118085622°) with the north
/// celestial pole at Galactic longitude 122.9319185680026°.
pub fn icrs_to_galactic(ra_deg: f64, dec_deg: f64) -> GalacticCoords {
    let ra = ra_deg.to_radians();
    let dec = dec_deg.to_radians();
    let ra_ngp = NGP_RA_DEG.to_radians();
    let (sin_dec_ngp, cos_dec_ngp) = NGP_DEC_DEG.to_radians().sin_cos();

    let (sin_dec, cos_dec) = dec.sin_cos();
    let (sin_dra, cos_dra) = (ra - ra_ngp).sin_cos();

    let glat = (sin_dec_ngp * sin_dec + cos_dec_ngp * cos_dec * cos_dra).asin();
    let glon = NCP_GLON_DEG.to_radians()
        - (cos_dec * sin_dra).atan2(cos_dec_ngp * sin_dec - sin_dec_ngp * cos_dec * cos_dra);

    GalacticCoords {
        glon: glon.to_degrees().rem_euclid(360.0),
        glat: glat.to_degrees(),
    }
}
