// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Per-source XML model files.
//!
//! Each source of an extended archive gets one XML document: a
//! `source_library` root holding a single `source` element with `spectrum`
//! and `spatialModel` children, one `parameter` element per fit parameter.

mod read;
mod write;

pub(crate) use read::read_spectral_parameters;
pub(crate) use write::write_source_xml;
