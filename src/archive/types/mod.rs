// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Types for extended-archive source records.

mod parameter;
mod source;
mod source_archive;
mod spatial_function;

pub use parameter::ParameterRecord;
pub use source::SourceRecord;
pub use source_archive::SourceArchive;
pub use spatial_function::SpatialFunction;
