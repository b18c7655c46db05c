// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to handle the master archive YAML file.

mod read;
mod write;

pub(crate) use read::source_archive_from_yaml;
pub(crate) use write::source_archive_to_yaml;
