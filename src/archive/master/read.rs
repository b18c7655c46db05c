// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to read in master archive files.

use super::super::{error::ReadArchiveError, types::SourceArchive};

/// Convert a yaml stream to a [`SourceArchive`]. Source order follows the
/// document order.
pub(crate) fn source_archive_from_yaml<T: std::io::Read>(
    buf: T,
) -> Result<SourceArchive, ReadArchiveError> {
    let archive: SourceArchive = serde_yaml::from_reader(buf)?;
    Ok(archive)
}
