// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to write out master archive files.

use super::super::{error::WriteArchiveError, types::SourceArchive};

/// Write a [`SourceArchive`] to a yaml stream (block style, one mapping from
/// source name to record).
pub(crate) fn source_archive_to_yaml<T: std::io::Write>(
    buf: T,
    archive: &SourceArchive,
) -> Result<(), WriteArchiveError> {
    serde_yaml::to_writer(buf, archive)?;
    Ok(())
}
