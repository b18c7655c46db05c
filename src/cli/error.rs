// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all archive-tool errors. This should be the *only* error
//! enum that is publicly visible from the binaries.

use thiserror::Error;

use crate::archive::{ReadArchiveError, WriteArchiveError};

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error(transparent)]
    Read(#[from] ReadArchiveError),

    #[error(transparent)]
    Write(#[from] WriteArchiveError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
