// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code surrounding the [`IndexMap`] used to contain all source records of a
//! master archive.

use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::SourceRecord;

/// An [`IndexMap`] of source names for keys and [`SourceRecord`] structs for
/// values. The insertion order is the order of the master file and of the
/// FITS table rows, so conversions are reproducible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceArchive(IndexMap<String, SourceRecord>);

impl SourceArchive {
    /// Create an empty [`SourceArchive`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<IndexMap<String, SourceRecord>> for SourceArchive {
    fn from(map: IndexMap<String, SourceRecord>) -> Self {
        Self(map)
    }
}

impl Deref for SourceArchive {
    type Target = IndexMap<String, SourceRecord>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SourceArchive {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<(String, SourceRecord)> for SourceArchive {
    fn from_iter<I: IntoIterator<Item = (String, SourceRecord)>>(iter: I) -> Self {
        let mut c = Self::new();
        for i in iter {
            c.insert(i.0, i.1);
        }
        c
    }
}

impl IntoIterator for SourceArchive {
    type Item = (String, SourceRecord);
    type IntoIter = indexmap::map::IntoIter<String, SourceRecord>;

    fn into_iter(self) -> indexmap::map::IntoIter<String, SourceRecord> {
        self.0.into_iter()
    }
}
