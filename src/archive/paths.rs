// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Handling of the `$LATEXTDIR`-style path tokens used by extended archives.
//!
//! The archive root is always passed explicitly; nothing here touches the
//! process environment.

use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "$VAR" but not "$(VAR)".
    static ref ENV_STYLE_TOKEN: Regex = Regex::new(r"\$([a-zA-Z_]+)").unwrap();
    // Any of "$VAR", "$(VAR)", "${VAR}".
    static ref ANY_STYLE_TOKEN: Regex = Regex::new(r"\$[\(\{]?([a-zA-Z_]+)[\)\}]?").unwrap();
}

/// Rewrite `$VAR` tokens to the `$(VAR)` spelling that the science tools
/// expect inside XML `file` attributes.
pub(crate) fn path_to_xmlpath(path: &str) -> String {
    ENV_STYLE_TOKEN.replace_all(path, "$$($1)").into_owned()
}

/// Resolve a path from the FITS table against the archive root directory:
/// any `$VAR`-style token is replaced by the root, and a still-relative
/// result is joined onto it.
pub(crate) fn resolve_archive_path(root: &Path, raw: &str) -> PathBuf {
    // NoExpand: a root containing "$" is a literal path, not a replacement
    // template.
    let expanded = ANY_STYLE_TOKEN
        .replace_all(raw, regex::NoExpand(root.to_string_lossy().as_ref()))
        .into_owned();
    let expanded = PathBuf::from(expanded);
    if expanded.is_relative() {
        root.join(expanded)
    } else {
        expanded
    }
}
