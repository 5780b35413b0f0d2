//! Include directive resolution.
//!
//! Maps an include directive to the file it names. Three tiers are tried in
//! strict order and the first hit wins:
//!
//! 1. The included path itself, if it is absolute and exists
//! 2. The included path relative to the including file's directory
//! 3. The included path below each search directory, in set order
//!
//! Bracket style does not change the order; the scan is lexical and the
//! distinction only matters for reporting.

use std::collections::BTreeSet;

use tracing::trace;

use crate::directive::IncludeDirective;
use crate::path::FilePath;

/// Resolve `directive` against the file system.
///
/// # Returns
/// * `Some(path)` - the first existing candidate (not canonicalized)
/// * `None` - no tier produced an existing path
#[must_use]
pub fn resolve_include_directive(
    directive: &IncludeDirective,
    search_directories: &BTreeSet<FilePath>,
) -> Option<FilePath> {
    let included = &directive.included_file;

    if included.is_absolute() && included.exists() {
        trace!(include = %included, "Resolved as absolute path");
        return Some(included.clone());
    }

    let includer_relative = directive
        .including_file
        .parent_directory()
        .concatenate(included);
    if includer_relative.exists() {
        trace!(include = %included, resolved = %includer_relative, "Resolved relative to includer");
        return Some(includer_relative);
    }

    resolve_in_directories(included, search_directories)
}

/// Find the first directory in `directories` below which `included` exists.
#[must_use]
pub fn resolve_in_directories(
    included: &FilePath,
    directories: &BTreeSet<FilePath>,
) -> Option<FilePath> {
    let resolved = directories
        .iter()
        .map(|directory| directory.concatenate(included))
        .find(FilePath::exists)?;
    trace!(include = %included, resolved = %resolved, "Resolved in search directory");
    Some(resolved)
}
