//! Worklist traversal over include graphs.
//!
//! Both the unresolved-include collector and the search-directory inferencer
//! walk the include graph the same way; they only differ in what they do with
//! each directive. This module owns the shared part: the visited set and the
//! wave-by-wave worklist loop.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::directive::IncludeDirective;
use crate::path::FilePath;
use crate::scanner::include_directives;
use crate::text::TextSource;

/// Canonical paths of every file already scanned during one top-level call.
///
/// Shared by all quantiles of a call so no file is scanned twice and cyclic
/// includes terminate.
#[derive(Debug, Default)]
pub struct VisitedFiles {
    canonical: HashSet<FilePath>,
}

impl VisitedFiles {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a canonical path. Returns `false` if it was already present.
    pub fn insert(&mut self, canonical: FilePath) -> bool {
        self.canonical.insert(canonical)
    }

    /// Returns `true` if the canonical path has been recorded.
    #[must_use]
    pub fn contains(&self, canonical: &FilePath) -> bool {
        self.canonical.contains(canonical)
    }

    /// Number of files scanned so far.
    #[must_use]
    pub fn scanned_count(&self) -> usize {
        self.canonical.len()
    }
}

/// Scan `start` and everything it transitively pulls in.
///
/// `on_directive` is called once per directive found in a scanned file. It
/// returns the canonical path of a file to scan next, or `None` to stop
/// following that directive. Already visited files are never queued again.
///
/// Every file, start files included, is scanned under its canonical path,
/// so directives name the same including file however it was reached.
/// Each wave is marked visited in full before any of its files is scanned,
/// so files in the same wave that include each other are not re-queued.
/// Targets that are directories are never queued.
pub fn walk_includes<F>(
    start: &[FilePath],
    visited: &mut VisitedFiles,
    source: &dyn TextSource,
    mut on_directive: F,
) where
    F: FnMut(IncludeDirective) -> Option<FilePath>,
{
    let mut wave: Vec<FilePath> = start.iter().map(FilePath::canonicalize).collect();
    let mut depth = 0usize;

    while !wave.is_empty() {
        wave.retain(|file| visited.insert(file.clone()));

        let mut next = BTreeSet::new();
        for file in &wave {
            for directive in include_directives(file, source) {
                let Some(target) = on_directive(directive) else {
                    continue;
                };
                if target.as_path().is_dir() {
                    debug!(path = %target, "Include names a directory, not scanning");
                } else if !visited.contains(&target) {
                    next.insert(target);
                }
            }
        }

        debug!(
            depth,
            scanned = wave.len(),
            queued = next.len(),
            "Include traversal wave completed"
        );
        depth += 1;
        wave = next.into_iter().collect();
    }
}
