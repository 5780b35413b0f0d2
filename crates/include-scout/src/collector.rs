//! Collection of include directives that resolve to nothing.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::btree_map::Entry;

use tracing::trace;

use crate::directive::IncludeDirective;
use crate::path::FilePath;
use crate::resolver::resolve_include_directive;
use crate::text::TextSource;
use crate::traversal::{VisitedFiles, walk_includes};

/// Unresolved directives accumulated over one top-level call.
///
/// Directives are identified by their included path alone: two files that
/// both include a missing `"config.h"` produce one entry. The entry kept is
/// the one with the smallest `(including_file, line_number)`, so the result
/// does not depend on the order files were scanned in.
#[derive(Debug, Default)]
pub struct UnresolvedIncludes {
    by_included_file: BTreeMap<FilePath, IncludeDirective>,
}

impl UnresolvedIncludes {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an unresolved directive.
    pub fn record(&mut self, directive: IncludeDirective) {
        match self.by_included_file.entry(directive.included_file.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(directive);
            }
            Entry::Occupied(mut slot) => {
                let kept = slot.get();
                if (&directive.including_file, directive.line_number)
                    < (&kept.including_file, kept.line_number)
                {
                    slot.insert(directive);
                }
            }
        }
    }

    /// Number of distinct unresolved include paths.
    #[must_use]
    pub fn count(&self) -> usize {
        self.by_included_file.len()
    }

    /// The recorded directives ordered by included path.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<IncludeDirective> {
        self.by_included_file.into_values().collect()
    }
}

/// Inputs that stay fixed for a whole collection call.
#[derive(Debug)]
pub struct CollectorScope<'a> {
    /// Canonical roots a resolved include must lie under to be followed
    pub indexed_roots: &'a [FilePath],
    /// Search directories for the third resolution tier
    pub search_directories: &'a BTreeSet<FilePath>,
}

/// Scan one batch of files and everything they transitively include.
///
/// Unresolved directives go into `unresolved`. Resolved includes are followed
/// only if they lie under one of the indexed roots, which keeps the walk out
/// of system and third-party trees.
pub fn collect_unresolved_includes(
    batch: &[FilePath],
    scope: &CollectorScope<'_>,
    visited: &mut VisitedFiles,
    source: &dyn TextSource,
    unresolved: &mut UnresolvedIncludes,
) {
    walk_includes(batch, visited, source, |directive| {
        let Some(resolved) = resolve_include_directive(&directive, scope.search_directories)
        else {
            trace!(
                include = %directive.included_file,
                from = %directive.including_file,
                line = directive.line_number,
                "Include unresolved"
            );
            unresolved.record(directive);
            return None;
        };

        let resolved = resolved.canonicalize();
        scope
            .indexed_roots
            .iter()
            .any(|root| root.contains(&resolved))
            .then_some(resolved)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directive(included: &str, including: &str, line: usize) -> IncludeDirective {
        IncludeDirective::new(included.into(), including.into(), line, false)
    }

    #[test]
    fn same_included_path_collapses_to_one_entry() {
        let mut unresolved = UnresolvedIncludes::new();
        unresolved.record(directive("missing.h", "/p/b.c", 4));
        unresolved.record(directive("missing.h", "/p/a.c", 9));
        unresolved.record(directive("missing.h", "/p/a.c", 2));

        let result = unresolved.into_sorted_vec();

        assert_eq!(result, vec![directive("missing.h", "/p/a.c", 2)]);
    }

    #[test]
    fn kept_entry_does_not_depend_on_insertion_order() {
        let entries = [
            directive("x.h", "/p/c.c", 1),
            directive("x.h", "/p/a.c", 5),
            directive("x.h", "/p/b.c", 3),
        ];
        let mut forward = UnresolvedIncludes::new();
        let mut backward = UnresolvedIncludes::new();
        for d in &entries {
            forward.record(d.clone());
        }
        for d in entries.iter().rev() {
            backward.record(d.clone());
        }

        assert_eq!(forward.into_sorted_vec(), backward.into_sorted_vec());
    }

    #[test]
    fn output_is_ordered_by_included_path() {
        let mut unresolved = UnresolvedIncludes::new();
        unresolved.record(directive("zlib.h", "/p/a.c", 1));
        unresolved.record(directive("a/b.h", "/p/a.c", 2));
        unresolved.record(directive("a-b.h", "/p/a.c", 3));

        let names: Vec<String> = unresolved
            .into_sorted_vec()
            .iter()
            .map(|d| d.included_file.to_string_lossy())
            .collect();

        assert_eq!(names, vec!["a-b.h", "a/b.h", "zlib.h"]);
    }
}
