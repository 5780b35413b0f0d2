//! Inference of header search directories from candidate directory trees.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::file_tree::FileTree;
use crate::path::FilePath;
use crate::resolver::resolve_include_directive;
use crate::text::TextSource;
use crate::traversal::{VisitedFiles, walk_includes};

/// Inputs that stay fixed for a whole inference call.
#[derive(Debug)]
pub struct InferenceScope<'a> {
    /// Indexed candidate trees, probed in order
    pub trees: &'a [FileTree],
    /// Search directories already known to the caller
    pub current_search_directories: &'a BTreeSet<FilePath>,
}

/// Scan one batch of files and everything they transitively include,
/// collecting the tree directories that make otherwise unresolvable
/// includes resolvable.
///
/// Every resolved include is followed, wherever it lives.
pub fn infer_search_directories(
    batch: &[FilePath],
    scope: &InferenceScope<'_>,
    visited: &mut VisitedFiles,
    source: &dyn TextSource,
    inferred: &mut BTreeSet<FilePath>,
) {
    walk_includes(batch, visited, source, |directive| {
        let found = resolve_include_directive(&directive, scope.current_search_directories)
            .or_else(|| probe_trees(&directive.included_file, scope.trees, inferred));

        if found.is_none() {
            trace!(
                include = %directive.included_file,
                from = %directive.including_file,
                "No candidate tree provides include"
            );
        }
        found.map(|path| path.canonicalize())
    });
}

/// Ask each tree, in order, for a directory below which `included` exists.
///
/// The first tree with an existing match wins and its directory is added to
/// `inferred`. A file reachable from two trees is attributed to the first.
fn probe_trees(
    included: &FilePath,
    trees: &[FileTree],
    inferred: &mut BTreeSet<FilePath>,
) -> Option<FilePath> {
    trees.iter().find_map(|tree| {
        let root = tree.root_for_relative_path(included)?;
        let candidate = root.concatenate(included);
        if !candidate.exists() {
            return None;
        }
        if inferred.insert(root.clone()) {
            debug!(directory = %root, include = %included, "Inferred header search directory");
        }
        Some(candidate)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn first_tree_wins_when_both_provide_the_file() {
        let dir = tempfile::tempdir().unwrap();
        for rel in ["first/lib/x.h", "second/lib/x.h"] {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        let base = FilePath::new(fs::canonicalize(dir.path()).unwrap());
        let trees = vec![
            FileTree::new(&base.concatenate(&"first".into())),
            FileTree::new(&base.concatenate(&"second".into())),
        ];
        let mut inferred = BTreeSet::new();

        let found = probe_trees(&"lib/x.h".into(), &trees, &mut inferred);

        assert_eq!(found, Some(base.concatenate(&"first/lib/x.h".into())));
        assert_eq!(inferred, BTreeSet::from([base.concatenate(&"first".into())]));
    }

    #[test]
    fn no_tree_match_leaves_inferred_untouched() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("other.h"), "").unwrap();
        let trees = vec![FileTree::new(&FilePath::new(dir.path()))];
        let mut inferred = BTreeSet::new();

        assert_eq!(probe_trees(&"missing.h".into(), &trees, &mut inferred), None);
        assert!(inferred.is_empty());
    }
}
