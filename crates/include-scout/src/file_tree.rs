//! Directory-tree index for inferring header search directories.
//!
//! A `FileTree` answers one question: "below which directory of this tree
//! does the relative path `x/y.h` exist?" That directory is a candidate
//! search directory for an include that could not be resolved otherwise.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::{Component, PathBuf};

use tracing::{debug, warn};

use crate::path::FilePath;
use crate::walk::DirWalker;

/// Every file below a root directory, indexed by file name.
#[derive(Debug)]
pub struct FileTree {
    root: FilePath,
    files_by_name: HashMap<OsString, Vec<FilePath>>,
}

impl FileTree {
    /// Index all files below `root`.
    ///
    /// The root is canonicalized first. A root that does not exist or cannot
    /// be read yields an empty tree.
    #[must_use]
    pub fn new(root: &FilePath) -> Self {
        let root = root.canonicalize();
        let mut files_by_name: HashMap<OsString, Vec<FilePath>> = HashMap::new();

        if root.as_path().is_dir() {
            let output = DirWalker::new().walk(root.as_path());
            for file in output.files {
                if let Some(name) = file.file_name() {
                    files_by_name
                        .entry(name.to_os_string())
                        .or_default()
                        .push(FilePath::new(file));
                }
            }
        } else {
            warn!(root = %root, "Candidate tree root is not a directory, ignoring");
        }

        for candidates in files_by_name.values_mut() {
            candidates.sort();
        }

        debug!(
            root = %root,
            distinct_names = files_by_name.len(),
            "Indexed file tree"
        );

        Self {
            root,
            files_by_name,
        }
    }

    /// The canonical root directory of the tree.
    #[must_use]
    pub fn root(&self) -> &FilePath {
        &self.root
    }

    /// Number of files indexed.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files_by_name.values().map(Vec::len).sum()
    }

    /// Find the directory `R` in this tree such that `R/relative` is a file.
    ///
    /// When several directories qualify, the one whose matching file sorts
    /// first wins. Absolute paths and paths containing `..` never match.
    #[must_use]
    pub fn root_for_relative_path(&self, relative: &FilePath) -> Option<FilePath> {
        let wanted = normal_components(relative)?;
        let name = *wanted.last()?;

        self.files_by_name
            .get(name)?
            .iter()
            .find_map(|candidate| self.strip_suffix(candidate, &wanted))
    }

    /// `candidate` with the trailing `suffix` components removed, if it ends
    /// with them and what remains is still inside the tree.
    fn strip_suffix(&self, candidate: &FilePath, suffix: &[&OsStr]) -> Option<FilePath> {
        let components: Vec<Component<'_>> = candidate.as_path().components().collect();
        let keep = components.len().checked_sub(suffix.len())?;

        let matches = components[keep..]
            .iter()
            .zip(suffix)
            .all(|(component, wanted)| component.as_os_str() == *wanted);
        if !matches {
            return None;
        }

        let root = FilePath::new(components[..keep].iter().collect::<PathBuf>());
        self.root.contains(&root).then_some(root)
    }
}

/// The normal components of a relative path, or `None` if it has a root,
/// climbs with `..`, or is empty.
fn normal_components(path: &FilePath) -> Option<Vec<&OsStr>> {
    let mut components = Vec::new();
    for component in path.as_path().components() {
        match component {
            Component::Normal(part) => components.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    (!components.is_empty()).then_some(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn create_tree(files: &[&str]) -> (TempDir, FileTree) {
        let dir = tempfile::tempdir().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        let tree = FileTree::new(&FilePath::new(dir.path()));
        (dir, tree)
    }

    fn canonical(dir: &TempDir, rel: &str) -> FilePath {
        FilePath::new(fs::canonicalize(dir.path()).unwrap()).concatenate(&FilePath::from(rel))
    }

    #[test]
    fn finds_root_for_nested_relative_path() {
        let (dir, tree) = create_tree(&["proj/sub/b.h", "proj/a.h"]);

        let root = tree.root_for_relative_path(&FilePath::from("sub/b.h"));

        assert_eq!(root, Some(canonical(&dir, "proj")));
    }

    #[test]
    fn bare_file_name_maps_to_its_directory() {
        let (dir, tree) = create_tree(&["third_party/zlib/include/zlib.h"]);

        let root = tree.root_for_relative_path(&FilePath::from("zlib.h"));

        assert_eq!(root, Some(canonical(&dir, "third_party/zlib/include")));
    }

    #[test]
    fn tree_root_itself_can_be_the_answer() {
        let (dir, tree) = create_tree(&["b.h"]);

        let root = tree.root_for_relative_path(&FilePath::from("./b.h"));

        assert_eq!(root, Some(canonical(&dir, "")));
        assert_eq!(root.as_ref(), Some(tree.root()));
    }

    #[test]
    fn first_candidate_in_path_order_wins() {
        let (dir, tree) = create_tree(&["zeta/util/log.h", "alpha/util/log.h"]);

        let root = tree.root_for_relative_path(&FilePath::from("util/log.h"));

        assert_eq!(root, Some(canonical(&dir, "alpha")));
    }

    #[test]
    fn suffix_must_match_whole_components() {
        let (_dir, tree) = create_tree(&["proj/mysub/b.h"]);

        assert_eq!(tree.root_for_relative_path(&FilePath::from("sub/b.h")), None);
    }

    #[test]
    fn path_longer_than_tree_does_not_escape_root() {
        let (dir, tree) = create_tree(&["b.h"]);
        let parent_name = fs::canonicalize(dir.path())
            .unwrap()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();

        let escaped = tree.root_for_relative_path(&FilePath::new(format!("{parent_name}/b.h")));

        assert_eq!(escaped, None);
    }

    #[rstest]
    #[case::parent_dir("../b.h")]
    #[case::absolute("/b.h")]
    #[case::empty("")]
    fn unsupported_relative_paths_never_match(#[case] rel: &str) {
        let (_dir, tree) = create_tree(&["b.h", "x/b.h"]);

        assert_eq!(tree.root_for_relative_path(&FilePath::from(rel)), None);
    }

    #[test]
    fn missing_root_yields_empty_tree() {
        let dir = tempfile::tempdir().unwrap();
        let tree = FileTree::new(&FilePath::new(dir.path().join("missing")));

        assert_eq!(tree.file_count(), 0);
        assert_eq!(tree.root_for_relative_path(&FilePath::from("a.h")), None);
    }
}
