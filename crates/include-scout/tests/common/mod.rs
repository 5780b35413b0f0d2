//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use include_scout::FilePath;
use tempfile::TempDir;

/// A temporary project tree with a canonical root.
pub struct Project {
    /// Keeps the directory alive for the duration of the test
    pub dir: TempDir,
    /// Canonical path of the tree root
    pub root: PathBuf,
}

impl Project {
    /// Absolute (canonical-root) path of a file in the tree.
    pub fn path(&self, rel: &str) -> FilePath {
        FilePath::new(self.root.join(rel))
    }

    /// Set of paths in the tree.
    pub fn paths(&self, rels: &[&str]) -> BTreeSet<FilePath> {
        rels.iter().map(|rel| self.path(rel)).collect()
    }

    /// Write (or overwrite) a file in the tree.
    pub fn write(&self, rel: &str, content: &str) {
        let full_path = self.root.join(rel);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("should create parent dirs");
        }
        fs::write(&full_path, content).expect("should write file");
    }
}

/// Create a temporary project with the given files.
pub fn project_with_files(files: &[(&str, &str)]) -> Project {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let root = fs::canonicalize(dir.path()).expect("should canonicalize temp dir");
    let project = Project { dir, root };

    for (path, content) in files {
        project.write(path, content);
    }

    project
}

/// Names of the included files of a directive list, in order.
pub fn included_names(directives: &[include_scout::IncludeDirective]) -> Vec<String> {
    directives
        .iter()
        .map(|d| d.included_file.to_string_lossy())
        .collect()
}
