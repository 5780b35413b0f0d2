//! Source file discovery.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::path::FilePath;
use crate::walk::DirWalker;

/// Extensions treated as C, C++ and Objective-C sources and headers.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "c", "cc", "cpp", "cxx", "c++", "m", "mm", "h", "hh", "hpp", "hxx", "h++", "inl", "ipp", "tpp",
];

/// Collect every file below `roots` whose extension is in `extensions`.
///
/// Extensions are compared case-insensitively and without the leading dot.
/// Hidden directories and common build output directories are skipped.
#[must_use]
pub fn discover_source_files<S: AsRef<str>>(
    roots: &BTreeSet<FilePath>,
    extensions: &[S],
) -> BTreeSet<FilePath> {
    let extensions: BTreeSet<String> = extensions
        .iter()
        .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
        .collect();
    let walker = DirWalker::new().skip_build_dirs(true);

    let mut files = BTreeSet::new();
    for root in roots {
        let output = walker.walk(root.as_path());
        let before = files.len();
        files.extend(
            output
                .files
                .into_iter()
                .filter(|path| {
                    path.extension()
                        .and_then(|e| e.to_str())
                        .is_some_and(|e| extensions.contains(&e.to_ascii_lowercase()))
                })
                .map(FilePath::new),
        );
        debug!(
            root = %root,
            found = files.len() - before,
            directories_skipped = output.directories_skipped.len(),
            "Discovered source files"
        );
    }

    info!(count = files.len(), "Found source files");
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn keeps_only_matching_extensions() {
        let dir = tempfile::tempdir().unwrap();
        for rel in ["src/main.cpp", "src/util.H", "src/notes.txt", "build/gen.c", "include/a.hpp"] {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        let roots = BTreeSet::from([FilePath::new(dir.path())]);

        let files = discover_source_files(&roots, DEFAULT_EXTENSIONS);

        let names: Vec<String> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.hpp", "main.cpp", "util.H"]);
    }

    #[test]
    fn dotted_extensions_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("x.c"), "").unwrap();
        fs::write(dir.path().join("y.h"), "").unwrap();
        let roots = BTreeSet::from([FilePath::new(dir.path())]);

        let files = discover_source_files(&roots, &[".c"]);

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn missing_root_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let roots = BTreeSet::from([FilePath::new(dir.path().join("missing"))]);

        assert!(discover_source_files(&roots, DEFAULT_EXTENSIONS).is_empty());
    }
}
