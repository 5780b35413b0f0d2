//! Shared utilities for include-scout benchmarks.

// Benchmark utilities - pedantic lints not critical here
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use include_scout::FilePath;
use tempfile::TempDir;

/// A generated C project on disk.
pub struct GeneratedProject {
    /// Temp directory - must be kept alive for the duration of the benchmark.
    pub dir: TempDir,
    /// Canonical project root.
    pub root: PathBuf,
    /// Every `.c` file of the project.
    pub sources: BTreeSet<FilePath>,
}

impl GeneratedProject {
    /// Absolute path of a project-relative path.
    pub fn path(&self, rel: &str) -> FilePath {
        FilePath::new(self.root.join(rel))
    }
}

/// Create a project with `modules` source/header pairs.
///
/// Each header includes the previous module's header, a shared header, one
/// vendor header found only under `vendor/`, and one header that exists
/// nowhere. Each source file includes its own header.
pub fn create_project(modules: usize) -> GeneratedProject {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let root = fs::canonicalize(dir.path()).expect("failed to canonicalize temp dir");
    let mut files: Vec<(String, String)> = Vec::new();

    files.push(("include/shared.h".to_string(), "#pragma once\n".to_string()));
    for i in 0..modules {
        let mut header = String::from("#pragma once\n#include <shared.h>\n");
        if i > 0 {
            header.push_str(&format!("#include \"module{}.h\"\n", i - 1));
        }
        header.push_str(&format!("#include <vendor{}/api.h>\n", i % 8));
        header.push_str(&format!("#include \"generated/missing{}.h\"\n", i % 16));

        files.push((format!("src/module{i}.h"), header));
        files.push((
            format!("src/module{i}.c"),
            format!("#include \"module{i}.h\"\n\nint module{i}(void) {{ return {i}; }}\n"),
        ));
    }
    for v in 0..8 {
        files.push((format!("vendor/lib{v}/include/vendor{v}/api.h"), String::new()));
    }

    for (path, content) in &files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("failed to write file");
    }

    let sources = (0..modules)
        .map(|i| FilePath::new(root.join(format!("src/module{i}.c"))))
        .collect();

    GeneratedProject { dir, root, sources }
}
