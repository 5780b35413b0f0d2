//! Recursive directory walking shared by file discovery and tree indexing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Files found by a walk, plus the directories that could not be read.
#[derive(Debug, Default)]
pub struct WalkOutput {
    /// Every regular file (or symlink to one) below the root
    pub files: Vec<PathBuf>,
    /// Directories that could not be read, with the reason
    pub directories_skipped: Vec<(PathBuf, String)>,
}

/// Walks a directory tree.
///
/// Hidden entries (names starting with `.`) are always skipped. Symlinks to
/// files are reported; symlinks to directories are not followed, which keeps
/// link cycles from recursing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirWalker {
    skip_build_dirs: bool,
}

impl DirWalker {
    /// Create a walker that descends into every non-hidden directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also skip common build and dependency output directories.
    #[must_use]
    pub fn skip_build_dirs(mut self, skip: bool) -> Self {
        self.skip_build_dirs = skip;
        self
    }

    /// Walk `root` and collect its files.
    #[must_use]
    pub fn walk(&self, root: &Path) -> WalkOutput {
        let mut output = WalkOutput::default();
        self.walk_dir(root, &mut output);
        output
    }

    fn walk_dir(&self, dir: &Path, output: &mut WalkOutput) {
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    directory = %dir.display(),
                    error = %e,
                    "Cannot read directory, skipping"
                );
                output
                    .directories_skipped
                    .push((dir.to_path_buf(), e.to_string()));
                return;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!(
                        directory = %dir.display(),
                        error = %e,
                        "Failed to read directory entry, skipping"
                    );
                    continue;
                }
            };

            let path = entry.path();

            if let Some(name) = path.file_name().and_then(|n| n.to_str())
                && (name.starts_with('.') || (self.skip_build_dirs && is_build_dir(name)))
            {
                continue;
            }

            let Ok(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                self.walk_dir(&path, output);
            } else if file_type.is_file() {
                output.files.push(path);
            } else if file_type.is_symlink() {
                if path.is_file() {
                    output.files.push(path);
                } else {
                    debug!(path = %path.display(), "Not following symlink");
                }
            }
        }
    }
}

/// Directories that hold build output or fetched dependencies.
fn is_build_dir(name: &str) -> bool {
    matches!(
        name,
        "target" | "node_modules" | "build" | "out" | "dist" | "bin" | "obj" | "__pycache__"
    )
}
