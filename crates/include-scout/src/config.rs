//! Configuration file handling.
//!
//! A project describes its layout in `include-scout.yaml`:
//!
//! ```yaml
//! source-roots: [src]
//! indexed-paths: [.]
//! header-search-directories: [include]
//! candidate-trees: [third_party]
//! quantiles: 10
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::discovery::{DEFAULT_EXTENSIONS, discover_source_files};
use crate::error::{Error, Result};
use crate::path::FilePath;
use crate::processing::DEFAULT_QUANTILE_COUNT;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "include-scout.yaml";

/// Project layout for include processing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Directories walked for source files
    pub source_roots: Vec<PathBuf>,
    /// Individual source files, in addition to those found under the roots
    pub source_files: Vec<PathBuf>,
    /// File extensions (without dot) that count as sources
    pub extensions: Vec<String>,
    /// Roots whose files are followed when resolving includes transitively
    pub indexed_paths: Vec<PathBuf>,
    /// Directories already passed to the compiler as search paths
    pub header_search_directories: Vec<PathBuf>,
    /// Directory trees probed when inferring new search directories
    pub candidate_trees: Vec<PathBuf>,
    /// Number of progress batches
    pub quantiles: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_roots: Vec::new(),
            source_files: Vec::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            indexed_paths: Vec::new(),
            header_search_directories: Vec::new(),
            candidate_trees: Vec::new(),
            quantiles: DEFAULT_QUANTILE_COUNT,
        }
    }
}

impl ScanConfig {
    /// Configuration for a project rooted at `.`: sources under `src`,
    /// everything indexed, no search directories yet.
    #[must_use]
    pub fn starter() -> Self {
        Self {
            source_roots: vec![PathBuf::from("src")],
            indexed_paths: vec![PathBuf::from(".")],
            candidate_trees: vec![PathBuf::from(".")],
            ..Self::default()
        }
    }

    /// Load a configuration file and resolve its paths against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Self = serde_yaml::from_str(&content)?;

        let base = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        config.resolve_relative_to(&base);
        config.validate()?;

        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Write the configuration as YAML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings no run could use.
    pub fn validate(&self) -> Result<()> {
        if self.quantiles == 0 {
            return Err(Error::Config("quantiles must be at least 1".to_string()));
        }
        if self.extensions.iter().any(|e| e.trim_start_matches('.').is_empty()) {
            return Err(Error::Config("extensions must not be empty".to_string()));
        }
        Ok(())
    }

    /// Make every relative path absolute against `base`.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        for list in [
            &mut self.source_roots,
            &mut self.source_files,
            &mut self.indexed_paths,
            &mut self.header_search_directories,
            &mut self.candidate_trees,
        ] {
            for path in list.iter_mut() {
                if path.is_relative() {
                    *path = FilePath::new(base.join(&*path))
                        .absolute()
                        .normalized()
                        .into_path_buf();
                }
            }
        }
    }

    /// Explicit source files plus everything discovered under the roots.
    #[must_use]
    pub fn collect_source_files(&self) -> BTreeSet<FilePath> {
        let mut files = discover_source_files(&to_set(&self.source_roots), &self.extensions);
        files.extend(self.source_files.iter().map(|p| FilePath::new(p.clone())));
        files
    }

    /// The indexed paths as a set.
    #[must_use]
    pub fn indexed_paths(&self) -> BTreeSet<FilePath> {
        to_set(&self.indexed_paths)
    }

    /// The configured search directories as a set.
    #[must_use]
    pub fn header_search_directories(&self) -> BTreeSet<FilePath> {
        to_set(&self.header_search_directories)
    }

    /// The candidate tree roots as a set.
    #[must_use]
    pub fn candidate_trees(&self) -> BTreeSet<FilePath> {
        to_set(&self.candidate_trees)
    }
}

fn to_set(paths: &[PathBuf]) -> BTreeSet<FilePath> {
    paths.iter().map(|p| FilePath::new(p.clone())).collect()
}
