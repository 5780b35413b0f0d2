//! Project options shared by the scanning commands.

use std::path::{Path, PathBuf};

use clap::Args;
use include_scout::{CONFIG_FILE_NAME, Error, ScanConfig};
use tracing::debug;

/// Paths given on the command line, added to those from the config file.
#[derive(Debug, Args)]
pub struct ProjectOptions {
    /// Directory to search for source files (repeatable)
    #[arg(short = 's', long = "source-root", global = true)]
    source_roots: Vec<PathBuf>,

    /// Individual source file (repeatable)
    #[arg(long = "source", global = true)]
    source_files: Vec<PathBuf>,

    /// Root whose files are followed transitively (repeatable)
    #[arg(long = "indexed", global = true)]
    indexed_paths: Vec<PathBuf>,

    /// Known header search directory (repeatable)
    #[arg(short = 'I', long = "include-dir", global = true)]
    header_search_directories: Vec<PathBuf>,

    /// Directory tree probed when inferring search directories (repeatable)
    #[arg(short = 't', long = "tree", global = true)]
    candidate_trees: Vec<PathBuf>,

    /// Number of progress batches
    #[arg(short, long, global = true)]
    quantiles: Option<usize>,
}

impl ProjectOptions {
    /// Load the configuration file (if any) and merge the command-line paths.
    ///
    /// Without an explicit `--config`, `./include-scout.yaml` is used when it
    /// exists. When neither the file nor the flags name any indexed path, the
    /// source roots are indexed.
    pub fn load(&self, config_path: Option<&Path>) -> Result<ScanConfig, Error> {
        let mut config = match config_path {
            Some(path) => ScanConfig::load(path)?,
            None if Path::new(CONFIG_FILE_NAME).is_file() => {
                ScanConfig::load(Path::new(CONFIG_FILE_NAME))?
            }
            None => ScanConfig::default(),
        };

        let mut extra = ScanConfig {
            source_roots: self.source_roots.clone(),
            source_files: self.source_files.clone(),
            indexed_paths: self.indexed_paths.clone(),
            header_search_directories: self.header_search_directories.clone(),
            candidate_trees: self.candidate_trees.clone(),
            ..ScanConfig::default()
        };
        extra.resolve_relative_to(&std::env::current_dir()?);

        config.source_roots.extend(extra.source_roots);
        config.source_files.extend(extra.source_files);
        config.indexed_paths.extend(extra.indexed_paths);
        config
            .header_search_directories
            .extend(extra.header_search_directories);
        config.candidate_trees.extend(extra.candidate_trees);
        if let Some(quantiles) = self.quantiles {
            config.quantiles = quantiles;
        }

        if config.indexed_paths.is_empty() {
            config.indexed_paths.clone_from(&config.source_roots);
        }

        for root in config.source_roots.iter().chain(&config.candidate_trees) {
            if !root.is_dir() {
                return Err(Error::invalid_path(root.clone(), "not a directory"));
            }
        }

        config.validate()?;
        debug!(?config, "Effective configuration");
        Ok(config)
    }
}
