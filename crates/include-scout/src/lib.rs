//! # Include Scout: include-dependency discovery for C and C++ projects
//!
//! Before a source indexer hands files to a compiler frontend it needs to
//! know whether the configured header search paths are complete. Include
//! Scout answers two questions without running a compiler:
//!
//! - **Which `#include` directives resolve to no file?**
//!   ([`IncludeProcessor::unresolved_include_directives`])
//! - **Which directories would make more of them resolvable?**
//!   ([`IncludeProcessor::header_search_directories`])
//!
//! ## How includes are resolved
//!
//! Directives are found by a lexical scan (see [`scan_include_directives`]),
//! not by a preprocessor. Each directive is resolved in three tiers: an
//! existing absolute path, then a path relative to the including file, then
//! the first search directory that contains it. Resolved files are scanned
//! in turn, each file at most once per call.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::collections::BTreeSet;
//! use include_scout::{FilePath, IncludeProcessor};
//!
//! let sources: BTreeSet<FilePath> = [FilePath::from("/proj/src/main.cpp")].into();
//! let indexed: BTreeSet<FilePath> = [FilePath::from("/proj")].into();
//! let trees: BTreeSet<FilePath> = [FilePath::from("/proj/third_party")].into();
//! let processor = IncludeProcessor::new().quantile_count(20);
//!
//! let missing = processor.unresolved_include_directives(&sources, &indexed, &BTreeSet::new(), |_| {});
//! println!("{} unresolved includes", missing.len());
//!
//! let inferred = processor.header_search_directories(&sources, &trees, &BTreeSet::new(), |_| {});
//! for dir in &inferred {
//!     println!("-I{dir}");
//! }
//! ```

mod args;
mod collector;
mod config;
mod directive;
mod discovery;
mod error;
mod file_tree;
mod inferencer;
mod path;
mod processing;
mod quantile;
mod resolver;
mod scanner;
mod text;
mod traversal;
mod walk;

pub use args::{SearchDirectoryKind, search_directory_args};
pub use config::{CONFIG_FILE_NAME, ScanConfig};
pub use directive::IncludeDirective;
pub use discovery::{DEFAULT_EXTENSIONS, discover_source_files};
pub use error::{Error, Result};
pub use file_tree::FileTree;
pub use path::FilePath;
pub use processing::{
    DEFAULT_QUANTILE_COUNT, IncludeProcessor, header_search_directories,
    unresolved_include_directives,
};
pub use quantile::split_to_quantiles;
pub use resolver::resolve_include_directive;
pub use scanner::{include_directives, scan_include_directives};
pub use text::{FileSystemSource, TextSource};
