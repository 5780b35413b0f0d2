//! Top-level entry points for include processing.
//!
//! Both operations split the source files into round-robin batches, run each
//! batch through the shared traversal state, and report progress between
//! batches:
//!
//! ```text
//! progress(0/n) ─ batch 0 ─ progress(1/n) ─ batch 1 ─ … ─ batch n-1 ─ progress(1.0)
//! ```
//!
//! The visited set and the result accumulator live for the whole call, so
//! the batch count only changes how often progress is reported.

use std::collections::BTreeSet;
use std::time::Instant;

use tracing::{debug, info};

use crate::collector::{CollectorScope, UnresolvedIncludes, collect_unresolved_includes};
use crate::directive::IncludeDirective;
use crate::file_tree::FileTree;
use crate::inferencer::{InferenceScope, infer_search_directories};
use crate::path::FilePath;
use crate::quantile::split_to_quantiles;
use crate::text::{FileSystemSource, TextSource};
use crate::traversal::VisitedFiles;

/// Default number of progress batches.
pub const DEFAULT_QUANTILE_COUNT: usize = 10;

/// Runs include processing against a text source.
///
/// ```no_run
/// use std::collections::BTreeSet;
/// use include_scout::{FilePath, IncludeProcessor};
///
/// let sources: BTreeSet<FilePath> = [FilePath::from("/proj/src/main.cpp")].into();
/// let indexed: BTreeSet<FilePath> = [FilePath::from("/proj")].into();
///
/// let unresolved = IncludeProcessor::new().unresolved_include_directives(
///     &sources,
///     &indexed,
///     &BTreeSet::new(),
///     |fraction| eprintln!("{:.0}%", fraction * 100.0),
/// );
/// for directive in &unresolved {
///     println!("{directive}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct IncludeProcessor<S = FileSystemSource> {
    source: S,
    quantile_count: usize,
}

impl IncludeProcessor<FileSystemSource> {
    /// Create a processor that reads files from disk.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(FileSystemSource)
    }
}

impl Default for IncludeProcessor<FileSystemSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TextSource> IncludeProcessor<S> {
    /// Create a processor that reads files through `source`.
    #[must_use]
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            quantile_count: DEFAULT_QUANTILE_COUNT,
        }
    }

    /// Set the desired number of progress batches.
    #[must_use]
    pub fn quantile_count(mut self, count: usize) -> Self {
        self.quantile_count = count;
        self
    }

    /// The text source files are read through.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Find every include directive, in `source_files` and the indexed files
    /// they transitively include, that resolves to no file.
    ///
    /// Only includes resolving below one of `indexed_paths` are followed.
    /// The result holds one directive per distinct included path, ordered by
    /// that path.
    pub fn unresolved_include_directives(
        &self,
        source_files: &BTreeSet<FilePath>,
        indexed_paths: &BTreeSet<FilePath>,
        header_search_directories: &BTreeSet<FilePath>,
        mut progress: impl FnMut(f32),
    ) -> Vec<IncludeDirective> {
        let start = Instant::now();
        let indexed_roots: Vec<FilePath> = indexed_paths.iter().map(FilePath::canonicalize).collect();
        let scope = CollectorScope {
            indexed_roots: &indexed_roots,
            search_directories: header_search_directories,
        };

        let mut visited = VisitedFiles::new();
        let mut unresolved = UnresolvedIncludes::new();
        let quantiles = split_to_quantiles(source_files, self.quantile_count);

        for (i, quantile) in quantiles.iter().enumerate() {
            progress(fraction(i, quantiles.len()));
            collect_unresolved_includes(quantile, &scope, &mut visited, &self.source, &mut unresolved);
            debug!(
                quantile = i,
                files_scanned = visited.scanned_count(),
                unresolved = unresolved.count(),
                "Quantile processed"
            );
        }

        progress(1.0);
        info!(
            source_files = source_files.len(),
            files_scanned = visited.scanned_count(),
            unresolved = unresolved.count(),
            duration = ?start.elapsed(),
            "Unresolved include search completed"
        );

        unresolved.into_sorted_vec()
    }

    /// Infer header search directories that would resolve includes the
    /// current directories cannot.
    ///
    /// Each of `searched_paths` is indexed as a candidate tree. An include
    /// that fails every tier against `current_header_search_directories` is
    /// looked up in the trees in order, and the directory of the first match
    /// is added to the result. Resolved includes are followed wherever they
    /// live.
    pub fn header_search_directories(
        &self,
        source_files: &BTreeSet<FilePath>,
        searched_paths: &BTreeSet<FilePath>,
        current_header_search_directories: &BTreeSet<FilePath>,
        mut progress: impl FnMut(f32),
    ) -> BTreeSet<FilePath> {
        progress(0.0);

        let start = Instant::now();
        let trees: Vec<FileTree> = searched_paths.iter().map(FileTree::new).collect();
        let scope = InferenceScope {
            trees: &trees,
            current_search_directories: current_header_search_directories,
        };

        let mut visited = VisitedFiles::new();
        let mut inferred = BTreeSet::new();
        let quantiles = split_to_quantiles(source_files, self.quantile_count);

        for (i, quantile) in quantiles.iter().enumerate() {
            progress(fraction(i, quantiles.len()));
            infer_search_directories(quantile, &scope, &mut visited, &self.source, &mut inferred);
            debug!(
                quantile = i,
                files_scanned = visited.scanned_count(),
                inferred = inferred.len(),
                "Quantile processed"
            );
        }

        progress(1.0);
        info!(
            source_files = source_files.len(),
            candidate_trees = trees.len(),
            files_scanned = visited.scanned_count(),
            inferred = inferred.len(),
            duration = ?start.elapsed(),
            "Header search directory inference completed"
        );

        inferred
    }
}

/// Find unresolved include directives, reading files from disk.
///
/// See [`IncludeProcessor::unresolved_include_directives`].
pub fn unresolved_include_directives(
    source_files: &BTreeSet<FilePath>,
    indexed_paths: &BTreeSet<FilePath>,
    header_search_directories: &BTreeSet<FilePath>,
    desired_quantile_count: usize,
    progress: impl FnMut(f32),
) -> Vec<IncludeDirective> {
    IncludeProcessor::new()
        .quantile_count(desired_quantile_count)
        .unresolved_include_directives(source_files, indexed_paths, header_search_directories, progress)
}

/// Infer header search directories, reading files from disk.
///
/// See [`IncludeProcessor::header_search_directories`].
pub fn header_search_directories(
    source_files: &BTreeSet<FilePath>,
    searched_paths: &BTreeSet<FilePath>,
    current_header_search_directories: &BTreeSet<FilePath>,
    desired_quantile_count: usize,
    progress: impl FnMut(f32),
) -> BTreeSet<FilePath> {
    IncludeProcessor::new()
        .quantile_count(desired_quantile_count)
        .header_search_directories(
            source_files,
            searched_paths,
            current_header_search_directories,
            progress,
        )
}

#[allow(clippy::cast_precision_loss)] // batch counts are far below f32 precision limits
fn fraction(done: usize, total: usize) -> f32 {
    done as f32 / total as f32
}
