//! Round-robin batching of source files for progress reporting.
//!
//! Batches only control how often progress is reported. Traversal state is
//! shared across batches, so the batch count never changes a result.

use std::collections::BTreeSet;

use crate::path::FilePath;

/// Split `files` into `max(1, min(desired, files.len()))` round-robin groups.
///
/// The i-th file in set order goes to group `i % count`. An empty input
/// yields a single empty group so callers still get one progress step.
#[must_use]
pub fn split_to_quantiles(files: &BTreeSet<FilePath>, desired: usize) -> Vec<Vec<FilePath>> {
    let count = desired.min(files.len()).max(1);

    let mut quantiles = vec![Vec::new(); count];
    for (i, file) in files.iter().enumerate() {
        quantiles[i % count].push(file.clone());
    }
    quantiles
}
