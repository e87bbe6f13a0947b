//! Content loaders for reading roster data from files.
//!
//! These loaders convert RON files into roster-core records, letting a
//! deployment supply its own roster or series table instead of the built-in
//! ones. The data shape is the contract; where it comes from is not.

pub mod roster;
pub mod series;

pub use roster::RosterLoader;
pub use series::SeriesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
