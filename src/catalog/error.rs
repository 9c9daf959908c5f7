use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by the catalog store.
///
/// Unreadable, unwritable, or corrupted backing data all collapse into
/// `StorageUnavailable`: callers must treat them as a failed operation, never
/// as an empty catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog storage unavailable at {}: {reason}", path.display())]
    StorageUnavailable { path: PathBuf, reason: String },
}

impl CatalogError {
    pub fn unavailable(path: &Path, cause: impl std::fmt::Display) -> Self {
        Self::StorageUnavailable {
            path: path.to_path_buf(),
            reason: cause.to_string(),
        }
    }
}
