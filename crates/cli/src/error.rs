//! CLI error type.

use clothing_co_core::{StorageError, UnknownCategory};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the storage file or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The storage backend rejected a write.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A category filter named no known category.
    #[error("{0}. Valid categories: all, tops, bottoms, outerwear")]
    UnknownCategory(#[from] UnknownCategory),

    /// A bounding box with no area.
    #[error("Invalid card size: width and height must be positive")]
    InvalidCardSize,
}
