//! Error types for Libris Core

use crate::types::BookId;
use thiserror::Error;

/// Result type alias using LibraryError
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Errors reported by lending operations
///
/// Empty collections are not errors: popping the return backlog or draining the
/// request queue when nothing is there simply yields `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("Book not found: {0}")]
    BookNotFound(BookId),
}
