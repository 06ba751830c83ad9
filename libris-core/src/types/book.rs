//! The Book record held by the catalog

use super::BookId;
use serde::{Deserialize, Serialize};

/// A single catalog entry
///
/// The catalog tracks one copy per entry, so `available` is the whole lending state:
/// `true` while nobody holds the book, `false` once it has been issued.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Caller-assigned identifier (not guaranteed unique)
    pub id: BookId,

    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Whether the book is on the shelf
    pub available: bool,
}

impl Book {
    /// Create a new, available book
    pub fn new(id: impl Into<BookId>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            available: true,
        }
    }

    /// Human-readable lending status
    pub fn status(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Issued"
        }
    }
}
