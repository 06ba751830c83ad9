//! Pending request record

use super::{BookId, UserId};
use serde::{Deserialize, Serialize};

/// A user waiting for a specific book to come back
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingRequest {
    /// The requested book
    pub book_id: BookId,

    /// The waiting user
    pub user_id: UserId,
}

impl PendingRequest {
    /// Create a new pending request
    pub fn new(book_id: impl Into<BookId>, user_id: impl Into<UserId>) -> Self {
        Self {
            book_id: book_id.into(),
            user_id: user_id.into(),
        }
    }
}
