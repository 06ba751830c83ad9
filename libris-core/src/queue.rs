//! FIFO queue of pending book requests

use crate::types::{BookId, PendingRequest, UserId};
use std::collections::VecDeque;

/// Users waiting for unavailable books, in arrival order
#[derive(Debug, Clone, Default)]
pub struct RequestQueue {
    requests: VecDeque<PendingRequest>,
}

impl RequestQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request at the tail
    pub fn enqueue(&mut self, book_id: impl Into<BookId>, user_id: impl Into<UserId>) {
        self.requests.push_back(PendingRequest::new(book_id, user_id));
    }

    /// Remove the head request, if any
    ///
    /// Draining an empty queue is a no-op.
    pub fn dequeue(&mut self) -> Option<PendingRequest> {
        self.requests.pop_front()
    }

    /// Look at the head request without removing it
    pub fn peek_front(&self) -> Option<&PendingRequest> {
        self.requests.front()
    }

    /// Iterate from head to tail
    pub fn list(&self) -> impl Iterator<Item = &PendingRequest> + '_ {
        self.requests.iter()
    }

    /// Number of waiting requests
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether no one is waiting
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
