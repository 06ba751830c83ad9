//! Lending coordinator
//!
//! Ties the catalog, the request queue and the return backlog together. Issuing a book
//! either hands it out or queues the user; returns are only recorded until
//! [`LendingCoordinator::process_returns`] reconciles them against the catalog and the
//! front of the request queue.

use crate::backlog::ReturnBacklog;
use crate::catalog::Catalog;
use crate::error::{LibraryError, Result};
use crate::queue::RequestQueue;
use crate::types::{Book, BookId, PendingRequest, UserId};
use serde::Serialize;
use tracing::{debug, warn};

/// Result of a successful issue request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum IssueOutcome {
    /// The book was on the shelf and is now held by the user
    Issued { book_id: BookId, user_id: UserId },

    /// The book was out; the user joined the waiting queue at `position` (1-based)
    Queued {
        book_id: BookId,
        user_id: UserId,
        position: usize,
    },
}

/// What happened to one backlog entry during return processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReturnOutcome {
    /// The book was marked available, and handed straight on if the request at the
    /// queue front was waiting for it
    Restored {
        book_id: BookId,
        title: String,
        handed_to: Option<UserId>,
    },

    /// The returned id does not match any catalog entry
    NotFound { book_id: BookId },
}

/// Session state: the three lending collections and the transitions between them
#[derive(Debug, Clone, Default)]
pub struct LendingCoordinator {
    catalog: Catalog,
    queue: RequestQueue,
    backlog: ReturnBacklog,
}

impl LendingCoordinator {
    /// Create a coordinator with empty collections
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book to the end of the catalog
    pub fn add_book(
        &mut self,
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> &Book {
        let book = self.catalog.add(id, title, author);
        debug!(book_id = %book.id, title = %book.title, "book added");
        book
    }

    /// Issue a book to a user, or queue the user if it is already out
    pub fn issue(&mut self, book_id: BookId, user_id: UserId) -> Result<IssueOutcome> {
        let book = self
            .catalog
            .find_by_id_mut(book_id)
            .ok_or(LibraryError::BookNotFound(book_id))?;

        if book.available {
            book.available = false;
            debug!(%book_id, %user_id, "book issued");
            Ok(IssueOutcome::Issued { book_id, user_id })
        } else {
            self.queue.enqueue(book_id, user_id);
            let position = self.queue.len();
            debug!(%book_id, %user_id, position, "request queued");
            Ok(IssueOutcome::Queued {
                book_id,
                user_id,
                position,
            })
        }
    }

    /// Record a returned book for later processing
    ///
    /// The catalog is not touched until [`process_returns`](Self::process_returns) runs.
    /// Returns the number of returns now pending.
    pub fn return_book(&mut self, book_id: BookId) -> usize {
        self.backlog.push(book_id);
        debug!(%book_id, pending = self.backlog.len(), "return recorded");
        self.backlog.len()
    }

    /// Drain the return backlog, most recent return first
    ///
    /// Each returned book becomes available. Only the request at the very front of the
    /// queue is considered for an immediate hand-over; matching requests further back
    /// keep waiting. An empty result means there was nothing to process.
    pub fn process_returns(&mut self) -> Vec<ReturnOutcome> {
        let mut outcomes = Vec::with_capacity(self.backlog.len());

        while let Some(book_id) = self.backlog.pop() {
            let Some(book) = self.catalog.find_by_id_mut(book_id) else {
                warn!(%book_id, "returned book is not in the catalog");
                outcomes.push(ReturnOutcome::NotFound { book_id });
                continue;
            };

            book.available = true;
            debug!(%book_id, "book restored");

            let handed_to = match self.queue.peek_front() {
                Some(front) if front.book_id == book_id => {
                    let user_id = front.user_id;
                    book.available = false;
                    self.queue.dequeue();
                    debug!(%book_id, %user_id, "book handed to waiting user");
                    Some(user_id)
                }
                _ => None,
            };

            outcomes.push(ReturnOutcome::Restored {
                book_id,
                title: book.title.clone(),
                handed_to,
            });
        }

        outcomes
    }

    /// Books in catalog order
    pub fn books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.catalog.list()
    }

    /// Pending requests from head to tail
    pub fn requests(&self) -> impl Iterator<Item = &PendingRequest> + '_ {
        self.queue.list()
    }

    /// Unprocessed returns, in the order processing will visit them
    pub fn pending_returns(&self) -> impl Iterator<Item = BookId> + '_ {
        self.backlog.list()
    }

    /// The underlying catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The underlying request queue
    pub fn queue(&self) -> &RequestQueue {
        &self.queue
    }

    /// The underlying return backlog
    pub fn backlog(&self) -> &ReturnBacklog {
        &self.backlog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library_with_one_book() -> LendingCoordinator {
        let mut library = LendingCoordinator::new();
        library.add_book(1, "A", "X");
        library
    }

    fn is_available(library: &LendingCoordinator, id: i64) -> bool {
        library.catalog().find_by_id(BookId(id)).unwrap().available
    }

    #[test]
    fn test_issue_missing_book() {
        let mut library = library_with_one_book();
        let result = library.issue(BookId(99), UserId(100));
        assert_eq!(result, Err(LibraryError::BookNotFound(BookId(99))));
        assert!(library.queue().is_empty());
        assert!(is_available(&library, 1));
    }

    #[test]
    fn test_issue_then_queue() {
        let mut library = library_with_one_book();

        let first = library.issue(BookId(1), UserId(100)).unwrap();
        assert_eq!(
            first,
            IssueOutcome::Issued {
                book_id: BookId(1),
                user_id: UserId(100)
            }
        );
        assert!(!is_available(&library, 1));

        let second = library.issue(BookId(1), UserId(200)).unwrap();
        assert_eq!(
            second,
            IssueOutcome::Queued {
                book_id: BookId(1),
                user_id: UserId(200),
                position: 1
            }
        );
        let queued: Vec<_> = library.requests().copied().collect();
        assert_eq!(queued, vec![PendingRequest::new(1, 200)]);
    }

    #[test]
    fn test_return_is_deferred() {
        let mut library = library_with_one_book();
        library.issue(BookId(1), UserId(100)).unwrap();

        assert_eq!(library.return_book(BookId(1)), 1);
        assert!(!is_available(&library, 1));
        assert_eq!(library.backlog().len(), 1);
    }

    #[test]
    fn test_process_returns_lifo() {
        let mut library = LendingCoordinator::new();
        library.add_book(1, "First", "X");
        library.add_book(2, "Second", "Y");
        library.issue(BookId(1), UserId(10)).unwrap();
        library.issue(BookId(2), UserId(20)).unwrap();

        library.return_book(BookId(1));
        library.return_book(BookId(2));

        let visited: Vec<_> = library
            .process_returns()
            .into_iter()
            .map(|outcome| match outcome {
                ReturnOutcome::Restored { book_id, .. } => book_id,
                ReturnOutcome::NotFound { book_id } => book_id,
            })
            .collect();
        assert_eq!(visited, vec![BookId(2), BookId(1)]);
        assert!(is_available(&library, 1));
        assert!(is_available(&library, 2));
    }

    #[test]
    fn test_process_returns_hands_to_front_request() {
        let mut library = library_with_one_book();
        library.issue(BookId(1), UserId(100)).unwrap();
        library.issue(BookId(1), UserId(200)).unwrap();
        library.return_book(BookId(1));

        let outcomes = library.process_returns();
        assert_eq!(
            outcomes,
            vec![ReturnOutcome::Restored {
                book_id: BookId(1),
                title: "A".to_string(),
                handed_to: Some(UserId(200)),
            }]
        );
        assert!(library.queue().is_empty());
        assert!(!is_available(&library, 1));
    }

    #[test]
    fn test_process_returns_serves_only_front() {
        let mut library = library_with_one_book();
        library.issue(BookId(1), UserId(100)).unwrap();
        library.issue(BookId(1), UserId(200)).unwrap();
        library.issue(BookId(1), UserId(300)).unwrap();
        library.return_book(BookId(1));

        library.process_returns();
        let remaining: Vec<_> = library.requests().copied().collect();
        assert_eq!(remaining, vec![PendingRequest::new(1, 300)]);
        assert!(!is_available(&library, 1));
    }

    #[test]
    fn test_buried_request_is_not_served() {
        let mut library = LendingCoordinator::new();
        library.add_book(1, "A", "X");
        library.add_book(2, "B", "Y");
        library.issue(BookId(1), UserId(10)).unwrap();
        library.issue(BookId(2), UserId(20)).unwrap();
        library.issue(BookId(1), UserId(11)).unwrap();
        library.issue(BookId(2), UserId(21)).unwrap();

        library.return_book(BookId(2));
        let outcomes = library.process_returns();

        assert_eq!(
            outcomes,
            vec![ReturnOutcome::Restored {
                book_id: BookId(2),
                title: "B".to_string(),
                handed_to: None,
            }]
        );
        assert!(is_available(&library, 2));
        assert_eq!(library.queue().len(), 2);
    }

    #[test]
    fn test_process_returns_unknown_book_continues() {
        let mut library = library_with_one_book();
        library.issue(BookId(1), UserId(100)).unwrap();
        library.return_book(BookId(1));
        library.return_book(BookId(42));

        let outcomes = library.process_returns();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0], ReturnOutcome::NotFound { book_id: BookId(42) });
        assert!(matches!(
            outcomes[1],
            ReturnOutcome::Restored { book_id: BookId(1), handed_to: None, .. }
        ));
        assert!(library.backlog().is_empty());
    }

    #[test]
    fn test_process_returns_empty_backlog() {
        let mut library = library_with_one_book();
        library.issue(BookId(1), UserId(100)).unwrap();
        library.issue(BookId(1), UserId(200)).unwrap();

        assert!(library.process_returns().is_empty());
        assert!(!is_available(&library, 1));
        assert_eq!(library.queue().len(), 1);
    }

    #[test]
    fn test_return_of_available_book_still_checks_queue() {
        let mut library = library_with_one_book();
        library.return_book(BookId(1));

        let outcomes = library.process_returns();
        assert!(matches!(
            outcomes[0],
            ReturnOutcome::Restored { handed_to: None, .. }
        ));
        assert!(is_available(&library, 1));
    }
}
