//! Libris Core Library
//!
//! This crate provides the in-memory lending engine for the Libris catalog manager.
//! Three collections back it: an ordered [`Catalog`] of books, a FIFO [`RequestQueue`]
//! of users waiting for unavailable books, and a LIFO [`ReturnBacklog`] of returns that
//! have not yet been reconciled. The [`LendingCoordinator`] owns all three and implements
//! the issue, return and process-returns transitions between them.

pub mod backlog;
pub mod catalog;
pub mod error;
pub mod lending;
pub mod queue;
pub mod types;

pub use backlog::ReturnBacklog;
pub use catalog::Catalog;
pub use error::{LibraryError, Result};
pub use lending::{IssueOutcome, LendingCoordinator, ReturnOutcome};
pub use queue::RequestQueue;
pub use types::{Book, BookId, PendingRequest, UserId};
