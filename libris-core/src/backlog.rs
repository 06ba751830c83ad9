//! LIFO backlog of returned books

use crate::types::BookId;

/// Returned books awaiting reconciliation, most recent on top
#[derive(Debug, Clone, Default)]
pub struct ReturnBacklog {
    stack: Vec<BookId>,
}

impl ReturnBacklog {
    /// Create an empty backlog
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a returned book on top of the backlog
    pub fn push(&mut self, book_id: impl Into<BookId>) {
        self.stack.push(book_id.into());
    }

    /// Remove and return the most recent return, or `None` when empty
    pub fn pop(&mut self) -> Option<BookId> {
        self.stack.pop()
    }

    /// The most recent return without removing it
    pub fn peek(&self) -> Option<BookId> {
        self.stack.last().copied()
    }

    /// Iterate from top to bottom, the order processing visits entries
    pub fn list(&self) -> impl Iterator<Item = BookId> + '_ {
        self.stack.iter().rev().copied()
    }

    /// Number of unprocessed returns
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether nothing is waiting to be processed
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut backlog = ReturnBacklog::new();
        backlog.push(1);
        backlog.push(2);
        backlog.push(3);

        assert_eq!(backlog.pop(), Some(BookId(3)));
        assert_eq!(backlog.pop(), Some(BookId(2)));
        assert_eq!(backlog.pop(), Some(BookId(1)));
    }

    #[test]
    fn test_pop_empty_signals_empty() {
        let mut backlog = ReturnBacklog::new();
        assert_eq!(backlog.pop(), None);
        assert!(backlog.is_empty());
    }

    #[test]
    fn test_negative_ids_are_not_sentinels() {
        let mut backlog = ReturnBacklog::new();
        backlog.push(-1);
        assert_eq!(backlog.peek(), Some(BookId(-1)));
        assert_eq!(backlog.pop(), Some(BookId(-1)));
        assert_eq!(backlog.pop(), None);
    }

    #[test]
    fn test_list_top_to_bottom() {
        let mut backlog = ReturnBacklog::new();
        backlog.push(10);
        backlog.push(20);
        let listed: Vec<_> = backlog.list().collect();
        assert_eq!(listed, vec![BookId(20), BookId(10)]);
        assert_eq!(backlog.len(), 2);
    }
}
