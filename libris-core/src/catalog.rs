//! Ordered book catalog

use crate::types::{Book, BookId};

/// All known books, in the order they were added
///
/// Lookups are a linear scan. Duplicate ids are accepted on insert; lookups resolve
/// to the earliest matching entry.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new available book and return a reference to it
    pub fn add(
        &mut self,
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> &Book {
        let index = self.books.len();
        self.books.push(Book::new(id, title, author));
        &self.books[index]
    }

    /// Find the first book with the given id
    pub fn find_by_id(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Find the first book with the given id for mutation
    pub fn find_by_id_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.id == id)
    }

    /// Iterate over books in insertion order
    pub fn list(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter()
    }

    /// Number of books (duplicates included)
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Number of books currently on the shelf
    pub fn available_count(&self) -> usize {
        self.books.iter().filter(|book| book.available).count()
    }
}
