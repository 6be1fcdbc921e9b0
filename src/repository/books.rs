//! Book store operations

use crate::models::{Book, BookId};

/// Ordered in-memory collection of books.
///
/// Books are only ever appended; a [`BookId`] is the insertion index and
/// stays valid for the process lifetime.
#[derive(Debug, Default)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new book. Duplicate titles and authors are allowed;
    /// no uniqueness check is performed.
    pub fn add(&mut self, title: impl Into<String>, author: impl Into<String>) -> BookId {
        self.insert(Book::new(title, author))
    }

    /// Append a fully-formed record, e.g. one read back from disk
    pub fn insert(&mut self, book: Book) -> BookId {
        let id = BookId(self.books.len());
        self.books.push(book);
        id
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.get(id.0)
    }

    pub fn get_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterate books in insertion order, optionally skipping checked-out
    /// ones. Restartable and side-effect free.
    pub fn iter(&self, only_available: bool) -> impl Iterator<Item = (BookId, &Book)> {
        self.books
            .iter()
            .enumerate()
            .filter(move |(_, book)| !(only_available && book.is_checked_out))
            .map(|(idx, book)| (BookId(idx), book))
    }

    /// Case-insensitive substring search against title or author.
    /// Returns matches in store order; an empty result is not an error.
    pub fn search(&self, query: &str) -> Vec<(BookId, &Book)> {
        let query = query.to_lowercase();
        self.iter(false)
            .filter(|(_, book)| {
                book.title.to_lowercase().contains(&query)
                    || book.author.to_lowercase().contains(&query)
            })
            .collect()
    }
}
