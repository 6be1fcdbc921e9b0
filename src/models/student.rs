//! Student model

use serde::{Deserialize, Serialize};

use super::book::BookId;

/// Student identifier, assigned sequentially by the store and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub u32);

/// A student that can borrow books
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Handles to borrowed books, in checkout order
    pub checked_out_books: Vec<BookId>,
    pub fees: f64,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            checked_out_books: Vec::new(),
            fees: 0.0,
        }
    }

    /// Case-insensitive name comparison used by lookups
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
