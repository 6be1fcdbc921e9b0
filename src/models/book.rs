//! Book model and checkout state

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Handle to a book in the catalog.
///
/// Books are never removed from the store, so the insertion index stays valid
/// for the lifetime of the process. Students hold these handles instead of
/// owning the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(pub usize);

/// A book in the catalog with checkout tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub is_checked_out: bool,
    /// Present iff `is_checked_out` is true
    pub due_date: Option<NaiveDate>,
}

impl Book {
    /// Create a new available book
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            is_checked_out: false,
            due_date: None,
        }
    }

    /// Case-insensitive title comparison used by checkout and return
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Human-readable checkout status
    pub fn status(&self) -> &'static str {
        if self.is_checked_out {
            "Checked Out"
        } else {
            "Available"
        }
    }
}
