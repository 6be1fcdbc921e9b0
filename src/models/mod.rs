//! Data models for Shelfmark

pub mod book;
pub mod student;

// Re-export commonly used types
pub use book::{Book, BookId};
pub use student::{Student, StudentId};
