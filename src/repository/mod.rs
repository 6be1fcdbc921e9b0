//! Repository layer for the in-memory stores

pub mod books;
pub mod students;

pub use books::BookStore;
pub use students::StudentStore;

/// Main repository owning both stores.
///
/// All workflow operations borrow this instead of reaching for global state;
/// there is exactly one instance per session.
#[derive(Debug, Default)]
pub struct Repository {
    pub books: BookStore,
    pub students: StudentStore,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}
