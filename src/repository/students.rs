//! Student store operations

use crate::models::{Student, StudentId};

/// Ordered in-memory collection of students.
///
/// Ids come from a store-level monotonic counter starting at 1 and are never
/// reused, including after removals.
#[derive(Debug)]
pub struct StudentStore {
    students: Vec<Student>,
    next_id: u32,
}

impl Default for StudentStore {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            next_id: 1,
        }
    }
}

impl StudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a student by case-insensitive exact name match,
    /// first match in store order.
    pub fn find(&self, name: &str) -> Option<StudentId> {
        self.students
            .iter()
            .find(|s| s.name_matches(name))
            .map(|s| s.id)
    }

    /// Add a student, or return the existing one when the name already
    /// matches. Never creates a duplicate for a known name.
    pub fn add(&mut self, name: &str) -> StudentId {
        if let Some(id) = self.find(name) {
            return id;
        }
        self.insert(name)
    }

    /// Append unconditionally with the next counter value. The load path
    /// uses this so duplicate names in the file stay duplicates.
    pub fn insert(&mut self, name: &str) -> StudentId {
        let id = StudentId(self.next_id);
        self.next_id += 1;
        self.students.push(Student::new(id, name));
        id
    }

    /// Remove a student by name, returning the removed record.
    ///
    /// Books the student had checked out are untouched: they stay marked
    /// checked out with no remaining owner.
    pub fn remove(&mut self, name: &str) -> Option<Student> {
        let idx = self.students.iter().position(|s| s.name_matches(name))?;
        Some(self.students.remove(idx))
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Student> {
        self.students.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent_per_name() {
        let mut store = StudentStore::new();
        let first = store.add("Ann");
        let second = store.add("Ann");
        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
        assert_eq!(first, StudentId(1));
    }

    #[test]
    fn find_is_case_insensitive() {
        let mut store = StudentStore::new();
        let id = store.add("Ann Marlowe");
        assert_eq!(store.find("ann marlowe"), Some(id));
        assert_eq!(store.find("ANN MARLOWE"), Some(id));
        assert_eq!(store.find("Ann"), None);
    }

    #[test]
    fn ids_are_sequential_and_never_reused() {
        let mut store = StudentStore::new();
        let ann = store.add("Ann");
        let ben = store.add("Ben");
        assert_eq!(ann, StudentId(1));
        assert_eq!(ben, StudentId(2));

        store.remove("Ann").unwrap();
        let cay = store.add("Cay");
        assert_eq!(cay, StudentId(3));
    }

    #[test]
    fn remove_missing_student_is_none() {
        let mut store = StudentStore::new();
        store.add("Ann");
        assert!(store.remove("Ben").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_returns_the_record() {
        let mut store = StudentStore::new();
        store.add("Ann");
        let removed = store.remove("ann").unwrap();
        assert_eq!(removed.name, "Ann");
        assert!(store.is_empty());
        assert_eq!(store.find("Ann"), None);
    }
}
