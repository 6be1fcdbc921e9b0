//! Checkout / return state machine
//!
//! A book is either Available (`is_checked_out == false`, no due date) or
//! CheckedOut (`is_checked_out == true`, due date set). These two operations
//! are the only transitions.

use std::fmt;

use chrono::{Local, NaiveDate};

use crate::{
    error::{AppError, AppResult},
    models::StudentId,
    repository::Repository,
};

/// Result of a checkout attempt. "Not found" is a normal outcome,
/// not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    CheckedOut {
        title: String,
        student: String,
        due_date: NaiveDate,
    },
    NoAvailableCopy {
        title: String,
    },
}

impl fmt::Display for CheckoutOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckoutOutcome::CheckedOut { title, student, .. } => {
                write!(f, "'{}' checked out by {}.", title, student)
            }
            CheckoutOutcome::NoAvailableCopy { title } => {
                write!(f, "No available copy of '{}' found.", title)
            }
        }
    }
}

/// Result of a return attempt
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnOutcome {
    Returned { title: String, student: String },
    NotCheckedOut { title: String, student: String },
}

impl fmt::Display for ReturnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnOutcome::Returned { title, student } => {
                write!(f, "'{}' returned by {}.", title, student)
            }
            ReturnOutcome::NotCheckedOut { title, student } => {
                write!(f, "{} does not have '{}' checked out.", student, title)
            }
        }
    }
}

/// Check out the first available copy of a title for a student.
///
/// Scans the catalog in insertion order and transitions at most one book per
/// call. The due date is the current local date. When every matching copy is
/// already out, or no copy exists, nothing changes.
pub fn check_out_book(
    repository: &mut Repository,
    student_id: StudentId,
    title: &str,
) -> AppResult<CheckoutOutcome> {
    // Verify the student exists before touching the catalog
    let student_name = repository
        .students
        .get(student_id)
        .map(|s| s.name.clone())
        .ok_or_else(|| AppError::NotFound(format!("Student with id {} not found", student_id.0)))?;

    let matched = repository
        .books
        .iter(true)
        .find(|(_, book)| book.title_matches(title))
        .map(|(id, book)| (id, book.title.clone()));

    let Some((book_id, stored_title)) = matched else {
        return Ok(CheckoutOutcome::NoAvailableCopy {
            title: title.to_string(),
        });
    };

    let due_date = Local::now().date_naive();
    let book = repository
        .books
        .get_mut(book_id)
        .ok_or_else(|| AppError::Internal("book handle went stale".to_string()))?;
    book.is_checked_out = true;
    book.due_date = Some(due_date);

    repository
        .students
        .get_mut(student_id)
        .ok_or_else(|| AppError::Internal("student disappeared mid-checkout".to_string()))?
        .checked_out_books
        .push(book_id);

    tracing::debug!(title = %stored_title, student = %student_name, %due_date, "book checked out");

    Ok(CheckoutOutcome::CheckedOut {
        title: stored_title,
        student: student_name,
        due_date,
    })
}

/// Return a book the student has checked out.
///
/// Scans only the student's own borrowed list, not the whole catalog. On a
/// match the book becomes available again and the handle leaves the list.
pub fn return_book(
    repository: &mut Repository,
    student_id: StudentId,
    title: &str,
) -> AppResult<ReturnOutcome> {
    let student = repository
        .students
        .get(student_id)
        .ok_or_else(|| AppError::NotFound(format!("Student with id {} not found", student_id.0)))?;
    let student_name = student.name.clone();

    let books = &repository.books;
    let found = student
        .checked_out_books
        .iter()
        .enumerate()
        .find(|(_, &id)| books.get(id).is_some_and(|b| b.title_matches(title)))
        .map(|(pos, &id)| (pos, id));

    let Some((pos, book_id)) = found else {
        return Ok(ReturnOutcome::NotCheckedOut {
            title: title.to_string(),
            student: student_name,
        });
    };

    let book = repository
        .books
        .get_mut(book_id)
        .ok_or_else(|| AppError::Internal("book handle went stale".to_string()))?;
    book.is_checked_out = false;
    book.due_date = None;

    repository
        .students
        .get_mut(student_id)
        .ok_or_else(|| AppError::Internal("student disappeared mid-return".to_string()))?
        .checked_out_books
        .remove(pos);

    tracing::debug!(title = %title, student = %student_name, "book returned");

    Ok(ReturnOutcome::Returned {
        title: title.to_string(),
        student: student_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_with(titles: &[(&str, &str)]) -> Repository {
        let mut repository = Repository::new();
        for (title, author) in titles {
            repository.books.add(*title, *author);
        }
        repository
    }

    #[test]
    fn checkout_then_return_restores_prior_state() {
        let mut repository = repo_with(&[("Dune", "Herbert")]);
        let ann = repository.students.add("Ann");

        let out = check_out_book(&mut repository, ann, "dune").unwrap();
        assert!(matches!(out, CheckoutOutcome::CheckedOut { .. }));
        let book = repository.books.iter(false).next().unwrap().1;
        assert!(book.is_checked_out);
        assert_eq!(book.due_date, Some(Local::now().date_naive()));
        assert_eq!(
            repository.students.get(ann).unwrap().checked_out_books.len(),
            1
        );

        let back = return_book(&mut repository, ann, "DUNE").unwrap();
        assert!(matches!(back, ReturnOutcome::Returned { .. }));
        let book = repository.books.iter(false).next().unwrap().1;
        assert!(!book.is_checked_out);
        assert_eq!(book.due_date, None);
        assert!(repository
            .students
            .get(ann)
            .unwrap()
            .checked_out_books
            .is_empty());
    }

    #[test]
    fn checkout_takes_the_first_available_copy_only() {
        // Two copies of the same title, the first already out
        let mut repository = repo_with(&[("Dune", "Herbert"), ("Dune", "Herbert")]);
        let first = crate::models::BookId(0);
        repository.books.get_mut(first).unwrap().is_checked_out = true;

        let ann = repository.students.add("Ann");
        let out = check_out_book(&mut repository, ann, "Dune").unwrap();
        assert!(matches!(out, CheckoutOutcome::CheckedOut { .. }));

        // Exactly the second copy transitioned
        let held = &repository.students.get(ann).unwrap().checked_out_books;
        assert_eq!(held, &vec![crate::models::BookId(1)]);
        assert!(repository.books.get(first).unwrap().due_date.is_none());
    }

    #[test]
    fn checkout_of_unknown_or_exhausted_title_changes_nothing() {
        let mut repository = repo_with(&[("Dune", "Herbert")]);
        let ann = repository.students.add("Ann");

        let missing = check_out_book(&mut repository, ann, "Emma").unwrap();
        assert_eq!(
            missing.to_string(),
            "No available copy of 'Emma' found."
        );

        check_out_book(&mut repository, ann, "Dune").unwrap();
        let ben = repository.students.add("Ben");
        let exhausted = check_out_book(&mut repository, ben, "Dune").unwrap();
        assert!(matches!(exhausted, CheckoutOutcome::NoAvailableCopy { .. }));
        assert!(repository.students.get(ben).unwrap().checked_out_books.is_empty());
    }

    #[test]
    fn return_of_a_book_the_student_does_not_hold_changes_nothing() {
        let mut repository = repo_with(&[("Dune", "Herbert")]);
        let ann = repository.students.add("Ann");
        let ben = repository.students.add("Ben");
        check_out_book(&mut repository, ann, "Dune").unwrap();

        // Ben never borrowed it, even though the catalog has it checked out
        let out = return_book(&mut repository, ben, "Dune").unwrap();
        assert_eq!(out.to_string(), "Ben does not have 'Dune' checked out.");
        assert!(repository.books.get(crate::models::BookId(0)).unwrap().is_checked_out);
    }

    #[test]
    fn unknown_student_id_is_an_error() {
        let mut repository = repo_with(&[("Dune", "Herbert")]);
        let err = check_out_book(&mut repository, StudentId(99), "Dune").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn removing_a_student_leaves_their_books_checked_out() {
        // Documented limitation: no cascading return on removal
        let mut repository = repo_with(&[("Dune", "Herbert")]);
        let ann = repository.students.add("Ann");
        check_out_book(&mut repository, ann, "Dune").unwrap();

        repository.students.remove("Ann").unwrap();
        let book = repository.books.get(crate::models::BookId(0)).unwrap();
        assert!(book.is_checked_out);
        assert!(book.due_date.is_some());
        assert_eq!(repository.books.iter(true).count(), 0);
    }
}
