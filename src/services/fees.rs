//! Overdue fee collection

use crate::{config::FeePolicy, repository::Repository};

/// Charge every student holding more books than the policy allows.
///
/// A flat charge goes onto each such student's balance; the running total is
/// an explicit fold accumulator. This is a pure batch charge by current book
/// count, not by time overdue.
pub fn collect_fees(repository: &mut Repository, policy: &FeePolicy) -> f64 {
    let total = repository.students.iter_mut().fold(0.0, |total, student| {
        if student.checked_out_books.len() > policy.max_books_before_fee {
            student.fees += policy.charge;
            total + policy.charge
        } else {
            total
        }
    });

    // Addition-only updates can never drive the total negative
    debug_assert!(total >= 0.0, "total collected fees cannot be negative");
    total
}
