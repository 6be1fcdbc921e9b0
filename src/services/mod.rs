//! Workflow operations over the repository

pub mod circulation;
pub mod fees;

pub use circulation::{check_out_book, return_book, CheckoutOutcome, ReturnOutcome};
pub use fees::collect_fees;
