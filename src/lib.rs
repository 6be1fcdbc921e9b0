//! Shelfmark Library Catalog Manager
//!
//! A single-process catalog manager tracking books, students, checkouts, and
//! overdue fees, persisting state to flat text files between runs.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod storage;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
