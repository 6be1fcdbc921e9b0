//! Flat-file persistence for the catalog
//!
//! State lives in two line-oriented, comma-delimited text files: one line per
//! book (`title,author,is_checked_out,due_date`) and one per student
//! (`name,fees,[title]*`). There is no escaping of embedded commas, a known
//! format limitation. A missing file means an empty store; a malformed line
//! aborts the whole load.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::{
    config::StorageConfig,
    error::{AppError, AppResult},
    models::Book,
    repository::Repository,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Load both stores from disk. Books must load first so student lines can
/// re-link their borrowed titles against the catalog.
pub fn load(config: &StorageConfig) -> AppResult<Repository> {
    let mut repository = Repository::new();
    load_books(&config.books_file, &mut repository)?;
    load_students(&config.students_file, &mut repository)?;
    tracing::info!(
        books = repository.books.len(),
        students = repository.students.len(),
        "catalog loaded"
    );
    Ok(repository)
}

/// Save both stores to disk.
///
/// A failure is logged and then propagated to the caller; the completion
/// notice is emitted either way, on success and failure alike.
pub fn save(config: &StorageConfig, repository: &Repository) -> AppResult<()> {
    let result = save_books(&config.books_file, repository)
        .and_then(|_| save_students(&config.students_file, repository));

    if let Err(ref err) = result {
        tracing::error!(error = %err, "error saving data");
    }
    tracing::info!("Data save operation finished.");
    result
}

fn load_books(path: &Path, repository: &mut Repository) -> AppResult<()> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no existing books file");
        return Ok(());
    }

    let contents = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    for (idx, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let book = parse_book_line(line).map_err(|reason| AppError::Storage {
            file: path.to_path_buf(),
            line: idx + 1,
            reason,
        })?;
        repository.books.insert(book);
    }
    Ok(())
}

fn parse_book_line(line: &str) -> Result<Book, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 4 {
        return Err(format!("expected 4 fields, got {}", fields.len()));
    }

    let is_checked_out = match fields[2].to_lowercase().as_str() {
        "true" => true,
        "false" => false,
        other => return Err(format!("invalid checkout flag '{}'", other)),
    };

    let due_date = match fields[3] {
        "None" => None,
        s => Some(
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map_err(|e| format!("invalid due date '{}': {}", s, e))?,
        ),
    };

    let mut book = Book::new(fields[0], fields[1]);
    book.is_checked_out = is_checked_out;
    book.due_date = due_date;
    Ok(book)
}

fn load_students(path: &Path, repository: &mut Repository) -> AppResult<()> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no existing students file");
        return Ok(());
    }

    let contents = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    for (idx, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let malformed = |reason: String| AppError::Storage {
            file: path.to_path_buf(),
            line: idx + 1,
            reason,
        };

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            return Err(malformed(format!(
                "expected at least 2 fields, got {}",
                fields.len()
            )));
        }
        let fees: f64 = fields[1]
            .parse()
            .map_err(|e| malformed(format!("invalid fee amount '{}': {}", fields[1], e)))?;

        let id = repository.students.insert(fields[0]);

        // Re-link borrowed titles by exact title match, first match wins.
        // Unlike every lookup elsewhere, this comparison is case-sensitive.
        let mut borrowed = Vec::new();
        for &title in &fields[2..] {
            match repository
                .books
                .iter(false)
                .find(|(_, book)| book.title == title)
            {
                Some((book_id, _)) => borrowed.push(book_id),
                None => {
                    tracing::warn!(student = fields[0], title, "borrowed title not in catalog")
                }
            }
        }

        let student = repository
            .students
            .get_mut(id)
            .ok_or_else(|| AppError::Internal("student vanished during load".to_string()))?;
        student.fees = fees;
        student.checked_out_books = borrowed;
    }
    Ok(())
}

fn save_books(path: &Path, repository: &Repository) -> AppResult<()> {
    let file = File::create(path).map_err(|e| AppError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for (_, book) in repository.books.iter(false) {
        let flag = if book.is_checked_out { "True" } else { "False" };
        let due = book
            .due_date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "None".to_string());
        writeln!(writer, "{},{},{},{}", book.title, book.author, flag, due)
            .map_err(|e| AppError::io(path, e))?;
    }
    writer.flush().map_err(|e| AppError::io(path, e))
}

fn save_students(path: &Path, repository: &Repository) -> AppResult<()> {
    let file = File::create(path).map_err(|e| AppError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for student in repository.students.iter() {
        write!(writer, "{},{}", student.name, student.fees)
            .map_err(|e| AppError::io(path, e))?;
        for &book_id in &student.checked_out_books {
            if let Some(book) = repository.books.get(book_id) {
                write!(writer, ",{}", book.title).map_err(|e| AppError::io(path, e))?;
            }
        }
        writeln!(writer).map_err(|e| AppError::io(path, e))?;
    }
    writer.flush().map_err(|e| AppError::io(path, e))
}
