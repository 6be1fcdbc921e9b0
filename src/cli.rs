//! Interactive menu loop
//!
//! Thin I/O glue over the stores and services: free-text prompts, numbered
//! choices, save-and-exit on quit. All catalog behavior lives elsewhere.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
    services, storage,
};

const LIBRARY_NAME: &str = "Library Management System";

/// Shelfmark - Library Catalog Manager
#[derive(Debug, Parser)]
#[command(name = "shelfmark", version, about)]
pub struct Cli {
    /// Directory holding the persisted catalog files
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory holding configuration files (default: config/)
    #[arg(long)]
    pub config_dir: Option<String>,
}

/// Run one interactive session: load, loop until quit, save.
pub fn run(config: &AppConfig) -> AppResult<()> {
    let mut repository = storage::load(&config.storage)?;

    loop {
        print_menu();
        let choice = match prompt("Select an option: ")? {
            Some(choice) => choice,
            // EOF on stdin ends the session the same way quitting does
            None => "q".to_string(),
        };

        match choice.as_str() {
            "1" => {
                let Some(title) = prompt("Enter book title: ")? else { continue };
                let Some(author) = prompt("Enter book author: ")? else { continue };
                repository.books.add(title.as_str(), author.as_str());
                println!("Book '{}' by {} has been added successfully!", title, author);
            }
            "2" => {
                let Some(name) = prompt("Enter student name: ")? else { continue };
                let id = repository.students.add(&name);
                let student = repository
                    .students
                    .get(id)
                    .ok_or_else(|| AppError::Internal("student vanished after add".to_string()))?;
                println!("Student '{}' added or retrieved.", student.name);
            }
            "3" => {
                let Some(name) = prompt("Enter student name: ")? else { continue };
                let Some(student_id) = repository.students.find(&name) else {
                    println!("Student not found. Please add the student first.");
                    continue;
                };
                let Some(title) = prompt("Enter book title to check out: ")? else { continue };
                let outcome = services::check_out_book(&mut repository, student_id, &title)?;
                println!("{}", outcome);
            }
            "4" => {
                let Some(name) = prompt("Enter student name: ")? else { continue };
                let Some(student_id) = repository.students.find(&name) else {
                    println!("Student not found.");
                    continue;
                };
                let Some(title) = prompt("Enter book title to return: ")? else { continue };
                let outcome = services::return_book(&mut repository, student_id, &title)?;
                println!("{}", outcome);
            }
            "5" => {
                println!("Available Books:");
                for (_, book) in repository.books.iter(true) {
                    println!("- {} by {}", book.title, book.author);
                }
            }
            "6" => {
                let collected = services::collect_fees(&mut repository, &config.fees);
                println!("Total fees collected: ${:.1}", collected);
            }
            "7" => {
                let Some(name) = prompt("Enter the student name to remove: ")? else { continue };
                match repository.students.remove(&name) {
                    Some(student) => {
                        println!("Student '{}' removed successfully.", student.name)
                    }
                    None => println!("Student not found."),
                }
            }
            "8" => {
                let Some(query) = prompt("Enter a title or author to search: ")? else {
                    continue;
                };
                let matches = repository.books.search(&query);
                if matches.is_empty() {
                    println!("No books matched your search query.");
                } else {
                    println!("Search Results:");
                    for (_, book) in matches {
                        println!("- {} by {} [{}]", book.title, book.author, book.status());
                    }
                }
            }
            "q" | "Q" => {
                println!("Saving data and exiting...");
                storage::save(&config.storage, &repository)?;
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!("\n{}", "=".repeat(40));
    println!("{:^40}", LIBRARY_NAME);
    println!("{}", "=".repeat(40));
    println!("1) Add Book");
    println!("2) Add Student");
    println!("3) Check Out Book");
    println!("4) Return Book");
    println!("5) List Available Books");
    println!("6) Collect Fees");
    println!("7) Remove Student");
    println!("8) Search Book");
    println!("Q) Quit");
    println!("{}", "=".repeat(40));
}

/// Read one trimmed line from stdin; `None` means end of input
fn prompt(label: &str) -> AppResult<Option<String>> {
    print!("{}", label);
    io::stdout()
        .flush()
        .map_err(|e| AppError::io("stdout", e))?;

    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .map_err(|e| AppError::io("stdin", e))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
