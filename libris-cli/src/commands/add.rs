//! Add Book action

use crate::prompt::{Prompter, ShellError};
use libris_core::{BookId, LendingCoordinator};
use std::io::{BufRead, Write};

/// Collect id, title and author, then append the book to the catalog
pub fn add_book<R: BufRead, W: Write>(
    library: &mut LendingCoordinator,
    prompt: &mut Prompter<R, W>,
) -> Result<(), ShellError> {
    let id: BookId = prompt.ask_number("\nEnter Book ID: ")?;
    let title = prompt.ask("Enter Book Title: ")?;
    let author = prompt.ask("Enter Author Name: ")?;

    library.add_book(id, title, author);
    writeln!(prompt.out(), "✅ Book added successfully!")?;
    Ok(())
}
