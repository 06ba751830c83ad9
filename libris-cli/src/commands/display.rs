//! Display Books action

use crate::prompt::{Prompter, ShellError};
use libris_core::LendingCoordinator;
use std::io::{BufRead, Write};

/// Print every book in catalog order
pub fn display_books<R: BufRead, W: Write>(
    library: &LendingCoordinator,
    prompt: &mut Prompter<R, W>,
    json: bool,
) -> Result<(), ShellError> {
    let out = prompt.out();

    if json {
        let books: Vec<_> = library.books().collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&books)?)?;
        return Ok(());
    }

    if library.catalog().is_empty() {
        writeln!(out, "\n📚 No books in library.")?;
        return Ok(());
    }

    writeln!(out, "\n------ Library Books ------")?;
    for book in library.books() {
        writeln!(
            out,
            "ID: {} | Title: {} | Author: {} | Status: {}",
            book.id,
            book.title,
            book.author,
            book.status()
        )?;
    }
    Ok(())
}
