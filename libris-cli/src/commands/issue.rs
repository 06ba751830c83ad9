//! Issue Book action

use crate::prompt::{Prompter, ShellError};
use libris_core::{BookId, IssueOutcome, LendingCoordinator, LibraryError, UserId};
use std::io::{BufRead, Write};

/// Issue a book to a user, queueing the request when the book is out
pub fn issue_book<R: BufRead, W: Write>(
    library: &mut LendingCoordinator,
    prompt: &mut Prompter<R, W>,
) -> Result<(), ShellError> {
    let book_id: BookId = prompt.ask_number("\nEnter Book ID to issue: ")?;
    let user_id: UserId = prompt.ask_number("Enter User ID: ")?;

    let out = prompt.out();
    match library.issue(book_id, user_id) {
        Ok(IssueOutcome::Issued { user_id, .. }) => {
            writeln!(out, "✅ Book issued successfully to User {}!", user_id)?;
        }
        Ok(IssueOutcome::Queued { .. }) => {
            writeln!(out, "⚠️ Book currently unavailable. Added to waiting queue.")?;
        }
        Err(LibraryError::BookNotFound(_)) => {
            writeln!(out, "❌ Book not found.")?;
        }
    }
    Ok(())
}
