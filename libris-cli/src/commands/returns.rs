//! Return Book and Process Returns actions

use crate::prompt::{Prompter, ShellError};
use libris_core::{BookId, LendingCoordinator, ReturnOutcome};
use std::io::{BufRead, Write};

/// Record a returned book without reconciling it yet
pub fn return_book<R: BufRead, W: Write>(
    library: &mut LendingCoordinator,
    prompt: &mut Prompter<R, W>,
) -> Result<(), ShellError> {
    let book_id: BookId = prompt.ask_number("\nEnter Book ID to return: ")?;

    library.return_book(book_id);
    writeln!(prompt.out(), "✅ Book return recorded! (Awaiting processing)")?;
    Ok(())
}

/// Reconcile every pending return and report each outcome
pub fn process_returns<R: BufRead, W: Write>(
    library: &mut LendingCoordinator,
    prompt: &mut Prompter<R, W>,
    json: bool,
) -> Result<(), ShellError> {
    let out = prompt.out();

    if library.backlog().is_empty() {
        if json {
            writeln!(out, "[]")?;
        } else {
            writeln!(out, "\n📦 No returned books to process.")?;
        }
        return Ok(());
    }

    let outcomes = library.process_returns();
    tracing::info!(processed = outcomes.len(), "returns processed");

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&outcomes)?)?;
        return Ok(());
    }

    writeln!(out, "\nProcessing returned books...")?;
    for outcome in outcomes {
        match outcome {
            ReturnOutcome::Restored {
                book_id,
                title,
                handed_to,
            } => {
                writeln!(out, "✅ Book '{}' (ID {}) marked as available.", title, book_id)?;
                if let Some(user_id) = handed_to {
                    writeln!(out, "📨 Issuing book to waiting user {}.", user_id)?;
                }
            }
            ReturnOutcome::NotFound { book_id } => {
                writeln!(out, "⚠️ Book with ID {} not found in library.", book_id)?;
            }
        }
    }
    Ok(())
}
