//! View Pending Requests action

use crate::prompt::{Prompter, ShellError};
use libris_core::LendingCoordinator;
use std::io::{BufRead, Write};

/// Print waiting requests from the front of the queue to the back
pub fn view_requests<R: BufRead, W: Write>(
    library: &LendingCoordinator,
    prompt: &mut Prompter<R, W>,
    json: bool,
) -> Result<(), ShellError> {
    let out = prompt.out();

    if json {
        let requests: Vec<_> = library.requests().collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&requests)?)?;
        return Ok(());
    }

    if library.queue().is_empty() {
        writeln!(out, "\n📭 No pending requests.")?;
        return Ok(());
    }

    writeln!(out, "\n------ Pending Requests ------")?;
    for request in library.requests() {
        writeln!(
            out,
            "Book ID: {} | User ID: {}",
            request.book_id, request.user_id
        )?;
    }
    Ok(())
}
