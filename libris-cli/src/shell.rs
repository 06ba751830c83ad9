//! Interactive menu loop

use crate::commands;
use crate::config::ShellConfig;
use crate::prompt::{Prompter, ShellError};
use libris_core::LendingCoordinator;
use std::io::{self, BufRead, Write};

const BANNER: &str = "=====================================\n\
                      📚 LIBRARY MANAGEMENT SYSTEM\n\
                      =====================================";

const MENU: &str = "\nMenu:\n\
                    1. Add Book\n\
                    2. Display Books\n\
                    3. Issue Book\n\
                    4. Return Book\n\
                    5. Process Returns\n\
                    6. View Pending Requests\n\
                    7. Exit";

/// A numbered menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    DisplayBooks,
    IssueBook,
    ReturnBook,
    ProcessReturns,
    ViewRequests,
    Exit,
}

impl MenuChoice {
    /// Map a menu number to its entry
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::AddBook),
            2 => Some(Self::DisplayBooks),
            3 => Some(Self::IssueBook),
            4 => Some(Self::ReturnBook),
            5 => Some(Self::ProcessReturns),
            6 => Some(Self::ViewRequests),
            7 => Some(Self::Exit),
            _ => None,
        }
    }

    /// Parse a raw answer to the choice prompt
    pub fn parse(answer: &str) -> Option<Self> {
        answer.trim().parse().ok().and_then(Self::from_number)
    }
}

/// One library session: the lending state plus the terminal it talks to
pub struct Shell<R, W> {
    library: LendingCoordinator,
    prompt: Prompter<R, W>,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Start a session with an empty library
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            library: LendingCoordinator::new(),
            prompt: Prompter::new(input, output),
            config,
        }
    }

    /// Run the menu loop until Exit is chosen or the input ends
    pub fn run(&mut self) -> io::Result<()> {
        if self.config.show_menu {
            writeln!(self.prompt.out(), "{}", BANNER)?;
        }

        loop {
            if self.config.show_menu {
                writeln!(self.prompt.out(), "{}", MENU)?;
            }

            let answer = match self.prompt.ask("Enter your choice: ") {
                Ok(answer) => answer,
                Err(ShellError::EndOfInput) => return self.goodbye(),
                Err(e) => return Err(into_io(e)),
            };

            let Some(choice) = MenuChoice::parse(&answer) else {
                tracing::debug!(answer = %answer, "unrecognised menu choice");
                writeln!(self.prompt.out(), "❌ Invalid choice. Try again.")?;
                continue;
            };

            tracing::debug!(?choice, "menu choice");
            if choice == MenuChoice::Exit {
                return self.goodbye();
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(ShellError::InvalidNumber(text)) => {
                    writeln!(self.prompt.out(), "❌ Invalid number '{}'.", text)?;
                }
                Err(ShellError::EndOfInput) => return self.goodbye(),
                Err(e) => return Err(into_io(e)),
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<(), ShellError> {
        let library = &mut self.library;
        let prompt = &mut self.prompt;
        let json = self.config.json;

        match choice {
            MenuChoice::AddBook => commands::add_book(library, prompt),
            MenuChoice::DisplayBooks => commands::display_books(library, prompt, json),
            MenuChoice::IssueBook => commands::issue_book(library, prompt),
            MenuChoice::ReturnBook => commands::return_book(library, prompt),
            MenuChoice::ProcessReturns => commands::process_returns(library, prompt, json),
            MenuChoice::ViewRequests => commands::view_requests(library, prompt, json),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn goodbye(&mut self) -> io::Result<()> {
        tracing::info!(
            books = self.library.catalog().len(),
            pending_requests = self.library.queue().len(),
            "session ended"
        );
        writeln!(self.prompt.out(), "👋 Exiting system. Goodbye!")?;
        self.prompt.out().flush()
    }

    #[cfg(test)]
    fn into_parts(self) -> (LendingCoordinator, W) {
        (self.library, self.prompt.into_output())
    }
}

fn into_io(error: ShellError) -> io::Error {
    match error {
        ShellError::Io(e) => e,
        other => io::Error::other(other),
    }
}
