//! Menu action implementations

mod add;
mod display;
mod issue;
mod requests;
mod returns;

pub use add::add_book;
pub use display::display_books;
pub use issue::issue_book;
pub use requests::view_requests;
pub use returns::{process_returns, return_book};
