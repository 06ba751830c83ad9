//! Core record types shared by the lending collections

mod book;
mod id;
mod request;

pub use book::Book;
pub use id::{BookId, UserId};
pub use request::PendingRequest;
