//! Library lending model: books, members, and an in-memory catalog.
//!
//! This crate provides the borrow/return state transitions coupling
//! books, members, and the owning library, with availability
//! notifications fanned out to registered observers.

pub mod book;
pub mod book_builder;
pub mod book_status;
pub mod librarian;
pub mod library;
pub mod member;
pub mod observers;
pub mod report;

pub use book::Book;
pub use book_builder::BookBuilder;
pub use book_status::BookStatus;
pub use librarian::Librarian;
pub use library::{CatalogStats, LendingError, Library, Result};
pub use member::{DEFAULT_MAX_BOOKS, Member};
pub use observers::{AvailabilityLogger, AvailabilityObserver, MemberWatcher};
pub use report::CatalogReport;
