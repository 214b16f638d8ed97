use std::fmt;

use tracing::debug;

use crate::book_builder::BookBuilder;
use crate::book_status::BookStatus;
use crate::library::LendingError;
use crate::member::Member;
use crate::observers::AvailabilityObserver;

/// A single lending unit in the catalog
///
/// The book tracks its own loan status and the observers interested in
/// its availability. Observers are owned boxed trait objects; members
/// participate through detached watcher handles, never through direct
/// references.
pub struct Book {
    /// Title of the book
    title: String,
    /// Author of the book
    author: String,
    /// International Standard Book Number
    isbn: String,
    /// Current loan status
    status: BookStatus,
    /// Observers notified when the loan status changes
    observers: Vec<Box<dyn AvailabilityObserver>>,
}

// Manual implementation of Debug for Book
impl fmt::Debug for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Book")
            .field("title", &self.title)
            .field("author", &self.author)
            .field("isbn", &self.isbn)
            .field("status", &self.status)
            .field("observers_count", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Book {
    /// Create an available book with the given bibliographic data
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self::from_parts(title.into(), author.into(), isbn.into(), BookStatus::Available)
    }

    /// Assemble a book from already-validated parts
    pub(crate) fn from_parts(
        title: String,
        author: String,
        isbn: String,
        status: BookStatus,
    ) -> Self {
        Self { title, author, isbn, status, observers: Vec::new() }
    }

    /// Start building a book with a fluent builder
    #[must_use]
    pub fn builder() -> BookBuilder {
        BookBuilder::new()
    }

    /// Title of the book
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author of the book
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// ISBN of the book
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Current loan status
    #[must_use]
    pub fn status(&self) -> &BookStatus {
        &self.status
    }

    /// Whether the book is currently on the shelf
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }

    /// Id of the member currently holding the book, if any
    #[must_use]
    pub fn borrower(&self) -> Option<&str> {
        self.status.borrower()
    }

    /// Check the book out to the given member
    ///
    /// Both preconditions are verified before either side is mutated:
    /// the book must be available and the member must be under their
    /// borrow limit. A failed checkout leaves the book and the member
    /// exactly as they were.
    ///
    /// # Errors
    ///
    /// Returns `LendingError::BookUnavailable` if the book is already
    /// checked out, or `LendingError::MemberAtCapacity` if the member
    /// cannot hold another book.
    pub fn check_out(&mut self, member: &mut Member) -> Result<(), LendingError> {
        if !self.status.is_available() {
            return Err(LendingError::BookUnavailable { title: self.title.clone() });
        }
        member.borrow_book(self.isbn.clone())?;
        self.status = BookStatus::CheckedOut(member.member_id().to_owned());
        debug!(title = %self.title, member_id = member.member_id(), "book checked out");
        Ok(())
    }

    /// Return the book to the shelf
    ///
    /// The status is restored to available unconditionally. When the
    /// recorded holder is supplied, the loan entry is dropped from their
    /// borrowed list before observers are notified in registration
    /// order.
    pub fn check_in(&mut self, holder: Option<&mut Member>) {
        self.status = BookStatus::Available;
        if let Some(member) = holder {
            member.return_book(&self.isbn);
        }
        debug!(title = %self.title, "book returned to shelf");
        self.notify_observers();
    }

    /// Register an observer for availability changes
    ///
    /// Observers are kept in registration order and are not
    /// deduplicated; registering the same party twice means two
    /// notifications per change.
    pub fn add_observer(&mut self, observer: Box<dyn AvailabilityObserver>) {
        self.observers.push(observer);
    }

    /// Synchronously notify every registered observer, in registration
    /// order, passing the book itself
    pub fn notify_observers(&self) {
        for observer in &self.observers {
            observer.on_availability_change(self);
        }
    }
}

// Implementing display for nicer output
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' by {} is {}", self.title, self.author, self.status.description())
    }
}
