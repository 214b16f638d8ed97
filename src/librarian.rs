use tracing::debug;

use crate::book::Book;
use crate::library::Library;
use crate::member::Member;

/// Staff facade over a [`Library`]
///
/// Holds no library reference of its own; the library to act on is
/// passed to each call.
#[derive(Debug, Clone)]
pub struct Librarian {
    /// Display name of the staff member
    name: String,
    /// Staff employee id
    employee_id: String,
}

impl Librarian {
    /// Create a librarian with the given identity
    #[must_use]
    pub fn new(name: impl Into<String>, employee_id: impl Into<String>) -> Self {
        Self { name: name.into(), employee_id: employee_id.into() }
    }

    /// Display name of the staff member
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Staff employee id
    #[must_use]
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// Add a book to the given library's catalog
    pub fn add_book_to_library(&self, book: Book, library: &mut Library) {
        debug!(librarian = %self.employee_id, title = book.title(), "adding book to catalog");
        library.add_book(book);
    }

    /// Remove the book with the given ISBN from the given library
    pub fn remove_book_from_library(&self, isbn: &str, library: &mut Library) -> Option<Book> {
        debug!(librarian = %self.employee_id, isbn, "removing book from catalog");
        library.remove_book(isbn)
    }

    /// Register a new member on the given library's roster
    pub fn register_new_member(&self, member: Member, library: &mut Library) {
        debug!(
            librarian = %self.employee_id,
            member_id = member.member_id(),
            "registering new member"
        );
        library.register_member(member);
    }
}
