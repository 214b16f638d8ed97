use thiserror::Error;
use tracing::debug;

use crate::book::Book;
use crate::member::Member;

/// Error type for lending operations
#[derive(Debug, Error)]
pub enum LendingError {
    /// No book with the requested title exists in the catalog
    #[error("no book titled '{title}' in the catalog")]
    TitleNotFound {
        /// The title that was looked up
        title: String,
    },
    /// The book exists but is currently checked out
    #[error("book '{title}' is not available")]
    BookUnavailable {
        /// Title of the unavailable book
        title: String,
    },
    /// The member already holds their maximum number of books
    #[error("{name} can't borrow more than {max_books} books")]
    MemberAtCapacity {
        /// Display name of the member
        name: String,
        /// The member's borrow limit
        max_books: usize,
    },
    /// The member id is not on the roster
    #[error("member '{member_id}' is not registered")]
    MemberNotRegistered {
        /// The id that was looked up
        member_id: String,
    },
    /// A book was built without a required bibliographic field
    #[error("book is missing required field '{field}'")]
    MissingBookField {
        /// Name of the missing field
        field: &'static str,
    },
    /// A catalog snapshot could not be rendered
    #[error("failed to render catalog snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result type using [`LendingError`]
pub type Result<T> = std::result::Result<T, LendingError>;

/// Size counters exposed by any book collection
pub trait CatalogStats {
    /// Total number of books in the collection
    fn book_count(&self) -> usize;
    /// Number of books currently available for checkout
    fn available_book_count(&self) -> usize;
}

/// In-memory catalog of books and roster of members
///
/// The library owns both sides of every loan and mediates borrow and
/// return requests by title lookup. Books and members refer to each
/// other only by id; the library resolves ids whenever both parties
/// must change together.
#[derive(Debug, Default)]
pub struct Library {
    /// Catalog of owned books
    books: Vec<Book>,
    /// Roster of registered members
    members: Vec<Member>,
}

impl Library {
    /// Create an empty library
    #[must_use]
    pub fn new() -> Self {
        Self { books: Vec::new(), members: Vec::new() }
    }

    /// Add a book to the catalog
    ///
    /// Duplicate titles are allowed; title lookups return the first
    /// match.
    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Remove the book with the given ISBN from the catalog
    ///
    /// Returns the removed book, or `None` when no book carries that
    /// ISBN.
    pub fn remove_book(&mut self, isbn: &str) -> Option<Book> {
        let pos = self.books.iter().position(|book| book.isbn() == isbn)?;
        Some(self.books.remove(pos))
    }

    /// Find the first book whose title matches exactly
    #[must_use]
    pub fn find_book_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title() == title)
    }

    /// Find the first book whose title matches exactly, mutably
    ///
    /// Used to register observers on a book already in the catalog.
    pub fn find_book_by_title_mut(&mut self, title: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.title() == title)
    }

    /// All books in the catalog
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Register a member on the roster
    pub fn register_member(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Remove the member with the given id from the roster
    ///
    /// Returns the removed member, or `None` when the id is unknown.
    pub fn unregister_member(&mut self, member_id: &str) -> Option<Member> {
        let pos = self.members.iter().position(|member| member.member_id() == member_id)?;
        Some(self.members.remove(pos))
    }

    /// Look up a registered member by id
    #[must_use]
    pub fn member(&self, member_id: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.member_id() == member_id)
    }

    /// All registered members
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Borrow the first book with the given title for the given member
    ///
    /// Resolves both parties and delegates to [`Book::check_out`], which
    /// verifies availability and capacity before mutating either side.
    ///
    /// # Errors
    ///
    /// Returns `LendingError::TitleNotFound` when no book carries the
    /// title, `LendingError::MemberNotRegistered` when the member id is
    /// unknown, and propagates `BookUnavailable` / `MemberAtCapacity`
    /// from the checkout itself. No state changes on any error.
    pub fn borrow_book(&mut self, member_id: &str, title: &str) -> Result<()> {
        let Some(book) = self.books.iter_mut().find(|book| book.title() == title) else {
            return Err(LendingError::TitleNotFound { title: title.to_owned() });
        };
        let Some(member) = self.members.iter_mut().find(|m| m.member_id() == member_id) else {
            return Err(LendingError::MemberNotRegistered { member_id: member_id.to_owned() });
        };
        book.check_out(member)
    }

    /// Return the first book with the given title
    ///
    /// The requesting member is deliberately not required to be the
    /// recorded holder: the book flips to available regardless, and the
    /// loan record of whoever actually borrowed it is cleared.
    ///
    /// # Errors
    ///
    /// Returns `LendingError::TitleNotFound` when no book carries the
    /// title.
    pub fn return_book(&mut self, member_id: &str, title: &str) -> Result<()> {
        let Some(book) = self.books.iter_mut().find(|book| book.title() == title) else {
            return Err(LendingError::TitleNotFound { title: title.to_owned() });
        };
        debug!(requested_by = member_id, title, "return requested");
        let holder_id = book.borrower().map(ToOwned::to_owned);
        let holder =
            holder_id.and_then(|id| self.members.iter_mut().find(|m| m.member_id() == id));
        book.check_in(holder);
        Ok(())
    }

    /// Number of catalog books whose title matches exactly
    #[must_use]
    pub fn book_count_by_title(&self, title: &str) -> usize {
        self.books.iter().filter(|book| book.title() == title).count()
    }

    /// Number of catalog books whose author matches exactly
    #[must_use]
    pub fn book_count_by_author(&self, author: &str) -> usize {
        self.books.iter().filter(|book| book.author() == author).count()
    }
}

impl CatalogStats for Library {
    fn book_count(&self) -> usize {
        self.books.len()
    }

    fn available_book_count(&self) -> usize {
        self.books.iter().filter(|book| book.is_available()).count()
    }
}

// Include tests module
#[cfg(test)]
mod tests;
