use crate::book::Book;
use crate::book_status::BookStatus;
use crate::library::LendingError;

/// Fluent builder for [`Book`] values
///
/// Setters borrow the builder mutably and return it for chaining, so a
/// builder can be reused: every `build` call produces an independent
/// book from the fields accumulated so far.
#[derive(Debug, Clone, Default)]
pub struct BookBuilder {
    /// Title to give the built book
    title: String,
    /// Author to give the built book
    author: String,
    /// ISBN to give the built book
    isbn: String,
    /// Initial loan status, available unless seeded otherwise
    status: BookStatus,
}

impl BookBuilder {
    /// Create a builder with all fields unset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Set the author
    pub fn author(&mut self, author: impl Into<String>) -> &mut Self {
        self.author = author.into();
        self
    }

    /// Set the ISBN
    pub fn isbn(&mut self, isbn: impl Into<String>) -> &mut Self {
        self.isbn = isbn.into();
        self
    }

    /// Seed the book as already checked out by the given member
    pub fn checked_out_to(&mut self, member_id: impl Into<String>) -> &mut Self {
        self.status = BookStatus::CheckedOut(member_id.into());
        self
    }

    /// Build a book from the accumulated fields
    ///
    /// # Errors
    ///
    /// Returns `LendingError::MissingBookField` when the title, author,
    /// or ISBN has not been set.
    pub fn build(&self) -> Result<Book, LendingError> {
        require(&self.title, "title")?;
        require(&self.author, "author")?;
        require(&self.isbn, "isbn")?;
        Ok(Book::from_parts(
            self.title.clone(),
            self.author.clone(),
            self.isbn.clone(),
            self.status.clone(),
        ))
    }
}

/// Reject an empty bibliographic field by name
fn require(value: &str, field: &'static str) -> Result<(), LendingError> {
    if value.is_empty() {
        return Err(LendingError::MissingBookField { field });
    }
    Ok(())
}
