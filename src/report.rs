use serde::Serialize;

use crate::book_status::BookStatus;
use crate::library::{CatalogStats, Library, Result};

/// Serializable record of one catalog book
#[derive(Debug, Serialize)]
pub struct BookRecord {
    /// Title of the book
    title: String,
    /// Author of the book
    author: String,
    /// ISBN of the book
    isbn: String,
    /// Loan status at snapshot time
    status: BookStatus,
}

/// Serializable record of one roster member
#[derive(Debug, Serialize)]
pub struct MemberRecord {
    /// Display name of the member
    name: String,
    /// Roster id of the member
    member_id: String,
    /// The member's borrow limit
    max_books: usize,
    /// ISBNs currently on loan to the member
    borrowed_books: Vec<String>,
}

/// Serializable snapshot of the whole library
///
/// Books hold boxed observers and cannot derive serialization, so the
/// snapshot mirrors them into plain records. The snapshot is an export
/// format only; nothing is ever loaded back from it.
#[derive(Debug, Serialize)]
pub struct CatalogSnapshot {
    /// Records of every catalog book
    books: Vec<BookRecord>,
    /// Records of every roster member
    members: Vec<MemberRecord>,
}

/// Reporting tools for a library's catalog and roster
#[derive(Debug)]
pub struct CatalogReport;

impl CatalogReport {
    /// Capture a serializable snapshot of the library
    #[must_use]
    pub fn snapshot(library: &Library) -> CatalogSnapshot {
        CatalogSnapshot {
            books: library
                .books()
                .iter()
                .map(|book| BookRecord {
                    title: book.title().to_owned(),
                    author: book.author().to_owned(),
                    isbn: book.isbn().to_owned(),
                    status: book.status().clone(),
                })
                .collect(),
            members: library
                .members()
                .iter()
                .map(|member| MemberRecord {
                    name: member.name().to_owned(),
                    member_id: member.member_id().to_owned(),
                    max_books: member.max_books(),
                    borrowed_books: member.borrowed_books().to_vec(),
                })
                .collect(),
        }
    }

    /// Render the library snapshot as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `LendingError::Snapshot` if serialization fails.
    pub fn to_json(library: &Library) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::snapshot(library))?)
    }

    /// Generate a markdown table of the catalog
    #[must_use]
    #[allow(clippy::arithmetic_side_effects)]
    pub fn summary(library: &Library) -> String {
        if library.books().is_empty() {
            return "The catalog is empty.".to_string();
        }

        let mut table = String::from("| # | Title | Author | Status |\n");
        table.push_str("|---|-------|--------|--------|\n");

        for (i, book) in library.books().iter().enumerate() {
            table.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                i + 1,
                book.title(),
                book.author(),
                book.status().description()
            ));
        }

        table.push_str(&format!(
            "\n{} of {} books available\n",
            library.available_book_count(),
            library.book_count()
        ));

        table
    }
}
