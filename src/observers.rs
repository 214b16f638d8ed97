use tracing::info;

use crate::book::Book;
use crate::member::Member;

/// Trait for availability change observation
pub trait AvailabilityObserver {
    /// Called after a book's loan status changed
    fn on_availability_change(&self, book: &Book);
}

/// Logs every availability change that occurs in the catalog
#[derive(Debug)]
pub struct AvailabilityLogger;

impl AvailabilityObserver for AvailabilityLogger {
    fn on_availability_change(&self, book: &Book) {
        info!(
            title = book.title(),
            isbn = book.isbn(),
            "book is now {}",
            book.status().description()
        );
    }
}

/// Notifies a single member that a book they watch became available
///
/// The watcher carries copies of the member's identity strings rather
/// than a reference to the `Member` itself, so books and members never
/// hold pointers into each other.
#[derive(Debug, Clone)]
pub struct MemberWatcher {
    /// Display name of the watching member
    member_name: String,
    /// Roster id of the watching member
    member_id: String,
}

impl MemberWatcher {
    /// Create a watcher for the given member identity
    #[must_use]
    pub fn new(member_name: impl Into<String>, member_id: impl Into<String>) -> Self {
        Self { member_name: member_name.into(), member_id: member_id.into() }
    }

    /// Create a watcher from a roster member
    #[must_use]
    pub fn for_member(member: &Member) -> Self {
        Self::new(member.name(), member.member_id())
    }

    /// The id of the member behind this watcher
    #[must_use]
    pub fn member_id(&self) -> &str {
        &self.member_id
    }
}

impl AvailabilityObserver for MemberWatcher {
    fn on_availability_change(&self, book: &Book) {
        if book.is_available() {
            info!(
                member_id = %self.member_id,
                "{}: the book '{}' is now available",
                self.member_name,
                book.title()
            );
        }
    }
}
