use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    book::Book,
    library::{CatalogStats, LendingError, Library},
    member::Member,
    observers::AvailabilityObserver,
};

/// Observer that records a tag into a shared log on every notification
struct RecordingObserver {
    /// Tag written into the shared log on every callback
    tag: &'static str,
    /// Shared log of received notifications
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl AvailabilityObserver for RecordingObserver {
    fn on_availability_change(&self, _book: &Book) {
        self.log.borrow_mut().push(self.tag);
    }
}

/// Build a library holding two available books and one registered member
fn setup_library() -> Library {
    let mut library = Library::new();
    library.add_book(Book::new("Dune", "Frank Herbert", "978-0-441-17271-9"));
    library.add_book(Book::new("Hyperion", "Dan Simmons", "978-0-553-28368-0"));
    library.register_member(Member::new("Alice", "M-001"));
    library
}

#[test]
#[allow(clippy::expect_used)]
fn borrow_flips_status_and_records_loan() {
    let mut library = setup_library();

    let result = library.borrow_book("M-001", "Dune");
    assert!(result.is_ok());

    let book = library.find_book_by_title("Dune").expect("book is in the catalog");
    assert!(!book.is_available());
    assert_eq!(book.borrower(), Some("M-001"));

    let member = library.member("M-001").expect("member is registered");
    assert_eq!(member.borrowed_books(), &["978-0-441-17271-9"]);
}

#[test]
#[allow(clippy::expect_used)]
fn status_and_borrower_stay_coherent() {
    let mut library = setup_library();

    drop(library.borrow_book("M-001", "Dune"));
    let book = library.find_book_by_title("Dune").expect("book is in the catalog");
    assert_eq!(book.is_available(), book.borrower().is_none());

    drop(library.return_book("M-001", "Dune"));
    let book = library.find_book_by_title("Dune").expect("book is in the catalog");
    assert!(book.is_available());
    assert_eq!(book.borrower(), None);
}

#[test]
#[allow(clippy::expect_used)]
fn capacity_is_enforced_through_the_library() {
    let mut library = setup_library();
    library.register_member(Member::with_limit("Bob", "M-002", 1));

    assert!(library.borrow_book("M-002", "Dune").is_ok());

    let result = library.borrow_book("M-002", "Hyperion");
    assert!(matches!(result, Err(LendingError::MemberAtCapacity { max_books: 1, .. })));

    let bob = library.member("M-002").expect("member is registered");
    assert_eq!(bob.borrowed_books().len(), 1);
    assert!(bob.borrowed_books().len() <= bob.max_books());

    // The rejected book stayed on the shelf
    let hyperion = library.find_book_by_title("Hyperion").expect("book is in the catalog");
    assert!(hyperion.is_available());
    assert_eq!(hyperion.borrower(), None);
}

#[test]
#[allow(clippy::expect_used)]
fn return_does_not_check_ownership() {
    let mut library = setup_library();
    library.register_member(Member::new("Bob", "M-002"));

    assert!(library.borrow_book("M-001", "Dune").is_ok());

    // Bob never borrowed it, yet his return request succeeds
    let result = library.return_book("M-002", "Dune");
    assert!(result.is_ok());

    let book = library.find_book_by_title("Dune").expect("book is in the catalog");
    assert!(book.is_available());

    // The actual holder's loan record was cleared
    let alice = library.member("M-001").expect("member is registered");
    assert!(alice.borrowed_books().is_empty());
}

#[test]
#[allow(clippy::expect_used)]
fn borrowing_unknown_title_changes_nothing() {
    let mut library = setup_library();

    let result = library.borrow_book("M-001", "Ubik");
    assert!(matches!(result, Err(LendingError::TitleNotFound { ref title }) if title == "Ubik"));

    assert_eq!(library.available_book_count(), 2);
    let alice = library.member("M-001").expect("member is registered");
    assert!(alice.borrowed_books().is_empty());
}

#[test]
fn returning_unknown_title_is_reported() {
    let mut library = setup_library();

    let result = library.return_book("M-001", "Ubik");
    assert!(matches!(result, Err(LendingError::TitleNotFound { .. })));
}

#[test]
fn borrowing_with_unknown_member_is_rejected() {
    let mut library = setup_library();

    let result = library.borrow_book("M-404", "Dune");
    assert!(matches!(result, Err(LendingError::MemberNotRegistered { .. })));

    let book = library.find_book_by_title("Dune");
    assert!(book.is_some_and(Book::is_available));
}

#[test]
#[allow(clippy::expect_used)]
fn duplicate_observer_is_notified_twice() {
    let mut library = setup_library();
    let log = Rc::new(RefCell::new(Vec::new()));

    let book = library.find_book_by_title_mut("Dune").expect("book is in the catalog");
    book.add_observer(Box::new(RecordingObserver { tag: "watcher", log: Rc::clone(&log) }));
    book.add_observer(Box::new(RecordingObserver { tag: "watcher", log: Rc::clone(&log) }));

    drop(library.borrow_book("M-001", "Dune"));
    // Checkout alone does not notify
    assert!(log.borrow().is_empty());

    drop(library.return_book("M-001", "Dune"));
    assert_eq!(log.borrow().len(), 2);
}

#[test]
#[allow(clippy::expect_used)]
fn observers_fire_in_registration_order() {
    let mut library = setup_library();
    let log = Rc::new(RefCell::new(Vec::new()));

    let book = library.find_book_by_title_mut("Dune").expect("book is in the catalog");
    book.add_observer(Box::new(RecordingObserver { tag: "first", log: Rc::clone(&log) }));
    book.add_observer(Box::new(RecordingObserver { tag: "second", log: Rc::clone(&log) }));

    drop(library.borrow_book("M-001", "Dune"));
    drop(library.return_book("M-001", "Dune"));

    assert_eq!(*log.borrow(), ["first", "second"]);
}

#[test]
#[allow(clippy::expect_used)]
fn available_count_tracks_borrow_and_return() {
    let mut library = setup_library();
    let log = Rc::new(RefCell::new(Vec::new()));

    // Alice watches the book she is about to borrow
    let watcher = library.member("M-001").expect("member is registered").watcher();
    let book = library.find_book_by_title_mut("Dune").expect("book is in the catalog");
    book.add_observer(Box::new(watcher));
    book.add_observer(Box::new(RecordingObserver { tag: "notice", log: Rc::clone(&log) }));

    assert_eq!(library.book_count(), 2);
    assert_eq!(library.available_book_count(), 2);

    assert!(library.borrow_book("M-001", "Dune").is_ok());
    assert_eq!(library.available_book_count(), 1);

    assert!(library.return_book("M-001", "Dune").is_ok());
    assert_eq!(library.available_book_count(), 2);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn checkout_at_capacity_leaves_both_sides_untouched() {
    let mut book = Book::new("Dune", "Frank Herbert", "978-0-441-17271-9");
    let mut member = Member::with_limit("Cara", "M-009", 0);

    let result = book.check_out(&mut member);
    assert!(matches!(result, Err(LendingError::MemberAtCapacity { max_books: 0, .. })));

    assert!(book.is_available());
    assert_eq!(book.borrower(), None);
    assert!(member.borrowed_books().is_empty());
}

#[test]
#[allow(clippy::expect_used)]
fn unavailable_book_cannot_be_borrowed() {
    let mut library = setup_library();
    library.register_member(Member::new("Bob", "M-002"));

    assert!(library.borrow_book("M-001", "Dune").is_ok());

    let result = library.borrow_book("M-002", "Dune");
    assert!(matches!(result, Err(LendingError::BookUnavailable { ref title }) if title == "Dune"));

    let bob = library.member("M-002").expect("member is registered");
    assert!(bob.borrowed_books().is_empty());
}

#[test]
fn counts_by_title_and_author_match_exactly() {
    let mut library = setup_library();
    library.add_book(Book::new("Dune", "Frank Herbert", "978-0-340-83993-9"));

    assert_eq!(library.book_count(), 3);
    assert_eq!(library.book_count_by_title("Dune"), 2);
    assert_eq!(library.book_count_by_title("Hyperion"), 1);
    assert_eq!(library.book_count_by_title("dune"), 0);
    assert_eq!(library.book_count_by_author("Frank Herbert"), 2);
    assert_eq!(library.book_count_by_author("Dan Simmons"), 1);
    assert_eq!(library.book_count_by_author("Ursula K. Le Guin"), 0);
}

#[test]
#[allow(clippy::expect_used)]
fn duplicate_titles_resolve_to_first_match() {
    let mut library = setup_library();
    library.add_book(Book::new("Dune", "Frank Herbert", "978-0-340-83993-9"));

    let found = library.find_book_by_title("Dune").expect("book is in the catalog");
    assert_eq!(found.isbn(), "978-0-441-17271-9");
}

#[test]
#[allow(clippy::expect_used)]
fn remove_book_and_unregister_member() {
    let mut library = setup_library();

    let removed = library.remove_book("978-0-441-17271-9").expect("book is in the catalog");
    assert_eq!(removed.title(), "Dune");
    assert_eq!(library.book_count(), 1);
    assert!(library.remove_book("978-0-441-17271-9").is_none());

    let gone = library.unregister_member("M-001").expect("member is registered");
    assert_eq!(gone.name(), "Alice");
    assert!(library.member("M-001").is_none());
    assert!(library.unregister_member("M-001").is_none());
}
