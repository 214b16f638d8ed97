use lending_system::{
    AvailabilityLogger, Book, CatalogReport, CatalogStats, Librarian, Library, Member,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Set up console logging, filtered through `RUST_LOG` when present
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lending_system=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

/// Construct a catalog book, logging any construction failure
fn build_book(title: &str, author: &str, isbn: &str) -> Option<Book> {
    match Book::builder().title(title).author(author).isbn(isbn).build() {
        Ok(book) => Some(book),
        Err(e) => {
            error!("failed to build book: {e}");
            None
        }
    }
}

/// Walk one member through a borrow/return cycle and print the catalog
fn main() {
    init_logging();

    let mut library = Library::new();
    let librarian = Librarian::new("Evelyn Price", "L-017");
    let alice = Member::new("Alice", "M-001");
    let alice_watcher = alice.watcher();

    librarian.register_new_member(alice, &mut library);

    let Some(dune) = build_book("Dune", "Frank Herbert", "978-0-441-17271-9") else {
        return;
    };
    let Some(hyperion) = build_book("Hyperion", "Dan Simmons", "978-0-553-28368-0") else {
        return;
    };

    librarian.add_book_to_library(dune, &mut library);
    librarian.add_book_to_library(hyperion, &mut library);

    // Alice watches both books; a logger observer records every change
    for title in ["Dune", "Hyperion"] {
        if let Some(book) = library.find_book_by_title_mut(title) {
            book.add_observer(Box::new(alice_watcher.clone()));
            book.add_observer(Box::new(AvailabilityLogger));
        }
    }

    info!("{} of {} books available", library.available_book_count(), library.book_count());

    // Alice borrows a book
    match library.borrow_book("M-001", "Dune") {
        Ok(()) => info!("Alice borrowed 'Dune'"),
        Err(e) => error!("borrow failed: {e}"),
    }

    info!("{} of {} books available", library.available_book_count(), library.book_count());

    // Alice returns the book, and the watchers hear about it
    match library.return_book("M-001", "Dune") {
        Ok(()) => info!("Alice returned 'Dune'"),
        Err(e) => error!("return failed: {e}"),
    }

    println!("{}", CatalogReport::summary(&library));

    match CatalogReport::to_json(&library) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("snapshot failed: {e}"),
    }
}
