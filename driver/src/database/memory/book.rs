use error_stack::Report;
use tracing::{debug, warn};

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, Isbn};
use kernel::KernelError;

/// Catalog entries in insertion order.
#[derive(Debug, Default, Clone)]
pub struct BookRegistry {
    books: Vec<Book>,
}

impl BookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_isbn_mut(&mut self, isbn: &Isbn) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.isbn() == isbn)
    }
}

impl BookQuery for BookRegistry {
    fn find_by_isbn(&self, isbn: &Isbn) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn() == isbn)
    }

    fn find_by_query<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Book> + 'a {
        self.books.iter().filter(move |book| book.matches(query))
    }

    fn find_all(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter()
    }
}

impl BookModifier for BookRegistry {
    fn create(&mut self, book: Book) -> &Book {
        if self.find_by_isbn(book.isbn()).is_some() {
            warn!(
                "Isbn {} already registered, new entry is shadowed by the first one",
                book.isbn().as_ref()
            );
        }
        debug!("Registering book: {book:?}");
        let index = self.books.len();
        self.books.push(book);
        &self.books[index]
    }

    fn update(&mut self, book: Book) -> error_stack::Result<(), KernelError> {
        let found = self.find_by_isbn_mut(book.isbn()).ok_or_else(|| {
            Report::new(KernelError::Internal)
                .attach_printable(format!("No book to update for isbn {}", book.isbn().as_ref()))
        })?;
        *found = book;
        Ok(())
    }
}
