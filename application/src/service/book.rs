use tracing::{debug, info};

use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, BookAuthor, BookStatus, BookTitle, Isbn};

use crate::transfer::{BookDto, CreateBookDto, GetBookDto, SearchBookDto};

pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    fn get_book(&self, dto: &GetBookDto) -> Option<BookDto> {
        let isbn = Isbn::new(dto.isbn.as_str());
        let book = self.book_query().find_by_isbn(&isbn).cloned();
        debug!("Lookup {}: {book:?}", dto.isbn);
        book.map(BookDto::from)
    }

    fn get_all_books(&self) -> Vec<BookDto> {
        self.book_query()
            .find_all()
            .cloned()
            .map(BookDto::from)
            .collect()
    }

    fn search_books(&self, dto: &SearchBookDto) -> Vec<BookDto> {
        let found = self
            .book_query()
            .find_by_query(&dto.query)
            .cloned()
            .map(BookDto::from)
            .collect::<Vec<_>>();
        debug!("Search {:?} matched {} book(s)", dto.query, found.len());
        found
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    fn create_book(&mut self, dto: CreateBookDto) -> BookDto {
        let book = Book::new(
            Isbn::new(dto.isbn),
            BookTitle::new(dto.title),
            BookAuthor::new(dto.author),
            BookStatus::Available,
        );
        let created = self.book_modifier().create(book).clone();
        info!("Added book {}", created.isbn().as_ref());
        BookDto::from(created)
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}
