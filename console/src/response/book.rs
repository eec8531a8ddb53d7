use crate::controller::Exhaust;
use application::transfer::BookDto;

fn describe(book: &BookDto) -> String {
    format!(
        "Title: {}, Author: {}, ISBN: {}",
        book.title, book.author, book.isbn
    )
}

pub struct BookPresenter;

impl Exhaust<BookDto> for BookPresenter {
    type To = Vec<String>;
    fn emit(&self, _: BookDto) -> Self::To {
        vec!["Book added successfully!".to_string()]
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = Vec<String>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        let rows = input.iter().map(|book| {
            let available = if book.available { "Yes" } else { "No" };
            format!("{}, Available: {available}", describe(book))
        });
        std::iter::once("Books in the Library:".to_string())
            .chain(rows)
            .collect()
    }
}

pub struct SearchPresenter;

impl Exhaust<Vec<BookDto>> for SearchPresenter {
    type To = Vec<String>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        if input.is_empty() {
            return vec!["No books found matching your search query.".to_string()];
        }
        input
            .iter()
            .flat_map(|book| ["Book found!".to_string(), describe(book)])
            .collect()
    }
}
