use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub available: bool,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            isbn,
            title,
            author,
            status,
        } = value.into_destruct();
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            available: status.is_available(),
        }
    }
}

pub struct GetBookDto {
    pub isbn: String,
}

pub struct SearchBookDto {
    pub query: String,
}

pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
}
