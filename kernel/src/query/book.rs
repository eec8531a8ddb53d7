use crate::entity::{Book, Isbn};

pub trait BookQuery: 'static + Sync + Send {
    /// First entry in insertion order carrying this isbn.
    fn find_by_isbn(&self, isbn: &Isbn) -> Option<&Book>;

    /// Entries whose title, author or isbn equals `query` exactly.
    fn find_by_query<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Book> + 'a;

    fn find_all(&self) -> impl Iterator<Item = &Book> + '_;
}

pub trait DependOnBookQuery: 'static + Sync + Send {
    type BookQuery: BookQuery;
    fn book_query(&self) -> &Self::BookQuery;
}
