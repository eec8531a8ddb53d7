use crate::entity::Book;
use crate::KernelError;

pub trait BookModifier: 'static + Sync + Send {
    /// Appends the entry. Duplicate isbns are accepted and shadowed by the first one.
    fn create(&mut self, book: Book) -> &Book;

    /// Replaces the first entry sharing `book`'s isbn.
    fn update(&mut self, book: Book) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookModifier: 'static + Sync + Send {
    type BookModifier: BookModifier;
    fn book_modifier(&mut self) -> &mut Self::BookModifier;
}
