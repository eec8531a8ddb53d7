mod author;
mod isbn;
mod status;
mod title;

pub use self::{author::*, isbn::*, status::*, title::*};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    isbn: Isbn,
    title: BookTitle,
    author: BookAuthor,
    status: BookStatus,
}

impl Book {
    pub fn new(isbn: Isbn, title: BookTitle, author: BookAuthor, status: BookStatus) -> Self {
        Self {
            isbn,
            title,
            author,
            status,
        }
    }

    /// Exact comparison against title, author or isbn. No substring or case folding.
    pub fn matches(&self, query: &str) -> bool {
        self.title.as_ref() == query || self.author.as_ref() == query || self.isbn.as_ref() == query
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn dune() -> Book {
        Book::new(
            Isbn::new("ISBN1"),
            BookTitle::new("Dune"),
            BookAuthor::new("Frank Herbert"),
            BookStatus::Available,
        )
    }

    #[test]
    fn matches_each_field_exactly() {
        let book = dune();
        assert!(book.matches("Dune"));
        assert!(book.matches("Frank Herbert"));
        assert!(book.matches("ISBN1"));
    }

    #[test]
    fn rejects_partial_and_case_variants() {
        let book = dune();
        assert!(!book.matches("Dun"));
        assert!(!book.matches("dune"));
        assert!(!book.matches("Herbert"));
        assert!(!book.matches(""));
    }

    #[test]
    fn substitute_flips_status() {
        let mut book = dune();
        book.substitute(|book| *book.status = BookStatus::OnLoan);
        assert_eq!(book.status(), &BookStatus::OnLoan);
        assert_eq!(book.isbn(), &Isbn::new("ISBN1"));
    }
}
