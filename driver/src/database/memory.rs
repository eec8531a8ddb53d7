use kernel::interface::query::{DependOnBookQuery, DependOnLoanQuery};
use kernel::interface::update::{DependOnBookModifier, DependOnLoanModifier};

pub use self::{book::*, loan::*};

mod book;
mod loan;

/// Owns every book and loan for the lifetime of the process.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    books: BookRegistry,
    loans: LoanLedger,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DependOnBookQuery for Catalog {
    type BookQuery = BookRegistry;
    fn book_query(&self) -> &Self::BookQuery {
        &self.books
    }
}

impl DependOnBookModifier for Catalog {
    type BookModifier = BookRegistry;
    fn book_modifier(&mut self) -> &mut Self::BookModifier {
        &mut self.books
    }
}

impl DependOnLoanQuery for Catalog {
    type LoanQuery = LoanLedger;
    fn loan_query(&self) -> &Self::LoanQuery {
        &self.loans
    }
}

impl DependOnLoanModifier for Catalog {
    type LoanModifier = LoanLedger;
    fn loan_modifier(&mut self) -> &mut Self::LoanModifier {
        &mut self.loans
    }
}
