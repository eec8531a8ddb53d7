use tracing::debug;

use kernel::interface::query::LoanQuery;
use kernel::interface::update::LoanModifier;
use kernel::prelude::entity::{Isbn, Loan};

/// Active loans in the order they were opened.
#[derive(Debug, Default, Clone)]
pub struct LoanLedger {
    loans: Vec<Loan>,
}

impl LoanLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoanQuery for LoanLedger {
    fn find_by_isbn(&self, isbn: &Isbn) -> Option<&Loan> {
        self.loans.iter().find(|loan| loan.isbn() == isbn)
    }

    fn find_all(&self) -> impl Iterator<Item = &Loan> + '_ {
        self.loans.iter()
    }
}

impl LoanModifier for LoanLedger {
    fn create(&mut self, loan: Loan) -> &Loan {
        debug!("Opening loan: {loan:?}");
        let index = self.loans.len();
        self.loans.push(loan);
        &self.loans[index]
    }

    fn delete_by_isbn(&mut self, isbn: &Isbn) -> usize {
        let before = self.loans.len();
        self.loans.retain(|loan| loan.isbn() != isbn);
        let removed = before - self.loans.len();
        debug!("Closed {removed} loan(s) for isbn {}", isbn.as_ref());
        removed
    }
}
