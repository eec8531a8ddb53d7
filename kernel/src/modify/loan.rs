use crate::entity::{Isbn, Loan};

pub trait LoanModifier: 'static + Sync + Send {
    fn create(&mut self, loan: Loan) -> &Loan;

    /// Removes every loan on `isbn`, returning how many were dropped.
    fn delete_by_isbn(&mut self, isbn: &Isbn) -> usize;
}

pub trait DependOnLoanModifier: 'static + Sync + Send {
    type LoanModifier: LoanModifier;
    fn loan_modifier(&mut self) -> &mut Self::LoanModifier;
}
