use crate::entity::{Isbn, Loan};

pub trait LoanQuery: 'static + Sync + Send {
    fn find_by_isbn(&self, isbn: &Isbn) -> Option<&Loan>;

    fn find_all(&self) -> impl Iterator<Item = &Loan> + '_;
}

pub trait DependOnLoanQuery: 'static + Sync + Send {
    type LoanQuery: LoanQuery;
    fn loan_query(&self) -> &Self::LoanQuery;
}
