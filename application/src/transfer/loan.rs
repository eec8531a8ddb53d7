use kernel::prelude::entity::{DestructLoan, DestructReturnReceipt, Loan, ReturnReceipt};
use time::OffsetDateTime;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LoanDto {
    pub isbn: String,
    pub borrower: String,
    pub due_at: OffsetDateTime,
}

impl From<Loan> for LoanDto {
    fn from(value: Loan) -> Self {
        let DestructLoan {
            isbn,
            borrower,
            due_at,
        } = value.into_destruct();
        Self {
            isbn: isbn.into(),
            borrower: borrower.into(),
            due_at: due_at.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnedDto {
    pub isbn: String,
    pub borrower: String,
    pub days_late: i64,
    /// Present only when `days_late` is positive.
    pub fine: Option<f64>,
}

impl From<ReturnReceipt> for ReturnedDto {
    fn from(value: ReturnReceipt) -> Self {
        let DestructReturnReceipt {
            isbn,
            borrower,
            days_late,
            fine,
        } = value.into_destruct();
        Self {
            isbn: isbn.into(),
            borrower: borrower.into(),
            days_late: days_late.into(),
            fine: fine.map(|fine| fine.amount()),
        }
    }
}

pub struct GetLoanDto {
    pub isbn: String,
}

pub struct CheckoutDto {
    pub isbn: String,
    pub borrower: String,
    pub now: OffsetDateTime,
}

pub struct ReturnDto {
    pub isbn: String,
    pub now: OffsetDateTime,
}
