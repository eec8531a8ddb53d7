use destructure::Destructure;
use vodca::References;

use crate::entity::{BorrowerName, DaysLate, Fine, Isbn};

/// Outcome of closing a loan.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct ReturnReceipt {
    isbn: Isbn,
    borrower: BorrowerName,
    days_late: DaysLate,
    fine: Option<Fine>,
}

impl ReturnReceipt {
    pub fn new(
        isbn: Isbn,
        borrower: BorrowerName,
        days_late: DaysLate,
        fine: Option<Fine>,
    ) -> Self {
        Self {
            isbn,
            borrower,
            days_late,
            fine,
        }
    }
}
