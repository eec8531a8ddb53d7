mod borrower;
mod days_late;
mod due_at;
mod fine;
mod receipt;

pub use self::{borrower::*, days_late::*, due_at::*, fine::*, receipt::*};
use destructure::Destructure;
use vodca::References;

use crate::entity::Isbn;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Loan {
    isbn: Isbn,
    borrower: BorrowerName,
    due_at: DueAt,
}

impl Loan {
    pub fn new(isbn: Isbn, borrower: BorrowerName, due_at: DueAt) -> Self {
        Self {
            isbn,
            borrower,
            due_at,
        }
    }
}
