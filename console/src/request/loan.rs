use crate::controller::TryIntake;
use crate::error::InputError;
use crate::request::require_isbn;
use application::transfer::{CheckoutDto, ReturnDto};
use error_stack::Report;
use time::OffsetDateTime;

#[derive(Debug)]
pub struct CheckoutRequest {
    pub isbn: String,
    pub borrower: String,
}

#[derive(Debug)]
pub struct ReturnRequest {
    pub isbn: String,
}

pub struct LoanTransformer {
    now: OffsetDateTime,
}

impl LoanTransformer {
    pub fn new(now: OffsetDateTime) -> Self {
        Self { now }
    }
}

impl TryIntake<CheckoutRequest> for LoanTransformer {
    type To = CheckoutDto;
    type Error = Report<InputError>;
    fn emit(
        &self,
        CheckoutRequest { isbn, borrower }: CheckoutRequest,
    ) -> Result<Self::To, Self::Error> {
        Ok(CheckoutDto {
            isbn: require_isbn(&isbn)?,
            borrower,
            now: self.now,
        })
    }
}

impl TryIntake<ReturnRequest> for LoanTransformer {
    type To = ReturnDto;
    type Error = Report<InputError>;
    fn emit(&self, ReturnRequest { isbn }: ReturnRequest) -> Result<Self::To, Self::Error> {
        Ok(ReturnDto {
            isbn: require_isbn(&isbn)?,
            now: self.now,
        })
    }
}
