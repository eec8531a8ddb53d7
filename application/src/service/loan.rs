use error_stack::Report;
use tracing::{error, info, warn};

use kernel::interface::query::{BookQuery, DependOnBookQuery, DependOnLoanQuery, LoanQuery};
use kernel::interface::update::{
    BookModifier, DependOnBookModifier, DependOnLoanModifier, LoanModifier,
};
use kernel::prelude::entity::{
    BookStatus, BorrowerName, DaysLate, DestructLoan, DueAt, Fine, Isbn, Loan, ReturnReceipt,
};
use kernel::KernelError;

use crate::transfer::{CheckoutDto, GetLoanDto, LoanDto, ReturnDto, ReturnedDto};

pub trait GetLoanService: 'static + Sync + Send + DependOnLoanQuery {
    fn get_loan(&self, dto: &GetLoanDto) -> Option<LoanDto> {
        let isbn = Isbn::new(dto.isbn.as_str());
        self.loan_query()
            .find_by_isbn(&isbn)
            .cloned()
            .map(LoanDto::from)
    }

    fn get_all_loans(&self) -> Vec<LoanDto> {
        self.loan_query()
            .find_all()
            .cloned()
            .map(LoanDto::from)
            .collect()
    }
}

impl<T> GetLoanService for T where T: DependOnLoanQuery {}

pub trait CheckoutService:
    'static
    + Sync
    + Send
    + DependOnBookQuery
    + DependOnBookModifier
    + DependOnLoanQuery
    + DependOnLoanModifier
{
    /// Moves the book from available to on loan and opens a loan due [`LOAN_PERIOD`] after `now`.
    ///
    /// [`LOAN_PERIOD`]: kernel::prelude::entity::LOAN_PERIOD
    fn checkout(&mut self, dto: CheckoutDto) -> error_stack::Result<LoanDto, KernelError> {
        let isbn = Isbn::new(dto.isbn);

        let mut book = self
            .book_query()
            .find_by_isbn(&isbn)
            .cloned()
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("No book with isbn {}", isbn.as_ref()))
            })?;

        if !book.status().is_available() {
            warn!("Checkout of {} rejected, already on loan", isbn.as_ref());
            return Err(Report::new(KernelError::NotAvailable)
                .attach_printable(format!("Book {} is on loan", isbn.as_ref())));
        }

        if let Some(loan) = self.loan_query().find_by_isbn(&isbn) {
            error!("Available book {} has an open loan: {loan:?}", isbn.as_ref());
            return Err(Report::new(KernelError::Internal).attach_printable(format!(
                "Loan ledger out of sync with registry for isbn {}",
                isbn.as_ref()
            )));
        }

        let due_at = DueAt::from_checkout(dto.now)?;

        book.substitute(|book| *book.status = BookStatus::OnLoan);
        self.book_modifier().update(book)?;

        let loan = Loan::new(isbn, BorrowerName::new(dto.borrower), due_at);
        let loan = self.loan_modifier().create(loan).clone();
        info!(
            "Checked out {} to {} until {}",
            loan.isbn().as_ref(),
            loan.borrower().as_ref(),
            loan.due_at().as_ref()
        );

        Ok(LoanDto::from(loan))
    }
}

impl<T> CheckoutService for T where
    T: DependOnBookQuery + DependOnBookModifier + DependOnLoanQuery + DependOnLoanModifier
{
}

pub trait ReturnService:
    'static
    + Sync
    + Send
    + DependOnBookQuery
    + DependOnBookModifier
    + DependOnLoanQuery
    + DependOnLoanModifier
{
    /// Closes the loan on `isbn`, makes the book available again and assesses the fine.
    fn return_book(&mut self, dto: ReturnDto) -> error_stack::Result<ReturnedDto, KernelError> {
        let isbn = Isbn::new(dto.isbn);

        let loan = self
            .loan_query()
            .find_by_isbn(&isbn)
            .cloned()
            .ok_or_else(|| {
                Report::new(KernelError::NotCheckedOut)
                    .attach_printable(format!("No open loan for isbn {}", isbn.as_ref()))
            })?;

        let mut book = match self.book_query().find_by_isbn(&isbn).cloned() {
            Some(book) => book,
            None => {
                error!("Loan {loan:?} references a book missing from the registry");
                return Err(Report::new(KernelError::Internal).attach_printable(format!(
                    "Registry out of sync with loan ledger for isbn {}",
                    isbn.as_ref()
                )));
            }
        };

        book.substitute(|book| *book.status = BookStatus::Available);
        self.book_modifier().update(book)?;

        let days_late = DaysLate::between(loan.due_at(), &dto.now);
        let fine = Fine::assess(&days_late);

        self.loan_modifier().delete_by_isbn(&isbn);

        let DestructLoan { isbn, borrower, .. } = loan.into_destruct();
        match &fine {
            Some(fine) => info!(
                "{} returned {} {} day(s) late, fine {fine}",
                borrower.as_ref(),
                isbn.as_ref(),
                days_late.as_ref()
            ),
            None => info!("{} returned {} on time", borrower.as_ref(), isbn.as_ref()),
        }

        Ok(ReturnedDto::from(ReturnReceipt::new(
            isbn, borrower, days_late, fine,
        )))
    }
}

impl<T> ReturnService for T where
    T: DependOnBookQuery + DependOnBookModifier + DependOnLoanQuery + DependOnLoanModifier
{
}
