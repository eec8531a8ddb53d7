use crate::controller::{Exhaust, TryExhaust};
use application::transfer::{LoanDto, ReturnedDto};
use error_stack::{Report, ResultExt};
use kernel::KernelError;
use time::macros::format_description;
use time::OffsetDateTime;

/// `Thu Jan 15 00:00:00 1970`, always in UTC.
pub fn render_date(time: &OffsetDateTime) -> error_stack::Result<String, KernelError> {
    let format = format_description!(
        "[weekday repr:short] [month repr:short] [day padding:space] [hour]:[minute]:[second] [year]"
    );
    time.format(&format)
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| format!("Failed to format {time}"))
}

pub struct LoanPresenter {
    now: OffsetDateTime,
}

impl LoanPresenter {
    pub fn new(now: OffsetDateTime) -> Self {
        Self { now }
    }
}

impl TryExhaust<LoanDto> for LoanPresenter {
    type To = Vec<String>;
    type Error = Report<KernelError>;
    fn emit(&self, input: LoanDto) -> Result<Self::To, Self::Error> {
        let due = render_date(&input.due_at)?;
        Ok(vec![format!(
            "Book checked out successfully! Due date: {due}"
        )])
    }
}

impl TryExhaust<Vec<LoanDto>> for LoanPresenter {
    type To = Vec<String>;
    type Error = Report<KernelError>;
    fn emit(&self, input: Vec<LoanDto>) -> Result<Self::To, Self::Error> {
        let mut lines = vec!["Current Borrowers:".to_string()];
        for loan in input {
            let due = render_date(&loan.due_at)?;
            let marker = if self.now > loan.due_at {
                " (overdue)"
            } else {
                ""
            };
            lines.push(format!(
                "Name: {}, Borrowed Book ISBN: {}, Due Date: {due}{marker}",
                loan.borrower, loan.isbn
            ));
        }
        Ok(lines)
    }
}

pub struct ReturnPresenter;

impl Exhaust<ReturnedDto> for ReturnPresenter {
    type To = Vec<String>;
    fn emit(&self, input: ReturnedDto) -> Self::To {
        let verdict = match input.fine {
            Some(fine) => format!(
                "The book is overdue by {} days. Fine: ${fine:.2}",
                input.days_late
            ),
            None => "Book returned on time. No fine.".to_string(),
        };
        vec![verdict, "Book returned successfully!".to_string()]
    }
}
