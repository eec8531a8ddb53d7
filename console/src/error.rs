use error_stack::{Context, Report};
use kernel::KernelError;
use std::fmt::{Display, Formatter};
use std::process::{ExitCode, Termination};
use tracing::debug;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Answers refused before they reach the catalog.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputError {
    BlankIsbn,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::BlankIsbn => write!(f, "ISBN must not be empty."),
        }
    }
}

impl Context for InputError {}

#[derive(Debug)]
pub struct ErrorNotice(Report<KernelError>);

impl From<Report<KernelError>> for ErrorNotice {
    fn from(e: Report<KernelError>) -> Self {
        ErrorNotice(e)
    }
}

impl ErrorNotice {
    /// Message shown for a recoverable failure.
    /// Internal errors are handed back to abort the session.
    pub fn into_notice(self) -> Result<&'static str, Report<KernelError>> {
        let context = *self.0.current_context();
        let notice = match context {
            KernelError::NotFound | KernelError::NotAvailable => {
                "This book is either not available or doesn't exist."
            }
            KernelError::NotCheckedOut => "This book was not checked out!",
            KernelError::Internal => return Err(self.0),
        };
        debug!("{:?}", self.0);
        Ok(notice)
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use application::service::{CheckoutService, CreateBookService};
    use application::transfer::{CheckoutDto, CreateBookDto};
    use driver::database::Catalog;
    use time::OffsetDateTime;
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    use super::{ErrorNotice, InputError};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;
        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn checkout(borrower: &str) -> CheckoutDto {
        CheckoutDto {
            isbn: "ISBN1".to_string(),
            borrower: borrower.to_string(),
            now: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn rejected_checkout_warns_once() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::WARN)
            .with_ansi(false)
            .with_writer(captured.clone())
            .finish();

        let notice = tracing::subscriber::with_default(subscriber, || {
            let mut catalog = Catalog::new();
            catalog.create_book(CreateBookDto {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                isbn: "ISBN1".to_string(),
            });
            catalog.checkout(checkout("Alice")).unwrap();
            let report = catalog.checkout(checkout("Bob")).unwrap_err();
            ErrorNotice::from(report).into_notice()
        });

        assert_eq!(
            notice.unwrap(),
            "This book is either not available or doesn't exist."
        );
        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logs.matches("WARN").count(), 1);
    }

    #[test]
    fn blank_isbn_message() {
        assert_eq!(InputError::BlankIsbn.to_string(), "ISBN must not be empty.");
    }
}
