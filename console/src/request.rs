mod book;
mod loan;

use error_stack::Report;

use crate::error::InputError;

pub use self::{book::*, loan::*};

fn require_isbn(isbn: &str) -> error_stack::Result<String, InputError> {
    let isbn = isbn.trim();
    if isbn.is_empty() {
        return Err(Report::new(InputError::BlankIsbn));
    }
    Ok(isbn.to_string())
}
