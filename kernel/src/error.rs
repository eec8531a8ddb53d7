use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    /// The requested isbn is not in the catalog.
    NotFound,
    /// The book is currently on loan.
    NotAvailable,
    /// No active loan exists for the isbn.
    NotCheckedOut,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotFound => write!(f, "Book not found"),
            KernelError::NotAvailable => write!(f, "Book is not available"),
            KernelError::NotCheckedOut => write!(f, "Book is not checked out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
