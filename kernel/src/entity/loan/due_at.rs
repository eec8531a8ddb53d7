use error_stack::Report;
use time::{Duration, OffsetDateTime};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

/// How long a checkout lasts before fines accrue.
pub const LOAN_PERIOD: Duration = Duration::days(14);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct DueAt(OffsetDateTime);

impl DueAt {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }

    pub fn from_checkout(checked_out_at: OffsetDateTime) -> error_stack::Result<Self, KernelError> {
        checked_out_at
            .checked_add(LOAN_PERIOD)
            .map(Self)
            .ok_or_else(|| {
                Report::new(KernelError::Internal).attach_printable(format!(
                    "Due date out of range: {checked_out_at} + {LOAN_PERIOD}"
                ))
            })
    }
}
