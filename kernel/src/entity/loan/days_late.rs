use time::OffsetDateTime;
use vodca::{AsRefln, Fromln};

use crate::entity::DueAt;

/// Whole days between the due date and the return, truncated toward zero.
/// Negative when returned early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct DaysLate(i64);

impl DaysLate {
    pub fn new(days: impl Into<i64>) -> Self {
        Self(days.into())
    }

    pub fn between(due_at: &DueAt, returned_at: &OffsetDateTime) -> Self {
        Self((*returned_at - *due_at.as_ref()).whole_days())
    }

    pub fn is_late(&self) -> bool {
        self.0 > 0
    }
}
