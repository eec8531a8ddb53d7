
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq)]
pub enum BookStatus {
    #[default]
    Available,
    OnLoan,
}

impl BookStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, BookStatus::Available)
    }
}
