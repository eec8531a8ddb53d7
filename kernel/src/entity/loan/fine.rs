use std::fmt::{Display, Formatter};

use vodca::{AsRefln, Fromln};

use crate::entity::DaysLate;

/// 0.50 per day, in cents.
pub const FINE_PER_DAY: i64 = 50;

/// Overdue penalty held in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct Fine(i64);

impl Fine {
    pub fn new(cents: impl Into<i64>) -> Self {
        Self(cents.into())
    }

    /// `None` unless the loan came back at least one whole day late.
    pub fn assess(days_late: &DaysLate) -> Option<Self> {
        days_late
            .is_late()
            .then(|| Self(days_late.as_ref().saturating_mul(FINE_PER_DAY)))
    }

    pub fn amount(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Display for Fine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{sign}${}.{:02}", cents / 100, cents % 100)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn half_unit_per_day() {
        for k in 1..=40_i64 {
            let fine = Fine::assess(&DaysLate::new(k)).map(|fine| fine.amount());
            assert_eq!(fine, Some(k as f64 * 0.5));
        }
    }

    #[test]
    fn nothing_when_not_late() {
        assert_eq!(Fine::assess(&DaysLate::new(0)), None);
        assert_eq!(Fine::assess(&DaysLate::new(-3)), None);
    }

    #[test]
    fn displays_as_currency() {
        assert_eq!(Fine::new(50).to_string(), "$0.50");
        assert_eq!(Fine::new(300).to_string(), "$3.00");
        assert_eq!(Fine::new(1250).to_string(), "$12.50");
    }

    #[test]
    fn negative_amount_keeps_sign_outside() {
        assert_eq!(Fine::new(-50).to_string(), "-$0.50");
        assert_eq!(Fine::new(-1205).to_string(), "-$12.05");
        assert_eq!(Fine::new(i64::MIN).to_string(), "-$92233720368547758.08");
    }
}
