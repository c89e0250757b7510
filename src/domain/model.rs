use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A date in the Jalali (Shamsi) calendar. Construct through
/// [`crate::core::jalali::jalali_date`] so the component ranges are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Elapsed time between two dates, the way people state an age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Everything the age card renders for one birthdate.
#[derive(Debug, Clone, Copy)]
pub struct AgeReport {
    pub born: NaiveDate,
    pub as_of: NaiveDate,
    pub breakdown: AgeBreakdown,
    pub next_birthday: NaiveDate,
    pub days_until_birthday: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jalali_date_displays_zero_padded() {
        let d = JalaliDate {
            year: 1370,
            month: 4,
            day: 24,
        };
        assert_eq!(d.to_string(), "1370-04-24");
    }
}
