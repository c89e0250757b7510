use crate::domain::model::{AgeBreakdown, AgeReport};
use crate::utils::error::{BottlError, Result};
use chrono::{Datelike, NaiveDate};

/// The year every age is computed against. Deliberately a literal rather than
/// the system clock; this mirrors the original tool and keeps runs
/// reproducible. `--as-of` overrides the anchor date for the breakdown flows.
pub const REFERENCE_YEAR: i32 = 2025;

/// Default anchor for the date-based flows: January 1 of the reference year.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, 1, 1).expect("reference date literal is valid")
}

/// The core contract: whole-year age relative to [`REFERENCE_YEAR`]. Future
/// birth years yield a negative age on purpose.
pub fn age_in_years(birth_year: i32) -> i32 {
    REFERENCE_YEAR - birth_year
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Month lengths for months 1..=12; callers validate the month first.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Precise age as (years, months, days), borrowing days from the previous
/// month and months from the year.
pub fn age_breakdown(born: NaiveDate, as_of: NaiveDate) -> Result<AgeBreakdown> {
    if born > as_of {
        return Err(BottlError::FutureBirthdate {
            born: born.to_string(),
            as_of: as_of.to_string(),
        });
    }

    let mut years = as_of.year() - born.year();
    let mut months = as_of.month() as i32 - born.month() as i32;
    let mut days = as_of.day() as i32 - born.day() as i32;

    if days < 0 {
        let (prev_year, prev_month) = if as_of.month() == 1 {
            (as_of.year() - 1, 12)
        } else {
            (as_of.year(), as_of.month() - 1)
        };
        days += days_in_month(prev_year, prev_month) as i32;
        months -= 1;
    }
    if months < 0 {
        months += 12;
        years -= 1;
    }

    Ok(AgeBreakdown { years, months, days })
}

/// Next occurrence of the birthday strictly after `as_of`. A Feb 29 birthday
/// falls on Feb 28 in common years.
pub fn next_birthday_after(born: NaiveDate, as_of: NaiveDate) -> NaiveDate {
    let on_year = |year: i32| {
        let day = born.day().min(days_in_month(year, born.month()));
        NaiveDate::from_ymd_opt(year, born.month(), day)
            .expect("clamped day always forms a valid date")
    };
    let candidate = on_year(as_of.year());
    if candidate <= as_of {
        on_year(as_of.year() + 1)
    } else {
        candidate
    }
}

pub fn days_until_next_birthday(born: NaiveDate, as_of: NaiveDate) -> i64 {
    (next_birthday_after(born, as_of) - as_of).num_days()
}

/// Bundles everything the age card shows.
pub fn age_report(born: NaiveDate, as_of: NaiveDate) -> Result<AgeReport> {
    let breakdown = age_breakdown(born, as_of)?;
    let next_birthday = next_birthday_after(born, as_of);
    Ok(AgeReport {
        born,
        as_of,
        breakdown,
        next_birthday,
        days_until_birthday: (next_birthday - as_of).num_days(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn whole_year_age_is_reference_minus_birth_year() {
        assert_eq!(age_in_years(2000), 25);
        assert_eq!(age_in_years(2025), 0);
        assert_eq!(age_in_years(2030), -5);
    }

    #[test]
    fn breakdown_borrows_days_and_months() {
        let b = age_breakdown(d(1990, 7, 15), d(2025, 1, 1)).unwrap();
        assert_eq!((b.years, b.months, b.days), (34, 5, 17));
    }

    #[test]
    fn breakdown_on_the_birthday_itself() {
        let b = age_breakdown(d(1990, 7, 15), d(2020, 7, 15)).unwrap();
        assert_eq!((b.years, b.months, b.days), (30, 0, 0));
    }

    #[test]
    fn breakdown_rejects_future_birthdates() {
        assert!(age_breakdown(d(2030, 1, 1), d(2025, 1, 1)).is_err());
    }

    #[test]
    fn leap_day_birthday_clamps_in_common_years() {
        let born = d(2000, 2, 29);
        assert_eq!(next_birthday_after(born, d(2025, 1, 1)), d(2025, 2, 28));
        assert_eq!(next_birthday_after(born, d(2024, 1, 1)), d(2024, 2, 29));
        assert_eq!(days_until_next_birthday(born, d(2025, 1, 1)), 58);
    }

    #[test]
    fn birthday_already_passed_rolls_to_next_year() {
        let born = d(1990, 7, 15);
        assert_eq!(next_birthday_after(born, d(2025, 7, 15)), d(2026, 7, 15));
        assert_eq!(next_birthday_after(born, d(2025, 7, 14)), d(2025, 7, 15));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2025, 4), 30);
    }
}
