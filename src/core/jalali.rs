//! Jalali (Shamsi) calendar arithmetic. Uses the classic 33-year-cycle
//! day-count algorithm, so no calendar backend crate is needed. Valid from
//! the Jalali epoch alignment at Gregorian 1600-03-20 (Jalali 979-01-01).

use crate::core::age::is_leap_year;
use crate::domain::model::JalaliDate;
use crate::utils::error::{BottlError, Result};
use crate::utils::validation::validate_range;
use chrono::{Datelike, NaiveDate};

const G_DAYS_IN_MONTH: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const J_DAYS_IN_MONTH: [i64; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Leap days accumulated over `years` Jalali years since the cycle origin.
fn cycle_leap_days(years: i64) -> i64 {
    (years / 33) * 8 + ((years % 33) + 3) / 4
}

pub fn is_jalali_leap_year(year: i32) -> bool {
    let y = (year - 979) as i64;
    cycle_leap_days(y + 1) - cycle_leap_days(y) == 1
}

/// Month lengths for months 1..=12; Esfand gains a day in leap years.
pub fn days_in_jalali_month(year: i32, month: u32) -> u32 {
    if month == 12 && is_jalali_leap_year(year) {
        30
    } else {
        J_DAYS_IN_MONTH[(month - 1) as usize] as u32
    }
}

/// Range-checked constructor for [`JalaliDate`].
pub fn jalali_date(year: i32, month: u32, day: u32) -> Result<JalaliDate> {
    validate_range("year", year, 979, 9377)?;
    validate_range("month", month, 1, 12)?;
    let last = days_in_jalali_month(year, month);
    if day < 1 || day > last {
        return Err(BottlError::invalid_date(
            format!("{:04}-{:02}-{:02}", year, month, day),
            format!("month {} of year {} has {} days", month, year, last),
        ));
    }
    Ok(JalaliDate { year, month, day })
}

pub fn to_gregorian(jalali: JalaliDate) -> Result<NaiveDate> {
    let jy = (jalali.year - 979) as i64;
    let mut day_no = 365 * jy + cycle_leap_days(jy);
    for length in &J_DAYS_IN_MONTH[..(jalali.month - 1) as usize] {
        day_no += length;
    }
    day_no += (jalali.day - 1) as i64;

    let mut g_day_no = day_no + 79;
    let mut gy = 1600 + 400 * (g_day_no / 146097);
    g_day_no %= 146097;

    let mut leap = true;
    if g_day_no >= 36525 {
        g_day_no -= 1;
        gy += 100 * (g_day_no / 36524);
        g_day_no %= 36524;
        if g_day_no >= 365 {
            g_day_no += 1;
        } else {
            leap = false;
        }
    }
    gy += 4 * (g_day_no / 1461);
    g_day_no %= 1461;
    if g_day_no >= 366 {
        leap = false;
        g_day_no -= 1;
        gy += g_day_no / 365;
        g_day_no %= 365;
    }

    let mut month = 0usize;
    loop {
        let length = G_DAYS_IN_MONTH[month] + i64::from(month == 1 && leap);
        if g_day_no < length {
            break;
        }
        g_day_no -= length;
        month += 1;
    }

    NaiveDate::from_ymd_opt(gy as i32, (month + 1) as u32, (g_day_no + 1) as u32).ok_or_else(
        || BottlError::invalid_date(jalali.to_string(), "conversion left the Gregorian range"),
    )
}

pub fn from_gregorian(gregorian: NaiveDate) -> Result<JalaliDate> {
    let gy = (gregorian.year() - 1600) as i64;
    let mut g_day_no = 365 * gy + (gy + 3) / 4 - (gy + 99) / 100 + (gy + 399) / 400;
    for length in &G_DAYS_IN_MONTH[..(gregorian.month() - 1) as usize] {
        g_day_no += length;
    }
    if gregorian.month() > 2 && is_leap_year(gregorian.year()) {
        g_day_no += 1;
    }
    g_day_no += (gregorian.day() - 1) as i64;

    let mut day_no = g_day_no - 79;
    if day_no < 0 {
        return Err(BottlError::invalid_date(
            gregorian.to_string(),
            "date precedes the Jalali epoch (1600-03-20)",
        ));
    }

    let cycles = day_no / 12053; // 33 Jalali years
    day_no %= 12053;
    let mut year = 979 + 33 * cycles + 4 * (day_no / 1461);
    day_no %= 1461;
    if day_no >= 366 {
        year += (day_no - 1) / 365;
        day_no = (day_no - 1) % 365;
    }

    let mut month = 0usize;
    while month < 11 && day_no >= J_DAYS_IN_MONTH[month] {
        day_no -= J_DAYS_IN_MONTH[month];
        month += 1;
    }

    Ok(JalaliDate {
        year: year as i32,
        month: (month + 1) as u32,
        day: (day_no + 1) as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn nowruz_alignment() {
        assert_eq!(from_gregorian(g(2025, 3, 21)).unwrap(), JalaliDate { year: 1404, month: 1, day: 1 });
        assert_eq!(from_gregorian(g(2024, 3, 20)).unwrap(), JalaliDate { year: 1403, month: 1, day: 1 });
        assert_eq!(from_gregorian(g(2021, 3, 21)).unwrap(), JalaliDate { year: 1400, month: 1, day: 1 });
        assert_eq!(from_gregorian(g(2012, 3, 20)).unwrap(), JalaliDate { year: 1391, month: 1, day: 1 });
    }

    #[test]
    fn known_pairs_convert_both_ways() {
        let pairs = [
            ((1991, 7, 15), (1370, 4, 24)),
            ((2000, 2, 29), (1378, 12, 10)),
            ((2025, 1, 1), (1403, 10, 12)),
            ((2025, 12, 31), (1404, 10, 10)),
            ((2025, 8, 27), (1404, 6, 5)),
        ];
        for ((gy, gm, gd), (jy, jm, jd)) in pairs {
            let jalali = jalali_date(jy, jm, jd).unwrap();
            assert_eq!(from_gregorian(g(gy, gm, gd)).unwrap(), jalali);
            assert_eq!(to_gregorian(jalali).unwrap(), g(gy, gm, gd));
        }
    }

    #[test]
    fn leap_years_follow_the_33_year_cycle() {
        for year in [1370, 1399, 1403, 1408] {
            assert!(is_jalali_leap_year(year), "{} should be leap", year);
        }
        for year in [1400, 1404] {
            assert!(!is_jalali_leap_year(year), "{} should be common", year);
        }
    }

    #[test]
    fn esfand_length_depends_on_leap() {
        assert_eq!(days_in_jalali_month(1403, 12), 30);
        assert_eq!(days_in_jalali_month(1404, 12), 29);
        assert_eq!(days_in_jalali_month(1404, 6), 31);
        assert_eq!(days_in_jalali_month(1404, 7), 30);
    }

    #[test]
    fn leap_esfand_30_is_valid_and_converts() {
        let d = jalali_date(1403, 12, 30).unwrap();
        assert_eq!(to_gregorian(d).unwrap(), g(2025, 3, 20));
        assert!(jalali_date(1404, 12, 30).is_err());
    }

    #[test]
    fn component_ranges_are_enforced() {
        assert!(jalali_date(1404, 13, 1).is_err());
        assert!(jalali_date(1404, 0, 1).is_err());
        assert!(jalali_date(1404, 1, 32).is_err());
        assert!(jalali_date(1404, 1, 0).is_err());
        assert!(jalali_date(100, 1, 1).is_err());
    }

    #[test]
    fn pre_epoch_gregorian_dates_are_rejected() {
        assert!(from_gregorian(g(1600, 3, 19)).is_err());
        assert!(from_gregorian(g(1600, 3, 20)).is_ok());
    }
}
