use crate::core::jalali;
use crate::domain::model::JalaliDate;
use crate::utils::error::{BottlError, Result};
use crate::utils::validation::date_syntax;
use chrono::NaiveDate;

/// Maps Persian (U+06F0..U+06F9) and Arabic-Indic (U+0660..U+0669) digits to
/// ASCII so `۱۳۷۰` parses like `1370`.
pub fn normalize_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '۰'..='۹' => (b'0' + (c as u32 - '۰' as u32) as u8) as char,
            '٠'..='٩' => (b'0' + (c as u32 - '٠' as u32) as u8) as char,
            _ => c,
        })
        .collect()
}

/// Accepts `/` and `.` as date separators.
pub fn normalize_separators(input: &str) -> String {
    input.trim().replace(['/', '.'], "-")
}

/// Birth year for the core age computation: a plain integer, with digit
/// normalization applied first.
pub fn parse_birth_year(raw: &str) -> Result<i32> {
    let cleaned = normalize_digits(raw).trim().to_string();
    if cleaned.is_empty() {
        return Err(BottlError::invalid_input(raw, "birth year is empty"));
    }
    cleaned
        .parse::<i32>()
        .map_err(|_| BottlError::invalid_input(raw, "birth year must be a whole number"))
}

fn split_components(normalized: &str, raw: &str) -> Result<(i32, u32, u32)> {
    if !date_syntax().is_match(normalized) {
        return Err(BottlError::invalid_input(
            raw,
            "use the YYYY-MM-DD format, e.g. 1990-07-15",
        ));
    }
    let mut parts = normalized.split('-');
    // The regex guarantees three numeric fields of bounded width.
    let year = parts.next().unwrap_or_default().parse::<i32>();
    let month = parts.next().unwrap_or_default().parse::<u32>();
    let day = parts.next().unwrap_or_default().parse::<u32>();
    match (year, month, day) {
        (Ok(y), Ok(m), Ok(d)) => Ok((y, m, d)),
        _ => Err(BottlError::invalid_input(raw, "date components overflow")),
    }
}

pub fn parse_gregorian(raw: &str) -> Result<NaiveDate> {
    let normalized = normalize_separators(&normalize_digits(raw));
    let (year, month, day) = split_components(&normalized, raw)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        BottlError::invalid_date(
            normalized.clone(),
            "no such day in the Gregorian calendar",
        )
    })
}

pub fn parse_jalali(raw: &str) -> Result<JalaliDate> {
    let normalized = normalize_separators(&normalize_digits(raw));
    let (year, month, day) = split_components(&normalized, raw)?;
    jalali::jalali_date(year, month, day)
}
