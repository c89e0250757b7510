use crate::utils::error::{BottlError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

static DATE_SYNTAX: OnceLock<Regex> = OnceLock::new();

/// `YYYY-M-D` after separator normalization. Calendar plausibility is checked
/// separately; this only gates the shape of the string.
pub fn date_syntax() -> &'static Regex {
    DATE_SYNTAX.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").expect("date syntax pattern is valid")
    })
}

pub fn validate_date_syntax(field_name: &str, value: &str) -> Result<()> {
    if !date_syntax().is_match(value) {
        return Err(BottlError::invalid_input(
            value,
            format!("{} must use the YYYY-MM-DD format", field_name),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BottlError::invalid_input(
            value,
            format!("{} cannot be empty or whitespace-only", field_name),
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(BottlError::invalid_date(
            value.to_string(),
            format!("{} must be between {} and {}", field_name, min, max),
        ));
    }
    Ok(())
}
