pub mod console;
pub mod menu;
pub mod render;

use crate::config::Settings;
use crate::core::{age, parse};
use crate::domain::ports::Console;
use crate::i18n::{tr, Msg};
use crate::utils::error::{BottlError, Result};

/// The one-shot surface: read a birth year (prompted, or passed as a flag)
/// and print the whole-year age as a plain integer. Returns the age so tests
/// can assert on it.
pub fn run_one_shot(
    console: &mut impl Console,
    settings: &Settings,
    birth_year_arg: Option<&str>,
) -> Result<i32> {
    let raw = match birth_year_arg {
        Some(value) => value.to_string(),
        None => self::prompt_birth_year(console, settings)?,
    };
    let birth_year = parse::parse_birth_year(&raw)?;
    let computed = age::age_in_years(birth_year);
    tracing::debug!("birth_year={} age={}", birth_year, computed);
    console.print_line(&computed.to_string());
    Ok(computed)
}

fn prompt_birth_year(console: &mut impl Console, settings: &Settings) -> Result<String> {
    console
        .read_line(tr(settings.lang, Msg::EnterBirthYear))?
        .ok_or_else(|| BottlError::invalid_input("", "birth year is empty"))
}
