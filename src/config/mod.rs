pub mod file;

use crate::core::{age, parse};
use crate::i18n::Lang;
use crate::utils::error::Result;
use crate::utils::validation::{validate_date_syntax, validate_non_empty_string, Validate};
use chrono::NaiveDate;
use clap::Parser;
use file::FileConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "bottl")]
#[command(about = "Age & calendar toolkit for Gregorian and Jalali dates")]
pub struct CliConfig {
    /// Birth year for a non-interactive run; omitted, it is prompted for.
    /// Kept as text so bad values go through the normal input-error path
    /// instead of a clap usage error.
    #[arg(long)]
    pub birth_year: Option<String>,

    /// Start the full interactive menu instead of the one-shot prompt.
    #[arg(long)]
    pub menu: bool,

    #[arg(long, value_enum)]
    pub lang: Option<Lang>,

    /// Anchor date (YYYY-MM-DD) for the date-based flows; defaults to
    /// January 1 of the fixed reference year.
    #[arg(long)]
    pub as_of: Option<String>,

    /// Path to a config file; defaults to ./bottl.toml when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(birth_year) = &self.birth_year {
            validate_non_empty_string("birth_year", birth_year)?;
        }
        if let Some(as_of) = &self.as_of {
            let normalized = parse::normalize_separators(&parse::normalize_digits(as_of));
            validate_date_syntax("as_of", &normalized)?;
        }
        Ok(())
    }
}

/// CLI flags merged with file defaults; flags win.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub lang: Lang,
    pub unicode_boxes: bool,
    pub as_of: NaiveDate,
}

impl Settings {
    pub fn resolve(cli: &CliConfig, file: &FileConfig) -> Result<Self> {
        let as_of = match &cli.as_of {
            Some(raw) => parse::parse_gregorian(raw)?,
            None => age::reference_date(),
        };
        Ok(Settings {
            lang: cli.lang.or_else(|| file.language()).unwrap_or_default(),
            unicode_boxes: file.unicode_boxes().unwrap_or(true),
            as_of,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn cli(args: &[&str]) -> CliConfig {
        CliConfig::parse_from(std::iter::once("bottl").chain(args.iter().copied()))
    }

    #[test]
    fn flags_override_file_defaults() {
        let file: FileConfig = toml::from_str("[display]\nlanguage = \"en\"\n").unwrap();
        let settings = Settings::resolve(&cli(&["--lang", "fa"]), &file).unwrap();
        assert_eq!(settings.lang, Lang::Fa);

        let settings = Settings::resolve(&cli(&[]), &file).unwrap();
        assert_eq!(settings.lang, Lang::En);
    }

    #[test]
    fn default_language_is_persian() {
        let settings = Settings::resolve(&cli(&[]), &FileConfig::default()).unwrap();
        assert_eq!(settings.lang, Lang::Fa);
        assert!(settings.unicode_boxes);
    }

    #[test]
    fn as_of_defaults_to_the_reference_date() {
        let settings = Settings::resolve(&cli(&[]), &FileConfig::default()).unwrap();
        assert_eq!(settings.as_of, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());

        let settings =
            Settings::resolve(&cli(&["--as-of", "2024/06/01"]), &FileConfig::default()).unwrap();
        assert_eq!(settings.as_of, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn validation_flags_bad_as_of() {
        assert!(cli(&["--as-of", "June 1st"]).validate().is_err());
        assert!(cli(&["--as-of", "2024-06-01"]).validate().is_ok());
        assert!(cli(&["--birth-year", "  "]).validate().is_err());
    }
}
