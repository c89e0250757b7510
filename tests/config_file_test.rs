use bottl::utils::validation::Validate;
use bottl::{BottlError, CliConfig, FileConfig, Lang, Settings};
use clap::Parser;
use std::fs;
use tempfile::TempDir;

fn cli(args: &[&str]) -> CliConfig {
    CliConfig::parse_from(std::iter::once("bottl").chain(args.iter().copied()))
}

#[test]
fn display_defaults_load_from_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bottl.toml");
    fs::write(&path, "[display]\nlanguage = \"en\"\nunicode_boxes = false\n").unwrap();

    let file = FileConfig::load(&path).unwrap();
    assert_eq!(file.language(), Some(Lang::En));
    assert_eq!(file.unicode_boxes(), Some(false));

    let settings = Settings::resolve(&cli(&[]), &file).unwrap();
    assert_eq!(settings.lang, Lang::En);
    assert!(!settings.unicode_boxes);
}

#[test]
fn cli_language_beats_the_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bottl.toml");
    fs::write(&path, "[display]\nlanguage = \"en\"\n").unwrap();

    let file = FileConfig::discover(Some(&path)).unwrap();
    let settings = Settings::resolve(&cli(&["--lang", "fa"]), &file).unwrap();
    assert_eq!(settings.lang, Lang::Fa);
}

#[test]
fn malformed_toml_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bottl.toml");
    fs::write(&path, "[display\nlanguage = ???\n").unwrap();

    let err = FileConfig::load(&path).unwrap_err();
    assert!(matches!(err, BottlError::Config { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn missing_explicit_config_path_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = FileConfig::discover(Some(&missing)).unwrap_err();
    assert!(matches!(err, BottlError::Io(_)));
}

#[test]
fn cli_validation_covers_as_of_and_birth_year() {
    assert!(cli(&["--as-of", "2024-06-01"]).validate().is_ok());
    assert!(cli(&["--as-of", "۱۴۰۳/۰۱/۰۱"]).validate().is_ok());
    assert!(cli(&["--as-of", "tomorrow"]).validate().is_err());
    assert!(cli(&["--birth-year", " "]).validate().is_err());
    assert!(cli(&["--birth-year", "1990"]).validate().is_ok());
}
