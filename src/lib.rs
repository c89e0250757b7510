pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod i18n;
pub mod utils;

pub use app::console::StdConsole;
pub use app::menu::MenuApp;
pub use config::{file::FileConfig, CliConfig, Settings};
pub use core::age::REFERENCE_YEAR;
pub use domain::model::{AgeBreakdown, AgeReport, JalaliDate};
pub use domain::ports::Console;
pub use i18n::Lang;
pub use utils::error::{BottlError, Result};
