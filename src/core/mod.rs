pub mod age;
pub mod jalali;
pub mod parse;

pub use crate::domain::model::{AgeBreakdown, AgeReport, JalaliDate};
pub use crate::domain::ports::Console;
pub use crate::utils::error::Result;
