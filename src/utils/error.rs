use thiserror::Error;

#[derive(Error, Debug)]
pub enum BottlError {
    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("Birthdate {born} is after the as-of date {as_of}")]
    FutureBirthdate { born: String, as_of: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Date,
    Config,
    System,
}

impl BottlError {
    pub fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        BottlError::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_date(value: impl Into<String>, reason: impl Into<String>) -> Self {
        BottlError::InvalidDate {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            BottlError::InvalidInput { .. } => ErrorCategory::Input,
            BottlError::InvalidDate { .. } | BottlError::FutureBirthdate { .. } => {
                ErrorCategory::Date
            }
            BottlError::Config { .. } => ErrorCategory::Config,
            BottlError::Io(_) => ErrorCategory::System,
        }
    }

    /// Process exit code for the one-shot surfaces; the interactive menu
    /// reports errors inline and keeps running instead.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Date => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BottlError::InvalidInput { input, reason } => {
                format!("Could not understand '{}': {}", input, reason)
            }
            BottlError::InvalidDate { value, reason } => {
                format!("'{}' is not a real date: {}", value, reason)
            }
            BottlError::FutureBirthdate { born, .. } => {
                format!("Birthdate {} has not happened yet", born)
            }
            BottlError::Config { message } => format!("Configuration problem: {}", message),
            BottlError::Io(e) => format!("IO failure: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Input => "Enter a whole number, e.g. 1990".to_string(),
            ErrorCategory::Date => "Use the YYYY-MM-DD format, e.g. 1990-07-15".to_string(),
            ErrorCategory::Config => {
                "Check bottl.toml against the documented [display] keys".to_string()
            }
            ErrorCategory::System => "Check file permissions and the terminal".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BottlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_category() {
        assert_eq!(BottlError::invalid_input("abc", "not a number").exit_code(), 1);
        assert_eq!(
            BottlError::invalid_date("2025-02-30", "no such day").exit_code(),
            1
        );
        assert_eq!(
            BottlError::Config {
                message: "bad key".into()
            }
            .exit_code(),
            2
        );
    }

    #[test]
    fn future_birthdate_is_a_date_error() {
        let e = BottlError::FutureBirthdate {
            born: "2030-01-01".into(),
            as_of: "2025-01-01".into(),
        };
        assert_eq!(e.category(), ErrorCategory::Date);
    }
}
