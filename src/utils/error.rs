use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("Invalid amount: {amount} (deposits must be greater than zero)")]
    InvalidAmount { amount: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl LessonError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LessonError::InvalidAmount { .. } => ErrorCategory::Domain,
            LessonError::ConfigError { .. }
            | LessonError::InvalidConfigValueError { .. }
            | LessonError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            LessonError::IoError(_) | LessonError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Domain => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LessonError::InvalidAmount { .. } => {
                "Use a deposit amount greater than zero".to_string()
            }
            LessonError::IoError(_) => "Check that the file exists and is readable".to_string(),
            LessonError::SerializationError(_) => {
                "Report output could not be encoded; try again without --json".to_string()
            }
            LessonError::ConfigError { .. } | LessonError::ConfigValidationError { .. } => {
                "Check the scenario file is valid TOML".to_string()
            }
            LessonError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the scenario file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LessonError::InvalidAmount { amount } => {
                format!("A deposit of {} was rejected", amount)
            }
            LessonError::IoError(e) => format!("Could not read a file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_amount_is_domain_error() {
        let err = LessonError::InvalidAmount { amount: -5.0 };
        assert_eq!(err.category(), ErrorCategory::Domain);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("-5"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = LessonError::InvalidConfigValueError {
            field: "account.owner".to_string(),
            value: "".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("account.owner"));
    }

    #[test]
    fn test_every_error_is_at_least_medium() {
        let errors = [
            LessonError::InvalidAmount { amount: 0.0 },
            LessonError::ConfigError {
                message: "bad".to_string(),
            },
            LessonError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
        ];
        for err in &errors {
            assert!(err.severity() >= ErrorSeverity::Medium);
        }
    }
}
