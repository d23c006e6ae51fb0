use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudyError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input for {field}: {message}")]
    InputError { field: String, message: String },

    #[error("Input ended before {field} was read")]
    UnexpectedEof { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl StudyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StudyError::InputError { .. } | StudyError::UnexpectedEof { .. } => {
                ErrorCategory::Input
            }
            StudyError::ConfigError { .. } | StudyError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            StudyError::IoError(_) | StudyError::CsvError(_) | StudyError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度決定程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    /// 輸入錯誤發生時，stdout 上停著一個沒有換行的提示字
    pub fn follows_prompt(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StudyError::InputError { field, message } => {
                format!("Could not read {}: {}", field, message)
            }
            StudyError::UnexpectedEof { field } => {
                format!("No value was entered for {}", field)
            }
            StudyError::ConfigError { message } => format!("Configuration problem: {}", message),
            StudyError::InvalidConfigValueError { field, value, reason } => {
                format!("Setting {} = '{}' is not valid: {}", field, value, reason)
            }
            other => format!("Could not write the result: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Enter whole numbers between -2147483648 and 2147483647",
            ErrorCategory::Configuration => {
                "Check the config file and command line options (valid formats: text, json, csv)"
            }
            ErrorCategory::Output => "Check that standard output is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, StudyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_exit_with_one() {
        let err = StudyError::UnexpectedEof {
            field: "Number".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("Number"));
        assert!(err.follows_prompt());
    }

    #[test]
    fn test_only_input_errors_follow_a_prompt() {
        let config = StudyError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "yaml".to_string(),
            reason: "Unsupported format".to_string(),
        };
        assert!(!config.follows_prompt());

        let io = StudyError::from(std::io::Error::other("closed"));
        assert!(!io.follows_prompt());

        let input = StudyError::InputError {
            field: "Limit".to_string(),
            message: "'x' is not a whole number".to_string(),
        };
        assert!(input.follows_prompt());
    }

    #[test]
    fn test_config_and_output_severity() {
        let config = StudyError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.severity(), ErrorSeverity::Medium);
        assert_eq!(config.exit_code(), 2);

        let io = StudyError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe"));
        assert_eq!(io.category(), ErrorCategory::Output);
        assert_eq!(io.exit_code(), 3);
    }
}
