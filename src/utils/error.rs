use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("End instant {end} precedes start instant {start}")]
    InvalidOrder { start: String, end: String },

    #[error("Invalid {field} value {value}: {reason}")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot parse instant '{input}': {message}")]
    ParseError { input: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Order,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DiffError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DiffError::InvalidOrder { .. } => ErrorCategory::Order,
            DiffError::InvalidField { .. } | DiffError::ParseError { .. } => ErrorCategory::Input,
            DiffError::ConfigValidationError { .. }
            | DiffError::InvalidConfigValueError { .. }
            | DiffError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DiffError::IoError(_) | DiffError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Order => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DiffError::InvalidOrder { .. } => {
                "Swap --start and --end, or pass --order swap / --order negate".to_string()
            }
            DiffError::InvalidField { field, .. } => {
                format!("Check the {} component of the instant", field)
            }
            DiffError::ParseError { .. } => {
                "Use YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS[.fff]".to_string()
            }
            DiffError::IoError(_) => "Check that the file exists and is readable".to_string(),
            DiffError::SerializationError(_) => "Retry with --format text".to_string(),
            DiffError::ConfigValidationError { field, .. }
            | DiffError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the configuration", field)
            }
            DiffError::MissingConfigError { field } => {
                format!("Provide '{}' on the command line or in the config file", field)
            }
        }
    }

    /// Process exit code for the CLI: 1 input/config, 2 reversed interval, 3 system.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Order => format!("Reversed interval: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DiffError>;
