use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Input contains no credential records (empty or unparseable file)")]
    EmptyInput,

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

impl CleanError {
    /// Message shown to the user on stderr, without Rust error chain noise.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CleanError::EmptyInput => {
                "The file is empty or is invalid: no credentials were found".to_string()
            }
            CleanError::CsvError(e) => format!("Could not parse the CSV file: {}", e),
            CleanError::IoError(e) => format!("Could not read or write a file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CleanError::EmptyInput => {
                "Check that the export file has a header row and at least one credential"
            }
            CleanError::CsvError(_) => "Re-export the file from your password manager and retry",
            CleanError::IoError(_) => "Check the input path and output directory permissions",
            CleanError::ConfigError { .. }
            | CleanError::InvalidConfigValueError { .. }
            | CleanError::MissingConfigError { .. } => "Run with --help to see valid options",
            CleanError::SerializationError(_) => "Retry; report a bug if this persists",
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanError>;
