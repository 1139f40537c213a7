use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input file '{path}' does not exist")]
    InputNotFound { path: String },

    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Invalid value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Parse,
    Output,
    Config,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::InputNotFound { .. } | ConvertError::ReadError { .. } => {
                ErrorCategory::Input
            }
            ConvertError::CsvError(_) | ConvertError::ParseError { .. } => ErrorCategory::Parse,
            ConvertError::WriteError { .. } | ConvertError::SerializationError(_) => {
                ErrorCategory::Output
            }
            ConvertError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::CsvError(e) => match e.position() {
                Some(pos) => format!("Could not parse CSV at line {}: {}", pos.line(), e),
                None => format!("Could not parse CSV: {}", e),
            },
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the --input path and its permissions",
            ErrorCategory::Parse => "Make sure the input is UTF-8 comma-separated data with a header row",
            ErrorCategory::Output => "Check that the output directory exists and is writable",
            ErrorCategory::Config => "Run with --help to see the accepted arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
