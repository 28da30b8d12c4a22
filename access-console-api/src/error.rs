use thiserror::Error;

/// Failure reported by a fetch collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("Fetch failure: {0}")]
    FetchFailure(#[from] FetchError),

    #[error("Cannot interpret {field} value '{value}': {reason}")]
    ParseFailure {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConsoleError {
    pub fn parse_failure(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ConsoleError::ParseFailure {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Message shown to the administrator when this error reaches the view.
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::FetchFailure(_) => "Could not load records, please retry".to_string(),
            ConsoleError::ParseFailure { field, .. } => format!("Ignoring invalid {field}"),
            ConsoleError::Config(_) => "Console is misconfigured".to_string(),
        }
    }
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
