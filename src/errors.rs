use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid contact data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Failed to save contacts: {0} could not persist the contact list")]
    Persistence(String),

    #[error("Logger setup failed: {0}")]
    Logging(String),
}

impl From<log::SetLoggerError> for AppError {
    fn from(err: log::SetLoggerError) -> Self {
        AppError::Logging(err.to_string())
    }
}
