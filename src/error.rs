//! Error handling for the application

use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl AppError {
    /// Short machine-readable kind, used as `error_type` in error responses
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Io(_) => "io_error",
            AppError::Json(_) => "invalid_json",
            AppError::Config(_) => "configuration_error",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Pricing(e) => e.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
