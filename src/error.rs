//! Error types for the Gullak assistant

use thiserror::Error;

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, AssistantError>;

#[derive(Error, Debug)]
pub enum AssistantError {

    // =============================
    // Domain Errors
    // =============================

    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Invalid page: {0}")]
    InvalidPage(String),

    #[error("Chat session not found: {0}")]
    SessionNotFound(String),

    #[error("Empty message")]
    EmptyMessage,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Validation failures of the simulated payment flow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("amount is missing")]
    MissingAmount,

    #[error("payment method is not selected")]
    MissingMethod,

    #[error("amount must be greater than zero")]
    InvalidAmount,
}
