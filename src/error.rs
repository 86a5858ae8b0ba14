//! Error handling module for DriveEasy
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Catalog filtering, sorting and pricing are total functions and never fail;
//! these errors cover the edges: fixture files, the terminal, and rejected
//! wizard or booking-status transitions.

use thiserror::Error;

/// Main error type for DriveEasy
#[derive(Error, Debug)]
pub enum DriveEasyError {
    /// IO errors (fixture files, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture loading or validation errors
    #[error("Fixture error: {0}")]
    Fixtures(String),

    /// Validation errors (user input, CLI values)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Booking wizard transition errors
    #[error("Booking transition error: {0}")]
    BookingTransition(String),

    /// Booking status changes the admin console rejected
    #[error("Booking status error: {0}")]
    BookingStatus(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for DriveEasy operations
pub type Result<T> = std::result::Result<T, DriveEasyError>;

impl DriveEasyError {
    /// Create a fixture error
    pub fn fixtures(msg: impl Into<String>) -> Self {
        Self::Fixtures(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

impl From<crate::types::StatusTransitionError> for DriveEasyError {
    fn from(err: crate::types::StatusTransitionError) -> Self {
        Self::BookingStatus(err.to_string())
    }
}

impl From<anyhow::Error> for DriveEasyError {
    fn from(err: anyhow::Error) -> Self {
        Self::Fixtures(format!("{:#}", err))
    }
}
