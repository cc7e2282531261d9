//! Contract error types for the dashboard service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// Dashboard service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// A required request field was missing or empty
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },
    /// Internal error
    #[error("Internal error")]
    Internal,
}

impl DashboardError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
