//! # Payment Error Types
//!
//! Typed error handling for the payment intent gateway.
//! All gateway operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// Caller-supplied amount failed local validation
    #[error("Invalid amount provided.")]
    InvalidAmount,

    /// The payment processor call failed (network, rejection, bad key, ...).
    /// The message is relayed to the caller verbatim.
    #[error("{0}")]
    Processor(String),

    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PaymentError {
    /// Build a processor error from anything displayable
    pub fn processor(message: impl Into<String>) -> Self {
        PaymentError::Processor(message.into())
    }

    /// Returns the HTTP status code appropriate for this error.
    ///
    /// Processor failures are not classified: every one of them is a 500.
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::InvalidAmount => 400,
            PaymentError::Processor(_) => 500,
            PaymentError::Configuration(_) => 500,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
