//! Domain-specific error types and error handling.

mod types;

pub use types::{BookingError, HotelError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    /// Infrastructure-level failure (connectivity, unexpected rows).
    /// Never used for business rule rejections.
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Hotel(#[from] HotelError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Convenience constructor for infrastructure failures
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The booking error kind, if this is one
    pub fn as_booking_error(&self) -> Option<&BookingError> {
        match self {
            Self::Booking(e) => Some(e),
            _ => None,
        }
    }
}
