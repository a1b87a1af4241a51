//! Domain-specific error types for booking and hotel operations
//!
//! These errors represent terminal, non-retryable business rule failures.
//! They are surfaced to callers unchanged; HTTP status mapping happens in
//! the presentation layer.

use thiserror::Error;

/// Booking-related errors
///
/// Covers the eligibility gates shared by all booking mutations as well
/// as the arbitration failures of the create and change paths.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingError {
    #[error("You must be enrolled to continue")]
    NotEnrolled,

    #[error("You must have a ticket to continue")]
    NoTicket,

    /// Collapses three conditions: the ticket is unpaid, remote, or does
    /// not include a hotel stay. Callers cannot tell which one failed.
    #[error("You must have a paid in-person ticket with a hotel reservation to continue")]
    IneligibleTicket,

    #[error("No booking found")]
    NoBooking,

    #[error("You are only allowed to have one booking")]
    AlreadyBooked,

    #[error("Room not found")]
    RoomNotFound,

    #[error("This room is up to capacity. Choose a room with vacancy")]
    RoomFull,

    #[error("You do not have a booking to change")]
    NoExistingBooking,

    #[error("You are not allowed to change this booking")]
    BookingMismatch,
}

/// Hotel-browsing errors
///
/// The hotel listing applies its own precondition gates with
/// finer-grained kinds than the booking path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HotelError {
    #[error("Enrollment not found")]
    NotEnrolled,

    #[error("Ticket not found")]
    NoTicket,

    #[error("{requirement} required to continue")]
    PaymentRequired { requirement: String },

    #[error("No hotels available")]
    NoHotels,

    #[error("Hotel not found")]
    HotelNotFound,
}

impl HotelError {
    /// Payment-required variant naming what is missing
    pub fn payment_required(requirement: impl Into<String>) -> Self {
        Self::PaymentRequired {
            requirement: requirement.into(),
        }
    }
}
