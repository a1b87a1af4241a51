//! Booking arbitration and queries.
//!
//! This module owns the booking lifecycle: creating a reservation,
//! moving it to another room, and reading it back. It enforces the
//! one-booking-per-user and room-capacity invariants.

mod service;

#[cfg(test)]
mod tests;

pub use service::BookingService;
