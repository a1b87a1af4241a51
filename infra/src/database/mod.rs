//! Database module - MySQL implementations using SQLx
//!
//! This module provides the data access layer implementations:
//! - Connection pool management
//! - Repository pattern implementations

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{
    MySqlBookingRepository, MySqlEnrollmentRepository, MySqlHotelRepository, MySqlTicketRepository,
};
