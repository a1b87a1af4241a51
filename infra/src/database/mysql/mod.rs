//! MySQL repository implementations

pub mod booking_repository_impl;
pub mod enrollment_repository_impl;
pub mod hotel_repository_impl;
pub mod ticket_repository_impl;

pub use booking_repository_impl::MySqlBookingRepository;
pub use enrollment_repository_impl::MySqlEnrollmentRepository;
pub use hotel_repository_impl::MySqlHotelRepository;
pub use ticket_repository_impl::MySqlTicketRepository;

use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::Row;
use uuid::Uuid;

use se_core::errors::DomainError;

/// Read a UUID stored as a CHAR(36) column
pub(crate) fn get_uuid(row: &MySqlRow, column: &str) -> Result<Uuid, DomainError> {
    let value: String = row
        .try_get(column)
        .map_err(|e| DomainError::internal(format!("Failed to get {}: {}", column, e)))?;
    Uuid::parse_str(&value)
        .map_err(|e| DomainError::internal(format!("Invalid UUID in {}: {}", column, e)))
}

/// Read a timestamp column
pub(crate) fn get_timestamp(row: &MySqlRow, column: &str) -> Result<DateTime<Utc>, DomainError> {
    row.try_get::<DateTime<Utc>, _>(column)
        .map_err(|e| DomainError::internal(format!("Failed to get {}: {}", column, e)))
}
