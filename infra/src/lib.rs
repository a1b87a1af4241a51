//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the StayEasy
//! application, following Clean Architecture principles. It provides the
//! MySQL-backed implementations of the repository interfaces defined in
//! `se_core`, plus connection pool management.

// Re-export core types for convenience
pub use se_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{
    DatabasePool, MySqlBookingRepository, MySqlEnrollmentRepository, MySqlHotelRepository,
    MySqlTicketRepository,
};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
