//! Booking routes

pub mod change;
pub mod create;
pub mod get;

pub use change::change_booking;
pub use create::create_booking;
pub use get::get_booking;
