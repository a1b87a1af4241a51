//! Hotel browsing.
//!
//! Read-only listing of event hotels and their rooms, gated on the
//! caller holding a lodging-entitled ticket.

mod service;

#[cfg(test)]
mod tests;

pub use service::HotelService;
