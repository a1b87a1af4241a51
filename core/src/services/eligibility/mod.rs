//! Booking eligibility evaluation.
//!
//! Decides whether a user's ticket entitles them to book event lodging.
//! Both booking mutations run this gate before touching any booking state.

mod service;

#[cfg(test)]
mod tests;

pub use service::EligibilityService;
