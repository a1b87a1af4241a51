//! Route handlers grouped by resource

pub mod booking;
pub mod hotel;

use std::sync::Arc;

use se_core::repositories::{
    BookingRepository, EnrollmentRepository, HotelRepository, TicketRepository,
};
use se_core::services::{BookingService, HotelService};

/// Application state that holds shared services
pub struct AppState<E, T, H, B>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    H: HotelRepository,
    B: BookingRepository,
{
    pub booking_service: Arc<BookingService<E, T, H, B>>,
    pub hotel_service: Arc<HotelService<E, T, H>>,
}
