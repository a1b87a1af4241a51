//! Request and response data transfer objects

pub mod booking;
pub mod hotel;

pub use booking::{BookingIdResponse, BookingResponse, ChangeBookingRequest, CreateBookingRequest};
pub use hotel::{HotelResponse, HotelWithRoomsResponse, RoomResponse};
