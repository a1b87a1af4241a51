//! Booking endpoint DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use se_core::domain::value_objects::BookingView;

use super::hotel::RoomResponse;

/// Body of `POST /api/v1/booking`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// Room to reserve
    pub room_id: Uuid,
}

/// Body of `PUT /api/v1/booking/{booking_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeBookingRequest {
    /// Room to move the booking to
    pub room_id: Uuid,
}

/// Response of the booking mutations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingIdResponse {
    pub booking_id: Uuid,
}

/// Response of `GET /api/v1/booking`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub room: RoomResponse,
}

impl From<BookingView> for BookingResponse {
    fn from(view: BookingView) -> Self {
        Self {
            id: view.id,
            room: view.room.into(),
        }
    }
}
