//! Hotel endpoint DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use se_core::domain::entities::{Hotel, HotelWithRooms, Room};

/// Hotel entry in `GET /api/v1/hotels`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelResponse {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hotel> for HotelResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            image_url: hotel.image_url,
            created_at: hotel.created_at,
            updated_at: hotel.updated_at,
        }
    }
}

/// Room snapshot used by hotel and booking responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomResponse {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            name: room.name,
            capacity: room.capacity,
            hotel_id: room.hotel_id,
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}

/// Response of `GET /api/v1/hotels/{hotel_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelWithRoomsResponse {
    #[serde(flatten)]
    pub hotel: HotelResponse,
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelWithRooms> for HotelWithRoomsResponse {
    fn from(value: HotelWithRooms) -> Self {
        Self {
            hotel: value.hotel.into(),
            rooms: value.rooms.into_iter().map(Into::into).collect(),
        }
    }
}
