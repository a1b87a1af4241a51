//! Hotel and Room entities for event lodging.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hotel entity offering rooms for the event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    /// Unique identifier for the hotel
    pub id: Uuid,

    /// Hotel display name
    pub name: String,

    /// Cover image URL
    pub image_url: String,

    /// Timestamp when the hotel was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the hotel was last updated
    pub updated_at: DateTime<Utc>,
}

impl Hotel {
    /// Creates a new Hotel instance
    pub fn new(name: String, image_url: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            image_url,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Room entity belonging to a hotel.
///
/// Capacity is the fixed maximum number of simultaneous bookings;
/// it is never mutated by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for the room
    pub id: Uuid,

    /// Room display name
    pub name: String,

    /// Maximum simultaneous bookings
    pub capacity: i32,

    /// Hotel this room belongs to
    pub hotel_id: Uuid,

    /// Timestamp when the room was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the room was last updated
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Creates a new Room instance
    pub fn new(hotel_id: Uuid, name: String, capacity: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            capacity,
            hotel_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the given occupancy count fills the room
    pub fn is_full(&self, occupied: u64) -> bool {
        occupied >= self.capacity as u64
    }
}

/// A hotel joined with its rooms, as returned by the data access layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelWithRooms {
    /// The hotel record
    pub hotel: Hotel,

    /// Rooms belonging to the hotel
    pub rooms: Vec<Room>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_full_at_capacity() {
        let room = Room::new(Uuid::new_v4(), "101".to_string(), 2);
        assert!(!room.is_full(0));
        assert!(!room.is_full(1));
        assert!(room.is_full(2));
    }
}
