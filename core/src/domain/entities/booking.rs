//! Booking entity: a user's reservation of a specific room.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::hotel::Room;

/// Booking entity linking a user to a room.
///
/// At most one booking exists per user at any time, and the number of
/// bookings referencing a room never exceeds that room's capacity. Both
/// invariants are enforced by the booking service together with the
/// repository's conditional writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Reserved room
    pub room_id: Uuid,

    /// Timestamp when the booking was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the booking was last updated
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a new Booking instance
    pub fn new(user_id: Uuid, room_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            room_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves the booking to another room
    pub fn reassign_room(&mut self, room_id: Uuid) {
        self.room_id = room_id;
        self.updated_at = Utc::now();
    }
}

/// A booking joined with its room, as returned by the data access layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWithRoom {
    /// The booking record
    pub booking: Booking,

    /// The reserved room
    pub room: Room,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reassign_room_updates_room_and_timestamp() {
        let mut booking = Booking::new(Uuid::new_v4(), Uuid::new_v4());
        let before = booking.updated_at;
        let new_room = Uuid::new_v4();
        booking.reassign_room(new_room);
        assert_eq!(booking.room_id, new_room);
        assert!(booking.updated_at >= before);
    }
}
