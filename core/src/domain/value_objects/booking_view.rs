//! Read model returned by the booking query path.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{BookingWithRoom, Room};

/// A user's current booking with the full room snapshot.
///
/// This is the shape handed to callers of the read path: the booking id
/// plus the room as it currently exists (id, name, capacity, hotel and
/// timestamps). User and room foreign keys of the booking row itself are
/// not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingView {
    /// Booking identifier
    pub id: Uuid,

    /// Snapshot of the reserved room
    pub room: Room,
}

impl From<BookingWithRoom> for BookingView {
    fn from(value: BookingWithRoom) -> Self {
        Self {
            id: value.booking.id,
            room: value.room,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Booking;

    #[test]
    fn view_exposes_booking_id_and_room_snapshot() {
        let room = Room::new(Uuid::new_v4(), "Grand Suite".to_string(), 3);
        let booking = Booking::new(Uuid::new_v4(), room.id);
        let view = BookingView::from(BookingWithRoom {
            booking: booking.clone(),
            room: room.clone(),
        });
        assert_eq!(view.id, booking.id);
        assert_eq!(view.room, room);
    }
}
