//! Mock implementation of BookingRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Booking, BookingWithRoom, Room};
use crate::errors::{BookingError, DomainError};

use super::trait_::BookingRepository;

/// Mock booking repository for testing.
///
/// Holds its write lock across the capacity check and the write, so the
/// conditional-write contract of the trait holds under concurrent use.
/// Room inventory is shared with a
/// [`MockHotelRepository`](crate::repositories::MockHotelRepository)
/// via [`MockBookingRepository::with_rooms`].
pub struct MockBookingRepository {
    bookings: Arc<RwLock<Vec<Booking>>>,
    rooms: Arc<RwLock<HashMap<Uuid, Room>>>,
}

impl MockBookingRepository {
    /// Create a new mock repository with an empty room inventory
    pub fn new() -> Self {
        Self::with_rooms(Arc::new(RwLock::new(HashMap::new())))
    }

    /// Create a mock repository sharing the given room inventory
    pub fn with_rooms(rooms: Arc<RwLock<HashMap<Uuid, Room>>>) -> Self {
        Self {
            bookings: Arc::new(RwLock::new(Vec::new())),
            rooms,
        }
    }

    /// Insert a booking directly, bypassing the capacity guard
    pub async fn insert(&self, booking: Booking) {
        let mut bookings = self.bookings.write().await;
        bookings.push(booking);
    }
}

impl Default for MockBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<BookingWithRoom>, DomainError> {
        let bookings = self.bookings.read().await;
        let Some(booking) = bookings.iter().find(|b| b.user_id == user_id).cloned() else {
            return Ok(None);
        };
        let rooms = self.rooms.read().await;
        let room = rooms
            .get(&booking.room_id)
            .cloned()
            .ok_or_else(|| DomainError::internal("Booking references an unknown room"))?;
        Ok(Some(BookingWithRoom { booking, room }))
    }

    async fn count_by_room_id(&self, room_id: Uuid) -> Result<u64, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().filter(|b| b.room_id == room_id).count() as u64)
    }

    async fn create(&self, user_id: Uuid, room_id: Uuid) -> Result<Booking, DomainError> {
        // Write lock taken first: check and insert form one atomic unit.
        let mut bookings = self.bookings.write().await;
        let rooms = self.rooms.read().await;
        let room = rooms
            .get(&room_id)
            .ok_or(BookingError::RoomNotFound)?;
        let occupied = bookings.iter().filter(|b| b.room_id == room_id).count() as u64;
        if room.is_full(occupied) {
            return Err(BookingError::RoomFull.into());
        }
        let booking = Booking::new(user_id, room_id);
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn update_room(&self, booking_id: Uuid, room_id: Uuid) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        let rooms = self.rooms.read().await;
        let room = rooms
            .get(&room_id)
            .ok_or(BookingError::RoomNotFound)?;
        // Unconditional occupancy count: the moved booking itself counts
        // when it already sits in the target room.
        let occupied = bookings.iter().filter(|b| b.room_id == room_id).count() as u64;
        if room.is_full(occupied) {
            return Err(BookingError::RoomFull.into());
        }
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| DomainError::NotFound {
                resource: "Booking".to_string(),
            })?;
        booking.reassign_room(room_id);
        Ok(booking.clone())
    }
}
