//! Mock implementation of HotelRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Hotel, HotelWithRooms, Room};
use crate::errors::DomainError;

use super::trait_::HotelRepository;

/// Mock hotel repository for testing.
///
/// The room map handle can be shared with a
/// [`MockBookingRepository`](crate::repositories::MockBookingRepository)
/// so both sides observe the same room inventory.
pub struct MockHotelRepository {
    hotels: Arc<RwLock<Vec<Hotel>>>,
    rooms: Arc<RwLock<HashMap<Uuid, Room>>>,
}

impl MockHotelRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            hotels: Arc::new(RwLock::new(Vec::new())),
            rooms: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a hotel into the mock store
    pub async fn insert_hotel(&self, hotel: Hotel) {
        let mut hotels = self.hotels.write().await;
        hotels.push(hotel);
    }

    /// Insert a room into the mock store
    pub async fn insert_room(&self, room: Room) {
        let mut rooms = self.rooms.write().await;
        rooms.insert(room.id, room);
    }

    /// Handle to the shared room map
    pub fn rooms_handle(&self) -> Arc<RwLock<HashMap<Uuid, Room>>> {
        Arc::clone(&self.rooms)
    }
}

impl Default for MockHotelRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HotelRepository for MockHotelRepository {
    async fn find_all(&self) -> Result<Vec<Hotel>, DomainError> {
        let hotels = self.hotels.read().await;
        Ok(hotels.clone())
    }

    async fn find_by_id_with_rooms(
        &self,
        hotel_id: Uuid,
    ) -> Result<Option<HotelWithRooms>, DomainError> {
        let hotels = self.hotels.read().await;
        let Some(hotel) = hotels.iter().find(|h| h.id == hotel_id).cloned() else {
            return Ok(None);
        };
        let rooms = self.rooms.read().await;
        let rooms = rooms
            .values()
            .filter(|r| r.hotel_id == hotel_id)
            .cloned()
            .collect();
        Ok(Some(HotelWithRooms { hotel, rooms }))
    }

    async fn find_room_by_id(&self, room_id: Uuid) -> Result<Option<Room>, DomainError> {
        let rooms = self.rooms.read().await;
        Ok(rooms.get(&room_id).cloned())
    }
}
