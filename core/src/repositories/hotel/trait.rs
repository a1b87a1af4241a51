//! Hotel repository trait defining the interface for hotel and room lookups.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Hotel, HotelWithRooms, Room};
use crate::errors::DomainError;

/// Repository trait for Hotel and Room read access.
///
/// Hotels and rooms are reference data to this crate: the inventory is
/// managed elsewhere and only capacity counting touches rooms indirectly
/// (see [`BookingRepository`](crate::repositories::BookingRepository)).
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// List all hotels offering rooms for the event
    async fn find_all(&self) -> Result<Vec<Hotel>, DomainError>;

    /// Find a hotel with all of its rooms
    ///
    /// # Returns
    /// * `Ok(Some(HotelWithRooms))` - Hotel found
    /// * `Ok(None)` - No hotel with the given id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id_with_rooms(
        &self,
        hotel_id: Uuid,
    ) -> Result<Option<HotelWithRooms>, DomainError>;

    /// Find a single room by id
    async fn find_room_by_id(&self, room_id: Uuid) -> Result<Option<Room>, DomainError>;
}
