//! MySQL implementation of the HotelRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use se_core::domain::entities::{Hotel, HotelWithRooms, Room};
use se_core::errors::DomainError;
use se_core::repositories::HotelRepository;

use super::{get_timestamp, get_uuid};

/// MySQL implementation of HotelRepository
pub struct MySqlHotelRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlHotelRepository {
    /// Create a new MySQL hotel repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_hotel(row: &sqlx::mysql::MySqlRow) -> Result<Hotel, DomainError> {
        Ok(Hotel {
            id: get_uuid(row, "id")?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::internal(format!("Failed to get name: {}", e)))?,
            image_url: row
                .try_get("image_url")
                .map_err(|e| DomainError::internal(format!("Failed to get image_url: {}", e)))?,
            created_at: get_timestamp(row, "created_at")?,
            updated_at: get_timestamp(row, "updated_at")?,
        })
    }

    pub(crate) fn row_to_room(row: &sqlx::mysql::MySqlRow) -> Result<Room, DomainError> {
        Ok(Room {
            id: get_uuid(row, "id")?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::internal(format!("Failed to get name: {}", e)))?,
            capacity: row
                .try_get("capacity")
                .map_err(|e| DomainError::internal(format!("Failed to get capacity: {}", e)))?,
            hotel_id: get_uuid(row, "hotel_id")?,
            created_at: get_timestamp(row, "created_at")?,
            updated_at: get_timestamp(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl HotelRepository for MySqlHotelRepository {
    async fn find_all(&self) -> Result<Vec<Hotel>, DomainError> {
        let query = r#"
            SELECT id, name, image_url, created_at, updated_at
            FROM hotels
            ORDER BY name
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to list hotels: {}", e)))?;

        rows.iter().map(Self::row_to_hotel).collect()
    }

    async fn find_by_id_with_rooms(
        &self,
        hotel_id: Uuid,
    ) -> Result<Option<HotelWithRooms>, DomainError> {
        let hotel_query = r#"
            SELECT id, name, image_url, created_at, updated_at
            FROM hotels
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(hotel_query)
            .bind(hotel_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find hotel: {}", e)))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let hotel = Self::row_to_hotel(&row)?;

        let rooms_query = r#"
            SELECT id, name, capacity, hotel_id, created_at, updated_at
            FROM rooms
            WHERE hotel_id = ?
            ORDER BY name
        "#;

        let rows = sqlx::query(rooms_query)
            .bind(hotel_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to list rooms: {}", e)))?;

        let rooms = rows
            .iter()
            .map(Self::row_to_room)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(HotelWithRooms { hotel, rooms }))
    }

    async fn find_room_by_id(&self, room_id: Uuid) -> Result<Option<Room>, DomainError> {
        let query = r#"
            SELECT id, name, capacity, hotel_id, created_at, updated_at
            FROM rooms
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(room_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find room: {}", e)))?;

        row.map(|row| Self::row_to_room(&row)).transpose()
    }
}
