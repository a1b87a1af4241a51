//! MySQL implementation of the BookingRepository trait.
//!
//! The write paths implement the conditional-write contract of the trait:
//! room lookup, occupancy count and the insert/update run inside one
//! transaction with the room row locked (`SELECT ... FOR UPDATE`), so
//! concurrent writers targeting the same room serialize and the loser of
//! a race for the last slot observes a full room.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{MySql, MySqlPool, Row, Transaction};
use uuid::Uuid;

use se_core::domain::entities::{Booking, BookingWithRoom};
use se_core::errors::{BookingError, DomainError};
use se_core::repositories::BookingRepository;

use super::hotel_repository_impl::MySqlHotelRepository;
use super::{get_timestamp, get_uuid};

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    /// Create a new MySQL booking repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> Result<Booking, DomainError> {
        Ok(Booking {
            id: get_uuid(row, "id")?,
            user_id: get_uuid(row, "user_id")?,
            room_id: get_uuid(row, "room_id")?,
            created_at: get_timestamp(row, "created_at")?,
            updated_at: get_timestamp(row, "updated_at")?,
        })
    }

    /// Lock the room row and verify it has a free slot.
    ///
    /// Runs inside the caller's transaction; the `FOR UPDATE` lock holds
    /// until commit, serializing concurrent writers on the same room.
    async fn lock_room_with_vacancy(
        tx: &mut Transaction<'_, MySql>,
        room_id: Uuid,
    ) -> Result<(), DomainError> {
        let room_row = sqlx::query("SELECT capacity FROM rooms WHERE id = ? FOR UPDATE")
            .bind(room_id.to_string())
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to lock room: {}", e)))?;

        let Some(room_row) = room_row else {
            return Err(BookingError::RoomNotFound.into());
        };
        let capacity: i32 = room_row
            .try_get("capacity")
            .map_err(|e| DomainError::internal(format!("Failed to get capacity: {}", e)))?;

        let occupied: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE room_id = ?")
                .bind(room_id.to_string())
                .fetch_one(&mut **tx)
                .await
                .map_err(|e| DomainError::internal(format!("Failed to count bookings: {}", e)))?;

        if occupied >= capacity as i64 {
            return Err(BookingError::RoomFull.into());
        }

        Ok(())
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<BookingWithRoom>, DomainError> {
        let query = r#"
            SELECT b.id AS booking_id,
                   b.user_id,
                   b.room_id,
                   b.created_at AS booking_created_at,
                   b.updated_at AS booking_updated_at,
                   r.id,
                   r.name,
                   r.capacity,
                   r.hotel_id,
                   r.created_at,
                   r.updated_at
            FROM bookings b
            INNER JOIN rooms r ON r.id = b.room_id
            WHERE b.user_id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find booking: {}", e)))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let booking = Booking {
            id: get_uuid(&row, "booking_id")?,
            user_id: get_uuid(&row, "user_id")?,
            room_id: get_uuid(&row, "room_id")?,
            created_at: get_timestamp(&row, "booking_created_at")?,
            updated_at: get_timestamp(&row, "booking_updated_at")?,
        };
        let room = MySqlHotelRepository::row_to_room(&row)?;

        Ok(Some(BookingWithRoom { booking, room }))
    }

    async fn count_by_room_id(&self, room_id: Uuid) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE room_id = ?")
            .bind(room_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to count bookings: {}", e)))?;

        Ok(count as u64)
    }

    async fn create(&self, user_id: Uuid, room_id: Uuid) -> Result<Booking, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::internal(format!("Failed to begin transaction: {}", e)))?;

        Self::lock_room_with_vacancy(&mut tx, room_id).await?;

        let booking = Booking::new(user_id, room_id);
        sqlx::query(
            r#"
            INSERT INTO bookings (id, user_id, room_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(booking.id.to_string())
        .bind(booking.user_id.to_string())
        .bind(booking.room_id.to_string())
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to create booking: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::internal(format!("Failed to commit booking: {}", e)))?;

        Ok(booking)
    }

    async fn update_room(&self, booking_id: Uuid, room_id: Uuid) -> Result<Booking, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::internal(format!("Failed to begin transaction: {}", e)))?;

        Self::lock_room_with_vacancy(&mut tx, room_id).await?;

        let row = sqlx::query(
            r#"
            SELECT id, user_id, room_id, created_at, updated_at
            FROM bookings
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(booking_id.to_string())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to find booking: {}", e)))?;

        let Some(row) = row else {
            return Err(DomainError::NotFound {
                resource: "Booking".to_string(),
            });
        };
        let mut booking = Self::row_to_booking(&row)?;

        booking.room_id = room_id;
        booking.updated_at = Utc::now();

        sqlx::query("UPDATE bookings SET room_id = ?, updated_at = ? WHERE id = ?")
            .bind(booking.room_id.to_string())
            .bind(booking.updated_at)
            .bind(booking.id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to update booking: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::internal(format!("Failed to commit booking: {}", e)))?;

        Ok(booking)
    }
}
