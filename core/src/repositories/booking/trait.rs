//! Booking repository trait defining the interface for booking persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Booking, BookingWithRoom};
use crate::errors::DomainError;

/// Repository trait for Booking persistence operations.
///
/// The write methods are **atomic conditional writes**: an implementation
/// must verify, within a single atomic unit against its store, that the
/// target room exists and has free capacity before inserting or moving a
/// booking. Concurrent writers racing for the last slot of a room must
/// therefore serialize, and the loser receives
/// [`BookingError::RoomFull`](crate::errors::BookingError::RoomFull),
/// never a raw storage error. This is what upholds the room-capacity
/// invariant under concurrency; the booking service's own capacity count
/// is only a fast-path precheck.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use se_core::repositories::BookingRepository;
/// use se_core::domain::entities::{Booking, BookingWithRoom};
/// use se_core::errors::{BookingError, DomainError};
///
/// struct MySqlBookingRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl BookingRepository for MySqlBookingRepository {
///     async fn create(&self, user_id: Uuid, room_id: Uuid) -> Result<Booking, DomainError> {
///         // lock the room row, count occupants, insert -- one transaction
///         Err(BookingError::RoomFull.into())
///     }
///
///     // ... other methods
/// #   async fn find_by_user_id(&self, _: Uuid) -> Result<Option<BookingWithRoom>, DomainError> { Ok(None) }
/// #   async fn count_by_room_id(&self, _: Uuid) -> Result<u64, DomainError> { Ok(0) }
/// #   async fn update_room(&self, _: Uuid, _: Uuid) -> Result<Booking, DomainError> { unimplemented!() }
/// }
/// ```
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find a user's current booking joined with its room
    ///
    /// # Returns
    /// * `Ok(Some(BookingWithRoom))` - The user has a booking
    /// * `Ok(None)` - No booking for this user
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<BookingWithRoom>, DomainError>;

    /// Count bookings currently referencing a room
    async fn count_by_room_id(&self, room_id: Uuid) -> Result<u64, DomainError>;

    /// Create a booking for the user in the given room.
    ///
    /// Atomic conditional write: fails with `RoomNotFound` when the room
    /// does not exist and `RoomFull` when it has no free capacity at
    /// commit time.
    async fn create(&self, user_id: Uuid, room_id: Uuid) -> Result<Booking, DomainError>;

    /// Move an existing booking to the given room.
    ///
    /// Atomic conditional write with the same guarantees as [`create`].
    /// The occupancy check counts the booking being moved when it already
    /// sits in the target room.
    ///
    /// [`create`]: BookingRepository::create
    async fn update_room(&self, booking_id: Uuid, room_id: Uuid) -> Result<Booking, DomainError>;
}
