//! Booking service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::value_objects::BookingView;
use crate::errors::{BookingError, DomainResult};
use crate::repositories::{
    BookingRepository, EnrollmentRepository, HotelRepository, TicketRepository,
};
use crate::services::eligibility::EligibilityService;

/// Booking service arbitrating reservation creation and room changes.
///
/// Holds no state between calls: every decision is made from a fresh
/// read of booking, ticket and room state. The capacity checks below are
/// fast-path rejections; the authoritative guard against concurrent
/// overbooking is the repository's conditional write (see
/// [`BookingRepository`]).
pub struct BookingService<E, T, H, B>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    H: HotelRepository,
    B: BookingRepository,
{
    /// Eligibility gate run before every mutation
    eligibility: Arc<EligibilityService<E, T>>,
    /// Hotel repository for room lookups
    hotel_repository: Arc<H>,
    /// Booking repository for booking persistence
    booking_repository: Arc<B>,
}

impl<E, T, H, B> BookingService<E, T, H, B>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    H: HotelRepository,
    B: BookingRepository,
{
    /// Create a new booking service
    pub fn new(
        eligibility: Arc<EligibilityService<E, T>>,
        hotel_repository: Arc<H>,
        booking_repository: Arc<B>,
    ) -> Self {
        Self {
            eligibility,
            hotel_repository,
            booking_repository,
        }
    }

    /// Return the user's current booking with its room snapshot.
    ///
    /// No eligibility check runs on the read path: a booking made while
    /// eligible stays visible even if the ticket later changes.
    ///
    /// # Returns
    /// * `Ok(BookingView)` - The user's booking
    /// * `Err(BookingError::NoBooking)` - The user has no booking
    pub async fn get_booking(&self, user_id: Uuid) -> DomainResult<BookingView> {
        let booking = self
            .booking_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(BookingError::NoBooking)?;

        Ok(BookingView::from(booking))
    }

    /// Reserve a room for the user.
    ///
    /// Precondition gates, in order, first failure wins:
    ///
    /// 1. Eligibility (propagated unchanged from the eligibility service)
    /// 2. The user must not already hold a booking (`AlreadyBooked`)
    /// 3. The room must exist (`RoomNotFound`)
    /// 4. The room must have a free slot (`RoomFull`)
    ///
    /// The final insert re-verifies capacity atomically; losing a race
    /// for the last slot also surfaces as `RoomFull`.
    ///
    /// # Returns
    /// * `Ok(Uuid)` - Id of the created booking
    pub async fn create_booking(&self, user_id: Uuid, room_id: Uuid) -> DomainResult<Uuid> {
        self.eligibility.check_eligibility(user_id).await?;

        if self
            .booking_repository
            .find_by_user_id(user_id)
            .await?
            .is_some()
        {
            return Err(BookingError::AlreadyBooked.into());
        }

        let room = self
            .hotel_repository
            .find_room_by_id(room_id)
            .await?
            .ok_or(BookingError::RoomNotFound)?;

        let occupied = self.booking_repository.count_by_room_id(room_id).await?;
        if room.is_full(occupied) {
            return Err(BookingError::RoomFull.into());
        }

        let booking = self.booking_repository.create(user_id, room_id).await?;
        tracing::debug!(booking_id = %booking.id, %room_id, "booking created");

        Ok(booking.id)
    }

    /// Move the user's booking to another room.
    ///
    /// Precondition gates, in order, first failure wins:
    ///
    /// 1. Eligibility (propagated unchanged)
    /// 2. The user must already hold a booking (`NoExistingBooking`)
    /// 3. The supplied booking id must match that booking
    ///    (`BookingMismatch` -- identity check on top of the user lookup)
    /// 4. The target room must exist (`RoomNotFound`)
    /// 5. The target room must have a free slot (`RoomFull`). The count
    ///    includes the caller's own booking when the target equals the
    ///    current room, so a same-room change can fail at capacity 1.
    ///
    /// # Returns
    /// * `Ok(Uuid)` - Id of the changed booking
    pub async fn change_booking(
        &self,
        user_id: Uuid,
        room_id: Uuid,
        booking_id: Uuid,
    ) -> DomainResult<Uuid> {
        self.eligibility.check_eligibility(user_id).await?;

        let current = self
            .booking_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(BookingError::NoExistingBooking)?;

        if current.booking.id != booking_id {
            return Err(BookingError::BookingMismatch.into());
        }

        let room = self
            .hotel_repository
            .find_room_by_id(room_id)
            .await?
            .ok_or(BookingError::RoomNotFound)?;

        let occupied = self.booking_repository.count_by_room_id(room_id).await?;
        if room.is_full(occupied) {
            return Err(BookingError::RoomFull.into());
        }

        let booking = self
            .booking_repository
            .update_room(booking_id, room_id)
            .await?;
        tracing::debug!(booking_id = %booking.id, %room_id, "booking moved");

        Ok(booking.id)
    }
}
