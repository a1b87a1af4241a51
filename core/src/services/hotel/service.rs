//! Hotel browsing service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Hotel, HotelWithRooms, TicketWithType};
use crate::errors::{DomainResult, HotelError};
use crate::repositories::{EnrollmentRepository, HotelRepository, TicketRepository};

/// Hotel browsing service.
///
/// Applies its own precondition gates rather than the booking
/// eligibility evaluator: missing enrollment or ticket are reported as
/// not-found kinds here, and each entitlement shortfall names what is
/// missing via `PaymentRequired`.
pub struct HotelService<E, T, H>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    H: HotelRepository,
{
    /// Enrollment repository for registration lookups
    enrollment_repository: Arc<E>,
    /// Ticket repository for ticket + type lookups
    ticket_repository: Arc<T>,
    /// Hotel repository for inventory lookups
    hotel_repository: Arc<H>,
}

impl<E, T, H> HotelService<E, T, H>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    H: HotelRepository,
{
    /// Create a new hotel service
    pub fn new(
        enrollment_repository: Arc<E>,
        ticket_repository: Arc<T>,
        hotel_repository: Arc<H>,
    ) -> Self {
        Self {
            enrollment_repository,
            ticket_repository,
            hotel_repository,
        }
    }

    /// List all hotels offering rooms for the event
    pub async fn list_hotels(&self, user_id: Uuid) -> DomainResult<Vec<Hotel>> {
        self.check_access(user_id).await?;

        let hotels = self.hotel_repository.find_all().await?;
        if hotels.is_empty() {
            return Err(HotelError::NoHotels.into());
        }
        Ok(hotels)
    }

    /// Return one hotel with all of its rooms
    pub async fn get_hotel_with_rooms(
        &self,
        user_id: Uuid,
        hotel_id: Uuid,
    ) -> DomainResult<HotelWithRooms> {
        self.check_access(user_id).await?;

        let hotel = self
            .hotel_repository
            .find_by_id_with_rooms(hotel_id)
            .await?
            .ok_or(HotelError::HotelNotFound)?;
        Ok(hotel)
    }

    /// Gate hotel browsing on an enrollment with a lodging-entitled ticket
    async fn check_access(&self, user_id: Uuid) -> DomainResult<()> {
        let enrollment = self
            .enrollment_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(HotelError::NotEnrolled)?;

        let ticket = self
            .ticket_repository
            .find_by_enrollment_id(enrollment.id)
            .await?
            .ok_or(HotelError::NoTicket)?;

        Self::check_entitlements(&ticket)
    }

    // Ordered checks; each shortfall names the missing requirement.
    fn check_entitlements(ticket: &TicketWithType) -> DomainResult<()> {
        if !ticket.ticket_type.includes_hotel {
            return Err(HotelError::payment_required("Hotel").into());
        }
        if !ticket.ticket.is_paid() {
            return Err(HotelError::payment_required("Payment").into());
        }
        if ticket.ticket_type.is_remote {
            return Err(HotelError::payment_required("Hotel").into());
        }
        Ok(())
    }
}
