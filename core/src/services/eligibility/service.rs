//! Eligibility evaluation service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{BookingError, DomainResult};
use crate::repositories::{EnrollmentRepository, TicketRepository};

/// Evaluates whether a user may book event lodging.
///
/// Stateless: every call re-reads enrollment and ticket state, so the
/// service is safe on any number of concurrent workers.
pub struct EligibilityService<E, T>
where
    E: EnrollmentRepository,
    T: TicketRepository,
{
    /// Enrollment repository for registration lookups
    enrollment_repository: Arc<E>,
    /// Ticket repository for ticket + type lookups
    ticket_repository: Arc<T>,
}

impl<E, T> EligibilityService<E, T>
where
    E: EnrollmentRepository,
    T: TicketRepository,
{
    /// Create a new eligibility service
    pub fn new(enrollment_repository: Arc<E>, ticket_repository: Arc<T>) -> Self {
        Self {
            enrollment_repository,
            ticket_repository,
        }
    }

    /// Check whether the user currently holds a qualifying ticket.
    ///
    /// The gates run in order and the first failing one wins:
    ///
    /// 1. The user must be enrolled (`NotEnrolled`)
    /// 2. The enrollment must have a ticket (`NoTicket`)
    /// 3. The ticket must be paid, in-person and hotel-inclusive
    ///    (`IneligibleTicket` -- the three conditions are evaluated
    ///    jointly and collapse into this one kind)
    ///
    /// Success carries no value; it is the absence of failure.
    pub async fn check_eligibility(&self, user_id: Uuid) -> DomainResult<()> {
        let enrollment = self
            .enrollment_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or(BookingError::NotEnrolled)?;

        let ticket = self
            .ticket_repository
            .find_by_enrollment_id(enrollment.id)
            .await?
            .ok_or(BookingError::NoTicket)?;

        if !ticket.grants_lodging() {
            return Err(BookingError::IneligibleTicket.into());
        }

        Ok(())
    }
}
