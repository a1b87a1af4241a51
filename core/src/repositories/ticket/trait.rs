//! Ticket repository trait defining the interface for ticket lookups.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::TicketWithType;
use crate::errors::DomainError;

/// Repository trait for Ticket read access.
///
/// An enrollment holds at most one ticket; the uniqueness is enforced by
/// the ticketing service that writes them.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Find the enrollment's current ticket joined with its type
    ///
    /// # Returns
    /// * `Ok(Some(TicketWithType))` - Ticket found
    /// * `Ok(None)` - The enrollment has no ticket
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: Uuid,
    ) -> Result<Option<TicketWithType>, DomainError>;
}
