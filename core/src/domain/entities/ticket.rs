//! Ticket entities: the purchasable event pass and its reference type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a ticket
///
/// Tickets start as `Reserved` and move to `Paid` once the payment
/// service confirms them. There are no further transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketStatus {
    /// Ticket reserved, payment pending
    Reserved,
    /// Ticket paid and confirmed
    Paid,
}

/// Reference data describing what a ticket entitles its holder to.
///
/// Read-only to this crate; the catalog is managed elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketType {
    /// Unique identifier for the ticket type
    pub id: Uuid,

    /// Display name of the ticket type
    pub name: String,

    /// Price in cents
    pub price: i64,

    /// Whether this ticket is for remote attendance
    pub is_remote: bool,

    /// Whether this ticket includes a hotel stay
    pub includes_hotel: bool,

    /// Timestamp when the ticket type was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the ticket type was last updated
    pub updated_at: DateTime<Utc>,
}

/// Ticket entity tied to exactly one enrollment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier for the ticket
    pub id: Uuid,

    /// Enrollment this ticket belongs to
    pub enrollment_id: Uuid,

    /// Reference to the ticket type
    pub ticket_type_id: Uuid,

    /// Current lifecycle status
    pub status: TicketStatus,

    /// Timestamp when the ticket was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the ticket was last updated
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Creates a new reserved ticket for an enrollment
    pub fn new(enrollment_id: Uuid, ticket_type_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            enrollment_id,
            ticket_type_id,
            status: TicketStatus::Reserved,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks if the ticket has been paid
    pub fn is_paid(&self) -> bool {
        self.status == TicketStatus::Paid
    }
}

/// A ticket joined with its type, as returned by the data access layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketWithType {
    /// The ticket record
    pub ticket: Ticket,

    /// The referenced ticket type
    pub ticket_type: TicketType,
}

impl TicketWithType {
    /// Whether this ticket entitles its holder to book event lodging.
    ///
    /// Requires a paid, in-person ticket whose type includes a hotel stay.
    pub fn grants_lodging(&self) -> bool {
        self.ticket.is_paid() && !self.ticket_type.is_remote && self.ticket_type.includes_hotel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket_with(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> TicketWithType {
        let now = Utc::now();
        let ticket_type = TicketType {
            id: Uuid::new_v4(),
            name: "Full Pass".to_string(),
            price: 25_000,
            is_remote,
            includes_hotel,
            created_at: now,
            updated_at: now,
        };
        let mut ticket = Ticket::new(Uuid::new_v4(), ticket_type.id);
        ticket.status = status;
        TicketWithType { ticket, ticket_type }
    }

    #[test]
    fn new_ticket_starts_reserved() {
        let ticket = Ticket::new(Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(ticket.status, TicketStatus::Reserved);
        assert!(!ticket.is_paid());
    }

    #[test]
    fn paid_in_person_hotel_ticket_grants_lodging() {
        assert!(ticket_with(TicketStatus::Paid, false, true).grants_lodging());
    }

    #[test]
    fn reserved_remote_or_hotel_less_tickets_do_not_grant_lodging() {
        assert!(!ticket_with(TicketStatus::Reserved, false, true).grants_lodging());
        assert!(!ticket_with(TicketStatus::Paid, true, true).grants_lodging());
        assert!(!ticket_with(TicketStatus::Paid, false, false).grants_lodging());
    }

    #[test]
    fn status_serializes_in_wire_format() {
        let json = serde_json::to_string(&TicketStatus::Reserved).unwrap();
        assert_eq!(json, "\"RESERVED\"");
        let json = serde_json::to_string(&TicketStatus::Paid).unwrap();
        assert_eq!(json, "\"PAID\"");
    }
}
