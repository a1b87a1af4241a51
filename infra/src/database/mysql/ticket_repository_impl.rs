//! MySQL implementation of the TicketRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use se_core::domain::entities::{Ticket, TicketStatus, TicketType, TicketWithType};
use se_core::errors::DomainError;
use se_core::repositories::TicketRepository;

use super::{get_timestamp, get_uuid};

/// MySQL implementation of TicketRepository
pub struct MySqlTicketRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTicketRepository {
    /// Create a new MySQL ticket repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn parse_status(status: &str) -> Result<TicketStatus, DomainError> {
        match status {
            "RESERVED" => Ok(TicketStatus::Reserved),
            "PAID" => Ok(TicketStatus::Paid),
            other => Err(DomainError::internal(format!(
                "Unknown ticket status: {}",
                other
            ))),
        }
    }

    fn row_to_ticket_with_type(row: &sqlx::mysql::MySqlRow) -> Result<TicketWithType, DomainError> {
        let status: String = row
            .try_get("status")
            .map_err(|e| DomainError::internal(format!("Failed to get status: {}", e)))?;

        let ticket = Ticket {
            id: get_uuid(row, "ticket_id")?,
            enrollment_id: get_uuid(row, "enrollment_id")?,
            ticket_type_id: get_uuid(row, "ticket_type_id")?,
            status: Self::parse_status(&status)?,
            created_at: get_timestamp(row, "ticket_created_at")?,
            updated_at: get_timestamp(row, "ticket_updated_at")?,
        };

        let ticket_type = TicketType {
            id: get_uuid(row, "ticket_type_id")?,
            name: row
                .try_get("type_name")
                .map_err(|e| DomainError::internal(format!("Failed to get type_name: {}", e)))?,
            price: row
                .try_get("price")
                .map_err(|e| DomainError::internal(format!("Failed to get price: {}", e)))?,
            is_remote: row
                .try_get("is_remote")
                .map_err(|e| DomainError::internal(format!("Failed to get is_remote: {}", e)))?,
            includes_hotel: row.try_get("includes_hotel").map_err(|e| {
                DomainError::internal(format!("Failed to get includes_hotel: {}", e))
            })?,
            created_at: get_timestamp(row, "type_created_at")?,
            updated_at: get_timestamp(row, "type_updated_at")?,
        };

        Ok(TicketWithType { ticket, ticket_type })
    }
}

#[async_trait]
impl TicketRepository for MySqlTicketRepository {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: Uuid,
    ) -> Result<Option<TicketWithType>, DomainError> {
        let query = r#"
            SELECT t.id AS ticket_id,
                   t.enrollment_id,
                   t.ticket_type_id,
                   t.status,
                   t.created_at AS ticket_created_at,
                   t.updated_at AS ticket_updated_at,
                   tt.name AS type_name,
                   tt.price,
                   tt.is_remote,
                   tt.includes_hotel,
                   tt.created_at AS type_created_at,
                   tt.updated_at AS type_updated_at
            FROM tickets t
            INNER JOIN ticket_types tt ON tt.id = t.ticket_type_id
            WHERE t.enrollment_id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(enrollment_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find ticket: {}", e)))?;

        row.map(|row| Self::row_to_ticket_with_type(&row)).transpose()
    }
}
