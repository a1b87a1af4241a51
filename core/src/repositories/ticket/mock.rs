//! Mock implementation of TicketRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::TicketWithType;
use crate::errors::DomainError;

use super::trait_::TicketRepository;

/// Mock ticket repository for testing
pub struct MockTicketRepository {
    tickets: Arc<RwLock<HashMap<Uuid, TicketWithType>>>,
}

impl MockTicketRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tickets: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a ticket keyed by its enrollment
    pub async fn insert(&self, ticket: TicketWithType) {
        let mut tickets = self.tickets.write().await;
        tickets.insert(ticket.ticket.enrollment_id, ticket);
    }
}

impl Default for MockTicketRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TicketRepository for MockTicketRepository {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: Uuid,
    ) -> Result<Option<TicketWithType>, DomainError> {
        let tickets = self.tickets.read().await;
        Ok(tickets.get(&enrollment_id).cloned())
    }
}
