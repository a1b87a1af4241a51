//! Mock implementation of EnrollmentRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Enrollment;
use crate::errors::DomainError;

use super::trait_::EnrollmentRepository;

/// Mock enrollment repository for testing
pub struct MockEnrollmentRepository {
    enrollments: Arc<RwLock<HashMap<Uuid, Enrollment>>>,
}

impl MockEnrollmentRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            enrollments: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert an enrollment into the mock store
    pub async fn insert(&self, enrollment: Enrollment) {
        let mut enrollments = self.enrollments.write().await;
        enrollments.insert(enrollment.id, enrollment);
    }
}

impl Default for MockEnrollmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EnrollmentRepository for MockEnrollmentRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Enrollment>, DomainError> {
        let enrollments = self.enrollments.read().await;
        Ok(enrollments
            .values()
            .find(|e| e.user_id == user_id)
            .cloned())
    }
}
