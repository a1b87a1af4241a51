//! Enrollment repository trait defining the interface for enrollment lookups.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Enrollment;
use crate::errors::DomainError;

/// Repository trait for Enrollment read access.
///
/// Enrollments are created and mutated by the registration service;
/// this crate only ever reads them, so the contract is lookup-only.
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Find a user's enrollment, with its address when one exists
    ///
    /// # Returns
    /// * `Ok(Some(Enrollment))` - Enrollment found
    /// * `Ok(None)` - The user has not enrolled
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Enrollment>, DomainError>;
}
