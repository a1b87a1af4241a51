//! MySQL implementation of the EnrollmentRepository trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use se_core::domain::entities::{Address, Enrollment};
use se_core::errors::DomainError;
use se_core::repositories::EnrollmentRepository;

use super::{get_timestamp, get_uuid};

/// MySQL implementation of EnrollmentRepository
pub struct MySqlEnrollmentRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlEnrollmentRepository {
    /// Create a new MySQL enrollment repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_enrollment(row: &sqlx::mysql::MySqlRow) -> Result<Enrollment, DomainError> {
        Ok(Enrollment {
            id: get_uuid(row, "id")?,
            user_id: get_uuid(row, "user_id")?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::internal(format!("Failed to get name: {}", e)))?,
            document: row
                .try_get("document")
                .map_err(|e| DomainError::internal(format!("Failed to get document: {}", e)))?,
            phone: row
                .try_get("phone")
                .map_err(|e| DomainError::internal(format!("Failed to get phone: {}", e)))?,
            birthday: row
                .try_get::<NaiveDate, _>("birthday")
                .map_err(|e| DomainError::internal(format!("Failed to get birthday: {}", e)))?,
            address: None,
            created_at: get_timestamp(row, "created_at")?,
            updated_at: get_timestamp(row, "updated_at")?,
        })
    }

    fn row_to_address(row: &sqlx::mysql::MySqlRow) -> Result<Address, DomainError> {
        Ok(Address {
            id: get_uuid(row, "id")?,
            enrollment_id: get_uuid(row, "enrollment_id")?,
            street: row
                .try_get("street")
                .map_err(|e| DomainError::internal(format!("Failed to get street: {}", e)))?,
            number: row
                .try_get("number")
                .map_err(|e| DomainError::internal(format!("Failed to get number: {}", e)))?,
            city: row
                .try_get("city")
                .map_err(|e| DomainError::internal(format!("Failed to get city: {}", e)))?,
            state: row
                .try_get("state")
                .map_err(|e| DomainError::internal(format!("Failed to get state: {}", e)))?,
            postal_code: row
                .try_get("postal_code")
                .map_err(|e| DomainError::internal(format!("Failed to get postal_code: {}", e)))?,
            detail: row
                .try_get("detail")
                .map_err(|e| DomainError::internal(format!("Failed to get detail: {}", e)))?,
            created_at: get_timestamp(row, "created_at")?,
            updated_at: get_timestamp(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl EnrollmentRepository for MySqlEnrollmentRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Enrollment>, DomainError> {
        let query = r#"
            SELECT id, user_id, name, document, phone, birthday, created_at, updated_at
            FROM enrollments
            WHERE user_id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find enrollment: {}", e)))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut enrollment = Self::row_to_enrollment(&row)?;

        let address_query = r#"
            SELECT id, enrollment_id, street, number, city, state, postal_code, detail,
                   created_at, updated_at
            FROM addresses
            WHERE enrollment_id = ?
            LIMIT 1
        "#;

        let address_row = sqlx::query(address_query)
            .bind(enrollment.id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find address: {}", e)))?;

        if let Some(address_row) = address_row {
            enrollment.address = Some(Self::row_to_address(&address_row)?);
        }

        Ok(Some(enrollment))
    }
}
