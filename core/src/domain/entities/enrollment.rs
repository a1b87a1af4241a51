//! Enrollment entity representing a user's registration for the event.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mailing address attached to an enrollment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Unique identifier for the address
    pub id: Uuid,

    /// Enrollment this address belongs to
    pub enrollment_id: Uuid,

    /// Street name
    pub street: String,

    /// Street number
    pub number: String,

    /// City name
    pub city: String,

    /// State or province
    pub state: String,

    /// Postal code
    pub postal_code: String,

    /// Optional complement (apartment, floor, etc.)
    pub detail: Option<String>,

    /// Timestamp when the address was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the address was last updated
    pub updated_at: DateTime<Utc>,
}

/// Enrollment entity representing a user's registration record.
///
/// Core fields are immutable after creation; only the address may be
/// upserted later. A user has at most one enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Unique identifier for the enrollment
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Attendee full name
    pub name: String,

    /// Attendee identity document number
    pub document: String,

    /// Contact phone number
    pub phone: String,

    /// Attendee date of birth
    pub birthday: NaiveDate,

    /// Optional mailing address
    pub address: Option<Address>,

    /// Timestamp when the enrollment was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the enrollment was last updated
    pub updated_at: DateTime<Utc>,
}

impl Enrollment {
    /// Creates a new Enrollment instance
    pub fn new(
        user_id: Uuid,
        name: String,
        document: String,
        phone: String,
        birthday: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            document,
            phone,
            birthday,
            address: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches or replaces the mailing address
    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
        self.updated_at = Utc::now();
    }

    /// Checks if the enrollment has a mailing address
    pub fn has_address(&self) -> bool {
        self.address.is_some()
    }
}

impl Address {
    /// Creates a new Address for an enrollment
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        enrollment_id: Uuid,
        street: String,
        number: String,
        city: String,
        state: String,
        postal_code: String,
        detail: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            enrollment_id,
            street,
            number,
            city,
            state,
            postal_code,
            detail,
            created_at: now,
            updated_at: now,
        }
    }
}
