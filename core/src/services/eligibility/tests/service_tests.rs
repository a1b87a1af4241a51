//! Unit tests for the eligibility service

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::entities::{Enrollment, Ticket, TicketStatus, TicketType, TicketWithType};
use crate::errors::BookingError;
use crate::repositories::{MockEnrollmentRepository, MockTicketRepository};
use crate::services::eligibility::EligibilityService;

fn enrollment_for(user_id: Uuid) -> Enrollment {
    Enrollment::new(
        user_id,
        "Jo Attendee".to_string(),
        "12345678900".to_string(),
        "+55 11 91234-5678".to_string(),
        NaiveDate::from_ymd_opt(1995, 4, 12).unwrap(),
    )
}

fn ticket_for(
    enrollment_id: Uuid,
    status: TicketStatus,
    is_remote: bool,
    includes_hotel: bool,
) -> TicketWithType {
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
    let mut ticket = Ticket::new(enrollment_id, ticket_type.id);
    ticket.status = status;
    TicketWithType { ticket, ticket_type }
}

async fn service_with(
    enrollment: Option<Enrollment>,
    ticket: Option<TicketWithType>,
) -> EligibilityService<MockEnrollmentRepository, MockTicketRepository> {
    let enrollment_repo = MockEnrollmentRepository::new();
    if let Some(enrollment) = enrollment {
        enrollment_repo.insert(enrollment).await;
    }
    let ticket_repo = MockTicketRepository::new();
    if let Some(ticket) = ticket {
        ticket_repo.insert(ticket).await;
    }
    EligibilityService::new(Arc::new(enrollment_repo), Arc::new(ticket_repo))
}

#[tokio::test]
async fn fails_with_not_enrolled_when_user_has_no_enrollment() {
    let service = service_with(None, None).await;

    let err = service.check_eligibility(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.as_booking_error(), Some(&BookingError::NotEnrolled));
}

#[tokio::test]
async fn fails_with_no_ticket_when_enrollment_has_none() {
    let user_id = Uuid::new_v4();
    let service = service_with(Some(enrollment_for(user_id)), None).await;

    let err = service.check_eligibility(user_id).await.unwrap_err();
    assert_eq!(err.as_booking_error(), Some(&BookingError::NoTicket));
}

#[tokio::test]
async fn fails_with_ineligible_ticket_for_reserved_status() {
    let user_id = Uuid::new_v4();
    let enrollment = enrollment_for(user_id);
    let ticket = ticket_for(enrollment.id, TicketStatus::Reserved, false, true);
    let service = service_with(Some(enrollment), Some(ticket)).await;

    let err = service.check_eligibility(user_id).await.unwrap_err();
    assert_eq!(err.as_booking_error(), Some(&BookingError::IneligibleTicket));
}

#[tokio::test]
async fn fails_with_ineligible_ticket_for_remote_type() {
    let user_id = Uuid::new_v4();
    let enrollment = enrollment_for(user_id);
    let ticket = ticket_for(enrollment.id, TicketStatus::Paid, true, true);
    let service = service_with(Some(enrollment), Some(ticket)).await;

    let err = service.check_eligibility(user_id).await.unwrap_err();
    assert_eq!(err.as_booking_error(), Some(&BookingError::IneligibleTicket));
}

#[tokio::test]
async fn fails_with_ineligible_ticket_when_hotel_not_included() {
    let user_id = Uuid::new_v4();
    let enrollment = enrollment_for(user_id);
    let ticket = ticket_for(enrollment.id, TicketStatus::Paid, false, false);
    let service = service_with(Some(enrollment), Some(ticket)).await;

    let err = service.check_eligibility(user_id).await.unwrap_err();
    assert_eq!(err.as_booking_error(), Some(&BookingError::IneligibleTicket));
}

#[tokio::test]
async fn succeeds_for_paid_in_person_hotel_ticket() {
    let user_id = Uuid::new_v4();
    let enrollment = enrollment_for(user_id);
    let ticket = ticket_for(enrollment.id, TicketStatus::Paid, false, true);
    let service = service_with(Some(enrollment), Some(ticket)).await;

    assert!(service.check_eligibility(user_id).await.is_ok());
}
