//! Unit tests for the hotel service

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::entities::{
    Enrollment, Hotel, Room, Ticket, TicketStatus, TicketType, TicketWithType,
};
use crate::errors::{DomainError, HotelError};
use crate::repositories::{
    MockEnrollmentRepository, MockHotelRepository, MockTicketRepository,
};
use crate::services::hotel::HotelService;

struct TestHarness {
    enrollment_repo: Arc<MockEnrollmentRepository>,
    ticket_repo: Arc<MockTicketRepository>,
    hotel_repo: Arc<MockHotelRepository>,
    service: HotelService<MockEnrollmentRepository, MockTicketRepository, MockHotelRepository>,
}

fn harness() -> TestHarness {
    let enrollment_repo = Arc::new(MockEnrollmentRepository::new());
    let ticket_repo = Arc::new(MockTicketRepository::new());
    let hotel_repo = Arc::new(MockHotelRepository::new());
    let service = HotelService::new(
        Arc::clone(&enrollment_repo),
        Arc::clone(&ticket_repo),
        Arc::clone(&hotel_repo),
    );
    TestHarness {
        enrollment_repo,
        ticket_repo,
        hotel_repo,
        service,
    }
}

async fn enroll_user_with_ticket(
    harness: &TestHarness,
    status: TicketStatus,
    is_remote: bool,
    includes_hotel: bool,
) -> Uuid {
    let user_id = Uuid::new_v4();
    let enrollment = Enrollment::new(
        user_id,
        "Jo Attendee".to_string(),
        "12345678900".to_string(),
        "+55 11 91234-5678".to_string(),
        NaiveDate::from_ymd_opt(1995, 4, 12).unwrap(),
    );
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
    let mut ticket = Ticket::new(enrollment.id, ticket_type.id);
    ticket.status = status;

    harness.enrollment_repo.insert(enrollment).await;
    harness
        .ticket_repo
        .insert(TicketWithType { ticket, ticket_type })
        .await;
    user_id
}

fn assert_payment_required(err: DomainError, requirement: &str) {
    match err {
        DomainError::Hotel(HotelError::PaymentRequired { requirement: r }) => {
            assert_eq!(r, requirement)
        }
        other => panic!("expected PaymentRequired, got {:?}", other),
    }
}

#[tokio::test]
async fn list_hotels_requires_enrollment() {
    let harness = harness();

    let err = harness.service.list_hotels(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::Hotel(HotelError::NotEnrolled)));
}

#[tokio::test]
async fn list_hotels_requires_hotel_inclusive_ticket() {
    let harness = harness();
    let user_id = enroll_user_with_ticket(&harness, TicketStatus::Paid, false, false).await;

    let err = harness.service.list_hotels(user_id).await.unwrap_err();
    assert_payment_required(err, "Hotel");
}

#[tokio::test]
async fn list_hotels_requires_paid_ticket() {
    let harness = harness();
    let user_id = enroll_user_with_ticket(&harness, TicketStatus::Reserved, false, true).await;

    let err = harness.service.list_hotels(user_id).await.unwrap_err();
    assert_payment_required(err, "Payment");
}

#[tokio::test]
async fn list_hotels_rejects_remote_tickets() {
    let harness = harness();
    let user_id = enroll_user_with_ticket(&harness, TicketStatus::Paid, true, true).await;

    let err = harness.service.list_hotels(user_id).await.unwrap_err();
    assert_payment_required(err, "Hotel");
}

#[tokio::test]
async fn list_hotels_fails_when_none_exist() {
    let harness = harness();
    let user_id = enroll_user_with_ticket(&harness, TicketStatus::Paid, false, true).await;

    let err = harness.service.list_hotels(user_id).await.unwrap_err();
    assert!(matches!(err, DomainError::Hotel(HotelError::NoHotels)));
}

#[tokio::test]
async fn list_hotels_returns_inventory() {
    let harness = harness();
    let user_id = enroll_user_with_ticket(&harness, TicketStatus::Paid, false, true).await;
    let hotel = Hotel::new("Palace Hotel".to_string(), "https://example.com/p.jpg".to_string());
    harness.hotel_repo.insert_hotel(hotel.clone()).await;

    let hotels = harness.service.list_hotels(user_id).await.unwrap();
    assert_eq!(hotels, vec![hotel]);
}

#[tokio::test]
async fn get_hotel_with_rooms_returns_rooms() {
    let harness = harness();
    let user_id = enroll_user_with_ticket(&harness, TicketStatus::Paid, false, true).await;
    let hotel = Hotel::new("Palace Hotel".to_string(), "https://example.com/p.jpg".to_string());
    let room = Room::new(hotel.id, "101".to_string(), 3);
    harness.hotel_repo.insert_hotel(hotel.clone()).await;
    harness.hotel_repo.insert_room(room.clone()).await;

    let result = harness
        .service
        .get_hotel_with_rooms(user_id, hotel.id)
        .await
        .unwrap();
    assert_eq!(result.hotel, hotel);
    assert_eq!(result.rooms, vec![room]);
}

#[tokio::test]
async fn get_hotel_with_rooms_fails_for_unknown_hotel() {
    let harness = harness();
    let user_id = enroll_user_with_ticket(&harness, TicketStatus::Paid, false, true).await;

    let err = harness
        .service
        .get_hotel_with_rooms(user_id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Hotel(HotelError::HotelNotFound)));
}
