//! Unit tests for the booking service

use uuid::Uuid;

use crate::domain::entities::TicketStatus;
use crate::errors::BookingError;
use crate::repositories::BookingRepository;

use super::mocks::*;

#[tokio::test]
async fn create_booking_succeeds_and_is_readable() {
    let harness = harness();
    let user_id = enroll_eligible_user(&harness).await;
    let room = add_room(&harness, 2).await;

    let booking_id = harness
        .service
        .create_booking(user_id, room.id)
        .await
        .unwrap();

    let view = harness.service.get_booking(user_id).await.unwrap();
    assert_eq!(view.id, booking_id);
    assert_eq!(view.room, room);
}

#[tokio::test]
async fn all_operations_fail_with_not_enrolled_for_unknown_user() {
    let harness = harness();
    let room = add_room(&harness, 2).await;
    let user_id = Uuid::new_v4();

    let err = harness
        .service
        .create_booking(user_id, room.id)
        .await
        .unwrap_err();
    assert_eq!(err.as_booking_error(), Some(&BookingError::NotEnrolled));

    let err = harness
        .service
        .change_booking(user_id, room.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(err.as_booking_error(), Some(&BookingError::NotEnrolled));
}

#[tokio::test]
async fn second_create_fails_with_already_booked_regardless_of_room() {
    let harness = harness();
    let user_id = enroll_eligible_user(&harness).await;
    let room_a = add_room(&harness, 2).await;
    let room_b = add_room(&harness, 2).await;

    harness
        .service
        .create_booking(user_id, room_a.id)
        .await
        .unwrap();

    let err = harness
        .service
        .create_booking(user_id, room_b.id)
        .await
        .unwrap_err();
    assert_eq!(err.as_booking_error(), Some(&BookingError::AlreadyBooked));
}

#[tokio::test]
async fn create_fails_when_room_does_not_exist() {
    let harness = harness();
    let user_id = enroll_eligible_user(&harness).await;

    let err = harness
        .service
        .create_booking(user_id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(err.as_booking_error(), Some(&BookingError::RoomNotFound));
}

#[tokio::test]
async fn create_fails_when_room_is_full() {
    let harness = harness();
    let occupant = enroll_eligible_user(&harness).await;
    let user_id = enroll_eligible_user(&harness).await;
    let room = add_room(&harness, 1).await;

    harness
        .service
        .create_booking(occupant, room.id)
        .await
        .unwrap();

    let err = harness
        .service
        .create_booking(user_id, room.id)
        .await
        .unwrap_err();
    assert_eq!(err.as_booking_error(), Some(&BookingError::RoomFull));
}

#[tokio::test]
async fn ineligible_ticket_fails_before_any_room_lookup() {
    let harness = harness();
    let user_id = enroll_user_with_ticket(&harness, TicketStatus::Reserved, false, true).await;
    let room = add_room(&harness, 2).await;

    let err = harness
        .service
        .create_booking(user_id, room.id)
        .await
        .unwrap_err();
    assert_eq!(err.as_booking_error(), Some(&BookingError::IneligibleTicket));
    assert_eq!(harness.hotel_repo.room_lookup_count(), 0);
}

#[tokio::test]
async fn get_booking_fails_when_user_has_none() {
    let harness = harness();
    let user_id = enroll_eligible_user(&harness).await;

    let err = harness.service.get_booking(user_id).await.unwrap_err();
    assert_eq!(err.as_booking_error(), Some(&BookingError::NoBooking));
}

#[tokio::test]
async fn get_booking_is_idempotent() {
    let harness = harness();
    let user_id = enroll_eligible_user(&harness).await;
    let room = add_room(&harness, 2).await;
    harness
        .service
        .create_booking(user_id, room.id)
        .await
        .unwrap();

    let first = harness.service.get_booking(user_id).await.unwrap();
    let second = harness.service.get_booking(user_id).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn change_booking_moves_to_the_new_room() {
    let harness = harness();
    let user_id = enroll_eligible_user(&harness).await;
    let room_a = add_room(&harness, 2).await;
    let room_b = add_room(&harness, 2).await;

    let booking_id = harness
        .service
        .create_booking(user_id, room_a.id)
        .await
        .unwrap();

    let changed_id = harness
        .service
        .change_booking(user_id, room_b.id, booking_id)
        .await
        .unwrap();
    assert_eq!(changed_id, booking_id);

    let view = harness.service.get_booking(user_id).await.unwrap();
    assert_eq!(view.room, room_b);
}

#[tokio::test]
async fn change_booking_without_one_fails_with_no_existing_booking() {
    let harness = harness();
    let user_id = enroll_eligible_user(&harness).await;
    let room = add_room(&harness, 2).await;

    let err = harness
        .service
        .change_booking(user_id, room.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(
        err.as_booking_error(),
        Some(&BookingError::NoExistingBooking)
    );
}

#[tokio::test]
async fn change_booking_with_wrong_id_fails_and_writes_nothing() {
    let harness = harness();
    let user_id = enroll_eligible_user(&harness).await;
    let room_a = add_room(&harness, 2).await;
    let room_b = add_room(&harness, 2).await;

    harness
        .service
        .create_booking(user_id, room_a.id)
        .await
        .unwrap();

    let err = harness
        .service
        .change_booking(user_id, room_b.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(err.as_booking_error(), Some(&BookingError::BookingMismatch));

    // No write happened: the booking still points at the original room.
    let view = harness.service.get_booking(user_id).await.unwrap();
    assert_eq!(view.room, room_a);
}

#[tokio::test]
async fn change_booking_to_full_room_fails() {
    let harness = harness();
    let occupant = enroll_eligible_user(&harness).await;
    let user_id = enroll_eligible_user(&harness).await;
    let room_a = add_room(&harness, 2).await;
    let room_b = add_room(&harness, 1).await;

    harness
        .service
        .create_booking(occupant, room_b.id)
        .await
        .unwrap();
    let booking_id = harness
        .service
        .create_booking(user_id, room_a.id)
        .await
        .unwrap();

    let err = harness
        .service
        .change_booking(user_id, room_b.id, booking_id)
        .await
        .unwrap_err();
    assert_eq!(err.as_booking_error(), Some(&BookingError::RoomFull));
}

#[tokio::test]
async fn same_room_change_at_capacity_one_fails_room_full() {
    // The occupancy count includes the caller's own booking, so moving
    // onto one's current capacity-1 room is rejected.
    let harness = harness();
    let user_id = enroll_eligible_user(&harness).await;
    let room = add_room(&harness, 1).await;

    let booking_id = harness
        .service
        .create_booking(user_id, room.id)
        .await
        .unwrap();

    let err = harness
        .service
        .change_booking(user_id, room.id, booking_id)
        .await
        .unwrap_err();
    assert_eq!(err.as_booking_error(), Some(&BookingError::RoomFull));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_never_exceed_capacity() {
    let harness = harness();
    let room = add_room(&harness, 1).await;

    let mut users = Vec::new();
    for _ in 0..8 {
        users.push(enroll_eligible_user(&harness).await);
    }

    let mut handles = Vec::new();
    for user_id in users {
        let service = harness.service.clone();
        let room_id = room.id;
        handles.push(tokio::spawn(async move {
            service.create_booking(user_id, room_id).await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(err) => {
                assert_eq!(err.as_booking_error(), Some(&BookingError::RoomFull));
            }
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(
        harness.booking_repo.count_by_room_id(room.id).await.unwrap(),
        1
    );
}
