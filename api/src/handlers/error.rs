//! Domain error to HTTP response mapping.
//!
//! Every domain error kind keeps its own code and message on the wire.
//! Not-found, forbidden and payment-required categories map to distinct
//! status codes; infrastructure failures collapse to 500 without leaking
//! their message.

use actix_web::HttpResponse;

use se_core::errors::{BookingError, DomainError, HotelError};
use se_shared::errors::{error_codes, ErrorResponse};

/// Convert a domain error into the matching HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Booking(booking_error) => handle_booking_error(booking_error),
        DomainError::Hotel(hotel_error) => handle_hotel_error(hotel_error),
        DomainError::Validation { message } => HttpResponse::BadRequest().json(
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message),
        ),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            error_codes::NOT_FOUND,
            format!("{} not found", resource),
        )),
        DomainError::Unauthorized => HttpResponse::Unauthorized().json(ErrorResponse::new(
            error_codes::UNAUTHORIZED,
            "Authentication required",
        )),
        DomainError::Internal { message } => {
            tracing::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                "An internal error occurred",
            ))
        }
    }
}

fn handle_booking_error(error: BookingError) -> HttpResponse {
    let message = error.to_string();
    match error {
        BookingError::NoBooking | BookingError::RoomNotFound => {
            HttpResponse::NotFound().json(ErrorResponse::new(error_codes::NOT_FOUND, message))
        }
        BookingError::NotEnrolled
        | BookingError::NoTicket
        | BookingError::IneligibleTicket
        | BookingError::AlreadyBooked
        | BookingError::RoomFull
        | BookingError::NoExistingBooking
        | BookingError::BookingMismatch => {
            HttpResponse::Forbidden().json(ErrorResponse::new(error_codes::FORBIDDEN, message))
        }
    }
}

fn handle_hotel_error(error: HotelError) -> HttpResponse {
    let message = error.to_string();
    match error {
        HotelError::NotEnrolled
        | HotelError::NoTicket
        | HotelError::NoHotels
        | HotelError::HotelNotFound => {
            HttpResponse::NotFound().json(ErrorResponse::new(error_codes::NOT_FOUND, message))
        }
        HotelError::PaymentRequired { .. } => HttpResponse::PaymentRequired()
            .json(ErrorResponse::new(error_codes::PAYMENT_REQUIRED, message)),
    }
}
