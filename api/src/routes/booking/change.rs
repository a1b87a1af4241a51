use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::{BookingIdResponse, ChangeBookingRequest};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

use se_core::repositories::{
    BookingRepository, EnrollmentRepository, HotelRepository, TicketRepository,
};

/// Handler for PUT /api/v1/booking/{booking_id}
///
/// Moves the caller's booking to another room. The path id must match
/// the caller's own booking.
pub async fn change_booking<E, T, H, B>(
    auth: AuthContext,
    state: web::Data<AppState<E, T, H, B>>,
    booking_id: web::Path<Uuid>,
    request: web::Json<ChangeBookingRequest>,
) -> HttpResponse
where
    E: EnrollmentRepository + 'static,
    T: TicketRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
{
    match state
        .booking_service
        .change_booking(auth.user_id, request.room_id, booking_id.into_inner())
        .await
    {
        Ok(booking_id) => {
            tracing::info!(user_id = %auth.user_id, %booking_id, "booking moved");
            HttpResponse::Ok().json(BookingIdResponse { booking_id })
        }
        Err(error) => handle_domain_error(error),
    }
}
