use actix_web::{web, HttpResponse};

use crate::dto::{BookingIdResponse, CreateBookingRequest};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

use se_core::repositories::{
    BookingRepository, EnrollmentRepository, HotelRepository, TicketRepository,
};

/// Handler for POST /api/v1/booking
///
/// Reserves a room for the caller. Eligibility, the one-booking-per-user
/// rule and room capacity are all enforced by the booking service.
pub async fn create_booking<E, T, H, B>(
    auth: AuthContext,
    state: web::Data<AppState<E, T, H, B>>,
    request: web::Json<CreateBookingRequest>,
) -> HttpResponse
where
    E: EnrollmentRepository + 'static,
    T: TicketRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
{
    match state
        .booking_service
        .create_booking(auth.user_id, request.room_id)
        .await
    {
        Ok(booking_id) => {
            tracing::info!(user_id = %auth.user_id, %booking_id, "booking created");
            HttpResponse::Ok().json(BookingIdResponse { booking_id })
        }
        Err(error) => handle_domain_error(error),
    }
}
