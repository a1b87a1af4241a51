use actix_web::{web, HttpResponse};

use crate::dto::BookingResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

use se_core::repositories::{
    BookingRepository, EnrollmentRepository, HotelRepository, TicketRepository,
};

/// Handler for GET /api/v1/booking
///
/// Returns the caller's current booking with the room snapshot.
/// No eligibility check runs on the read path.
pub async fn get_booking<E, T, H, B>(
    auth: AuthContext,
    state: web::Data<AppState<E, T, H, B>>,
) -> HttpResponse
where
    E: EnrollmentRepository + 'static,
    T: TicketRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
{
    match state.booking_service.get_booking(auth.user_id).await {
        Ok(view) => HttpResponse::Ok().json(BookingResponse::from(view)),
        Err(error) => handle_domain_error(error),
    }
}
