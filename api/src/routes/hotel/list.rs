use actix_web::{web, HttpResponse};

use crate::dto::HotelResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

use se_core::repositories::{
    BookingRepository, EnrollmentRepository, HotelRepository, TicketRepository,
};

/// Handler for GET /api/v1/hotels
///
/// Lists all hotels. Requires the caller to hold a lodging-entitled
/// ticket.
pub async fn list_hotels<E, T, H, B>(
    auth: AuthContext,
    state: web::Data<AppState<E, T, H, B>>,
) -> HttpResponse
where
    E: EnrollmentRepository + 'static,
    T: TicketRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
{
    match state.hotel_service.list_hotels(auth.user_id).await {
        Ok(hotels) => HttpResponse::Ok().json(
            hotels
                .into_iter()
                .map(HotelResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}
