use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::HotelWithRoomsResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

use se_core::repositories::{
    BookingRepository, EnrollmentRepository, HotelRepository, TicketRepository,
};

/// Handler for GET /api/v1/hotels/{hotel_id}
///
/// Returns one hotel with all of its rooms.
pub async fn get_hotel<E, T, H, B>(
    auth: AuthContext,
    state: web::Data<AppState<E, T, H, B>>,
    hotel_id: web::Path<Uuid>,
) -> HttpResponse
where
    E: EnrollmentRepository + 'static,
    T: TicketRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
{
    match state
        .hotel_service
        .get_hotel_with_rooms(auth.user_id, hotel_id.into_inner())
        .await
    {
        Ok(hotel) => HttpResponse::Ok().json(HotelWithRoomsResponse::from(hotel)),
        Err(error) => handle_domain_error(error),
    }
}
