//! Application factory
//!
//! Builds the Actix-web application with middleware, routes and state.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, Error, HttpResponse};

use crate::middleware::{create_cors, JwtAuth};
use crate::routes::{booking, hotel, AppState};

use se_core::repositories::{
    BookingRepository, EnrollmentRepository, HotelRepository, TicketRepository,
};

/// Create and configure the application with all dependencies
pub fn create_app<E, T, H, B>(
    app_state: web::Data<AppState<E, T, H, B>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    E: EnrollmentRepository + 'static,
    T: TicketRepository + 'static,
    H: HotelRepository + 'static,
    B: BookingRepository + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes, all JWT-protected
        .service(
            web::scope("/api/v1")
                .wrap(JwtAuth::new())
                .service(
                    web::scope("/booking")
                        .route("", web::get().to(booking::get_booking::<E, T, H, B>))
                        .route("", web::post().to(booking::create_booking::<E, T, H, B>))
                        .route(
                            "/{booking_id}",
                            web::put().to(booking::change_booking::<E, T, H, B>),
                        ),
                )
                .service(
                    web::scope("/hotels")
                        .route("", web::get().to(hotel::list_hotels::<E, T, H, B>))
                        .route("/{hotel_id}", web::get().to(hotel::get_hotel::<E, T, H, B>)),
                ),
        )
}

/// Liveness probe
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "stayeasy-api"
    }))
}
