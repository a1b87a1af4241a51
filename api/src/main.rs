use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing_subscriber::EnvFilter;

use se_api::app::create_app;
use se_api::routes::AppState;
use se_core::services::{BookingService, EligibilityService, HotelService};
use se_infra::database::{
    DatabasePool, MySqlBookingRepository, MySqlEnrollmentRepository, MySqlHotelRepository,
    MySqlTicketRepository,
};
use se_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting StayEasy API server");

    // Load configuration
    let config = AppConfig::from_env();
    if config.auth.jwt.is_using_default_secret() && config.environment.is_production() {
        tracing::warn!("JWT_SECRET is not set; using the default secret in production");
    }

    // Database pool and repositories
    let pool = DatabasePool::new(config.database.clone()).await?;
    let enrollment_repo = Arc::new(MySqlEnrollmentRepository::new(pool.get_pool().clone()));
    let ticket_repo = Arc::new(MySqlTicketRepository::new(pool.get_pool().clone()));
    let hotel_repo = Arc::new(MySqlHotelRepository::new(pool.get_pool().clone()));
    let booking_repo = Arc::new(MySqlBookingRepository::new(pool.get_pool().clone()));

    // Domain services
    let eligibility = Arc::new(EligibilityService::new(
        Arc::clone(&enrollment_repo),
        Arc::clone(&ticket_repo),
    ));
    let booking_service = Arc::new(BookingService::new(
        eligibility,
        Arc::clone(&hotel_repo),
        booking_repo,
    ));
    let hotel_service = Arc::new(HotelService::new(enrollment_repo, ticket_repo, hotel_repo));

    let app_state = web::Data::new(AppState {
        booking_service,
        hotel_service,
    });

    let bind_address = config.server.bind_address();
    tracing::info!("Server listening on {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
