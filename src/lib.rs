pub mod config;
pub mod controllers;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use services::BookingController;

// Shared state для всего приложения.
//
// Весь набор операций контроллера - одна критическая секция: модель
// однопоточная, поэтому на экземпляр зала ровно один эксклюзивный замок.
pub struct AppState {
    pub booking: Mutex<BookingController>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        let mut controller = match config.hall.rng_seed {
            Some(seed) => BookingController::with_seed(seed),
            None => BookingController::new(),
        };

        let seeded = controller.seed_demo(config.hall.demo_bookings);
        tracing::info!("Demo seeding booked {} of 25 seats", seeded);

        Arc::new(Self {
            booking: Mutex::new(controller),
            config,
        })
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Seat Booking API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        // Маршруты контроллеров + отдельный reset
        .nest(
            "/api",
            controllers::routes().merge(controllers::bookings::reset_route()),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
