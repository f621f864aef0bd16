pub mod bookings;
pub mod seats;
pub mod stats;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(seats::routes())
        .merge(bookings::routes())
        .merge(stats::routes())
}
