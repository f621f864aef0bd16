use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use std::sync::Arc;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/statistics", get(get_statistics))
}

// GET /api/statistics
async fn get_statistics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let booking = state.booking.lock().await;
    Json(booking.statistics())
}
