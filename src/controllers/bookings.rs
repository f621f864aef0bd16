use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::models::{BookingOutcome, ResetOutcome, Seat, SeatError};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bookings", post(create_booking))
        .route("/bookings/random", post(create_random_booking))
        .route("/bookings/last", get(get_last_booking))
}

pub fn reset_route() -> Router<Arc<AppState>> {
    Router::new().route("/reset", post(reset_all_bookings))
}

/* ---------- BOOKINGS ---------- */

// POST /api/bookings
//
// Без тела бронирует текущий выбор; с телом `{"seat": "B2"}` сначала
// выбирает место, затем бронирует - так работают ручные контролы клиента.
#[derive(Debug, Deserialize)]
struct CreateBookingRequest {
    seat: Option<String>,
}

async fn create_booking(
    State(state): State<Arc<AppState>>,
    body: Option<Json<CreateBookingRequest>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut booking = state.booking.lock().await;

    if let Some(Json(req)) = body {
        if let Some(label) = req.seat {
            // Невалидная координата при бронировании - отчетный
            // бизнес-результат, а не авария.
            let seat: Seat = label
                .parse()
                .map_err(|e: SeatError| (StatusCode::BAD_REQUEST, e.to_string()))?;
            booking.select_seat(seat);
        }
    }

    match booking.book_selected() {
        BookingOutcome::Booked(seat) => {
            let stats = booking.statistics();
            tracing::info!("seat {} booked, {} total", seat, stats.booked);
            Ok((
                StatusCode::OK,
                Json(json!({
                    "message": format!("Место {} успешно забронировано", seat),
                    "seat": seat,
                    "booked_total": stats.booked,
                })),
            ))
        }
        BookingOutcome::AlreadyBooked(seat) => Err((
            StatusCode::CONFLICT,
            format!("Место {} уже занято, выберите другое", seat),
        )),
        BookingOutcome::InvalidCoordinate => Err((
            StatusCode::BAD_REQUEST,
            "Сначала выберите место".to_string(),
        )),
        BookingOutcome::NoSeatsAvailable => {
            Err((StatusCode::CONFLICT, "Свободных мест нет".to_string()))
        }
    }
}

// POST /api/bookings/random
async fn create_random_booking(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut booking = state.booking.lock().await;

    match booking.book_random() {
        BookingOutcome::Booked(seat) => {
            let stats = booking.statistics();
            tracing::info!("random seat {} booked, {} total", seat, stats.booked);
            Ok((
                StatusCode::OK,
                Json(json!({
                    "message": format!("Случайное место {} успешно забронировано", seat),
                    "seat": seat,
                    "booked_total": stats.booked,
                })),
            ))
        }
        BookingOutcome::NoSeatsAvailable => Err((
            StatusCode::CONFLICT,
            "Все места уже забронированы".to_string(),
        )),
        outcome => {
            tracing::error!("unexpected book_random outcome: {:?}", outcome);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Не удалось забронировать место".to_string(),
            ))
        }
    }
}

// GET /api/bookings/last
async fn get_last_booking(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let booking = state.booking.lock().await;
    Json(json!({ "seat": booking.last_booking() }))
}

/* ---------- RESET ---------- */

// POST /api/reset - сброс всех бронирований
async fn reset_all_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut booking = state.booking.lock().await;

    match booking.reset_all() {
        ResetOutcome::Cleared { count } => {
            tracing::warn!("RESET: сброшено {} бронирований", count);
            Ok((
                StatusCode::OK,
                Json(json!({
                    "status": "success",
                    "message": "Все бронирования сброшены",
                    "details": { "seats_reset": count },
                })),
            ))
        }
        ResetOutcome::NothingToReset => Ok((
            StatusCode::OK,
            Json(json!({
                "status": "noop",
                "message": "Нет бронирований для сброса",
            })),
        )),
    }
}
