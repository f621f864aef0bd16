use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::models::{Seat, SeatError, SeatState};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(get_seats))
        .route("/seats/select", patch(select_seat).delete(clear_selection))
}

/* ---------- SEATS ---------- */

// GET /api/seats
#[derive(Debug, Deserialize)]
struct SeatsQuery {
    row: Option<char>,
    status: Option<String>, // AVAILABLE | BOOKED
}

#[derive(Debug, Serialize)]
struct SeatResponse {
    seat: Seat,
    row: char,
    number: u8,
    status: SeatState,
    selected: bool,
}

async fn get_seats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SeatsQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let row_filter = match params.row {
        Some(r) => {
            let r = r.to_ascii_uppercase();
            if !('A'..='E').contains(&r) {
                return Err((StatusCode::BAD_REQUEST, "row должен быть A-E".to_string()));
            }
            Some(r)
        }
        None => None,
    };
    let status_filter = match params.status.as_deref() {
        None => None,
        Some("AVAILABLE") => Some(SeatState::Available),
        Some("BOOKED") => Some(SeatState::Booked),
        Some(_) => {
            return Err((
                StatusCode::BAD_REQUEST,
                "status должен быть AVAILABLE | BOOKED".to_string(),
            ));
        }
    };

    let booking = state.booking.lock().await;
    let map = booking.seat_map();
    let selected = map.selection();

    let payload: Vec<SeatResponse> = Seat::all()
        .filter(|s| row_filter.map_or(true, |r| s.row_letter() == r))
        .filter(|&s| status_filter.map_or(true, |st| map.state_of(s) == st))
        .map(|s| SeatResponse {
            seat: s,
            row: s.row_letter(),
            number: s.number(),
            status: map.state_of(s),
            selected: selected == Some(s),
        })
        .collect();

    Ok((StatusCode::OK, Json(payload)))
}

// PATCH /api/seats/select
#[derive(Debug, Deserialize)]
struct SelectSeatRequest {
    seat: String,
}

async fn select_seat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectSeatRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    // Клиент с корректными контролами сюда невалидное место не пришлет,
    // поэтому ошибка диапазона уходит наружу как 400, без конвертации в
    // бизнес-результат.
    let seat: Seat = req
        .seat
        .parse()
        .map_err(|e: SeatError| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut booking = state.booking.lock().await;
    let status = booking.select_seat(seat);
    let message = match status {
        SeatState::Available => "Место свободно и доступно для бронирования",
        SeatState::Booked => "Место уже занято",
    };

    Ok((
        StatusCode::OK,
        Json(json!({ "seat": seat, "status": status, "message": message })),
    ))
}

// DELETE /api/seats/select
async fn clear_selection(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut booking = state.booking.lock().await;
    booking.clear_selection();
    Ok((StatusCode::OK, Json(json!({ "message": "Выбор места снят" }))))
}
