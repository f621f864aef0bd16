//! Сквозные сценарии бронирования на уровне контроллера, без HTTP.

use seat_booking::models::{
    BookingOutcome, ResetOutcome, Seat, SeatState, TOTAL_SEATS,
};
use seat_booking::services::{BookingController, SeatMap};

fn seat(label: &str) -> Seat {
    label.parse().unwrap()
}

#[test]
fn prebooked_hall_reports_expected_statistics() {
    let mut map = SeatMap::new();
    map.initialize([(0, 0), (2, 2)]); // A1, C3

    assert_eq!(map.state_of(seat("A1")), SeatState::Booked);
    assert_eq!(map.state_of(seat("C3")), SeatState::Booked);
    assert_eq!(map.state_of(seat("B2")), SeatState::Available);

    let stats = map.statistics();
    assert_eq!(stats.total, 25);
    assert_eq!(stats.booked, 2);
    assert_eq!(stats.available, 23);
    assert_eq!(stats.occupancy_rate, 8.0);
}

#[test]
fn manual_booking_happy_path() {
    let mut controller = BookingController::with_seed(2024);
    let b2 = seat("B2");

    assert_eq!(controller.select_seat(b2), SeatState::Available);
    assert_eq!(controller.book_selected(), BookingOutcome::Booked(b2));
    assert_eq!(controller.last_booking(), Some(b2));
    assert_eq!(controller.selection(), None);
}

#[test]
fn retrying_a_taken_seat_leaves_selection_for_another_attempt() {
    let mut controller = BookingController::with_seed(2024);
    let a1 = seat("A1");
    controller.select_seat(a1);
    controller.book_selected();

    assert_eq!(controller.select_seat(a1), SeatState::Booked);
    assert_eq!(controller.book_selected(), BookingOutcome::AlreadyBooked(a1));
    assert_eq!(controller.selection(), Some(a1));

    // пользователь выбирает другое место, не сбрасывая выбор вручную
    let a2 = seat("A2");
    assert_eq!(controller.select_seat(a2), SeatState::Available);
    assert_eq!(controller.book_selected(), BookingOutcome::Booked(a2));
}

#[test]
fn full_hall_rejects_random_booking_without_mutation() {
    let mut controller = BookingController::with_seed(11);
    for s in Seat::all() {
        controller.select_seat(s);
        assert_eq!(controller.book_selected(), BookingOutcome::Booked(s));
    }
    assert_eq!(controller.statistics().booked, TOTAL_SEATS);

    let last = controller.last_booking();
    assert_eq!(controller.book_random(), BookingOutcome::NoSeatsAvailable);
    assert_eq!(controller.statistics().booked, TOTAL_SEATS);
    assert_eq!(controller.last_booking(), last);
}

#[test]
fn reset_returns_cleared_count_then_reports_noop() {
    let mut controller = BookingController::with_seed(3);
    for label in ["A1", "C3", "E5"] {
        controller.select_seat(seat(label));
        controller.book_selected();
    }

    assert_eq!(controller.reset_all(), ResetOutcome::Cleared { count: 3 });
    for s in Seat::all() {
        assert_eq!(controller.seat_map().state_of(s), SeatState::Available);
    }
    assert_eq!(controller.last_booking(), None);
    assert_eq!(controller.reset_all(), ResetOutcome::NothingToReset);
}

#[test]
fn booked_seats_stay_booked_until_full_reset() {
    // одиночного "разбронирования" нет: Booked снимается только сбросом
    let mut controller = BookingController::with_seed(8);
    let c3 = seat("C3");
    controller.select_seat(c3);
    controller.book_selected();

    controller.select_seat(c3);
    assert_eq!(controller.book_selected(), BookingOutcome::AlreadyBooked(c3));
    assert_eq!(controller.seat_map().state_of(c3), SeatState::Booked);

    controller.reset_all();
    assert_eq!(controller.seat_map().state_of(c3), SeatState::Available);
}
