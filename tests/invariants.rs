//! Инварианты зала на случайных последовательностях операций.

use proptest::prelude::*;

use seat_booking::models::{Seat, SeatState, TOTAL_SEATS};
use seat_booking::services::BookingController;

#[derive(Debug, Clone)]
enum Op {
    Select(u8, u8),
    ClearSelection,
    BookSelected,
    BookRandom,
    ResetAll,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..5, 0u8..5).prop_map(|(row, col)| Op::Select(row, col)),
        Just(Op::ClearSelection),
        Just(Op::BookSelected),
        Just(Op::BookRandom),
        Just(Op::ResetAll),
    ]
}

proptest! {
    #[test]
    fn statistics_and_selection_stay_consistent(
        seed in any::<u64>(),
        ops in proptest::collection::vec(op_strategy(), 0..200),
    ) {
        let mut controller = BookingController::with_seed(seed);

        for op in ops {
            match op {
                Op::Select(row, col) => {
                    let seat = Seat::new(row, col).unwrap();
                    controller.select_seat(seat);
                }
                Op::ClearSelection => controller.clear_selection(),
                Op::BookSelected => {
                    controller.book_selected();
                }
                Op::BookRandom => {
                    controller.book_random();
                }
                Op::ResetAll => {
                    controller.reset_all();
                }
            }

            let stats = controller.statistics();
            prop_assert_eq!(stats.total, TOTAL_SEATS);
            prop_assert_eq!(stats.booked + stats.available, TOTAL_SEATS);
            prop_assert!((0.0..=100.0).contains(&stats.occupancy_rate));

            // последняя бронь, если есть, указывает на занятое место
            if let Some(seat) = controller.last_booking() {
                prop_assert_eq!(
                    controller.seat_map().state_of(seat),
                    SeatState::Booked
                );
            }
        }
    }

    #[test]
    fn random_booking_always_lands_on_a_previously_free_seat(
        seed in any::<u64>(),
        bookings in 0usize..30,
    ) {
        let mut controller = BookingController::with_seed(seed);

        for booked_so_far in 0..bookings {
            use seat_booking::models::BookingOutcome;
            match controller.book_random() {
                BookingOutcome::Booked(seat) => {
                    prop_assert_eq!(
                        controller.seat_map().state_of(seat),
                        SeatState::Booked
                    );
                    prop_assert_eq!(controller.statistics().booked, booked_so_far + 1);
                }
                BookingOutcome::NoSeatsAvailable => {
                    prop_assert_eq!(controller.statistics().booked, TOTAL_SEATS);
                }
                other => prop_assert!(false, "unexpected outcome {:?}", other),
            }
        }
    }
}
