pub mod outcome;
pub mod seat;
pub mod statistics;

pub use outcome::{BookingOutcome, ResetOutcome};
pub use seat::{Seat, SeatError, SeatState, COLS, ROWS, TOTAL_SEATS};
pub use statistics::Statistics;
