pub mod booking;
pub mod seat_map;

pub use booking::BookingController;
pub use seat_map::SeatMap;
