use serde::Serialize;

use super::seat::TOTAL_SEATS;

/// Сводка по залу. Всегда вычисляется заново по текущей сетке,
/// нигде не хранится.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub booked: usize,
    pub available: usize,
    /// Процент занятых мест, 0.0 - 100.0.
    pub occupancy_rate: f64,
}

impl Statistics {
    pub fn from_booked(booked: usize) -> Self {
        debug_assert!(booked <= TOTAL_SEATS);
        Self {
            total: TOTAL_SEATS,
            booked,
            available: TOTAL_SEATS - booked,
            occupancy_rate: booked as f64 / TOTAL_SEATS as f64 * 100.0,
        }
    }
}
