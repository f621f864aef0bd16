use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{BookingOutcome, ResetOutcome, Seat, SeatState, Statistics, COLS, ROWS};
use crate::services::SeatMap;

/// Оркестрирует пользовательские операции над залом: выбор, бронирование,
/// случайное бронирование и сброс. Своего состояния почти не держит -
/// только сам зал, запись о последней удачной брони и генератор случайных
/// чисел для равномерного выбора свободного места.
#[derive(Debug)]
pub struct BookingController {
    map: SeatMap,
    last_booking: Option<Seat>,
    rng: StdRng,
}

impl Default for BookingController {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingController {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Детерминированный вариант для тестов и воспроизводимых демо-залов.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            map: SeatMap::new(),
            last_booking: None,
            rng,
        }
    }

    /// Засеивает зал демо-бронированиями: `count` случайных координат,
    /// повторы попадают в уже занятое место и пропадают, так что
    /// забронированных может оказаться меньше `count`. Возвращает,
    /// сколько мест реально занято.
    pub fn seed_demo(&mut self, count: usize) -> usize {
        let coords: Vec<(u8, u8)> = (0..count)
            .map(|_| (self.rng.gen_range(0..ROWS), self.rng.gen_range(0..COLS)))
            .collect();
        self.map.initialize(coords);
        self.last_booking = None;
        self.map.statistics().booked
    }

    /// Выбирает место и возвращает его текущее состояние, чтобы клиент
    /// мог показать статус без повторного запроса.
    pub fn select_seat(&mut self, seat: Seat) -> SeatState {
        self.map.select(seat);
        self.map.state_of(seat)
    }

    pub fn clear_selection(&mut self) {
        self.map.clear_selection();
    }

    pub fn selection(&self) -> Option<Seat> {
        self.map.selection()
    }

    /// Бронирует выбранное место.
    ///
    /// Без выбранного места возвращает `InvalidCoordinate`: клиент обязан
    /// блокировать кнопку, но контроллер на это не полагается. После
    /// успешной брони выбор снимается и запоминается последняя бронь;
    /// после `AlreadyBooked` выбор остается, чтобы можно было сразу
    /// выбрать другое место.
    pub fn book_selected(&mut self) -> BookingOutcome {
        let Some(seat) = self.map.selection() else {
            return BookingOutcome::InvalidCoordinate;
        };
        let outcome = self.map.book(seat);
        if let BookingOutcome::Booked(seat) = outcome {
            self.last_booking = Some(seat);
            self.map.clear_selection();
        }
        outcome
    }

    /// Бронирует случайное свободное место, равномерно по снимку
    /// `available_seats()`. Идет через select + book, чтобы выбор и
    /// запись о последней брони вели себя как при ручном бронировании.
    pub fn book_random(&mut self) -> BookingOutcome {
        let available: Vec<Seat> = self.map.available_seats().collect();
        let Some(&seat) = available.choose(&mut self.rng) else {
            return BookingOutcome::NoSeatsAvailable;
        };
        self.map.select(seat);
        self.book_selected()
    }

    /// Сбрасывает все бронирования. Если бронирований нет - это не ошибка,
    /// а отчетный no-op: состояние не меняется. Подтверждение у
    /// пользователя спрашивает клиент, не контроллер.
    pub fn reset_all(&mut self) -> ResetOutcome {
        let booked = self.map.statistics().booked;
        if booked == 0 {
            return ResetOutcome::NothingToReset;
        }
        self.map.reset();
        self.last_booking = None;
        ResetOutcome::Cleared { count: booked }
    }

    pub fn statistics(&self) -> Statistics {
        self.map.statistics()
    }

    /// Последнее успешно забронированное место с момента старта или сброса.
    pub fn last_booking(&self) -> Option<Seat> {
        self.last_booking
    }

    pub fn seat_map(&self) -> &SeatMap {
        &self.map
    }
}
