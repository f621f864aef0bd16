use crate::models::{
    BookingOutcome, Seat, SeatState, Statistics, COLS, ROWS,
};

/// Единственный источник правды о занятости мест и текущем выборе.
///
/// Размер сетки зашит в тип, поэтому зал не может изменить форму за время
/// жизни экземпляра. Любой `Seat` валиден по построению, так что операции
/// над готовым `Seat` не возвращают ошибок диапазона.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMap {
    grid: [[SeatState; COLS as usize]; ROWS as usize],
    selection: Option<Seat>,
}

impl Default for SeatMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatMap {
    pub fn new() -> Self {
        Self {
            grid: [[SeatState::Available; COLS as usize]; ROWS as usize],
            selection: None,
        }
    }

    /// Сбрасывает сетку и помечает занятыми места из `prebooked`.
    ///
    /// Принимает сырые координаты: это стартовые демо-данные, поэтому
    /// координаты вне зала молча отбрасываются, а не считаются ошибкой.
    pub fn initialize<I>(&mut self, prebooked: I)
    where
        I: IntoIterator<Item = (u8, u8)>,
    {
        self.grid = [[SeatState::Available; COLS as usize]; ROWS as usize];
        self.selection = None;
        for (row, col) in prebooked {
            if let Ok(seat) = Seat::new(row, col) {
                self.set(seat, SeatState::Booked);
            }
        }
    }

    fn set(&mut self, seat: Seat, state: SeatState) {
        self.grid[seat.row() as usize][seat.col() as usize] = state;
    }

    pub fn state_of(&self, seat: Seat) -> SeatState {
        self.grid[seat.row() as usize][seat.col() as usize]
    }

    /// Выбор безусловный: занятое место тоже можно выбрать, это влияет
    /// только на отображение статуса, не на сетку.
    pub fn select(&mut self, seat: Seat) {
        self.selection = Some(seat);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<Seat> {
        self.selection
    }

    /// Бронирует место. Выбор при этом не трогаем: снимать его после
    /// успешной брони - забота контроллера, а не хранилища.
    pub fn book(&mut self, seat: Seat) -> BookingOutcome {
        match self.state_of(seat) {
            SeatState::Booked => BookingOutcome::AlreadyBooked(seat),
            SeatState::Available => {
                self.set(seat, SeatState::Booked);
                BookingOutcome::Booked(seat)
            }
        }
    }

    /// Освобождает все места и снимает выбор.
    pub fn reset(&mut self) {
        self.grid = [[SeatState::Available; COLS as usize]; ROWS as usize];
        self.selection = None;
    }

    /// Свободные места в порядке ряд-за-рядом: A1 раньше A2, ряд A раньше B.
    /// Итератор каждый раз строится заново по текущей сетке.
    pub fn available_seats(&self) -> impl Iterator<Item = Seat> + '_ {
        Seat::all().filter(|&seat| self.state_of(seat) == SeatState::Available)
    }

    pub fn statistics(&self) -> Statistics {
        let booked = Seat::all()
            .filter(|&seat| self.state_of(seat) == SeatState::Booked)
            .count();
        Statistics::from_booked(booked)
    }
}
