use super::Seat;

/// Результат попытки бронирования. Это бизнес-результат, а не ошибка:
/// обработчики переводят его в сообщение для клиента.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOutcome {
    /// Место было свободно и теперь забронировано.
    Booked(Seat),
    /// Место уже занято, состояние зала не менялось.
    AlreadyBooked(Seat),
    /// Свободных мест не осталось (только для случайного бронирования).
    NoSeatsAvailable,
    /// Координата вне зала либо бронирование без выбранного места.
    InvalidCoordinate,
}

/// Результат сброса всех бронирований.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Сброшено `count` забронированных мест.
    Cleared { count: usize },
    /// Бронирований не было, состояние не менялось.
    NothingToReset,
}
