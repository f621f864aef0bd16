use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Размер зала фиксирован: 5 рядов по 5 мест.
pub const ROWS: u8 = 5;
pub const COLS: u8 = 5;
pub const TOTAL_SEATS: usize = (ROWS as usize) * (COLS as usize);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeatError {
    #[error("seat out of range: row {row}, col {col} (hall is {ROWS}x{COLS})")]
    OutOfRange { row: u8, col: u8 },
    #[error("invalid seat label '{0}': expected row letter A-E and seat number 1-5, e.g. \"C3\"")]
    InvalidLabel(String),
}

/// Одно место в зале. Конструктор проверяет границы, поэтому любое
/// значение `Seat` гарантированно лежит внутри сетки 5x5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seat {
    row: u8,
    col: u8,
}

impl Seat {
    pub fn new(row: u8, col: u8) -> Result<Self, SeatError> {
        if row < ROWS && col < COLS {
            Ok(Self { row, col })
        } else {
            Err(SeatError::OutOfRange { row, col })
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Буква ряда: 'A' для ряда 0, ..., 'E' для ряда 4.
    pub fn row_letter(&self) -> char {
        (b'A' + self.row) as char
    }

    /// Номер места в ряду, с единицы.
    pub fn number(&self) -> u8 {
        self.col + 1
    }

    pub fn label(&self) -> String {
        format!("{}{}", self.row_letter(), self.number())
    }

    /// Все места зала в порядке ряд-за-рядом: A1, A2, ... E5.
    /// Порядок важен для детерминированного случайного выбора.
    pub fn all() -> impl Iterator<Item = Seat> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Seat { row, col }))
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.number())
    }
}

impl FromStr for Seat {
    type Err = SeatError;

    // "C3" -> row 2, col 2; строчные буквы тоже принимаем
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (letter, digit) = match (chars.next(), chars.next(), chars.next()) {
            (Some(l), Some(d), None) => (l, d),
            _ => return Err(SeatError::InvalidLabel(s.to_string())),
        };

        if !letter.is_ascii_alphabetic() {
            return Err(SeatError::InvalidLabel(s.to_string()));
        }
        let row = letter.to_ascii_uppercase() as u8 - b'A';

        let col = match digit.to_digit(10) {
            Some(n) if n >= 1 => (n - 1) as u8,
            _ => return Err(SeatError::InvalidLabel(s.to_string())),
        };

        Seat::new(row, col)
    }
}

impl Serialize for Seat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Seat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(de::Error::custom)
    }
}

/// Состояние места. Третьего не дано.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatState {
    Available,
    Booked,
}
