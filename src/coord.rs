//! Grid coordinates and their `A1`..`J10` labels.
//!
//! Columns are lettered `A`..`J` left to right, rows numbered `1`..`10` top
//! to bottom. Internally both are zero-based indices.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::common::CoordError;
use crate::config::BOARD_SIZE;

const GRID: usize = BOARD_SIZE as usize;

/// A cell on the 10×10 grid. Always in bounds once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Build from zero-based indices.
    pub fn new(row: usize, col: usize) -> Result<Self, CoordError> {
        if row >= GRID || col >= GRID {
            return Err(CoordError::OutOfRange);
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Zero-based `(row, col)` pair.
    pub fn indices(&self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Canonical label, e.g. `"C7"`.
    pub fn label(&self) -> String {
        alloc::format!("{}", self)
    }

    /// The cell `dr` rows and `dc` columns away, if it is on the board.
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Self> {
        let r = self.row as isize + dr;
        let c = self.col as isize + dc;
        if in_bounds(r, c) {
            Some(Self {
                row: r as u8,
                col: c as u8,
            })
        } else {
            None
        }
    }

    /// Cell number `index` in row-major order, wrapping past the last cell.
    pub fn nth(index: usize) -> Self {
        let i = index % (GRID * GRID);
        Coordinate {
            row: (i / GRID) as u8,
            col: (i % GRID) as u8,
        }
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..GRID * GRID).map(Coordinate::nth)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Coordinate {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s)
    }
}

/// Parse a canonical label: one uppercase letter followed by a row number
/// written without leading zeros.
///
/// Malformed text yields [`CoordError::InvalidFormat`]; a well-formed label
/// whose letter is past `J` or whose number is outside `1..=10` yields
/// [`CoordError::OutOfRange`].
pub fn parse_label(s: &str) -> Result<Coordinate, CoordError> {
    let (&letter, digits) = s
        .as_bytes()
        .split_first()
        .ok_or(CoordError::InvalidFormat)?;
    if !letter.is_ascii_uppercase() {
        return Err(CoordError::InvalidFormat);
    }
    if digits.is_empty() || digits.len() > 2 || !digits.iter().all(u8::is_ascii_digit) {
        return Err(CoordError::InvalidFormat);
    }
    if digits.len() == 2 && digits[0] == b'0' {
        return Err(CoordError::InvalidFormat);
    }
    let number = digits
        .iter()
        .fold(0usize, |acc, d| acc * 10 + (d - b'0') as usize);
    let col = (letter - b'A') as usize;
    if number == 0 {
        return Err(CoordError::OutOfRange);
    }
    Coordinate::new(number - 1, col)
}

/// Label for zero-based (`row`, `col`).
pub fn to_label(row: usize, col: usize) -> Result<String, CoordError> {
    Coordinate::new(row, col).map(|c| c.label())
}

/// Whether (`row`, `col`) lies on the board. Accepts negative indices so
/// callers can look at neighbours without underflow checks.
pub fn in_bounds(row: isize, col: isize) -> bool {
    (0..GRID as isize).contains(&row) && (0..GRID as isize).contains(&col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_labels() {
        assert_eq!(parse_label("A1").unwrap().indices(), (0, 0));
        assert_eq!(parse_label("J10").unwrap().indices(), (9, 9));
        assert_eq!(to_label(9, 0).unwrap(), "A10");
    }

    #[test]
    fn offset_stays_on_board() {
        let corner = Coordinate::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 1), Some(Coordinate::new(1, 1).unwrap()));
    }
}
