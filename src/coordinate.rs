//! Cell addresses in the external `A1`..`I9` form.
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// A (row, column) cell address.
///
/// Externally rows are the letters `A`-`I` and columns the digits `1`-`9`;
/// internally both indices are 0-based.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Constructs a coordinate from 0-based indices. Returns `None` if
    /// either index is outside `0..=8`.
    pub fn new_checked(row: u8, col: u8) -> Option<Self> {
        if row > 8 || col > 8 {
            return None;
        }
        Some(Coordinate { row, col })
    }

    /// Row index from 0..=8, topmost row is 0.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column index from 0..=8, leftmost col is 0.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Flat cell index from 0..=80, going left to right, top to bottom.
    pub(crate) fn cell(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    /// Parses a row letter `A`-`I` (case-insensitive) followed by a column
    /// digit `1`-`9`, e.g. `"A2"`.
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(digit), None) => {
                let letter = letter.to_ascii_uppercase();
                if !('A'..='I').contains(&letter) || !('1'..='9').contains(&digit) {
                    return Err(Error::InvalidCoordinate);
                }
                Ok(Coordinate {
                    row: letter as u8 - b'A',
                    col: digit as u8 - b'1',
                })
            }
            _ => Err(Error::InvalidCoordinate),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row) as char, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_corners_and_lowercase() {
        assert_eq!("A1".parse::<Coordinate>().unwrap().cell(), 0);
        assert_eq!("I9".parse::<Coordinate>().unwrap().cell(), 80);
        assert_eq!("b3".parse::<Coordinate>().unwrap().cell(), 11);
    }

    #[test]
    fn rejects_malformed() {
        for s in &["", "A", "J1", "A0", "A10", "XZ18", "1A"] {
            assert_eq!(s.parse::<Coordinate>(), Err(Error::InvalidCoordinate));
        }
    }

    #[test]
    fn checked_constructor_bounds() {
        assert!(Coordinate::new_checked(8, 8).is_some());
        assert!(Coordinate::new_checked(9, 0).is_none());
        assert!(Coordinate::new_checked(0, 9).is_none());
    }

    #[test]
    fn displays_external_form() {
        let coord: Coordinate = "c7".parse().unwrap();
        assert_eq!(coord.to_string(), "C7");
    }
}
