//! The puzzle grid and its 81-character line form.
use std::fmt;
use std::str::FromStr;

use crate::coordinate::Coordinate;
use crate::digit::Digit;
use crate::errors::Error;

pub(crate) const N_CELLS: usize = 81;

/// A 9x9 sudoku grid, each cell blank or holding a digit 1-9.
///
/// The canonical external form is the line format: 81 characters, one per
/// cell from left to right and top to bottom, `1`-`9` for entries and `.`
/// for blanks. Internally blanks are stored as 0.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Puzzle(pub(crate) [u8; N_CELLS]);

impl Puzzle {
    /// Creates a new puzzle from the line format.
    ///
    /// Characters are checked before length, so a string of the wrong
    /// length that also contains a stray symbol is reported as
    /// [`Error::InvalidCharacters`].
    pub fn from_str_line(s: &str) -> Result<Puzzle, Error> {
        if s.chars().any(|ch| !matches!(ch, '1'..='9' | '.')) {
            return Err(Error::InvalidCharacters);
        }
        if s.len() != N_CELLS {
            return Err(Error::InvalidLength);
        }
        let mut grid = [0; N_CELLS];
        for (cell, byte) in s.bytes().enumerate() {
            grid[cell] = match byte {
                b'.' => 0,
                _ => byte - b'0',
            };
        }
        Ok(Puzzle(grid))
    }

    /// Returns true iff `s` is exactly 81 characters and contains only
    /// `1`-`9` or `.`. This is the sole gate in front of every other
    /// operation that accepts a puzzle string.
    pub fn is_valid_line(s: &str) -> bool {
        Puzzle::from_str_line(s).is_ok()
    }

    /// Returns the line format of this puzzle, the inverse of
    /// [`Puzzle::from_str_line`].
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|&num| match num {
                0 => '.',
                _ => (b'0' + num) as char,
            })
            .collect()
    }

    /// Returns the digit at `coordinate`, or `None` for a blank cell.
    pub fn digit_at(&self, coordinate: Coordinate) -> Option<Digit> {
        Digit::new_checked(self.0[coordinate.cell()])
    }

    /// Check whether the grid is completely filled and every row, column
    /// and region contains each digit exactly once.
    pub fn is_solved(&self) -> bool {
        (0..9).all(|i| {
            self.house_is_complete(row_cells(i))
                && self.house_is_complete(col_cells(i))
                && self.house_is_complete(region_cells(i))
        })
    }

    // One house is a row, column or region. Complete means all nine cells
    // filled with nine distinct digits.
    fn house_is_complete(&self, cells: impl Iterator<Item = usize>) -> bool {
        let mut seen = [false; 9];
        for cell in cells {
            match self.0[cell] {
                0 => return false,
                num => {
                    let idx = num as usize - 1;
                    if seen[idx] {
                        return false;
                    }
                    seen[idx] = true;
                }
            }
        }
        true
    }
}

fn row_cells(row: usize) -> impl Iterator<Item = usize> {
    (0..9).map(move |col| row * 9 + col)
}

fn col_cells(col: usize) -> impl Iterator<Item = usize> {
    (0..9).map(move |row| row * 9 + col)
}

fn region_cells(region: usize) -> impl Iterator<Item = usize> {
    let start = region / 3 * 27 + region % 3 * 3;
    (0..9).map(move |i| start + i / 3 * 9 + i % 3)
}

impl FromStr for Puzzle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Puzzle, Error> {
        Puzzle::from_str_line(s)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_line())
    }
}

impl fmt::Debug for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Puzzle({})", self.to_str_line())
    }
}
