//! Placement legality checks against row, column and region constraints.
use std::fmt;

use serde::Serialize;

use crate::coordinate::Coordinate;
use crate::digit::Digit;
use crate::errors::Error;
use crate::puzzle::Puzzle;

/// A constraint axis a placement can violate.
///
/// Serializes to the lowercase names used in the check contract's
/// `conflict` list.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The nine cells sharing the target cell's row.
    Row,
    /// The nine cells sharing the target cell's column.
    Column,
    /// The 3x3 region containing the target cell.
    Region,
}

impl Axis {
    /// All axes, in the order conflicts are reported.
    pub const ALL: [Axis; 3] = [Axis::Row, Axis::Column, Axis::Region];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Row => "row",
            Axis::Column => "column",
            Axis::Region => "region",
        })
    }
}

impl Puzzle {
    /// Checks whether placing `value` at `coordinate` is legal along one axis.
    ///
    /// The shared policy for all three axes:
    /// 1. A cell that already holds exactly `value` is legal — re-checking
    ///    an existing entry is a no-op, not a new placement.
    /// 2. A cell occupied by a different digit is illegal, regardless of
    ///    what the rest of the axis contains.
    /// 3. Otherwise the placement is legal iff `value` appears nowhere
    ///    else in the axis.
    pub fn check_placement(&self, coordinate: Coordinate, value: Digit, axis: Axis) -> bool {
        let current = self.0[coordinate.cell()];
        if current == value.get() {
            return true;
        }
        if current != 0 {
            return false;
        }
        !self.axis_contains(coordinate, value.get(), axis)
    }

    /// Returns every axis violated by placing `value` at `coordinate`, in
    /// row, column, region order. An empty result means the placement is
    /// valid.
    ///
    /// All three axes are evaluated unconditionally so callers can report
    /// the complete conflict set. The solver does not use this; it prunes
    /// with an early-exit scan over the numeric grid instead.
    pub fn conflicts(&self, coordinate: Coordinate, value: Digit) -> Vec<Axis> {
        Axis::ALL
            .iter()
            .copied()
            .filter(|&axis| !self.check_placement(coordinate, value, axis))
            .collect()
    }

    fn axis_contains(&self, coordinate: Coordinate, num: u8, axis: Axis) -> bool {
        let (row, col) = (coordinate.row() as usize, coordinate.col() as usize);
        match axis {
            Axis::Row => (0..9).any(|c| self.0[row * 9 + c] == num),
            Axis::Column => (0..9).any(|r| self.0[r * 9 + col] == num),
            Axis::Region => {
                let start_row = row - row % 3;
                let start_col = col - col % 3;
                (0..9).any(|i| self.0[(start_row + i / 3) * 9 + (start_col + i % 3)] == num)
            }
        }
    }
}

/// Checks a row placement against a puzzle in line format.
///
/// The grid is re-derived from the string on every call; the three
/// placement checks are independent so callers can report per-axis
/// results.
pub fn check_row_placement(puzzle: &str, coordinate: &str, value: &str) -> Result<bool, Error> {
    check_axis_placement(puzzle, coordinate, value, Axis::Row)
}

/// Checks a column placement against a puzzle in line format.
pub fn check_column_placement(puzzle: &str, coordinate: &str, value: &str) -> Result<bool, Error> {
    check_axis_placement(puzzle, coordinate, value, Axis::Column)
}

/// Checks a 3x3 region placement against a puzzle in line format.
pub fn check_region_placement(puzzle: &str, coordinate: &str, value: &str) -> Result<bool, Error> {
    check_axis_placement(puzzle, coordinate, value, Axis::Region)
}

fn check_axis_placement(
    puzzle: &str,
    coordinate: &str,
    value: &str,
    axis: Axis,
) -> Result<bool, Error> {
    let puzzle = Puzzle::from_str_line(puzzle)?;
    let coordinate: Coordinate = coordinate.parse()?;
    let value: Digit = value.parse()?;
    Ok(puzzle.check_placement(coordinate, value, axis))
}
