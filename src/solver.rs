//! Exhaustive backtracking search over blank cells.
//!
//! The search walks the grid in row-major order:
//! 1. Filled cells are skipped, they are fixed givens, not choices.
//! 2. At each blank cell the digits 1-9 are tried in ascending order,
//!    skipping any that already appear in the cell's row, column or region.
//! 3. A digit that fits is written and the search recurses into the next
//!    cell; if that fails the cell is reset to blank and the next digit
//!    is tried.
//! 4. Running out of digits at a cell fails the current partial
//!    assignment and the caller backtracks further.
//!
//! Advancing past the last cell means every blank was filled and the
//! grid is a solution. Exhausting all digits at the first blank means the
//! puzzle has none.

use crate::errors::Error;
use crate::puzzle::{Puzzle, N_CELLS};

impl Puzzle {
    /// Try to find a completion of this puzzle.
    ///
    /// Returns the first solution the backtracking search finds, or
    /// `None` if no assignment of the blank cells satisfies all
    /// constraints. The search runs on a local copy; `self` is untouched.
    pub fn solve_one(&self) -> Option<Puzzle> {
        let mut grid = *self;
        if solve_from(&mut grid, 0) {
            Some(grid)
        } else {
            None
        }
    }
}

/// Validates and solves a puzzle in line format.
///
/// The whole solve pipeline of the service contract: the string is
/// validated, converted to a grid, searched, and the completed grid is
/// flattened back to 81 characters. Malformed input and unsolvable
/// puzzles are distinct errors.
pub fn solve_line(s: &str) -> Result<String, Error> {
    let puzzle = Puzzle::from_str_line(s)?;
    match puzzle.solve_one() {
        Some(solution) => Ok(solution.to_str_line()),
        None => Err(Error::Unsolvable),
    }
}

fn solve_from(grid: &mut Puzzle, cell: usize) -> bool {
    if cell == N_CELLS {
        return true;
    }
    if grid.0[cell] != 0 {
        return solve_from(grid, cell + 1);
    }
    for num in 1..=9 {
        if is_safe(grid, cell, num) {
            grid.0[cell] = num;
            if solve_from(grid, cell + 1) {
                return true;
            }
            // undo before trying the next candidate
            grid.0[cell] = 0;
        }
    }
    false
}

// Early-exit legality scan on the numeric grid. Only ever called for
// blank cells, so the target cell itself cannot produce a false conflict.
fn is_safe(grid: &Puzzle, cell: usize, num: u8) -> bool {
    let row = cell / 9;
    let col = cell % 9;
    for i in 0..9 {
        if grid.0[row * 9 + i] == num || grid.0[i * 9 + col] == num {
            return false;
        }
    }
    let start_row = row - row % 3;
    let start_col = col - col % 3;
    for i in 0..3 {
        for j in 0..3 {
            if grid.0[(start_row + i) * 9 + (start_col + j)] == num {
                return false;
            }
        }
    }
    true
}
