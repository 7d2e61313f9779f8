#![warn(missing_docs)]
//! A sudoku solving and placement checking library
//!
//! ## Overview
//!
//! Puzzles are 81-character strings in line format, one character per cell
//! from left to right and top to bottom: `1`-`9` for entries, `.` for
//! blanks. The library validates such strings, solves them by exhaustive
//! backtracking, and checks single candidate placements against the row,
//! column and 3x3 region constraints, reporting exactly which axes a
//! placement violates.
//!
//! ## Example
//!
//! ```
//! use sudoku_check::{Coordinate, Digit, Puzzle};
//!
//! let line = "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
//!
//! let puzzle = Puzzle::from_str_line(line).unwrap();
//! let solution = puzzle.solve_one().unwrap();
//! assert!(solution.is_solved());
//!
//! // Would a 3 at A2 conflict with anything?
//! let coordinate: Coordinate = "A2".parse().unwrap();
//! let value: Digit = "3".parse().unwrap();
//! assert!(puzzle.conflicts(coordinate, value).is_empty());
//! ```

mod checker;
mod coordinate;
mod digit;
mod errors;
mod puzzle;
mod solver;

pub mod api;

pub use checker::{check_column_placement, check_region_placement, check_row_placement, Axis};
pub use coordinate::Coordinate;
pub use digit::Digit;
pub use errors::Error;
pub use puzzle::Puzzle;
pub use solver::solve_line;
