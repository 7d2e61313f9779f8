//! The request/response contract consumed by the service boundary.
//!
//! Transport-agnostic: an HTTP layer deserializes its request bodies into
//! the types here, calls [`solve`] or [`check`], and serializes the
//! response straight back. Field names and error strings match the
//! service contract verbatim.

use serde::{Deserialize, Serialize};

use crate::checker::Axis;
use crate::coordinate::Coordinate;
use crate::digit::Digit;
use crate::errors::Error;
use crate::puzzle::Puzzle;
use crate::solver;

/// Body of a solve request.
///
/// The field is required by the contract but optional here, so that its
/// absence is reported as a response, not a deserialization failure.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SolveRequest {
    /// The puzzle in 81-character line format.
    pub puzzle: Option<String>,
}

/// Body of a check request. All three fields are required by the contract.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CheckRequest {
    /// The puzzle in 81-character line format.
    pub puzzle: Option<String>,
    /// The target cell, row letter then column digit, e.g. `"A2"`.
    pub coordinate: Option<String>,
    /// The candidate digit, a single character `1`-`9`.
    pub value: Option<String>,
}

/// Outcome of a solve request.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SolveResponse {
    /// The puzzle was solved; serializes as `{"solution": "..."}`.
    Solved {
        /// The solved grid in line format, blank-free.
        solution: String,
    },
    /// The input was rejected or the puzzle has no solution; serializes
    /// as `{"error": "..."}`.
    Failed {
        /// The contract error string.
        error: String,
    },
}

/// Outcome of a check request.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckResponse {
    /// The placement was evaluated. The `conflict` field lists every
    /// violated axis and is omitted entirely for a valid placement.
    Placement {
        /// Whether the placement violates no constraint.
        valid: bool,
        /// The violated axes in row, column, region order.
        #[serde(skip_serializing_if = "Option::is_none")]
        conflict: Option<Vec<Axis>>,
    },
    /// The input was rejected before any axis was evaluated.
    Failed {
        /// The contract error string.
        error: String,
    },
}

/// Runs the solve operation on a request body.
pub fn solve(request: &SolveRequest) -> SolveResponse {
    match try_solve(request) {
        Ok(solution) => SolveResponse::Solved { solution },
        Err(err) => SolveResponse::Failed {
            error: err.to_string(),
        },
    }
}

fn try_solve(request: &SolveRequest) -> Result<String, Error> {
    let puzzle = request.puzzle.as_deref().ok_or(Error::MissingField)?;
    solver::solve_line(puzzle)
}

/// Runs the check operation on a request body.
///
/// Validation order is part of the contract: required fields, then puzzle
/// characters, then puzzle length, then coordinate format, then value
/// format, and only then the conflict computation.
pub fn check(request: &CheckRequest) -> CheckResponse {
    match try_check(request) {
        Ok(conflicts) => {
            if conflicts.is_empty() {
                CheckResponse::Placement {
                    valid: true,
                    conflict: None,
                }
            } else {
                CheckResponse::Placement {
                    valid: false,
                    conflict: Some(conflicts),
                }
            }
        }
        Err(err) => CheckResponse::Failed {
            error: err.to_string(),
        },
    }
}

fn try_check(request: &CheckRequest) -> Result<Vec<Axis>, Error> {
    let (puzzle, coordinate, value) = match (&request.puzzle, &request.coordinate, &request.value) {
        (Some(puzzle), Some(coordinate), Some(value)) => (puzzle, coordinate, value),
        _ => return Err(Error::MissingFields),
    };
    let puzzle: Puzzle = puzzle.parse()?;
    let coordinate: Coordinate = coordinate.parse()?;
    let value: Digit = value.parse()?;
    Ok(puzzle.conflicts(coordinate, value))
}
