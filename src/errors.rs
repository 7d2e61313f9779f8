//! Errors reported by the solve and check operations.
use thiserror::Error;

/// Classification of rejected user input, plus the unsolvable-puzzle case.
///
/// Every variant is recoverable; nothing in this crate aborts the process.
/// The `Display` strings are the exact error strings of the service
/// contract, so boundary layers can report an error as `err.to_string()`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The solve operation's `puzzle` field was absent.
    #[error("Required field missing")]
    MissingField,
    /// One or more of the check operation's `puzzle`, `coordinate` and
    /// `value` fields were absent.
    #[error("Required field(s) missing")]
    MissingFields,
    /// The puzzle string contains a character other than `1`-`9` or `.`.
    #[error("Invalid characters in puzzle")]
    InvalidCharacters,
    /// The puzzle string is not exactly 81 characters long.
    #[error("Expected puzzle to be 81 characters long")]
    InvalidLength,
    /// The coordinate is not a row letter `A`-`I` followed by a column
    /// digit `1`-`9`.
    #[error("Invalid coordinate")]
    InvalidCoordinate,
    /// The value is not a single digit `1`-`9`.
    #[error("Invalid value")]
    InvalidValue,
    /// The puzzle is well-formed but has no completion.
    #[error("Puzzle cannot be solved")]
    Unsolvable,
}
