use std::num::NonZeroU8;
use std::str::FromStr;

use crate::errors::Error;

// define digit separately because it has an offset
/// A digit that can be entered in a cell, always in the range `1..=9`.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`. Returns `None`, if the digit is not in the range of `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        if digit > 9 {
            return None;
        }
        NonZeroU8::new(digit).map(Digit)
    }

    /// Constructs a new `Digit` from its character form `'1'..='9'`.
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10)
            .and_then(|d| Self::new_checked(d as u8))
    }

    /// Returns an iterator over all digits in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..10).map(|d| Digit::new_checked(d).unwrap())
    }

    /// Returns the digit contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }
}

impl FromStr for Digit {
    type Err = Error;

    /// Parses the `value` field of the check operation: exactly one
    /// character, `1`-`9`.
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Digit::from_char(ch).ok_or(Error::InvalidValue),
            _ => Err(Error::InvalidValue),
        }
    }
}
