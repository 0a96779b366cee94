//! Validation of user-entered rolls before they reach the solver.

use thiserror::Error;

/// Number of dice in a Q-Less roll.
pub const ROLL_LEN: usize = 12;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    #[error("input must contain only letters, found {0:?}")]
    NotAlphabetic(char),
    #[error("input must be exactly {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// Checks that `input` is exactly twelve ASCII letters and returns it
/// lowercased. Surrounding whitespace is ignored.
pub fn parse_roll(input: &str) -> Result<String, RollError> {
    let input = input.trim();

    if let Some(bad) = input.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(RollError::NotAlphabetic(bad));
    }

    let actual = input.len();
    if actual != ROLL_LEN {
        return Err(RollError::WrongLength {
            expected: ROLL_LEN,
            actual,
        });
    }

    Ok(input.to_ascii_lowercase())
}
