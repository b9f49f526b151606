//! Two-digit score entry, as typed on the keypad.
//!
//! The first digit is the player score, the second the banker score.
//! Ties are refused before they reach the engine.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("expected two digits, got {0}")]
    Length(usize),
    #[error("not a digit: {0:?}")]
    NotDigit(char),
    #[error("tie scores cannot be submitted")]
    Tie,
}

/// Parse an entry like `82` into `(player, banker)`.
pub fn parse_entry(input: &str) -> Result<(u8, u8), EntryError> {
    let input = input.trim();
    let digits = input
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8).ok_or(EntryError::NotDigit(c)))
        .collect::<Result<Vec<u8>, _>>()?;
    let &[player, banker] = digits.as_slice() else {
        return Err(EntryError::Length(digits.len()));
    };
    if player == banker {
        return Err(EntryError::Tie);
    }
    Ok((player, banker))
}
