//! Setup-time errors for cards, decks and boards.
//!
//! These abort the construction call that raised them. Errors a player can
//! recover from during a game live in `carta::MoveError`.

use thiserror::Error;

/// Errors raised while building cards, decks or boards.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid suit: {0}")]
    InvalidSuit(String),

    #[error("invalid card value {value}: {reason}")]
    InvalidValue { value: u32, reason: &'static str },

    #[error("card not found in deck: {0}")]
    CardNotFound(String),

    #[error("not enough cards: requested {requested}, only {available} left")]
    InsufficientCards { requested: usize, available: usize },

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("deck is empty")]
    EmptyDeck,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InsufficientCards {
            requested: 10,
            available: 3,
        };
        assert_eq!(err.to_string(), "not enough cards: requested 10, only 3 left");

        let err = Error::InvalidValue {
            value: 0,
            reason: "must be positive",
        };
        assert_eq!(err.to_string(), "invalid card value 0: must be positive");
    }
}
