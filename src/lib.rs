//! # decker
//!
//! Playing-card decks and Carta, a small grid-exploration game built on
//! top of them.
//!
//! ## Design Principles
//!
//! 1. **Explicit Randomness**: Every shuffle takes a `DeckRng`. Same seed,
//!    same deck, same board.
//!
//! 2. **Typed Comparability**: Only `Ranked` cards can be ordered.
//!    Comparing a plain card gives `None`, not a guess.
//!
//! 3. **Setup Fails Whole**: Card, deck and board construction either
//!    succeed or return an `Error` without leaving half-built state.
//!
//! ## Modules
//!
//! - `core`: Deterministic RNG and error types
//! - `cards`: Colors, suits, the `Card` interface, playing cards
//! - `deck`: Generic decks and generated playing-card decks
//! - `carta`: Grid shapes, the board state machine, the game loop

pub mod core;
pub mod cards;
pub mod deck;
pub mod carta;

// Re-export commonly used types
pub use crate::core::{DeckRng, Error, Result};

pub use crate::cards::{
    compare_cards, Card, CardFace, Color, CourtMapping, PlayingCard, Ranked, Suit, JOKER_VALUE,
};

pub use crate::deck::{Deck, DeckConfig, PlayingCardDeck};

pub use crate::carta::{
    run_session, BoardConfig, BoardState, CartaBoard, Cell, Command, Direction, GridShape,
    InputSource, MoveError, MoveRecord, OutputSink, Position, SessionOutcome, Turn,
};
