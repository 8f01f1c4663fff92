//! Core building blocks shared by decks and games: RNG and errors.

pub mod error;
pub mod rng;

pub use error::{Error, Result};
pub use rng::DeckRng;
