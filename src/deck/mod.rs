//! Decks: a generic ordered pile of cards and a generated playing-card deck.
//!
//! ## Key Types
//!
//! - `Deck<C>`: Shuffle, deal from the top, find and remove by equality
//! - `DeckConfig`: Suits, court mapping, aces high/low, jokers
//! - `PlayingCardDeck`: A `Deck<PlayingCard>` built from a `DeckConfig`

mod base;
mod playing;

pub use base::Deck;
pub use playing::{DeckConfig, PlayingCardDeck, VALUES_PER_SUIT};
