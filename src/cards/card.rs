//! The `Card` interface shared by everything that can sit in a deck or on
//! a board, plus the `Ranked` interface for cards that can be ordered.
//!
//! ## Comparability
//!
//! Only cards exposing a value and a suit through `Ranked` can be ordered.
//! `compare_cards` works on any pair of `dyn Card` and returns `None` when
//! either side is not ranked, instead of guessing.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::suit::Suit;

/// Anything that can be dealt: has a face-up/face-down state and may carry
/// a description.
pub trait Card: std::fmt::Display {
    fn is_face_up(&self) -> bool;

    fn set_face_up(&mut self, face_up: bool);

    /// Turn the card over.
    fn flip(&mut self) {
        let up = self.is_face_up();
        self.set_face_up(!up);
    }

    /// Free text shown when a player stands on this card.
    fn description(&self) -> Option<&str> {
        None
    }

    /// View this card as a ranked card, if it has a value and a suit.
    fn as_ranked(&self) -> Option<&dyn Ranked> {
        None
    }
}

/// A card with a numeric value and a suit.
pub trait Ranked {
    fn value(&self) -> u32;

    fn suit(&self) -> Suit;

    /// Sort key: value dominates, suit rank breaks ties.
    fn rank_key(&self) -> (u32, Suit) {
        (self.value(), self.suit())
    }
}

/// Compare two cards by `(value, suit)`.
///
/// Returns `None` when either card is not `Ranked`.
#[must_use]
pub fn compare_cards(a: &dyn Card, b: &dyn Card) -> Option<Ordering> {
    let a = a.as_ranked()?;
    let b = b.as_ranked()?;
    Some(a.rank_key().cmp(&b.rank_key()))
}

/// Face state plus optional description.
///
/// Used on its own as a plain, unranked card, and embedded in
/// `PlayingCard` for its face state. Two plain cards are equal when their
/// descriptions are; the face state never takes part in equality.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CardFace {
    /// Is this card face-up? Cards start face-down.
    pub face_up: bool,

    #[serde(default)]
    pub description: Option<String>,
}

impl CardFace {
    /// A face-down card without description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A face-down card with a description.
    #[must_use]
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            face_up: false,
            description: Some(description.into()),
        }
    }
}

impl PartialEq for CardFace {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
    }
}

impl Eq for CardFace {}

impl std::fmt::Display for CardFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description.as_deref().unwrap_or("Card"))
    }
}

impl Card for CardFace {
    fn is_face_up(&self) -> bool {
        self.face_up
    }

    fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_starts_face_down() {
        let card = CardFace::new();
        assert!(!card.is_face_up());
        assert_eq!(card.description(), None);
    }

    #[test]
    fn test_flip_toggles() {
        let mut card = CardFace::new();
        card.flip();
        assert!(card.is_face_up());
        card.flip();
        assert!(!card.is_face_up());
    }

    #[test]
    fn test_equality_ignores_face_state() {
        let mut a = CardFace::described("A quiet glade");
        let b = CardFace::described("A quiet glade");
        a.flip();
        assert_eq!(a, b);
        assert_ne!(a, CardFace::described("A dark cave"));
    }

    #[test]
    fn test_plain_cards_are_not_comparable() {
        let a = CardFace::new();
        let b = CardFace::described("x");
        assert_eq!(compare_cards(&a, &b), None);
    }

    #[test]
    fn test_display_uses_description() {
        assert_eq!(CardFace::described("Tower").to_string(), "Tower");
        assert_eq!(CardFace::new().to_string(), "Card");
    }
}
