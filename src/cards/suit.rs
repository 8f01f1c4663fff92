//! Suits for standard and tarot decks.
//!
//! Equality and ordering come from declaration order only. Color and symbol
//! are derived through lookup functions rather than stored on the suit.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::core::error::Error;

/// A card suit.
///
/// `Jokers` is a real case so joker cards can carry a suit, but it has no
/// color and no symbol and is never part of a generated suit list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    Wands,
    Coins,
    Cups,
    Swords,
    Jokers,
}

impl Suit {
    /// The four French suits, in deck-building order.
    pub const STANDARD: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// The four tarot suits.
    pub const TAROT: [Suit; 4] = [Suit::Wands, Suit::Coins, Suit::Cups, Suit::Swords];

    /// Ordinal rank, starting at 1.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8 + 1
    }

    /// Capitalized display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
            Suit::Wands => "Wands",
            Suit::Coins => "Coins",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Jokers => "Jokers",
        }
    }

    /// Color of the suit. Only the French suits have one.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Suit::Clubs | Suit::Spades => Some(Color::Black),
            Suit::Diamonds | Suit::Hearts => Some(Color::Red),
            _ => None,
        }
    }

    /// Unicode glyph for the suit, if it has one.
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Suit::Clubs => Some('\u{2663}'),
            Suit::Diamonds => Some('\u{2666}'),
            Suit::Hearts => Some('\u{2665}'),
            Suit::Spades => Some('\u{2660}'),
            Suit::Wands => Some('\u{269A}'),
            Suit::Coins => Some('\u{235F}'),
            Suit::Cups => Some('\u{222A}'),
            Suit::Swords => Some('\u{2694}'),
            Suit::Jokers => None,
        }
    }

    #[must_use]
    pub const fn is_tarot(self) -> bool {
        matches!(self, Suit::Wands | Suit::Coins | Suit::Cups | Suit::Swords)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Suit {
    type Err = Error;

    /// Parse a suit name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit = match s.trim().to_ascii_uppercase().as_str() {
            "CLUBS" => Suit::Clubs,
            "DIAMONDS" => Suit::Diamonds,
            "HEARTS" => Suit::Hearts,
            "SPADES" => Suit::Spades,
            "WANDS" => Suit::Wands,
            "COINS" => Suit::Coins,
            "CUPS" => Suit::Cups,
            "SWORDS" => Suit::Swords,
            "JOKERS" => Suit::Jokers,
            _ => return Err(Error::InvalidSuit(s.to_string())),
        };
        Ok(suit)
    }
}
