//! Card model: colors, suits, the `Card` interface and playing cards.
//!
//! ## Key Types
//!
//! - `Color`: Red or Black, with RGB and hex payloads
//! - `Suit`: French and tarot suits plus `Jokers`
//! - `Card`: Face state and description, implemented by every dealable card
//! - `Ranked`: Value and suit, for cards that can be ordered
//! - `PlayingCard`: A validated `(suit, value)` card with a court label
//! - `CardFace`: A plain unranked card

pub mod card;
pub mod color;
pub mod playing;
pub mod suit;

pub use card::{compare_cards, Card, CardFace, Ranked};
pub use color::Color;
pub use playing::{CourtMapping, PlayingCard, JOKER_VALUE};
pub use suit::Suit;
