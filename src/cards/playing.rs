//! Playing cards: suit, numeric value and court label.
//!
//! ## Value Encoding
//!
//! - Number cards use their face value.
//! - Jack, Queen, King are 11, 12, 13.
//! - Aces are 14 when aces are high, 1 when aces are low. A card built
//!   aces-high can never have value 1.
//! - Jokers use the `Jokers` suit and `JOKER_VALUE`.
//!
//! ```
//! use decker::cards::{PlayingCard, Suit};
//!
//! let ace = PlayingCard::new(Suit::Spades, 14).unwrap();
//! assert_eq!(ace.to_string(), "A♠");
//!
//! let ten = PlayingCard::new(Suit::Hearts, 10).unwrap();
//! assert!(ten < ace);
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardFace, Ranked};
use super::color::Color;
use super::suit::Suit;
use crate::core::error::{Error, Result};

/// Value given to joker cards.
pub const JOKER_VALUE: u32 = 100;

/// Lookup from card value to a one-character label (J, Q, K, A, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtMapping {
    labels: FxHashMap<u32, char>,
}

impl CourtMapping {
    /// A mapping without any labels.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// J, Q, K on 11-13 plus the ace on 14 (aces high) or 1 (aces low).
    #[must_use]
    pub fn standard(aces_high: bool) -> Self {
        let ace = if aces_high { 14 } else { 1 };
        Self::empty()
            .with(11, 'J')
            .with(12, 'Q')
            .with(13, 'K')
            .with(ace, 'A')
    }

    /// Add or replace a label.
    #[must_use]
    pub fn with(mut self, value: u32, label: char) -> Self {
        self.insert(value, label);
        self
    }

    pub fn insert(&mut self, value: u32, label: char) {
        self.labels.insert(value, label);
    }

    #[must_use]
    pub fn get(&self, value: u32) -> Option<char> {
        self.labels.get(&value).copied()
    }

    /// Highest value carrying a label.
    #[must_use]
    pub fn max_value(&self) -> Option<u32> {
        self.labels.keys().copied().max()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels sorted by value.
    #[must_use]
    pub fn entries(&self) -> Vec<(u32, char)> {
        let mut entries: Vec<_> = self.labels.iter().map(|(v, c)| (*v, *c)).collect();
        entries.sort_unstable();
        entries
    }
}

impl std::fmt::Display for CourtMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, (value, label)) in self.entries().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}: {label}")?;
        }
        f.write_str("}")
    }
}

/// A card from a standard, tarot or joker-extended deck.
///
/// Equality, ordering and hashing use `(value, suit)` only. The court label,
/// face state and description never take part.
///
/// Deserializing checks the value the way construction does. A card with
/// value 1 is read as aces-low; any recorded court label widens the value
/// range to include that value.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "PlayingCardRecord", into = "PlayingCardRecord")]
pub struct PlayingCard {
    suit: Suit,
    value: u32,
    court: Option<char>,
    face: CardFace,
}

impl PlayingCard {
    /// Create a card with aces high and the standard court mapping.
    pub fn new(suit: Suit, value: u32) -> Result<Self> {
        Self::with_court(suit, value, &CourtMapping::standard(true), true)
    }

    /// Create a card with aces low and the standard court mapping.
    pub fn aces_low(suit: Suit, value: u32) -> Result<Self> {
        Self::with_court(suit, value, &CourtMapping::standard(false), false)
    }

    /// Create a card with a caller-supplied court mapping.
    ///
    /// An empty mapping falls back to `CourtMapping::standard(aces_high)`.
    pub fn with_court(suit: Suit, value: u32, court: &CourtMapping, aces_high: bool) -> Result<Self> {
        let standard;
        let court = if court.is_empty() {
            standard = CourtMapping::standard(aces_high);
            &standard
        } else {
            court
        };

        validate_value(suit, value, court, aces_high)?;

        Ok(Self {
            suit,
            value,
            court: court.get(value),
            face: CardFace::new(),
        })
    }

    /// A joker. Always valid.
    #[must_use]
    pub fn joker() -> Self {
        Self {
            suit: Suit::Jokers,
            value: JOKER_VALUE,
            court: None,
            face: CardFace::new(),
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.face.description = Some(description.into());
        self
    }

    /// The court label computed at construction, if any.
    #[must_use]
    pub fn court_label(&self) -> Option<char> {
        self.court
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.suit.color()
    }

    #[must_use]
    pub fn is_joker(&self) -> bool {
        self.suit == Suit::Jokers
    }
}

/// Serialized form of a `PlayingCard`.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct PlayingCardRecord {
    suit: Suit,
    value: u32,
    #[serde(default)]
    court: Option<char>,
    #[serde(default)]
    face: CardFace,
}

impl TryFrom<PlayingCardRecord> for PlayingCard {
    type Error = Error;

    fn try_from(record: PlayingCardRecord) -> Result<Self> {
        let aces_high = record.value != 1;
        let mut court = CourtMapping::standard(aces_high);
        if let Some(label) = record.court {
            court.insert(record.value, label);
        }
        validate_value(record.suit, record.value, &court, aces_high)?;

        Ok(Self {
            suit: record.suit,
            value: record.value,
            court: record.court,
            face: record.face,
        })
    }
}

impl From<PlayingCard> for PlayingCardRecord {
    fn from(card: PlayingCard) -> Self {
        Self {
            suit: card.suit,
            value: card.value,
            court: card.court,
            face: card.face,
        }
    }
}

fn validate_value(suit: Suit, value: u32, court: &CourtMapping, aces_high: bool) -> Result<()> {
    if value == 0 {
        return Err(Error::InvalidValue {
            value,
            reason: "value must be a positive integer",
        });
    }
    if suit == Suit::Jokers {
        return Ok(());
    }
    if aces_high && value == 1 {
        return Err(Error::InvalidValue {
            value,
            reason: "aces are 14 when aces are high",
        });
    }
    let top = if aces_high { 14 } else { 13 };
    let max = court.max_value().map_or(top, |m| m.max(top));
    if value > max {
        return Err(Error::InvalidValue {
            value,
            reason: "value is above the highest rank",
        });
    }
    Ok(())
}

impl std::fmt::Display for PlayingCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_joker() {
            return f.write_str("Jkr");
        }
        match self.court {
            Some(label) => write!(f, "{label}")?,
            None => write!(f, "{}", self.value)?,
        }
        match self.suit.symbol() {
            Some(symbol) => write!(f, "{symbol}"),
            None => write!(f, " {}", self.suit.name()),
        }
    }
}

impl PartialEq for PlayingCard {
    fn eq(&self, other: &Self) -> bool {
        self.rank_key() == other.rank_key()
    }
}

impl Eq for PlayingCard {}

impl PartialOrd for PlayingCard {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PlayingCard {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank_key().cmp(&other.rank_key())
    }
}

impl Hash for PlayingCard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank_key().hash(state);
    }
}

impl Ranked for PlayingCard {
    fn value(&self) -> u32 {
        self.value
    }

    fn suit(&self) -> Suit {
        self.suit
    }
}

impl Card for PlayingCard {
    fn is_face_up(&self) -> bool {
        self.face.face_up
    }

    fn set_face_up(&mut self, face_up: bool) {
        self.face.face_up = face_up;
    }

    fn description(&self) -> Option<&str> {
        self.face.description.as_deref()
    }

    fn as_ranked(&self) -> Option<&dyn Ranked> {
        Some(self)
    }
}
