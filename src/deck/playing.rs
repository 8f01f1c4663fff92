//! Pre-built decks of playing cards.
//!
//! `DeckConfig` describes the deck; `PlayingCardDeck` builds it once and
//! then behaves like any other `Deck<PlayingCard>`.
//!
//! ## Usage
//!
//! ```
//! use decker::deck::{DeckConfig, PlayingCardDeck};
//!
//! let deck = PlayingCardDeck::standard();
//! assert_eq!(deck.len(), 52);
//!
//! let with_jokers = PlayingCardDeck::new(DeckConfig::default().with_jokers()).unwrap();
//! assert_eq!(with_jokers.len(), 54);
//! ```

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use super::base::Deck;
use crate::cards::{CourtMapping, PlayingCard, Suit};
use crate::core::error::{Error, Result};

/// Number of values generated per suit.
pub const VALUES_PER_SUIT: u32 = 13;

/// Configuration for a generated deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Suits to include, in build order. Empty means the four standard suits.
    pub suits: Vec<Suit>,

    /// Court labels. `None` uses `CourtMapping::standard(aces_high)`.
    #[serde(default)]
    pub court_mapping: Option<CourtMapping>,

    /// Aces are 14 (true) or 1 (false).
    pub aces_high: bool,

    /// Append two jokers after the suited cards.
    pub include_jokers: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            suits: Suit::STANDARD.to_vec(),
            court_mapping: None,
            aces_high: true,
            include_jokers: false,
        }
    }
}

impl DeckConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The four tarot suits instead of the French ones.
    #[must_use]
    pub fn tarot() -> Self {
        Self::default().with_suits(Suit::TAROT.to_vec())
    }

    #[must_use]
    pub fn with_suits(mut self, suits: Vec<Suit>) -> Self {
        self.suits = suits;
        self
    }

    #[must_use]
    pub fn with_court_mapping(mut self, court_mapping: CourtMapping) -> Self {
        self.court_mapping = Some(court_mapping);
        self
    }

    #[must_use]
    pub fn aces_low(mut self) -> Self {
        self.aces_high = false;
        self
    }

    #[must_use]
    pub fn with_jokers(mut self) -> Self {
        self.include_jokers = true;
        self
    }

    /// Suits to build, falling back to the standard four.
    #[must_use]
    pub fn effective_suits(&self) -> Vec<Suit> {
        if self.suits.is_empty() {
            Suit::STANDARD.to_vec()
        } else {
            self.suits.clone()
        }
    }

    /// Court mapping to build with.
    #[must_use]
    pub fn effective_court_mapping(&self) -> CourtMapping {
        match &self.court_mapping {
            Some(mapping) if !mapping.is_empty() => mapping.clone(),
            _ => CourtMapping::standard(self.aces_high),
        }
    }

    /// First value generated for each suit.
    #[must_use]
    pub fn min_value(&self) -> u32 {
        if self.aces_high {
            2
        } else {
            1
        }
    }
}

/// A deck filled from a `DeckConfig`.
///
/// Order after construction: suits in configured order, values ascending
/// within each suit, then the jokers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayingCardDeck {
    config: DeckConfig,
    deck: Deck<PlayingCard>,
}

impl PlayingCardDeck {
    /// Build a deck from the given configuration.
    pub fn new(config: DeckConfig) -> Result<Self> {
        let suits = config.effective_suits();
        if suits.contains(&Suit::Jokers) {
            return Err(Error::InvalidSuit(
                "Jokers cannot be a deck suit; use include_jokers".to_string(),
            ));
        }

        let court = config.effective_court_mapping();
        let min = config.min_value();
        let mut cards = Vec::with_capacity(suits.len() * VALUES_PER_SUIT as usize + 2);

        for suit in &suits {
            for value in min..min + VALUES_PER_SUIT {
                cards.push(PlayingCard::with_court(*suit, value, &court, config.aces_high)?);
            }
        }

        if config.include_jokers {
            cards.push(PlayingCard::joker());
            cards.push(PlayingCard::joker());
        }

        Ok(Self {
            config,
            deck: Deck::from_cards(cards),
        })
    }

    /// The standard 52-card deck, aces high, no jokers.
    ///
    /// Same as `new(DeckConfig::default())`, which cannot fail: the default
    /// suits exclude `Jokers` and 2..=14 are all valid aces-high values.
    #[must_use]
    pub fn standard() -> Self {
        match Self::new(DeckConfig::default()) {
            Ok(deck) => deck,
            Err(err) => unreachable!("default deck config rejected: {err}"),
        }
    }

    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Unwrap into the underlying deck.
    #[must_use]
    pub fn into_deck(self) -> Deck<PlayingCard> {
        self.deck
    }
}

impl Deref for PlayingCardDeck {
    type Target = Deck<PlayingCard>;

    fn deref(&self) -> &Self::Target {
        &self.deck
    }
}

impl DerefMut for PlayingCardDeck {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.deck
    }
}

impl std::fmt::Display for PlayingCardDeck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suits: Vec<&str> = self.config.effective_suits().iter().map(|s| s.name()).collect();
        write!(
            f,
            "Deck of {} cards. Suits: [{}] - Court mapping: {} - Aces high? {} - Include jokers? {}",
            self.deck.len(),
            suits.join(", "),
            self.config.effective_court_mapping(),
            self.config.aces_high,
            self.config.include_jokers,
        )
    }
}
