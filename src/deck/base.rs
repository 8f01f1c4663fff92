//! An ordered, mutable pile of cards.
//!
//! Index 0 is the top of the deck: `deal` and `peek` work from the front,
//! `push` adds to the bottom. The backing store is a plain `Vec`, so
//! shuffling is index-based and removal by value is a linear scan, which is
//! fine for decks of a few dozen cards.

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::core::rng::DeckRng;

/// An ordered sequence of cards. Duplicates are allowed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck<C> {
    cards: Vec<C>,
}

impl<C> Default for Deck<C> {
    fn default() -> Self {
        Self { cards: Vec::new() }
    }
}

impl<C> Deck<C> {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from cards, first card on top.
    #[must_use]
    pub fn from_cards(cards: Vec<C>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from top to bottom.
    #[must_use]
    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.cards.iter()
    }

    /// Add a card to the bottom of the deck.
    pub fn push(&mut self, card: C) {
        self.cards.push(card);
    }

    /// Shuffle in place with the given generator.
    pub fn shuffle(&mut self, rng: &mut DeckRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Look at the top card without removing it.
    pub fn peek(&self) -> Result<&C> {
        self.cards.first().ok_or(Error::EmptyDeck)
    }

    /// Look at the bottom card without removing it.
    pub fn peek_bottom(&self) -> Result<&C> {
        self.cards.last().ok_or(Error::EmptyDeck)
    }

    /// Remove and return the top `n` cards, in deck order.
    ///
    /// Fails without touching the deck if fewer than `n` cards remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<C>> {
        if n > self.cards.len() {
            return Err(Error::InsufficientCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Remove and return the top card.
    pub fn deal_one(&mut self) -> Result<C> {
        if self.cards.is_empty() {
            return Err(Error::EmptyDeck);
        }
        Ok(self.cards.remove(0))
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<C> {
        self.cards
    }
}

impl<C: PartialEq> Deck<C> {
    /// Index of the first card equal to `card`.
    #[must_use]
    pub fn position(&self, card: &C) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    #[must_use]
    pub fn contains(&self, card: &C) -> bool {
        self.position(card).is_some()
    }

    /// Remove and return the first card equal to `card`, or `None`.
    pub fn take(&mut self, card: &C) -> Option<C> {
        let idx = self.position(card)?;
        Some(self.cards.remove(idx))
    }

    /// Remove and return the card at `idx`. Caller guarantees the index.
    pub(crate) fn take_at(&mut self, idx: usize) -> C {
        self.cards.remove(idx)
    }
}

impl<C: PartialEq + std::fmt::Display> Deck<C> {
    /// Remove the first card equal to `card`.
    ///
    /// Fails with `CardNotFound` if there is none.
    pub fn remove(&mut self, card: &C) -> Result<C> {
        self.take(card)
            .ok_or_else(|| Error::CardNotFound(card.to_string()))
    }
}

impl<C> FromIterator<C> for Deck<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::from_cards(iter.into_iter().collect())
    }
}

impl<C> Extend<C> for Deck<C> {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl<'a, C> IntoIterator for &'a Deck<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl<C: std::fmt::Display> std::fmt::Display for Deck<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
