//! Board configuration.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::direction::Direction;

/// Settings for a `CartaBoard`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Directions the player may move in. Empty means all eight.
    pub allowed_directions: SmallVec<[Direction; 8]>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            allowed_directions: SmallVec::from_slice(&Direction::ALL),
        }
    }
}

impl BoardConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// No diagonal moves.
    #[must_use]
    pub fn orthogonal() -> Self {
        Self::default().with_directions(Direction::ORTHOGONAL)
    }

    /// Restrict moves to the given directions, keeping their order and
    /// dropping repeats.
    #[must_use]
    pub fn with_directions(mut self, directions: impl IntoIterator<Item = Direction>) -> Self {
        let mut allowed: SmallVec<[Direction; 8]> = SmallVec::new();
        for direction in directions {
            if !allowed.contains(&direction) {
                allowed.push(direction);
            }
        }
        self.allowed_directions = allowed;
        self
    }

    /// Directions in effect.
    #[must_use]
    pub fn allowed(&self) -> &[Direction] {
        if self.allowed_directions.is_empty() {
            &Direction::ALL
        } else {
            &self.allowed_directions
        }
    }

    #[must_use]
    pub fn allows(&self, direction: Direction) -> bool {
        self.allowed().contains(&direction)
    }
}
