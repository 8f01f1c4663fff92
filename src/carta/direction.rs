//! Compass directions and the commands a player can type.

use serde::{Deserialize, Serialize};

use super::board::MoveError;

/// One of the eight compass directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    NW,
    NE,
    S,
    SW,
    SE,
    W,
    E,
}

impl Direction {
    /// All directions, in the order boards list them by default.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::W,
        Direction::E,
        Direction::NW,
        Direction::NE,
        Direction::SW,
        Direction::SE,
    ];

    /// The four non-diagonal directions.
    pub const ORTHOGONAL: [Direction; 4] = [Direction::N, Direction::S, Direction::W, Direction::E];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NW => "NW",
            Direction::NE => "NE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::SE => "SE",
            Direction::W => "W",
            Direction::E => "E",
        }
    }

    /// `(row, column)` step. North is up, i.e. towards row 0.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::N => (-1, 0),
            Direction::S => (1, 0),
            Direction::W => (0, -1),
            Direction::E => (0, 1),
            Direction::NW => (-1, -1),
            Direction::NE => (-1, 1),
            Direction::SW => (1, -1),
            Direction::SE => (1, 1),
        }
    }

    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        let (dr, dc) = self.offset();
        dr != 0 && dc != 0
    }

    /// Parse a direction token, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Direction> {
        let direction = match token.trim().to_ascii_uppercase().as_str() {
            "N" => Direction::N,
            "NW" => Direction::NW,
            "NE" => Direction::NE,
            "S" => Direction::S,
            "SW" => Direction::SW,
            "SE" => Direction::SE,
            "W" => Direction::W,
            "E" => Direction::E,
            _ => return None,
        };
        Some(direction)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Format a direction list as `[N, S, W]`.
#[must_use]
pub fn format_directions(directions: &[Direction]) -> String {
    let names: Vec<&str> = directions.iter().map(|d| d.name()).collect();
    format!("[{}]", names.join(", "))
}

/// A parsed line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

impl Command {
    /// Tokens that end the game.
    pub const QUIT_TOKENS: [&'static str; 3] = ["Q", "QUIT", "EXIT"];

    /// Parse a token against the directions a board allows.
    ///
    /// Quit tokens are always accepted. Unknown tokens and directions outside
    /// `allowed` give the same error, listing `allowed`.
    pub fn parse(token: &str, allowed: &[Direction]) -> Result<Command, MoveError> {
        let upper = token.trim().to_ascii_uppercase();
        if Self::QUIT_TOKENS.contains(&upper.as_str()) {
            return Ok(Command::Quit);
        }
        match Direction::from_token(&upper) {
            Some(direction) if allowed.contains(&direction) => Ok(Command::Move(direction)),
            _ => Err(MoveError::UnrecognizedDirection {
                allowed: allowed.to_vec(),
            }),
        }
    }
}
