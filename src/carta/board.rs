//! The Carta board: cards laid out on a grid and a player walking across
//! them until they stand on the goal card.
//!
//! ## Building
//!
//! 1. The grid must have room for at least the start and goal cards.
//! 2. Start and goal cards are removed from the deck.
//! 3. The rest of the deck is shuffled and enough cards are dealt to fill
//!    every open cell but one.
//! 4. The goal joins the dealt cards, which are shuffled again so the goal
//!    can land on any of those cells.
//! 5. Cells are filled in row-major order; the last open cell gets the
//!    face-up starting card and becomes the player's position.
//!
//! Every check runs before the deck is touched, so a failed build leaves
//! the deck as it was.
//!
//! ## Moving
//!
//! A move is legal when it is allowed by the `BoardConfig` and lands on a
//! card inside the grid. Accepted moves turn the new card face-up and are
//! appended to the move history. The game is over once the player's card
//! equals the goal card.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::BoardConfig;
use super::direction::{format_directions, Command, Direction};
use super::grid::{Cell, GridShape, Position};
use crate::cards::Card;
use crate::core::error::{Error, Result};
use crate::core::rng::DeckRng;
use crate::deck::Deck;

/// Label for a face-down card.
pub const FACE_DOWN_LABEL: &str = "XX";

/// Width each cell is centered in when rendering.
pub const CELL_WIDTH: usize = 4;

/// Errors the player can recover from by entering another move.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Direction must be one of: {}", format_directions(.allowed))]
    UnrecognizedDirection { allowed: Vec<Direction> },

    #[error("You can't go off the map.")]
    IllegalMove,

    #[error("You have already reached your goal.")]
    Finished,
}

/// Where the board is in its game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    /// Waiting for the next move.
    AwaitingMove,
    /// The player is on the goal card.
    Reached,
}

/// An accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number.
    pub turn: u32,
    pub direction: Direction,
    pub from: Position,
    pub to: Position,
}

/// Result of handling one line of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// The player moved and the game goes on.
    Moved(MoveRecord),
    /// The player moved onto the goal.
    Reached(MoveRecord),
    /// The player asked to stop.
    Quit,
}

/// A grid of cards with a player on it.
///
/// Serializable for snapshots; boards are only ever created by `build`.
#[derive(Clone, Debug, Serialize)]
pub struct CartaBoard<C> {
    grid: Vec<Vec<Cell<C>>>,
    goal_at: Position,
    start_at: Position,
    player: Position,
    config: BoardConfig,
    state: BoardState,
    history: Vec<MoveRecord>,
}

impl<C> CartaBoard<C>
where
    C: Card + PartialEq,
{
    /// Lay out a board from `deck`.
    ///
    /// On success the deck has lost the start and goal cards plus one card
    /// per open cell beyond two, and its remaining cards are shuffled.
    ///
    /// Every placed card except the start is turned face-down.
    ///
    /// Fails with `InvalidGrid` if `shape` has fewer than two open cells,
    /// `CardNotFound` if the deck lacks the start or goal card, and
    /// `InsufficientCards` if it cannot fill the grid.
    pub fn build(
        deck: &mut Deck<C>,
        shape: &GridShape,
        mut goal: C,
        mut start: C,
        config: BoardConfig,
        rng: &mut DeckRng,
    ) -> Result<Self> {
        shape.validate()?;
        let open = shape.open_count();
        if open < 2 {
            return Err(Error::InvalidGrid(format!(
                "need at least 2 open cells for the start and goal cards, found {open}"
            )));
        }

        let start_idx = deck
            .position(&start)
            .ok_or_else(|| Error::CardNotFound(start.to_string()))?;
        let goal_idx = deck
            .iter()
            .enumerate()
            .position(|(i, card)| i != start_idx && *card == goal)
            .ok_or_else(|| Error::CardNotFound(goal.to_string()))?;

        let needed = open - 2;
        let available = deck.len() - 2;
        if needed > available {
            return Err(Error::InsufficientCards {
                requested: needed,
                available,
            });
        }

        deck.take_at(start_idx.max(goal_idx));
        deck.take_at(start_idx.min(goal_idx));
        deck.shuffle(rng);

        // Tag the goal so its cell can be found after the second shuffle.
        let mut grid_cards: Vec<(bool, C)> = deck
            .deal(needed)?
            .into_iter()
            .map(|mut card| {
                card.set_face_up(false);
                (false, card)
            })
            .collect();
        goal.set_face_up(false);
        grid_cards.push((true, goal));
        rng.shuffle(&mut grid_cards);

        start.set_face_up(true);
        let mut start = Some(start);
        let mut goal_at = None;
        let mut start_at = None;

        let mut grid: Vec<Vec<Cell<C>>> = (0..shape.row_count())
            .map(|_| (0..shape.col_count()).map(|_| Cell::Hole).collect())
            .collect();

        for pos in shape.open_positions() {
            let card = match grid_cards.pop() {
                Some((is_goal, card)) => {
                    if is_goal {
                        goal_at = Some(pos);
                    }
                    card
                }
                None => match start.take() {
                    Some(card) => {
                        start_at = Some(pos);
                        card
                    }
                    None => break,
                },
            };
            grid[pos.row][pos.col] = Cell::Card(card);
        }

        let (Some(goal_at), Some(start_at)) = (goal_at, start_at) else {
            return Err(Error::InvalidGrid("grid could not hold every card".to_string()));
        };

        let mut board = Self {
            grid,
            goal_at,
            start_at,
            player: start_at,
            config,
            state: BoardState::AwaitingMove,
            history: Vec::new(),
        };
        board.refresh_state();
        Ok(board)
    }

    /// The card under the player.
    #[must_use]
    pub fn player_card(&self) -> &C {
        self.card_unchecked(self.player)
    }

    #[must_use]
    pub fn goal_card(&self) -> &C {
        self.card_unchecked(self.goal_at)
    }

    #[must_use]
    pub fn starting_card(&self) -> &C {
        self.card_unchecked(self.start_at)
    }

    #[must_use]
    pub fn player_position(&self) -> Position {
        self.player
    }

    #[must_use]
    pub fn starting_position(&self) -> Position {
        self.start_at
    }

    #[must_use]
    pub fn goal_position(&self) -> Position {
        self.goal_at
    }

    #[must_use]
    pub fn state(&self) -> BoardState {
        self.state
    }

    #[must_use]
    pub fn is_reached(&self) -> bool {
        self.state == BoardState::Reached
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.grid.len()
    }

    #[must_use]
    pub fn col_count(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// The cell at `pos`, or `None` if out of bounds.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell<C>> {
        self.grid.get(pos.row)?.get(pos.col)
    }

    /// Cards on the board in row-major order.
    pub fn cards(&self) -> impl Iterator<Item = (Position, &C)> + '_ {
        self.grid.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.card().map(|card| (Position::new(r, c), card)))
        })
    }

    /// Where a move in `direction` would land, if that is a card.
    #[must_use]
    pub fn target_of(&self, direction: Direction) -> Option<Position> {
        let target = self.player.step(direction)?;
        self.cell(target)?.card()?;
        Some(target)
    }

    /// Allowed directions that lead onto a card.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Direction> {
        self.config
            .allowed()
            .iter()
            .copied()
            .filter(|d| self.target_of(*d).is_some())
            .collect()
    }

    /// Move the player one step.
    pub fn try_move(&mut self, direction: Direction) -> std::result::Result<MoveRecord, MoveError> {
        if self.is_reached() {
            return Err(MoveError::Finished);
        }
        if !self.config.allows(direction) {
            return Err(MoveError::UnrecognizedDirection {
                allowed: self.config.allowed().to_vec(),
            });
        }
        let to = self.target_of(direction).ok_or(MoveError::IllegalMove)?;

        let record = MoveRecord {
            turn: self.history.len() as u32 + 1,
            direction,
            from: self.player,
            to,
        };
        self.player = to;
        if let Some(card) = self.grid[to.row][to.col].card_mut() {
            card.set_face_up(true);
        }
        self.history.push(record);
        self.refresh_state();
        Ok(record)
    }

    /// Handle one line of player input.
    pub fn handle_input(&mut self, line: &str) -> std::result::Result<Turn, MoveError> {
        match Command::parse(line, self.config.allowed())? {
            Command::Quit => Ok(Turn::Quit),
            Command::Move(direction) => {
                let record = self.try_move(direction)?;
                if self.is_reached() {
                    Ok(Turn::Reached(record))
                } else {
                    Ok(Turn::Moved(record))
                }
            }
        }
    }

    /// The grid as text: one line per row, each cell centered in four
    /// columns. Face-down cards show `XX`, holes are blank.
    #[must_use]
    pub fn render(&self) -> String {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        let label = match cell.card() {
                            Some(card) if card.is_face_up() => card.to_string(),
                            Some(_) => FACE_DOWN_LABEL.to_string(),
                            None => "  ".to_string(),
                        };
                        format!("{label:^width$}", width = CELL_WIDTH)
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// "You are at: <card>", followed by the card's description if any.
    #[must_use]
    pub fn location_lines(&self) -> Vec<String> {
        let card = self.player_card();
        let mut lines = vec![format!("You are at: {card}")];
        if let Some(description) = card.description() {
            lines.push(description.to_string());
        }
        lines
    }

    fn refresh_state(&mut self) {
        self.state = if self.player_card() == self.goal_card() {
            BoardState::Reached
        } else {
            BoardState::AwaitingMove
        };
    }

    // Positions stored on the board always point at cards.
    fn card_unchecked(&self, pos: Position) -> &C {
        match &self.grid[pos.row][pos.col] {
            Cell::Card(card) => card,
            _ => unreachable!("board position {pos} does not hold a card"),
        }
    }
}
