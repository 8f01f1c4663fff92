//! Carta: a grid-exploration game played on a layout of cards.
//!
//! Cards from a deck are dealt face-down onto a grid. The player starts on
//! a face-up card and moves one step at a time in a compass direction,
//! turning over each card they land on, until they stand on the goal card.
//!
//! ## Key Types
//!
//! - `GridShape`: Which cells take a card and which are holes
//! - `BoardConfig`: Allowed directions
//! - `CartaBoard`: Layout, player position and move validation
//! - `run_session`: The prompt/move/render loop over `InputSource` and
//!   `OutputSink`

pub mod board;
pub mod config;
pub mod direction;
pub mod grid;
pub mod session;

pub use board::{BoardState, CartaBoard, MoveError, MoveRecord, Turn};
pub use config::BoardConfig;
pub use direction::{Command, Direction};
pub use grid::{Cell, GridShape, Position};
pub use session::{run_session, Console, InputSource, OutputSink, ScriptedInput, SessionOutcome};
