//! Grid shapes and board cells.
//!
//! A `GridShape` says which positions take a card (open) and which are
//! holes. Shapes are always rectangular and non-empty.
//!
//! ```
//! use decker::carta::GridShape;
//!
//! let diamond = GridShape::parse(".X.\nX.X\n.X.").unwrap();
//! assert_eq!(diamond.open_count(), 4);
//! ```

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::core::error::{Error, Result};

/// Pattern character for an open cell.
pub const OPEN_CHAR: char = 'X';

/// Pattern character for a hole.
pub const HOLE_CHAR: char = '.';

/// A `(row, column)` coordinate. Row 0 is the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// One step in `direction`, or `None` if it would go below zero.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        Some(Position {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Which grid positions receive cards.
///
/// Serializes as the bare rows; deserializing runs the same checks as
/// `from_rows`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct GridShape {
    rows: Vec<Vec<bool>>,
}

impl GridShape {
    /// A `rows` x `cols` grid with every cell open.
    pub fn filled(rows: usize, cols: usize) -> Result<Self> {
        Self::from_rows(vec![vec![true; cols]; rows])
    }

    /// Build from rows of open (`true`) / hole (`false`) flags.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let shape = Self { rows };
        shape.validate()?;
        Ok(shape)
    }

    /// Check that the shape is non-empty and rectangular.
    pub fn validate(&self) -> Result<()> {
        let width = match self.rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(Error::InvalidGrid("grid has no cells".to_string())),
        };
        if let Some(idx) = self.rows.iter().position(|row| row.len() != width) {
            return Err(Error::InvalidGrid(format!(
                "row {idx} has {} cells, expected {width}",
                self.rows[idx].len()
            )));
        }
        Ok(())
    }

    /// Parse a text pattern: one line per row, `X` open, `.` hole.
    ///
    /// Surrounding whitespace and blank lines are ignored.
    pub fn parse(pattern: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for line in pattern.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let mut row = Vec::with_capacity(line.len());
            for ch in line.chars() {
                match ch {
                    OPEN_CHAR => row.push(true),
                    HOLE_CHAR => row.push(false),
                    other => {
                        return Err(Error::InvalidGrid(format!(
                            "unexpected character {other:?} in grid pattern"
                        )))
                    }
                }
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Is the cell at `pos` open? Out of bounds counts as not open.
    #[must_use]
    pub fn is_open(&self, pos: Position) -> bool {
        self.rows
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .unwrap_or(false)
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        self.rows.iter().flatten().filter(|open| **open).count()
    }

    /// Open positions in row-major order.
    pub fn open_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, open)| **open)
                .map(move |(c, _)| Position::new(r, c))
        })
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for open in row {
                let ch = if *open { OPEN_CHAR } else { HOLE_CHAR };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<bool>>> for GridShape {
    type Error = Error;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<GridShape> for Vec<Vec<bool>> {
    fn from(shape: GridShape) -> Self {
        shape.rows
    }
}

/// One position on a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell<C> {
    /// Not part of the map.
    Hole,
    /// Waiting for a card.
    Open,
    Card(C),
}

impl<C> Cell<C> {
    #[must_use]
    pub fn card(&self) -> Option<&C> {
        match self {
            Cell::Card(card) => Some(card),
            _ => None,
        }
    }

    pub fn card_mut(&mut self) -> Option<&mut C> {
        match self {
            Cell::Card(card) => Some(card),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled() {
        let shape = GridShape::filled(4, 3).unwrap();
        assert_eq!(shape.row_count(), 4);
        assert_eq!(shape.col_count(), 3);
        assert_eq!(shape.open_count(), 12);
    }

    #[test]
    fn test_rejects_empty_and_ragged() {
        assert!(matches!(GridShape::filled(0, 3), Err(Error::InvalidGrid(_))));
        assert!(matches!(GridShape::filled(3, 0), Err(Error::InvalidGrid(_))));
        assert!(matches!(
            GridShape::from_rows(vec![vec![true, true], vec![true]]),
            Err(Error::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_deserialize_validates_rows() {
        let shape: GridShape = serde_json::from_str("[[true,false],[false,true]]").unwrap();
        assert_eq!(shape, GridShape::parse("X.\n.X").unwrap());
        assert_eq!(serde_json::to_string(&shape).unwrap(), "[[true,false],[false,true]]");

        assert!(serde_json::from_str::<GridShape>("[[true],[true,true,true]]").is_err());
        assert!(serde_json::from_str::<GridShape>("[]").is_err());
        assert!(serde_json::from_str::<GridShape>("[[]]").is_err());
    }

    #[test]
    fn test_parse_pattern() {
        let shape = GridShape::parse("
            .X.
            X.X
            .X.
        ")
        .unwrap();
        assert_eq!(shape.row_count(), 3);
        assert!(shape.is_open(Position::new(0, 1)));
        assert!(!shape.is_open(Position::new(1, 1)));
        assert!(!shape.is_open(Position::new(5, 5)));
        assert_eq!(shape.to_string(), ".X.\nX.X\n.X.");
    }

    #[test]
    fn test_parse_rejects_unknown_characters() {
        let err = GridShape::parse("XX\nX?").unwrap_err();
        assert_eq!(err, Error::InvalidGrid("unexpected character '?' in grid pattern".to_string()));
    }

    #[test]
    fn test_open_positions_row_major() {
        let shape = GridShape::parse("X.\n.X").unwrap();
        let open: Vec<_> = shape.open_positions().collect();
        assert_eq!(open, vec![Position::new(0, 0), Position::new(1, 1)]);
    }

    #[test]
    fn test_position_step() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::N), None);
        assert_eq!(origin.step(Direction::W), None);
        assert_eq!(origin.step(Direction::SE), Some(Position::new(1, 1)));
        assert_eq!(Position::new(2, 2).step(Direction::NW), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_cell_accessors() {
        let mut cell = Cell::Card(5);
        assert_eq!(cell.card(), Some(&5));
        if let Some(v) = cell.card_mut() {
            *v = 6;
        }
        assert_eq!(cell, Cell::Card(6));
        assert_eq!(Cell::<i32>::Hole.card(), None);
        assert_eq!(Cell::<i32>::Open.card(), None);
    }
}
