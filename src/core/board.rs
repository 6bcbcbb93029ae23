//! Board model: the grid of cell states and its primitive queries.
//!
//! The board is a persistent value. `apply_positions` returns a new board
//! and leaves its input untouched; clones share structure via `im`, so
//! keeping old snapshots around for history and undo is cheap.
//!
//! Every query is total: positions outside the grid are filtered or
//! treated as "not empty", never a panic.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GridConfig;
use super::player::{Player, PlayerMap};
use super::position::Position;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Claimed(Player),
}

impl Cell {
    /// True for `Cell::Empty`.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The claiming player, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Claimed(player) => Some(player),
        }
    }
}

/// An R×C grid of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vector<Cell>,
}

/// Serialized board shape, checked before it becomes a `Board`.
#[derive(Deserialize)]
struct BoardRepr {
    rows: usize,
    cols: usize,
    cells: Vector<Cell>,
}

/// Why a serialized board was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardShapeError {
    #[error("board must have at least one row and column, got {rows} x {cols}")]
    Empty { rows: usize, cols: usize },

    #[error("board of {rows} x {cols} needs {expected} cells, got {actual}")]
    CellCount {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardShapeError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let BoardRepr { rows, cols, cells } = repr;
        if rows == 0 || cols == 0 {
            return Err(BoardShapeError::Empty { rows, cols });
        }
        match rows.checked_mul(cols) {
            Some(expected) if expected == cells.len() => Ok(Self { rows, cols, cells }),
            expected => Err(BoardShapeError::CellCount {
                rows,
                cols,
                expected: expected.unwrap_or(usize::MAX),
                actual: cells.len(),
            }),
        }
    }
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// If either dimension is zero or `rows * cols` overflows. Configs
    /// that pass `GridConfig::validate` never do either.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one row and column");
        let len = rows.checked_mul(cols);
        assert!(len.is_some(), "Board of {} x {} is too large", rows, cols);

        Self {
            rows,
            cols,
            cells: Vector::from(vec![Cell::Empty; len.unwrap_or_default()]),
        }
    }

    /// Create an empty board with the configured dimensions.
    #[must_use]
    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.rows, config.cols)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn offset(&self, pos: Position) -> Option<usize> {
        self.is_valid_position(pos).then(|| pos.row * self.cols + pos.col)
    }

    /// True iff `pos` lies within the grid.
    #[must_use]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// The up-to-4 orthogonal neighbours of `pos` that lie on the grid,
    /// in up, down, left, right order. No wraparound.
    ///
    /// ```
    /// use no67::core::{Board, Position};
    ///
    /// let board = Board::new(6, 7);
    /// assert_eq!(board.neighbors(Position::new(0, 0)).len(), 2);
    /// assert_eq!(board.neighbors(Position::new(0, 3)).len(), 3);
    /// assert_eq!(board.neighbors(Position::new(2, 3)).len(), 4);
    /// ```
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> SmallVec<[Position; 4]> {
        pos.orthogonal()
            .into_iter()
            .flatten()
            .filter(|&p| self.is_valid_position(p))
            .collect()
    }

    /// Cell state at `pos`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.offset(pos).map(|i| self.cells[i])
    }

    /// True iff `pos` is on the grid and unclaimed.
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_empty)
    }

    /// True iff every position is on the grid and unclaimed.
    #[must_use]
    pub fn all_empty(&self, positions: &[Position]) -> bool {
        positions.iter().all(|&p| self.is_empty(p))
    }

    /// A new board with every listed position claimed by `player`.
    ///
    /// Positions outside the grid are skipped. The caller is expected to
    /// have validated that the positions were empty.
    #[must_use]
    pub fn apply_positions(&self, positions: &[Position], player: Player) -> Board {
        let mut next = self.clone();
        for &pos in positions {
            if let Some(i) = next.offset(pos) {
                next.cells.set(i, Cell::Claimed(player));
            }
        }
        next
    }

    /// Number of unclaimed cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// True iff no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of cells each player has claimed.
    #[must_use]
    pub fn claimed_counts(&self) -> PlayerMap<usize> {
        let mut counts = PlayerMap::default();
        for owner in self.cells.iter().filter_map(|c| c.owner()) {
            counts[owner] += 1;
        }
        counts
    }

    /// Iterate over `(Position, Cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Position::new(i / cols, i % cols), cell))
    }

    /// Positions of all unclaimed cells in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter().filter(|(_, c)| c.is_empty()).map(|(p, _)| p)
    }
}

impl std::fmt::Display for Board {
    /// One line per row: `.` empty, `1`/`2` claimed.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let c = match self.cells[row * self.cols + col] {
                    Cell::Empty => '.',
                    Cell::Claimed(Player::One) => '1',
                    Cell::Claimed(Player::Two) => '2',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
