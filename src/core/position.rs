//! Grid coordinates.
//!
//! A `Position` is a bare `(row, col)` pair. It carries no grid dimensions,
//! so it may lie outside the board; bounds are checked by `Board` and
//! `GridConfig`, which filter or reject such positions instead of panicking.

use serde::{Deserialize, Serialize};

/// A `(row, col)` cell coordinate, 0-based from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The top-left corner.
    pub const ORIGIN: Position = Position::new(0, 0);

    /// Up, down, left and right candidates in that order.
    ///
    /// Candidates that would leave the grid on the top or left edge are
    /// `None`; the bottom and right edges are filtered by the caller,
    /// which knows the grid dimensions.
    #[must_use]
    pub fn orthogonal(self) -> [Option<Position>; 4] {
        [
            self.row.checked_sub(1).map(|row| Position::new(row, self.col)),
            self.row.checked_add(1).map(|row| Position::new(row, self.col)),
            self.col.checked_sub(1).map(|col| Position::new(self.row, col)),
            self.col.checked_add(1).map(|col| Position::new(self.row, col)),
        ]
    }

    /// True if the two positions share an edge.
    ///
    /// ```
    /// use no67::core::Position;
    ///
    /// assert!(Position::new(2, 3).is_adjacent(Position::new(2, 4)));
    /// assert!(!Position::new(2, 3).is_adjacent(Position::new(3, 4)));
    /// ```
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthogonal_interior() {
        let around = Position::new(2, 3).orthogonal();
        assert_eq!(
            around,
            [
                Some(Position::new(1, 3)),
                Some(Position::new(3, 3)),
                Some(Position::new(2, 2)),
                Some(Position::new(2, 4)),
            ]
        );
    }

    #[test]
    fn test_orthogonal_origin_has_no_up_or_left() {
        let around = Position::ORIGIN.orthogonal();
        assert_eq!(around[0], None);
        assert_eq!(around[2], None);
        assert_eq!(around[1], Some(Position::new(1, 0)));
        assert_eq!(around[3], Some(Position::new(0, 1)));
    }

    #[test]
    fn test_diagonal_is_not_adjacent() {
        let p = Position::new(1, 1);
        assert!(!p.is_adjacent(Position::new(0, 0)));
        assert!(!p.is_adjacent(Position::new(2, 2)));
        assert!(!p.is_adjacent(p));
        assert!(p.is_adjacent(Position::new(0, 1)));
    }

    #[test]
    fn test_display_and_from_tuple() {
        let p: Position = (5, 6).into();
        assert_eq!(p, Position::new(5, 6));
        assert_eq!(format!("{}", p), "(5, 6)");
    }
}
