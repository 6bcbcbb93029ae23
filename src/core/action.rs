//! Move representation.
//!
//! A move is just the set of cells a player claims in one turn. The cells
//! are kept in the order they were selected; the order carries no rule
//! meaning but is preserved into history so replays are exact.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Player;
use super::position::Position;

/// Inline capacity of a move; the default rules never claim more cells.
pub const INLINE_CELLS: usize = 6;

/// Cells claimed (or proposed) in one turn.
pub type Cells = SmallVec<[Position; INLINE_CELLS]>;

/// A recorded move with metadata for history tracking.
///
/// Used for:
/// - Replay-based undo
/// - Move-group display (which cells were claimed together)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who made this move.
    pub player: Player,

    /// Cells claimed, in selection order.
    pub positions: Cells,

    /// 1-based sequence number within the game.
    pub move_number: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: Player, positions: &[Position], move_number: u32) -> Self {
        Self {
            player,
            positions: SmallVec::from_slice(positions),
            move_number,
        }
    }

    /// Number of cells claimed.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.positions.len()
    }

    /// True if this move claimed `pos`.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}
