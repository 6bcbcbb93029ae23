//! Move legality.
//!
//! `validate` checks a proposed cell set against the board in a fixed
//! order and reports the first rule broken:
//!
//! 1. cell count within `min_cells..=max_cells`
//! 2. every cell on the grid
//! 3. every cell empty
//! 4. cells connected under 4-directional adjacency
//! 5. the opening moves include their corner (top-left for the first
//!    move, bottom-right for the second)
//!
//! The order is part of the contract: the same input always yields the
//! same reason.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::connectivity::are_connected;
use crate::core::{Board, GridConfig, Position};

/// Why a proposed move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum RejectReason {
    #[error("too few cells selected (at least {min})")]
    TooFewCells { min: usize },

    #[error("too many cells selected (at most {max})")]
    TooManyCells { max: usize },

    #[error("cell {0} is outside the board")]
    OutOfBounds(Position),

    #[error("cell {0} is already filled")]
    CellFilled(Position),

    #[error("cells must be connected")]
    NotConnected,

    #[error("opening move must include the corner at {0}")]
    MissingOpeningCorner(Position),
}

/// Check whether `positions` is a legal move on `board` when `move_count`
/// moves have already been played.
///
/// Pure: returns `Ok(())` for a legal move and the first violated rule
/// otherwise.
#[instrument(level = "trace", skip(config, board, positions), fields(cells = positions.len()))]
pub fn validate(
    config: &GridConfig,
    board: &Board,
    positions: &[Position],
    move_count: u32,
) -> Result<(), RejectReason> {
    let result = check(config, board, positions, move_count);
    if let Err(reason) = &result {
        debug!(%reason, move_count, "move rejected");
    }
    result
}

fn check(
    config: &GridConfig,
    board: &Board,
    positions: &[Position],
    move_count: u32,
) -> Result<(), RejectReason> {
    if positions.len() < config.min_cells {
        return Err(RejectReason::TooFewCells { min: config.min_cells });
    }
    if positions.len() > config.max_cells {
        return Err(RejectReason::TooManyCells { max: config.max_cells });
    }

    if let Some(&pos) = positions.iter().find(|&&p| !board.is_valid_position(p)) {
        return Err(RejectReason::OutOfBounds(pos));
    }

    if let Some(&pos) = positions.iter().find(|&&p| !board.is_empty(p)) {
        return Err(RejectReason::CellFilled(pos));
    }

    if !are_connected(positions) {
        return Err(RejectReason::NotConnected);
    }

    if let Some(corner) = config.opening_corner(move_count) {
        if !positions.contains(&corner) {
            return Err(RejectReason::MissingOpeningCorner(corner));
        }
    }

    Ok(())
}
