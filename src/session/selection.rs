//! The cells a player has picked but not yet confirmed.

use serde::{Deserialize, Serialize};

use crate::core::{Cells, Position};

/// Ordered set of picked cells. Picking a cell twice unpicks it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    cells: Cells,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick `pos`, or unpick it if already picked.
    ///
    /// Returns `true` if the cell is picked afterwards.
    pub fn toggle(&mut self, pos: Position) -> bool {
        if let Some(i) = self.cells.iter().position(|&p| p == pos) {
            self.cells.remove(i);
            false
        } else {
            self.cells.push(pos);
            true
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Picked cells in the order they were picked.
    #[must_use]
    pub fn as_slice(&self) -> &[Position] {
        &self.cells
    }
}
