//! Connectivity of a cell set under 4-directional adjacency.
//!
//! The cells are the nodes of a graph; two nodes share an edge iff they are
//! orthogonal neighbours. The set is connected iff a breadth-first search
//! from the first cell, stepping only onto members of the set, visits every
//! entry.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::Position;

/// True iff `positions` form a single connected group.
///
/// - Empty input is not connected.
/// - A single cell is connected.
/// - Diagonal contact does not connect.
/// - Duplicate entries can never all be visited, so they make the set
///   not connected.
///
/// ```
/// use no67::core::Position;
/// use no67::rules::are_connected;
///
/// let l_shape = [Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)];
/// assert!(are_connected(&l_shape));
///
/// let diagonal = [Position::new(0, 0), Position::new(1, 1)];
/// assert!(!are_connected(&diagonal));
/// ```
#[must_use]
pub fn are_connected(positions: &[Position]) -> bool {
    let Some(&start) = positions.first() else {
        return false;
    };
    if positions.len() == 1 {
        return true;
    }

    let members: FxHashSet<Position> = positions.iter().copied().collect();
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::with_capacity(positions.len());

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in current.orthogonal().into_iter().flatten() {
            if members.contains(&next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    visited.len() == positions.len()
}
