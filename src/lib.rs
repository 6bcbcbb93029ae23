//! # no67
//!
//! Rules engine for a two-player territory-claiming game on a small grid.
//!
//! Each turn the player to move claims a connected group of 1 to 6 empty
//! cells. The first move must include the top-left corner and the reply
//! the bottom-right one. Whoever claims the last empty cell wins.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: rules take a `GameState` snapshot and return
//!    the next one. Nothing is retained between calls.
//!
//! 2. **Rejections are values**: an illegal move yields a `RejectReason`
//!    from a fixed, ordered taxonomy; state is never touched.
//!
//! 3. **Replay over rollback**: undo rebuilds the board from history.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: board and history use `im`, so
//!   snapshots clone in O(1).
//!
//! - **Single owner**: a `Session` holds the only live state plus the
//!   selection and the pending reveal timer, and replaces the state
//!   wholesale on every accepted intent.
//!
//! ## Modules
//!
//! - `core`: players, positions, configuration, board, move records, state
//! - `rules`: connectivity, validation, the transition engine
//! - `session`: intent handling, selection, delayed reveal

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardShapeError, Cell, Cells, ConfigError, EndReason, GameResult, GameState,
    GridConfig, MoveRecord, Phase, Player, PlayerMap, Position, MAX_GRID_CELLS,
};

pub use crate::rules::{
    are_connected, validate, ClaimRules, RejectReason, RulesEngine, TransitionError,
};

pub use crate::session::{Intent, RevealTimer, Selection, Session, SessionEvent};
