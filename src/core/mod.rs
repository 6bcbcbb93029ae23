//! Core game types: players, positions, configuration, board, moves, state.
//!
//! Everything here is plain data with primitive queries. Rules and state
//! transitions live in `rules`.

pub mod player;
pub mod position;
pub mod config;
pub mod board;
pub mod action;
pub mod state;

pub use player::{Player, PlayerMap};
pub use position::Position;
pub use config::{ConfigError, GridConfig, MAX_GRID_CELLS};
pub use board::{Board, BoardShapeError, Cell};
pub use action::{Cells, MoveRecord};
pub use state::{EndReason, GameResult, GameState, Phase};
