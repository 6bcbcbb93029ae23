//! Game state snapshot.
//!
//! ## GameState
//!
//! Everything observable about a game:
//! - Board and current player
//! - Move count and history
//! - Phase and result once the game has ended
//!
//! Snapshots are values. Transition functions in `rules` take a snapshot
//! and return the next one; nothing is mutated in place. `board` and
//! `history` are persistent structures, so clones are O(1).
//!
//! ## Phase
//!
//! ```text
//!  InProgress ──fill / resign──▶ AwaitingReveal ──delay──▶ Concluded
//!      ▲                               │                       │
//!      └──────────────── undo ─────────┴───────────────────────┘
//! ```
//!
//! With a zero reveal delay the middle phase is skipped.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::board::Board;
use super::config::GridConfig;
use super::player::Player;
use super::position::Position;

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// The game has ended; the announcement is shown before the winner is
    /// revealed.
    AwaitingReveal,
    /// The winner has been revealed.
    Concluded,
}

impl Phase {
    /// True once the game has ended (revealed or not).
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Phase::InProgress)
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// The winner claimed the last empty cell(s).
    BoardFilled,
    /// The loser forfeited.
    Resignation,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Player,
    pub reason: EndReason,
}

impl GameResult {
    #[must_use]
    pub const fn new(winner: Player, reason: EndReason) -> Self {
        Self { winner, reason }
    }

    /// The losing player.
    #[must_use]
    pub const fn loser(self) -> Player {
        self.winner.other()
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner == player
    }
}

/// A full game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Cell states.
    pub board: Board,

    /// Player to move. After the game ends this is the player who made the
    /// last move (or who was to move when the opponent resigned).
    pub current_player: Player,

    /// Number of moves applied so far.
    pub move_count: u32,

    /// Lifecycle phase.
    pub phase: Phase,

    /// Set once the game has ended.
    pub result: Option<GameResult>,

    /// Applied moves, oldest first.
    pub history: Vector<MoveRecord>,
}

impl GameState {
    /// Initial state: empty board, player one to move, no moves.
    #[must_use]
    pub fn new(config: &GridConfig) -> Self {
        Self {
            board: Board::from_config(config),
            current_player: Player::One,
            move_count: 0,
            phase: Phase::InProgress,
            result: None,
            history: Vector::new(),
        }
    }

    /// True once the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase.is_over()
    }

    /// The winner, if the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.result.map(|r| r.winner)
    }

    /// The most recent move.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// The move number that claimed `pos`, if any.
    #[must_use]
    pub fn move_number_at(&self, pos: Position) -> Option<u32> {
        self.history
            .iter()
            .find(|record| record.contains(pos))
            .map(|record| record.move_number)
    }

    /// Map from every claimed cell to the number of the move that claimed
    /// it. Presentation uses this to draw borders around move groups.
    #[must_use]
    pub fn move_groups(&self) -> FxHashMap<Position, u32> {
        let mut groups = FxHashMap::default();
        for record in &self.history {
            for &pos in &record.positions {
                groups.insert(pos, record.move_number);
            }
        }
        groups
    }
}
