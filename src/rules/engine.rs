//! Rules engine trait and the state transition engine.
//!
//! Transitions are pure: each takes a `GameState` snapshot and returns the
//! next one. The caller owns the state and replaces it wholesale.
//!
//! ## Implementation Notes
//!
//! - `apply_move`: validate, write cells, record history, test for a full
//!   board, and only then alternate the turn
//! - `is_terminal`: the board is full; there is no legal-move search
//! - `undo`: full replay of the remaining history, never incremental
//!   rollback

use tracing::{debug, info, instrument};

use super::validator::{self, RejectReason};
use crate::core::{
    Board, EndReason, GameResult, GameState, GridConfig, MoveRecord, Phase, Player, Position,
};

/// Errors from state transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// The proposed move broke a rule.
    #[error(transparent)]
    Rejected(#[from] RejectReason),

    /// The game has already ended; only undo and reset apply.
    #[error("the game is already over")]
    GameOver,
}

/// Rules engine trait.
///
/// Presentation drives a game through this trait. Implementors supply the
/// configuration, legality check and terminal test; the transitions are
/// provided on top of those.
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GridConfig;

    /// Check whether `positions` is a legal move in `state`.
    fn validate(&self, state: &GameState, positions: &[Position]) -> Result<(), RejectReason>;

    /// Check whether the game is over on this board.
    fn is_terminal(&self, board: &Board) -> bool;

    /// The player who moves after the current one.
    fn advance_turn(&self, state: &GameState) -> Player {
        state.current_player.other()
    }

    /// Phase a game enters when it ends: held for the reveal delay, or
    /// concluded at once when there is none.
    fn end_phase(&self) -> Phase {
        if self.config().reveal_delay_ms == 0 {
            Phase::Concluded
        } else {
            Phase::AwaitingReveal
        }
    }

    /// A fresh game: empty board, player one to move.
    fn reset(&self) -> GameState {
        debug!("new game");
        GameState::new(self.config())
    }

    /// Claim `positions` for the player to move.
    ///
    /// On a full board the mover wins and the turn does not pass;
    /// otherwise the turn goes to the opponent.
    #[instrument(
        skip(self, state, positions),
        fields(player = %state.current_player, move_count = state.move_count)
    )]
    fn apply_move(
        &self,
        state: &GameState,
        positions: &[Position],
    ) -> Result<GameState, TransitionError> {
        if state.is_game_over() {
            return Err(TransitionError::GameOver);
        }
        self.validate(state, positions)?;

        let player = state.current_player;
        let record = MoveRecord::new(player, positions, state.move_count + 1);
        let mut next = state.clone();
        next.board = state.board.apply_positions(positions, player);
        next.move_count = record.move_number;
        next.history.push_back(record);

        if self.is_terminal(&next.board) {
            next.phase = self.end_phase();
            next.result = Some(GameResult::new(player, EndReason::BoardFilled));
            info!(winner = %player, moves = next.move_count, "board filled");
        } else {
            next.current_player = self.advance_turn(state);
            debug!(cells = positions.len(), next = %next.current_player, "move applied");
        }

        Ok(next)
    }

    /// `player` forfeits; the opponent wins immediately.
    ///
    /// Either player may resign at any point while the game is in progress.
    #[instrument(skip(self, state), fields(move_count = state.move_count))]
    fn resign(&self, state: &GameState, player: Player) -> Result<GameState, TransitionError> {
        if state.is_game_over() {
            return Err(TransitionError::GameOver);
        }

        let mut next = state.clone();
        next.phase = self.end_phase();
        next.result = Some(GameResult::new(player.other(), EndReason::Resignation));
        info!(winner = %player.other(), "resigned");
        Ok(next)
    }

    /// Move from the reveal hold to the concluded phase.
    ///
    /// Any other phase is returned unchanged.
    fn conclude(&self, state: &GameState) -> GameState {
        let mut next = state.clone();
        if next.phase == Phase::AwaitingReveal {
            next.phase = Phase::Concluded;
        }
        next
    }

    /// Rebuild a game from a move history by replaying it onto an empty
    /// board, in order.
    ///
    /// Records are trusted: they are not re-validated. Replaying the same
    /// records always yields the same state.
    fn replay<I>(&self, records: I) -> GameState
    where
        I: IntoIterator<Item = MoveRecord>,
        Self: Sized,
    {
        let mut state = GameState::new(self.config());
        for record in records {
            state.board = state.board.apply_positions(&record.positions, record.player);
            state.current_player = record.player.other();
            state.move_count += 1;
            state.history.push_back(record);
        }

        let last_player = state.last_move().map(|record| record.player);
        if let Some(winner) = last_player.filter(|_| self.is_terminal(&state.board)) {
            state.current_player = winner;
            state.phase = Phase::Concluded;
            state.result = Some(GameResult::new(winner, EndReason::BoardFilled));
        }
        state
    }

    /// Take back one step.
    ///
    /// After a resignation, the resignation itself is taken back and the
    /// board is left as it was. Otherwise the last move is removed, the
    /// board is rebuilt from the remaining history, and the player whose
    /// move was removed is to move again. Returns `None` when there is
    /// nothing to undo.
    #[instrument(skip(self, state), fields(move_count = state.move_count))]
    fn undo(&self, state: &GameState) -> Option<GameState>
    where
        Self: Sized,
    {
        if matches!(state.result, Some(GameResult { reason: EndReason::Resignation, .. })) {
            debug!("resignation withdrawn");
            return Some(self.replay(state.history.clone()));
        }

        let mut history = state.history.clone();
        let undone = history.pop_back()?;
        let mut next = self.replay(history);
        next.current_player = undone.player;
        debug!(move_number = undone.move_number, player = %undone.player, "move undone");
        Some(next)
    }
}

/// The standard rules: bounded connected claims, corner openings, and the
/// last player to move on a full board wins.
#[derive(Clone, Debug, Default)]
pub struct ClaimRules {
    config: GridConfig,
}

impl ClaimRules {
    /// Create the rules for a configuration.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }
}

impl RulesEngine for ClaimRules {
    fn config(&self) -> &GridConfig {
        &self.config
    }

    fn validate(&self, state: &GameState, positions: &[Position]) -> Result<(), RejectReason> {
        validator::validate(&self.config, &state.board, positions, state.move_count)
    }

    fn is_terminal(&self, board: &Board) -> bool {
        board.is_full()
    }
}
