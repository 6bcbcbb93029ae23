//! Single-owner game session.
//!
//! A `Session` holds the only copy of the game state together with the
//! presentation-side bits the rules do not care about: the current
//! selection, the last rejection, and the pending reveal timer.
//!
//! Presentation feeds it discrete `Intent`s and renders from its
//! accessors. Every accepted intent replaces the state wholesale; a
//! rejected move changes nothing except the rejection indicator, and the
//! selection is kept so the player can adjust it.
//!
//! ## Example
//!
//! ```
//! use std::time::Instant;
//! use no67::core::{GridConfig, Player, Position};
//! use no67::session::{Intent, Session, SessionEvent};
//!
//! let mut session = Session::new(GridConfig::default());
//! let now = Instant::now();
//!
//! session.handle(Intent::Select(Position::new(0, 0)), now);
//! let event = session.handle(Intent::Confirm, now);
//!
//! assert!(matches!(event, SessionEvent::MoveAccepted { next_player: Player::Two, .. }));
//! assert_eq!(session.state().move_count, 1);
//! ```

mod selection;
mod timer;

pub use selection::Selection;
pub use timer::RevealTimer;

use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{GameResult, GameState, GridConfig, MoveRecord, Phase, Player, Position};
use crate::rules::{ClaimRules, RejectReason, RulesEngine, TransitionError};

/// A discrete user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Pick or unpick a cell.
    Select(Position),
    /// Drop all picked cells.
    ClearSelection,
    /// Play the picked cells as a move.
    Confirm,
    /// Take back the last step.
    Undo,
    /// The player to move forfeits.
    Resign,
    /// Start a new game.
    Reset,
}

/// What an intent (or a timer tick) did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The selection changed.
    SelectionChanged,
    /// A move was played and the game goes on.
    MoveAccepted {
        record: MoveRecord,
        next_player: Player,
    },
    /// The move was illegal; state and selection are unchanged.
    MoveRejected(RejectReason),
    /// The game ended. In the two-phase variant the winner is revealed by a
    /// later `Revealed` event.
    GameEnded(GameResult),
    /// The reveal delay elapsed.
    Revealed(GameResult),
    /// A step was taken back.
    Undone,
    /// A new game was started.
    Reset,
    /// The intent does not apply in the current state.
    Ignored,
}

/// Owner of a running game.
#[derive(Debug)]
pub struct Session<R: RulesEngine = ClaimRules> {
    rules: R,
    state: GameState,
    selection: Selection,
    last_rejection: Option<RejectReason>,
    reveal: Option<RevealTimer>,
}

impl Session<ClaimRules> {
    /// A session playing the standard rules.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self::with_rules(ClaimRules::new(config))
    }
}

impl<R: RulesEngine> Session<R> {
    /// A session playing custom rules.
    #[must_use]
    pub fn with_rules(rules: R) -> Self {
        let state = rules.reset();
        Self {
            rules,
            state,
            selection: Selection::new(),
            last_rejection: None,
            reveal: None,
        }
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Current game snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Picked, unconfirmed cells.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Why the last confirmation failed, until the selection changes.
    #[must_use]
    pub fn last_rejection(&self) -> Option<RejectReason> {
        self.last_rejection
    }

    /// The pending reveal, if the game is in its announcement hold.
    #[must_use]
    pub fn pending_reveal(&self) -> Option<&RevealTimer> {
        self.reveal.as_ref()
    }

    /// Apply one user intent.
    pub fn handle(&mut self, intent: Intent, now: Instant) -> SessionEvent {
        let event = match intent {
            Intent::Select(pos) => self.select(pos),
            Intent::ClearSelection => self.clear_selection(),
            Intent::Confirm => self.confirm(now),
            Intent::Undo => self.undo(),
            Intent::Resign => self.resign(now),
            Intent::Reset => self.reset(),
        };
        if event == SessionEvent::Ignored {
            trace!(?intent, phase = ?self.state.phase, "intent ignored");
        }
        event
    }

    /// Fire the reveal if it is due.
    pub fn tick(&mut self, now: Instant) -> Option<SessionEvent> {
        if !self.reveal.is_some_and(|timer| timer.is_due(now)) {
            return None;
        }
        self.reveal = None;
        self.state = self.rules.conclude(&self.state);
        debug!("result revealed");
        self.state.result.map(SessionEvent::Revealed)
    }

    fn select(&mut self, pos: Position) -> SessionEvent {
        if self.state.is_game_over() || !self.state.board.is_empty(pos) {
            return SessionEvent::Ignored;
        }
        self.selection.toggle(pos);
        self.last_rejection = None;
        SessionEvent::SelectionChanged
    }

    fn clear_selection(&mut self) -> SessionEvent {
        if self.state.is_game_over() {
            return SessionEvent::Ignored;
        }
        self.selection.clear();
        self.last_rejection = None;
        SessionEvent::SelectionChanged
    }

    fn confirm(&mut self, now: Instant) -> SessionEvent {
        match self.rules.apply_move(&self.state, self.selection.as_slice()) {
            Ok(next) => {
                self.replace_state(next);
                if let Some(result) = self.ended(now) {
                    return SessionEvent::GameEnded(result);
                }
                match self.state.last_move() {
                    Some(record) => SessionEvent::MoveAccepted {
                        record: record.clone(),
                        next_player: self.state.current_player,
                    },
                    None => SessionEvent::Ignored,
                }
            }
            Err(TransitionError::Rejected(reason)) => {
                self.last_rejection = Some(reason);
                SessionEvent::MoveRejected(reason)
            }
            Err(TransitionError::GameOver) => SessionEvent::Ignored,
        }
    }

    fn undo(&mut self) -> SessionEvent {
        match self.rules.undo(&self.state) {
            Some(previous) => {
                self.replace_state(previous);
                SessionEvent::Undone
            }
            None => SessionEvent::Ignored,
        }
    }

    fn resign(&mut self, now: Instant) -> SessionEvent {
        match self.rules.resign(&self.state, self.state.current_player) {
            Ok(next) => {
                self.replace_state(next);
                self.ended(now).map_or(SessionEvent::Ignored, SessionEvent::GameEnded)
            }
            Err(_) => SessionEvent::Ignored,
        }
    }

    fn reset(&mut self) -> SessionEvent {
        let fresh = self.rules.reset();
        self.replace_state(fresh);
        SessionEvent::Reset
    }

    /// Swap in a new snapshot and drop everything tied to the old one.
    fn replace_state(&mut self, next: GameState) {
        if self.reveal.take().is_some() {
            debug!("pending reveal cancelled");
        }
        self.state = next;
        self.selection.clear();
        self.last_rejection = None;
    }

    /// If the game just ended, arm the reveal when it is held.
    fn ended(&mut self, now: Instant) -> Option<GameResult> {
        let result = self.state.result?;
        if self.state.phase == Phase::AwaitingReveal {
            let delay = self.rules.config().reveal_delay();
            self.reveal = Some(RevealTimer::arm(now, delay));
            debug!(?delay, "reveal armed");
        }
        Some(result)
    }
}
