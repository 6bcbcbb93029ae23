//! Session intent handling and the delayed reveal.

mod common;

use std::time::{Duration, Instant};

use common::{init_tracing, row_runs};
use no67::core::{EndReason, GridConfig, Phase, Player, Position};
use no67::rules::{ClaimRules, RejectReason, RulesEngine};
use no67::session::{Intent, Session, SessionEvent};

fn select_all(session: &mut Session, positions: &[Position], now: Instant) {
    for &pos in positions {
        assert_eq!(session.handle(Intent::Select(pos), now), SessionEvent::SelectionChanged);
    }
}

fn confirm(session: &mut Session, positions: &[Position], now: Instant) -> SessionEvent {
    select_all(session, positions, now);
    session.handle(Intent::Confirm, now)
}

/// Play a full game through the session; returns the final event.
fn play_out(session: &mut Session, now: Instant) -> SessionEvent {
    confirm(session, &[Position::new(0, 0)], now);
    let far = session.rules().config().far_corner();
    confirm(session, &[far], now);

    loop {
        let max = session.rules().config().max_cells;
        let run = row_runs(&session.state().board, max).remove(0);
        let event = confirm(session, &run, now);
        if session.state().is_game_over() {
            return event;
        }
        assert!(matches!(event, SessionEvent::MoveAccepted { .. }), "{:?}", event);
    }
}

// =============================================================================
// Moves
// =============================================================================

#[test]
fn test_accepted_move_clears_selection() {
    init_tracing();
    let mut session = Session::new(GridConfig::default());
    let now = Instant::now();

    let event = confirm(&mut session, &[Position::new(0, 0), Position::new(0, 1)], now);

    match event {
        SessionEvent::MoveAccepted { record, next_player } => {
            assert_eq!(record.player, Player::One);
            assert_eq!(record.move_number, 1);
            assert_eq!(record.positions.as_slice(), &[Position::new(0, 0), Position::new(0, 1)]);
            assert_eq!(next_player, Player::Two);
        }
        other => panic!("unexpected event {:?}", other),
    }
    assert!(session.selection().is_empty());
    assert_eq!(session.last_rejection(), None);
}

#[test]
fn test_rejected_move_leaves_state_unchanged() {
    let mut session = Session::new(GridConfig::default());
    let now = Instant::now();
    let before = session.state().clone();

    let event = confirm(&mut session, &[Position::new(0, 0), Position::new(1, 1)], now);

    assert_eq!(event, SessionEvent::MoveRejected(RejectReason::NotConnected));
    assert_eq!(session.state(), &before);
    assert_eq!(session.selection().len(), 2);
    assert_eq!(session.last_rejection(), Some(RejectReason::NotConnected));

    // Fixing the selection clears the indicator and the move goes through.
    session.handle(Intent::Select(Position::new(1, 1)), now);
    assert_eq!(session.last_rejection(), None);
    assert!(matches!(session.handle(Intent::Confirm, now), SessionEvent::MoveAccepted { .. }));
}

#[test]
fn test_deselect_by_selecting_again() {
    let mut session = Session::new(GridConfig::default());
    let now = Instant::now();

    select_all(&mut session, &[Position::new(0, 0), Position::new(0, 1)], now);
    session.handle(Intent::Select(Position::new(0, 1)), now);

    assert_eq!(session.selection().as_slice(), &[Position::new(0, 0)]);
}

// =============================================================================
// End of Game
// =============================================================================

#[test]
fn test_two_phase_reveal() {
    init_tracing();
    let mut session = Session::new(GridConfig::default().with_dimensions(3, 3));
    let start = Instant::now();

    let event = play_out(&mut session, start);
    let result = match event {
        SessionEvent::GameEnded(result) => result,
        other => panic!("expected GameEnded, got {:?}", other),
    };
    assert_eq!(result.reason, EndReason::BoardFilled);
    assert_eq!(session.state().phase, Phase::AwaitingReveal);

    // Nothing is accepted while the announcement is held.
    assert_eq!(session.handle(Intent::Select(Position::new(0, 0)), start), SessionEvent::Ignored);
    assert_eq!(session.handle(Intent::Confirm, start), SessionEvent::Ignored);
    assert_eq!(session.handle(Intent::Resign, start), SessionEvent::Ignored);

    assert_eq!(session.tick(start + Duration::from_secs(1)), None);
    assert_eq!(session.tick(start + Duration::from_secs(3)), Some(SessionEvent::Revealed(result)));
    assert_eq!(session.state().phase, Phase::Concluded);
}

#[test]
fn test_zero_delay_is_single_phase() {
    let mut session = Session::new(
        GridConfig::default()
            .with_dimensions(3, 3)
            .with_reveal_delay(Duration::ZERO),
    );
    let now = Instant::now();

    let event = play_out(&mut session, now);

    assert!(matches!(event, SessionEvent::GameEnded(_)));
    assert_eq!(session.state().phase, Phase::Concluded);
    assert!(session.pending_reveal().is_none());
    assert_eq!(session.tick(now + Duration::from_secs(60)), None);
}

#[test]
fn test_undo_during_reveal_cancels_timer() {
    let mut session = Session::new(GridConfig::default().with_dimensions(3, 3));
    let start = Instant::now();

    play_out(&mut session, start);
    let mover = session.state().current_player;
    assert!(session.pending_reveal().is_some());

    assert_eq!(session.handle(Intent::Undo, start), SessionEvent::Undone);

    assert!(session.pending_reveal().is_none());
    assert_eq!(session.state().phase, Phase::InProgress);
    assert_eq!(session.state().current_player, mover);
    assert_eq!(session.tick(start + Duration::from_secs(10)), None);
    assert_eq!(session.state().phase, Phase::InProgress);
}

#[test]
fn test_resign_then_undo() {
    let mut session = Session::new(GridConfig::default());
    let now = Instant::now();
    confirm(&mut session, &[Position::new(0, 0)], now);
    let before = session.state().clone();

    let event = session.handle(Intent::Resign, now);
    assert!(matches!(
        event,
        SessionEvent::GameEnded(r) if r.winner == Player::One && r.reason == EndReason::Resignation
    ));

    assert_eq!(session.handle(Intent::Undo, now), SessionEvent::Undone);
    assert_eq!(session.state(), &before);
    assert!(session.pending_reveal().is_none());
}

#[test]
fn test_reset_starts_over() {
    let mut session = Session::new(GridConfig::default().with_dimensions(3, 3));
    let now = Instant::now();
    play_out(&mut session, now);

    assert_eq!(session.handle(Intent::Reset, now), SessionEvent::Reset);

    let fresh = ClaimRules::new(GridConfig::default().with_dimensions(3, 3)).reset();
    assert_eq!(session.state(), &fresh);
    assert!(session.selection().is_empty());
    assert!(session.pending_reveal().is_none());
}
