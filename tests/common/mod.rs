//! Shared helpers for integration tests.

#![allow(dead_code)]

use no67::core::{Board, GameState, Position};
use no67::rules::{ClaimRules, RulesEngine};

/// Route `tracing` output to the test harness. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn cells(coords: &[(usize, usize)]) -> Vec<Position> {
    coords.iter().map(|&c| Position::from(c)).collect()
}

/// Split the empty cells of each row into contiguous runs of at most
/// `max` cells. Every run is a connected group.
pub fn row_runs(board: &Board, max: usize) -> Vec<Vec<Position>> {
    let mut runs = Vec::new();
    for row in 0..board.rows() {
        let mut run: Vec<Position> = Vec::new();
        for col in 0..board.cols() {
            let pos = Position::new(row, col);
            if board.is_empty(pos) && run.len() < max {
                run.push(pos);
            } else {
                if !run.is_empty() {
                    runs.push(std::mem::take(&mut run));
                }
                if board.is_empty(pos) {
                    run.push(pos);
                }
            }
        }
        if !run.is_empty() {
            runs.push(run);
        }
    }
    runs
}

/// Play both opening moves, then fill the board row by row.
/// Returns every intermediate state, starting with the empty one.
pub fn play_to_fill(rules: &ClaimRules, first: &[Position], second: &[Position]) -> Vec<GameState> {
    let mut states = vec![rules.reset()];
    let mut state = rules.apply_move(&states[0], first).unwrap();
    states.push(state.clone());
    state = rules.apply_move(&state, second).unwrap();
    states.push(state.clone());

    while !state.is_game_over() {
        let run = row_runs(&state.board, rules.config().max_cells)
            .into_iter()
            .next()
            .unwrap();
        state = rules.apply_move(&state, &run).unwrap();
        states.push(state.clone());
    }
    states
}
