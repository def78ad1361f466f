//! Opponent move selection.
//!
//! Policies are trait-based so the session can be exercised with a
//! deterministic stand-in, and so a stronger opponent could be slotted in
//! without touching the state machine.

use crate::core::GameRng;

use super::board::{Board, Mark, LINES};

/// Policy for choosing the opponent's next cell.
pub trait MovePolicy {
    /// Choose an empty cell for `mark` to play.
    ///
    /// Returns `None` only when the board has no empty cell.
    fn choose_move(&self, board: &Board, mark: Mark, rng: &mut GameRng) -> Option<usize>;
}

/// Find a cell that completes a winning line for `mark`, if one exists.
///
/// Scans the 8 lines in fixed order; a line with two of `mark` and one empty
/// cell yields that empty cell.
#[must_use]
pub fn winning_move(board: &Board, mark: Mark) -> Option<usize> {
    for line in LINES {
        let mut empty = None;
        let mut own = 0;
        for cell in line {
            match board.cell(cell) {
                Some(m) if m == mark => own += 1,
                None => empty = Some(cell),
                Some(_) => {}
            }
        }
        if own == 2 {
            if let Some(cell) = empty {
                return Some(cell);
            }
        }
    }
    None
}

/// The shipped opponent: one ply of lookahead, three rules in priority
/// order.
///
/// 1. Complete a winning line for itself (win-now).
/// 2. Else occupy the cell that would complete a line for the other side
///    (block).
/// 3. Else play uniformly at random among the empty cells.
///
/// No deeper lookahead and no positional preference, so it loses to
/// two-move combination traps. That weakness is intentional.
#[derive(Clone, Copy, Debug, Default)]
pub struct OnePlyPolicy;

impl MovePolicy for OnePlyPolicy {
    fn choose_move(&self, board: &Board, mark: Mark, rng: &mut GameRng) -> Option<usize> {
        if let Some(cell) = winning_move(board, mark) {
            return Some(cell);
        }
        if let Some(cell) = winning_move(board, mark.other()) {
            return Some(cell);
        }
        let open: Vec<usize> = board.empty_cells().collect();
        rng.choose(&open).copied()
    }
}

/// Uniform random over empty cells. Baseline for tests and benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose_move(&self, board: &Board, _mark: Mark, rng: &mut GameRng) -> Option<usize> {
        let open: Vec<usize> = board.empty_cells().collect();
        rng.choose(&open).copied()
    }
}
