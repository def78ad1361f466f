//! Tic-tac-toe: board rules, opponent policy, and the round state machine.
//!
//! The human always plays `X` and moves first; the opponent plays `O` with a
//! one-ply win/block/random policy. The policy is deliberately weaker than
//! minimax: it reproduces the observable behavior of the shipped opponent,
//! which can be beaten by two-move traps.

mod board;
mod policy;
mod session;

pub use board::{Board, Mark, Verdict, CELL_COUNT, LINES};
pub use policy::{winning_move, MovePolicy, OnePlyPolicy, RandomPolicy};
pub use session::{TicTacToeSession, HUMAN_MARK, OPPONENT_MARK};
