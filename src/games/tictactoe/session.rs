//! The round state machine.
//!
//! States follow the round's phases exactly: the session waits for a human
//! cell selection, checks the terminal condition, lets the opponent answer,
//! checks again, and either returns to waiting or parks in `Terminal`.
//! `play` drives the machine through the synchronous phases so callers only
//! ever observe `AwaitingPlayer` or `Terminal`.

use crate::core::{GameRng, Outcome, Participant};

use super::board::{Board, Mark, Verdict, CELL_COUNT};
use super::policy::{MovePolicy, OnePlyPolicy};

/// The human's mark. The human always moves first.
pub const HUMAN_MARK: Mark = Mark::X;
/// The opponent's mark.
pub const OPPONENT_MARK: Mark = Mark::O;

fn owner(mark: Mark) -> Participant {
    if mark == HUMAN_MARK {
        Participant::Human
    } else {
        Participant::Opponent
    }
}

/// Phase of the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Blocked on a human cell selection.
    AwaitingPlayer,
    /// A move was just made; evaluate the terminal condition.
    Checking { after: Participant },
    /// The opponent owes a move.
    OpponentTurn,
    /// Round over. No further input is accepted.
    Terminal(Outcome),
}

/// One round of tic-tac-toe against a move policy.
#[derive(Clone, Debug)]
pub struct TicTacToeSession<P: MovePolicy = OnePlyPolicy> {
    board: Board,
    policy: P,
    phase: Phase,
}

impl TicTacToeSession {
    /// Start a round against the shipped one-ply opponent.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(OnePlyPolicy)
    }
}

impl Default for TicTacToeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: MovePolicy> TicTacToeSession<P> {
    /// Start a round against a custom policy.
    #[must_use]
    pub fn with_policy(policy: P) -> Self {
        Self {
            board: Board::new(),
            policy,
            phase: Phase::AwaitingPlayer,
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The round outcome; `InProgress` until the machine reaches `Terminal`.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Terminal(outcome) => outcome,
            _ => Outcome::InProgress,
        }
    }

    /// Whether the session is blocked on a human move.
    #[must_use]
    pub fn awaiting_player(&self) -> bool {
        self.phase == Phase::AwaitingPlayer
    }

    /// Play the human's mark at `cell`, then run the opponent's answer.
    ///
    /// Selections of an occupied cell, an out-of-range index, or any cell
    /// while the round is terminal are silently ignored; the board and phase
    /// stay unchanged.
    pub fn play(&mut self, cell: usize, rng: &mut GameRng) {
        if self.phase != Phase::AwaitingPlayer {
            return;
        }
        if cell >= CELL_COUNT || !self.board.is_empty(cell) {
            return;
        }

        self.board.place(cell, HUMAN_MARK);
        self.phase = Phase::Checking {
            after: Participant::Human,
        };
        self.advance(rng);
    }

    /// Run the synchronous phases until the machine blocks or terminates.
    fn advance(&mut self, rng: &mut GameRng) {
        loop {
            match self.phase {
                Phase::Checking { after } => {
                    self.phase = match self.board.verdict() {
                        Verdict::Won(mark) => Phase::Terminal(Outcome::win_for(owner(mark))),
                        Verdict::Drawn => Phase::Terminal(Outcome::Tie),
                        Verdict::InPlay => match after {
                            Participant::Human => Phase::OpponentTurn,
                            Participant::Opponent => Phase::AwaitingPlayer,
                        },
                    };
                }
                Phase::OpponentTurn => {
                    if let Some(cell) = self.policy.choose_move(&self.board, OPPONENT_MARK, rng) {
                        self.board.place(cell, OPPONENT_MARK);
                    }
                    self.phase = Phase::Checking {
                        after: Participant::Opponent,
                    };
                }
                Phase::AwaitingPlayer | Phase::Terminal(_) => return,
            }
        }
    }
}
