//! Round outcomes shared by both game engines.

use serde::{Deserialize, Serialize};

use super::Participant;

/// The result of a game round as seen from the human's side.
///
/// `InProgress` is the only non-terminal value. Exactly one terminal value
/// applies to any finished round; there is no "both won" state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The round is still being played.
    InProgress,
    /// The human won.
    PlayerWin,
    /// The built-in opponent won.
    OpponentWin,
    /// Neither side won.
    Tie,
}

impl Outcome {
    /// Whether the round has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The terminal outcome for a win by `winner`.
    #[must_use]
    pub const fn win_for(winner: Participant) -> Self {
        match winner {
            Participant::Human => Outcome::PlayerWin,
            Participant::Opponent => Outcome::OpponentWin,
        }
    }
}
