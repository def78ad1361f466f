//! The two sides of a round: the human and the built-in opponent.

use serde::{Deserialize, Serialize};

/// One side of a game round.
///
/// Both engines are strictly two-sided: the human at the window against the
/// built-in opponent. There is no N-player surface here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Participant {
    /// The person clicking and typing.
    Human,
    /// The computer side (one-ply policy in tic-tac-toe, uniform random in
    /// rock-paper-scissors).
    Opponent,
}

impl Participant {
    /// The other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Participant::Human => Participant::Opponent,
            Participant::Opponent => Participant::Human,
        }
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Participant::Human => write!(f, "You"),
            Participant::Opponent => write!(f, "AI"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_involutive() {
        assert_eq!(Participant::Human.other(), Participant::Opponent);
        assert_eq!(Participant::Opponent.other(), Participant::Human);
        assert_eq!(Participant::Human.other().other(), Participant::Human);
    }
}
