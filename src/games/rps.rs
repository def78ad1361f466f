//! Rock-paper-scissors: choice resolution and the single-round session.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Outcome};

/// A throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All throws, in display order.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Whether this throw defeats `other`.
    #[must_use]
    pub const fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Paper, Choice::Rock)
                | (Choice::Scissors, Choice::Paper)
        )
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::Rock => write!(f, "Rock"),
            Choice::Paper => write!(f, "Paper"),
            Choice::Scissors => write!(f, "Scissors"),
        }
    }
}

/// Resolve a round: tie on equal throws, otherwise the defeating throw wins.
#[must_use]
pub fn resolve(human: Choice, opponent: Choice) -> Outcome {
    if human == opponent {
        Outcome::Tie
    } else if human.beats(opponent) {
        Outcome::PlayerWin
    } else {
        Outcome::OpponentWin
    }
}

/// Round state: waiting for the human's throw, or finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RoundState {
    AwaitingChoice,
    Terminal {
        human: Choice,
        opponent: Choice,
        outcome: Outcome,
    },
}

/// One round of rock-paper-scissors.
///
/// The round accepts exactly one throw; the opponent's answer is drawn
/// uniformly at random and the outcome is fixed immediately. Rounds are
/// independent; nothing carries over.
#[derive(Clone, Copy, Debug)]
pub struct RpsSession {
    state: RoundState,
}

impl RpsSession {
    /// Start a round.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RoundState::AwaitingChoice,
        }
    }

    /// Whether the session is still waiting for a throw.
    #[must_use]
    pub fn awaiting_choice(&self) -> bool {
        self.state == RoundState::AwaitingChoice
    }

    /// The round outcome; `InProgress` until a throw has been played.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.state {
            RoundState::Terminal { outcome, .. } => outcome,
            RoundState::AwaitingChoice => Outcome::InProgress,
        }
    }

    /// Both throws, once the round is terminal.
    #[must_use]
    pub fn throws(&self) -> Option<(Choice, Choice)> {
        match self.state {
            RoundState::Terminal { human, opponent, .. } => Some((human, opponent)),
            RoundState::AwaitingChoice => None,
        }
    }

    /// Play the human's throw. A second throw is silently ignored.
    pub fn play(&mut self, choice: Choice, rng: &mut GameRng) {
        if self.state != RoundState::AwaitingChoice {
            return;
        }
        let opponent = rng.choose(&Choice::ALL).copied().unwrap_or(Choice::Rock);
        self.state = RoundState::Terminal {
            human: choice,
            opponent,
            outcome: resolve(choice, opponent),
        };
    }
}

impl Default for RpsSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_all_nine_pairs() {
        use Choice::*;
        use Outcome::*;

        let expected = [
            (Rock, Rock, Tie),
            (Rock, Paper, OpponentWin),
            (Rock, Scissors, PlayerWin),
            (Paper, Rock, PlayerWin),
            (Paper, Paper, Tie),
            (Paper, Scissors, OpponentWin),
            (Scissors, Rock, OpponentWin),
            (Scissors, Paper, PlayerWin),
            (Scissors, Scissors, Tie),
        ];

        for (human, opponent, outcome) in expected {
            assert_eq!(
                resolve(human, opponent),
                outcome,
                "resolve({human}, {opponent})"
            );
        }
    }

    #[test]
    fn test_session_round_is_terminal_after_one_throw() {
        let mut session = RpsSession::new();
        let mut rng = GameRng::new(3);

        assert!(session.awaiting_choice());
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.throws(), None);

        session.play(Choice::Paper, &mut rng);

        assert!(!session.awaiting_choice());
        assert!(session.outcome().is_terminal());
        let (human, opponent) = session.throws().expect("terminal round has throws");
        assert_eq!(human, Choice::Paper);
        assert_eq!(session.outcome(), resolve(human, opponent));
    }

    #[test]
    fn test_second_throw_ignored() {
        let mut session = RpsSession::new();
        let mut rng = GameRng::new(3);

        session.play(Choice::Rock, &mut rng);
        let first = (session.throws(), session.outcome());

        session.play(Choice::Scissors, &mut rng);
        assert_eq!((session.throws(), session.outcome()), first);
    }

    #[test]
    fn test_opponent_draw_is_seed_deterministic() {
        let mut a = RpsSession::new();
        let mut b = RpsSession::new();
        let mut rng_a = GameRng::new(99);
        let mut rng_b = GameRng::new(99);

        a.play(Choice::Rock, &mut rng_a);
        b.play(Choice::Rock, &mut rng_b);

        assert_eq!(a.throws(), b.throws());
    }
}
