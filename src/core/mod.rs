//! Core game types: participants, outcomes, RNG.
//!
//! These are the building blocks shared by both game engines. They are
//! display-agnostic; the arcade shell consumes them but they never consume
//! the arcade.

pub mod outcome;
pub mod participant;
pub mod rng;

pub use outcome::Outcome;
pub use participant::Participant;
pub use rng::GameRng;
