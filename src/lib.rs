//! # deskplay
//!
//! A small desktop utility with two halves:
//!
//! - **Document tasks**: extract plain text from a PDF, Word, PowerPoint, or
//!   image file and run a free-text instruction over it through the Gemini
//!   API.
//! - **Arcade**: a 600×600 game window with tic-tac-toe (against a one-ply
//!   win/block/random opponent) and rock-paper-scissors.
//!
//! ## Design Principles
//!
//! 1. **Rules are pure**: the game engines know nothing about windows,
//!    painters, or timers. Opponent move selection is a function of
//!    `(board, mark)` and a seedable RNG, so everything in `games` is
//!    unit-testable headless.
//!
//! 2. **External capabilities behind traits**: text extraction is a
//!    `TextExtractor`, remote model execution is a `TaskExecutor`. Callers
//!    never branch on parsing libraries or HTTP details.
//!
//! 3. **One event loop**: the arcade owns a single window and input queue.
//!    Closing the window exits the application from any screen.
//!
//! ## Modules
//!
//! - `core`: participants, outcomes, seedable RNG
//! - `games`: tic-tac-toe and rock-paper-scissors engines
//! - `arcade`: menu dispatcher and game window (eframe)
//! - `doc`: document text extraction
//! - `task`: Gemini task execution and OCR
//! - `settings`: environment configuration

pub mod arcade;
pub mod core;
pub mod doc;
pub mod games;
pub mod settings;
pub mod task;

// Re-export commonly used types
pub use crate::core::{GameRng, Outcome, Participant};

pub use crate::games::rps::{resolve, Choice, RpsSession};
pub use crate::games::tictactoe::{
    Board, Mark, MovePolicy, OnePlyPolicy, RandomPolicy, TicTacToeSession,
};

pub use crate::doc::{DocumentExtractor, ExtractError, FileKind, TextExtractor};
pub use crate::settings::Settings;
pub use crate::task::{GeminiClient, TaskError, TaskExecutor};
