//! Menu dispatcher and game window.
//!
//! One fixed 600×600 window, one event loop. The menu screen routes to
//! whichever engine the user picks; a finished round is held on screen for
//! two seconds and then control returns to the menu. Closing the window
//! exits the whole application no matter which screen is active; there are
//! no nested loops that could swallow the quit and drop the user back at
//! the menu.
//!
//! All real decisions (cell mapping, state transitions) live in plain
//! functions and methods that never touch the window, so they are tested
//! headless; the egui layer only decodes input and paints.

mod app;
mod draw;
mod geometry;

pub use app::{run, ArcadeApp, RESULT_HOLD};
pub use geometry::{cell_at, SURFACE_SIZE};
