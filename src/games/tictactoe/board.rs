//! The 3×3 board and its terminal-condition check.

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// Cell indices are row-major: 0..=2 top row, 3..=5 middle, 6..=8 bottom.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A mark on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// The board's terminal condition.
///
/// Exactly one value applies at a time: a winning line is checked before
/// fullness, so a board whose final move completes a line reports `Won`,
/// never `Drawn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// No winning line and at least one empty cell.
    InPlay,
    /// Some line holds three of this mark.
    Won(Mark),
    /// All cells filled, no winning line.
    Drawn,
}

/// A 3×3 tic-tac-toe board, cells in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from raw cells. Test seams mostly.
    #[must_use]
    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// The mark at `cell`, if any.
    #[must_use]
    pub fn cell(&self, cell: usize) -> Option<Mark> {
        self.cells[cell]
    }

    /// Whether `cell` holds no mark.
    #[must_use]
    pub fn is_empty(&self, cell: usize) -> bool {
        self.cells[cell].is_none()
    }

    /// Place `mark` at `cell`. Callers check emptiness first; placing over
    /// an existing mark is a programming error.
    pub fn place(&mut self, cell: usize, mark: Mark) {
        debug_assert!(self.cells[cell].is_none(), "cell {cell} already taken");
        self.cells[cell] = Some(mark);
    }

    /// Indices of all empty cells, in board order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }

    /// Whether every cell holds a mark.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The mark owning a completed line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        for [a, b, c] in LINES {
            if let Some(mark) = self.cells[a] {
                if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }

    /// Evaluate the terminal condition.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if let Some(mark) = self.winner() {
            Verdict::Won(mark)
        } else if self.is_full() {
            Verdict::Drawn
        } else {
            Verdict::InPlay
        }
    }
}
