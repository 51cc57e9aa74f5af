//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win when held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// Positions in this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices in this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Every winning line, in the order they are checked.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// A completed line and the player who holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    player: Player,
    line: Line,
}

impl Win {
    /// The winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The completed line.
    pub fn line(&self) -> Line {
        self.line
    }
}

/// Evaluates the board for a completed line.
///
/// Returns the first line in [`LINES`] whose three cells hold the same
/// player, or `None` if no line is complete.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Cell::Occupied(player)
                if board.get(b) == Cell::Occupied(player)
                    && board.get(c) == Cell::Occupied(player) =>
            {
                Some(Win {
                    player,
                    line: *line,
                })
            }
            _ => None,
        }
    })
}
