//! Branching board history with a viewing cursor.

use super::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Every board of the current branch, plus the step being viewed.
///
/// Step 0 is always the empty board. The cursor always points at an
/// existing step. Recording a board while viewing an earlier step discards
/// everything after the cursor first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    boards: Vec<Board>,
    current_move: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Builds a history without any checks, for exercising invariants.
    #[cfg(test)]
    pub(crate) fn from_raw_parts(boards: Vec<Board>, current_move: usize) -> Self {
        Self {
            boards,
            current_move,
        }
    }

    /// Number of recorded steps, including the empty start.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false: the empty start board is never removed.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Step currently being viewed and played from.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Board at the cursor.
    pub fn current(&self) -> &Board {
        &self.boards[self.current_move]
    }

    /// Most recently recorded board on this branch.
    pub fn latest(&self) -> &Board {
        &self.boards[self.boards.len() - 1]
    }

    /// Board at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.boards.get(step)
    }

    /// All boards in step order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// True when the cursor is behind the latest step.
    pub fn is_rewound(&self) -> bool {
        self.current_move + 1 < self.boards.len()
    }

    /// Appends `board` after the cursor and moves the cursor onto it.
    ///
    /// Steps after the cursor are discarded first.
    #[instrument(skip(self, board), fields(current_move = self.current_move, len = self.boards.len()))]
    pub(crate) fn record(&mut self, board: Board) {
        if self.is_rewound() {
            debug!(
                discarded = self.boards.len() - self.current_move - 1,
                "Discarding abandoned branch"
            );
        }
        self.boards.truncate(self.current_move + 1);
        self.boards.push(board);
        self.current_move = self.boards.len() - 1;
    }

    /// Moves the cursor to `step` without touching any board.
    ///
    /// Returns false, leaving the cursor where it was, when `step` was
    /// never recorded.
    #[instrument(skip(self), fields(len = self.boards.len()))]
    pub(crate) fn seek(&mut self, step: usize) -> bool {
        if step >= self.boards.len() {
            warn!("Ignoring jump past the end of history");
            return false;
        }
        self.current_move = step;
        true
    }

    /// The mark that turned step `step - 1` into step `step`.
    ///
    /// `None` for step 0 and for steps that were never recorded.
    pub fn played_at(&self, step: usize) -> Option<(Player, Position)> {
        let before = self.boards.get(step.checked_sub(1)?)?;
        let after = self.boards.get(step)?;
        Position::ALL.iter().find_map(|&pos| match (before.get(pos), after.get(pos)) {
            (Cell::Empty, Cell::Occupied(player)) => Some((player, pos)),
            _ => None,
        })
    }

    /// One selectable entry per step, for rendering a move list.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        (0..self.boards.len())
            .map(|step| HistoryEntry {
                step,
                played: self.played_at(step),
                is_current: step == self.current_move,
            })
            .collect()
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// A row in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    step: usize,
    played: Option<(Player, Position)>,
    is_current: bool,
}

impl HistoryEntry {
    /// Step this entry jumps to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The mark placed to reach this step.
    pub fn played(&self) -> Option<(Player, Position)> {
        self.played
    }

    /// True for the step under the cursor.
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    /// "Go to game start" for step 0, "Go to move #N" otherwise.
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
