//! Render-ready projection of a game and the intents a UI sends back.

use super::controller::{GameController, GameStatus, MoveOutcome};
use super::history::HistoryEntry;
use super::{Cell, Line, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Everything a presentation layer draws, derived from the controller.
///
/// Building a view never changes the game; redraw from a fresh view after
/// every dispatched intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    cells: [Cell; 9],
    highlighted: Option<Line>,
    status: GameStatus,
    history: Vec<HistoryEntry>,
    current_move: usize,
}

impl GameView {
    /// Cells of the viewed board, row-major.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Winning line to emphasise, if any.
    pub fn highlighted(&self) -> Option<Line> {
        self.highlighted
    }

    /// True if `pos` belongs to the highlighted line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlighted.is_some_and(|line| line.contains(pos))
    }

    /// Derived status of the viewed board.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// One entry per history step.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Step being viewed.
    pub fn current_move(&self) -> usize {
        self.current_move
    }
}

/// A user action forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// A board square was clicked (index 0-8).
    CellClicked(usize),
    /// A move-list entry was clicked (history step).
    HistoryEntryClicked(usize),
}

impl GameController {
    /// Projects the current state for rendering.
    pub fn view(&self) -> GameView {
        let status = self.status();
        GameView {
            cells: *self.current_board().cells(),
            highlighted: match status {
                GameStatus::Won(win) => Some(win.line()),
                _ => None,
            },
            status,
            history: self.history().entries(),
            current_move: self.current_move(),
        }
    }

    /// Routes a user intent to the matching operation.
    ///
    /// Returns true if the game changed.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::CellClicked(index) => {
                matches!(self.apply_move(index), MoveOutcome::Placed { .. })
            }
            Intent::HistoryEntryClicked(step) => {
                let before = self.current_move();
                self.jump_to(step) && before != step
            }
        }
    }
}
