//! Turn-taking, move guards and time-travel.
//!
//! The controller owns a single [`GameHistory`]. Everything else the
//! presentation layer needs (whose turn it is, who won) is derived from the
//! board under the cursor on demand and never stored, so it cannot drift out
//! of sync with the history.

use super::contracts::{Contract, MoveGuard};
use super::history::GameHistory;
use super::{Board, Player, Position, Win, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why a move request left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoredMove {
    /// The index does not name a square.
    #[display("Index {} is off the board", _0)]
    OutOfBounds(usize),

    /// The square on the viewed board is already taken.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The viewed board already has a completed line.
    #[display("Game is already won by {}", _0)]
    GameDecided(Player),
}

/// Result of a move request.
///
/// Ignored moves are ordinary no-ops, not errors; a presentation layer is
/// free to discard this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A mark was placed and recorded.
    Placed {
        /// Who moved.
        player: Player,
        /// Where the mark went.
        position: Position,
    },
    /// Guard conditions rejected the move; nothing changed.
    Ignored(IgnoredMove),
}

impl MoveOutcome {
    /// True if the move changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// Status of the board under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Next player: {}", next)]
    Playing {
        /// Player to move.
        next: Player,
    },
    /// A line was completed.
    #[display("Winner: {}", _0.player())]
    Won(Win),
    /// Board is full with no completed line.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(win) => Some(win.player()),
            _ => None,
        }
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Playing { .. })
    }
}

/// Tic-tac-toe game with branching history.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    history: GameHistory,
}

impl GameController {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: GameHistory::new(),
        }
    }

    /// Plays `indices` in order from the start.
    ///
    /// Guarded moves are skipped exactly as they are in interactive play.
    #[instrument(skip(indices))]
    pub fn replay(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut game = Self::new();
        for index in indices {
            game.apply_move(index);
        }
        game
    }

    /// The full history of the current branch.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Step being viewed and played from.
    pub fn current_move(&self) -> usize {
        self.history.current_move()
    }

    /// Board under the cursor.
    pub fn current_board(&self) -> &Board {
        self.history.current()
    }

    /// Player to move, by parity of the cursor.
    pub fn next_player(&self) -> Player {
        Player::for_turn(self.history.current_move())
    }

    /// Status of the board under the cursor.
    pub fn status(&self) -> GameStatus {
        let board = self.history.current();
        if let Some(win) = rules::evaluate(board) {
            GameStatus::Won(win)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::Playing {
                next: self.next_player(),
            }
        }
    }

    /// Places the next player's mark at board index `index` (0-8).
    ///
    /// Does nothing when the index is off the board, the square is taken,
    /// or the viewed board already has a winner.
    #[instrument(skip(self), fields(current_move = self.history.current_move()))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(pos) => self.play(pos),
            None => {
                debug!("Ignoring move off the board");
                MoveOutcome::Ignored(IgnoredMove::OutOfBounds(index))
            }
        }
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Any steps after the cursor are discarded before the new board is
    /// recorded.
    #[instrument(skip(self), fields(current_move = self.history.current_move()))]
    pub fn play(&mut self, pos: Position) -> MoveOutcome {
        if let Err(reason) = MoveGuard::pre(&self.history, &pos) {
            debug!(%reason, "Ignoring guarded move");
            return MoveOutcome::Ignored(reason);
        }

        let player = self.next_player();
        let next = self.history.current().with_mark(pos, player);

        #[cfg(debug_assertions)]
        let before = self.history.clone();

        self.history.record(next);

        #[cfg(debug_assertions)]
        self.assert_postconditions(&before);

        debug!(%player, position = %pos, step = self.history.current_move(), "Move recorded");
        MoveOutcome::Placed {
            player,
            position: pos,
        }
    }

    /// Moves the cursor to `step` without changing any board.
    ///
    /// Returns false and leaves the cursor alone when `step` was never
    /// recorded.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        let moved = self.history.seek(step);
        if moved {
            debug!(status = %self.status(), "Jumped through history");
        }
        moved
    }

    /// Throws away the whole history and starts again from the empty board.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.history = GameHistory::new();
    }

    #[cfg(debug_assertions)]
    fn assert_postconditions(&self, before: &GameHistory) {
        if let Err(violations) = MoveGuard::post(before, &self.history) {
            for violation in &violations {
                tracing::error!(%violation, "Move broke a history invariant");
            }
            panic!("history invariants violated: {violations:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_scenario_top_row_win() {
        let game = GameController::replay([0, 4, 1, 5, 2]);

        let status = game.status();
        let win = match status {
            GameStatus::Won(win) => win,
            other => panic!("expected a win, got {other:?}"),
        };
        assert_eq!(win.player(), Player::X);
        assert_eq!(win.line().indices(), [0, 1, 2]);
        assert_eq!(status.to_string(), "Winner: X");
        assert_eq!(status.winner(), Some(Player::X));
    }

    #[test]
    fn test_scenario_draw() {
        // X O X / X O O / O X X
        let game = GameController::replay([0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.status().to_string(), "Draw");
    }

    #[test]
    fn test_status_next_player() {
        let mut game = GameController::new();
        assert_eq!(game.status().to_string(), "Next player: X");
        game.apply_move(4);
        assert_eq!(game.status().to_string(), "Next player: O");
    }

    #[test]
    fn test_repeat_move_is_ignored() {
        let mut game = GameController::new();
        assert!(game.apply_move(4).is_placed());

        let snapshot = game.history().clone();
        assert_eq!(
            game.apply_move(4),
            MoveOutcome::Ignored(IgnoredMove::SquareOccupied(Position::Center))
        );
        assert_eq!(game.history(), &snapshot);
    }

    #[test]
    fn test_move_after_win_is_ignored() {
        let mut game = GameController::replay([0, 4, 1, 5, 2]);
        let snapshot = game.history().clone();

        assert_eq!(
            game.apply_move(8),
            MoveOutcome::Ignored(IgnoredMove::GameDecided(Player::X))
        );
        assert_eq!(game.history(), &snapshot);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut game = GameController::new();
        assert_eq!(
            game.apply_move(9),
            MoveOutcome::Ignored(IgnoredMove::OutOfBounds(9))
        );
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_branching_truncates_future() {
        let mut game = GameController::replay([0, 4, 1, 5]);
        assert_eq!(game.history().len(), 5);

        assert!(game.jump_to(2));
        assert_eq!(game.history().len(), 5);
        assert_eq!(game.next_player(), Player::X);

        assert!(game.apply_move(8).is_placed());
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.current_move(), 3);
        assert_eq!(
            game.current_board().get(Position::MiddleRight),
            Cell::Empty
        );
    }

    #[test]
    fn test_jump_then_move_on_won_board_from_earlier_step() {
        let mut game = GameController::replay([0, 4, 1, 5, 2]);
        assert!(game.jump_to(4));
        assert_eq!(game.status(), GameStatus::Playing { next: Player::X });

        assert!(game.apply_move(6).is_placed());
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn test_jump_out_of_range_keeps_cursor() {
        let mut game = GameController::replay([0, 4]);
        assert!(!game.jump_to(3));
        assert_eq!(game.current_move(), 2);
    }

    #[test]
    fn test_restart() {
        let mut game = GameController::replay([0, 4, 1]);
        game.restart();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.next_player(), Player::X);
    }
}
