//! Rooted history invariant: history starts empty and the cursor is in range.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: history is never empty, step 0 is the empty board and the
/// cursor points at a recorded step.
pub struct RootedHistoryInvariant;

impl Invariant<GameHistory> for RootedHistoryInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.boards().first() == Some(&Board::new())
            && history.current_move() < history.len()
    }

    fn description() -> &'static str {
        "History starts from the empty board and the cursor is in range"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameController, Player, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(RootedHistoryInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_played_history_holds() {
        let game = GameController::replay([4, 0, 8]);
        assert!(RootedHistoryInvariant::holds(game.history()));
    }

    #[test]
    fn test_missing_root_violates() {
        let start = Board::new().with_mark(Position::Center, Player::X);
        let history = GameHistory::from_raw_parts(vec![start], 0);
        assert!(!RootedHistoryInvariant::holds(&history));
    }

    #[test]
    fn test_dangling_cursor_violates() {
        let history = GameHistory::from_raw_parts(vec![Board::new()], 1);
        assert!(!RootedHistoryInvariant::holds(&history));
    }

    #[test]
    fn test_empty_history_violates() {
        let history = GameHistory::from_raw_parts(Vec::new(), 0);
        assert!(!RootedHistoryInvariant::holds(&history));
    }
}
